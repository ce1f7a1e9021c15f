// Core algorithm exports
pub mod explain;
pub mod matcher;
pub mod registry;
pub mod scoring;
pub mod selector;
pub mod tagger;

pub use explain::generate_match_explanation;
pub use matcher::Matcher;
pub use registry::{TagRegistry, DEFAULT_TAG};
pub use scoring::{analyze_user_tags, calculate_match_score, score_breakdown};
pub use selector::{rank_candidates, select_diverse, stratify, Tier};
pub use tagger::{assign_tags, assign_tags_with};
