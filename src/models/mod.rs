// Model exports
pub mod domain;
pub mod responses;

pub use domain::{Tag, TagConfig, CatalogEntry, TagAnalysis, MatchResult, ScoreBreakdown};
pub use responses::{Recommendation, MatchReport};
