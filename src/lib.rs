//! RSO Match - interest questionnaire and organization recommendation engine
//!
//! This library provides the matching engine behind the RSO quiz: tag
//! extraction from organization descriptions, weighted scoring against the
//! user's quiz answers, and a diversity-aware shortlist with explanations.

pub mod config;
pub mod core;
pub mod models;
pub mod quiz;
pub mod services;

// Re-export commonly used types
pub use core::{Matcher, assign_tags, calculate_match_score, generate_match_explanation};
pub use models::{Tag, CatalogEntry, MatchResult, TagAnalysis, MatchReport, Recommendation};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let tags = assign_tags(&CatalogEntry::new("Tech Club", "We build software"));
        assert_eq!(tags[0], "tech");
    }
}
