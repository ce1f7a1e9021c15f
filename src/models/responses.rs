use serde::Serialize;
use crate::models::domain::{MatchResult, Tag};

/// One rendered recommendation: the match plus its explanation
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub result: MatchResult,
    pub explanation: String,
}

/// Output of a completed quiz handed to the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub recommendations: Vec<Recommendation>,
    #[serde(rename = "userTags")]
    pub user_tags: Vec<Tag>,
    pub total_candidates: usize,
}
