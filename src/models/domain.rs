use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use validator::Validate;

/// Interest or commitment-level label from the quiz vocabulary
///
/// Tags are plain identifiers rather than an enum: quiz answers may carry
/// labels (such as "social") that the keyword registry does not know about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Tag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keyword set and relevance weight for one registered tag
#[derive(Debug, Clone, Copy)]
pub struct TagConfig {
    pub keywords: &'static [&'static str],
    pub weight: f64,
    /// Primary tags are interest domains, the rest are commitment modifiers
    pub is_primary: bool,
}

/// One recommendable organization from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CatalogEntry {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Frequency and importance of each distinct tag in a user's answers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagAnalysis {
    pub frequency: HashMap<Tag, usize>,
    pub importance: HashMap<Tag, f64>,
}

impl TagAnalysis {
    /// Importance of a tag, 1.0 when the tag was never analyzed
    pub fn importance_of(&self, tag: &Tag) -> f64 {
        self.importance.get(tag).copied().unwrap_or(1.0)
    }
}

/// Scored catalog entry produced by a single matching pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    pub tags: Vec<Tag>,
    pub score: f64,
}

impl MatchResult {
    pub fn name(&self) -> &str {
        &self.entry.name
    }
}

/// Individual factors behind a match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Share of the user's primary importance carried by the entry (0-1)
    pub primary_coverage: f64,
    /// Weighted primary match, `1.5 * primary_coverage`
    pub primary_score: f64,
    pub commitment: f64,
    pub overlap_ratio: f64,
    pub diversity_bonus: f64,
    pub important_bonus: f64,
    pub specificity_penalty: f64,
    pub final_score: f64,
}
