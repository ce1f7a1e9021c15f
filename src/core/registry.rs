use crate::models::{Tag, TagConfig};
use regex::Regex;
use std::sync::LazyLock;

/// Tag assigned to catalog entries whose text matches no registered tag
pub const DEFAULT_TAG: &str = "social";

pub const LOW_COMMITMENT: &str = "low-commitment";
pub const HIGH_COMMITMENT: &str = "high-commitment";

/// Weight used wherever an unregistered tag needs one
pub const DEFAULT_TAG_WEIGHT: f64 = 1.0;

/// Registered tags in declaration order.
///
/// Declaration order matters: the tagger scans tags in this order, so tags
/// with equal scores keep it after sorting.
const TAG_TABLE: &[(&str, TagConfig)] = &[
    (
        "career",
        TagConfig {
            keywords: &[
                "career", "professional", "networking", "business", "finance", "consulting",
                "leadership", "development", "industry", "mentorship", "entrepreneurship",
                "startup", "marketing", "association", "society", "institute", "organization",
                "careers",
            ],
            weight: 1.3,
            is_primary: true,
        },
    ),
    (
        "creative",
        TagConfig {
            keywords: &[
                "art", "creative", "music", "dance", "theater", "film", "writing", "magazine",
                "journal", "poetry", "design", "animation", "pottery", "sewing", "quilt", "fiber",
                "arts", "performance", "a cappella", "choir", "band", "vocal", "showcase",
                "studio", "comedy", "stand-up",
            ],
            weight: 1.2,
            is_primary: true,
        },
    ),
    (
        "tech",
        TagConfig {
            keywords: &[
                "tech", "computer", "software", "coding", "programming", "ai",
                "artificial intelligence", "data science", "cybersecurity", "hackathon",
                "robotics", "engineering", "hardware", "app development", "ios", "silicon",
                "supercomputing", "neural", "brain-computer", "algorithm", "machine learning",
                "computing", "digital", "code",
            ],
            weight: 1.3,
            is_primary: true,
        },
    ),
    (
        "service",
        TagConfig {
            keywords: &[
                "service", "volunteer", "community", "outreach", "nonprofit", "pro bono",
                "charity", "fundraising", "helping", "aid", "relief", "tutoring", "mentoring",
                "education", "social good", "impact", "support", "assistance", "philanthropy",
                "coordinating",
            ],
            weight: 1.4,
            is_primary: true,
        },
    ),
    (
        "fitness",
        TagConfig {
            keywords: &[
                "fitness", "sport", "athletic", "running", "swimming", "tennis", "volleyball",
                "basketball", "soccer", "hockey", "rowing", "triathlon", "climbing",
                "martial arts", "boxing", "jiu jitsu", "tae kwon do", "yoga", "exercise",
                "training", "competitive", "club sport", "physical", "skating", "sailing", "ski",
                "snowboard",
            ],
            weight: 1.1,
            is_primary: true,
        },
    ),
    (
        "advocacy",
        TagConfig {
            keywords: &[
                "advocacy", "activism", "equity", "diversity", "inclusion", "lgbtq", "women",
                "awareness", "policy", "social justice", "rights", "representation",
                "empowerment", "equality", "health", "cancer", "diabetes",
            ],
            weight: 1.4,
            is_primary: true,
        },
    ),
    (
        LOW_COMMITMENT,
        TagConfig {
            keywords: &[
                "casual", "social", "recreational", "gathering", "coffee", "board game", "game",
                "hobby", "relaxed", "informal", "flexible",
            ],
            weight: 0.9,
            is_primary: false,
        },
    ),
    (
        HIGH_COMMITMENT,
        TagConfig {
            keywords: &[
                "competitive", "team", "professional", "leadership", "executive", "intensive",
                "rigorous", "championship", "tournament", "national",
            ],
            weight: 1.0,
            is_primary: false,
        },
    ),
];

static STANDARD: LazyLock<TagRegistry> = LazyLock::new(|| TagRegistry::from_table(TAG_TABLE));

/// A keyword plus the matcher it needs
///
/// Multi-word keywords match as plain substrings, single words only on
/// ASCII word boundaries.
#[derive(Debug)]
pub struct Keyword {
    text: &'static str,
    word: Option<Regex>,
}

impl Keyword {
    fn new(text: &'static str) -> Self {
        let word = if text.contains(' ') {
            None
        } else {
            // ASCII boundaries: accented letters do not extend a word
            let pattern = format!(r"(?-u:\b){}(?-u:\b)", regex::escape(text));
            Some(Regex::new(&pattern).expect("escaped keyword is a valid pattern"))
        };
        Self { text, word }
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Check whether the keyword occurs in already lower-cased text
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        match &self.word {
            Some(re) => re.is_match(text),
            None => text.contains(self.text),
        }
    }
}

/// Registered tag with its compiled keywords
#[derive(Debug)]
pub struct RegisteredTag {
    pub tag: Tag,
    pub config: TagConfig,
    pub keywords: Vec<Keyword>,
}

/// Static table of tag keywords, weights and primary/modifier kinds
#[derive(Debug)]
pub struct TagRegistry {
    tags: Vec<RegisteredTag>,
}

impl TagRegistry {
    /// Registry shared by the whole process, built on first use
    pub fn standard() -> &'static TagRegistry {
        &STANDARD
    }

    fn from_table(table: &[(&'static str, TagConfig)]) -> Self {
        let tags = table
            .iter()
            .map(|(name, config)| {
                debug_assert!(config.weight > 0.0 && !config.keywords.is_empty());
                RegisteredTag {
                    tag: Tag::from(*name),
                    config: *config,
                    keywords: config.keywords.iter().copied().map(Keyword::new).collect(),
                }
            })
            .collect();
        Self { tags }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredTag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn get(&self, tag: &str) -> Option<&TagConfig> {
        self.tags
            .iter()
            .find(|registered| registered.tag == tag)
            .map(|registered| &registered.config)
    }

    /// Tag weight, falling back to [`DEFAULT_TAG_WEIGHT`] for unknown tags
    pub fn weight(&self, tag: &str) -> f64 {
        self.get(tag).map_or(DEFAULT_TAG_WEIGHT, |config| config.weight)
    }

    /// Registered interest-domain tag. Unknown tags are neither primary nor modifier.
    pub fn is_primary(&self, tag: &str) -> bool {
        self.get(tag).is_some_and(|config| config.is_primary)
    }

    /// Registered commitment-level tag
    pub fn is_modifier(&self, tag: &str) -> bool {
        self.get(tag).is_some_and(|config| !config.is_primary)
    }
}
