use crate::core::registry::TagRegistry;
use crate::models::{MatchResult, Tag};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Returned when the user and the entry share no tag at all
pub const GENERIC_EXPLANATION: &str =
    "This club offers opportunities that align with your interests!";

/// Returned when only tags without phrasing (such as commitment levels) match
pub const ALIGNED_EXPLANATION: &str = "This club aligns with your interests!";

/// Explanation order for matched interests, most important first
const PRIORITY: [&str; 6] = ["career", "tech", "service", "advocacy", "creative", "fitness"];

/// Sentence shapes as (before, after) the interest phrase
const TEMPLATES: [(&str, &str); 5] = [
    (
        "Based on your quiz responses, ",
        " are important to you, and this club focuses on exactly that!",
    ),
    (
        "Your answers showed a strong interest in ",
        ", which aligns perfectly with what this club offers.",
    ),
    (
        "This club is ideal for you because it centers around ",
        ", matching what you're looking for.",
    ),
    (
        "You expressed interest in ",
        " throughout the quiz, and this club specializes in those areas.",
    ),
    (
        "Your quiz results highlighted ",
        " as priorities, and this club provides opportunities in those fields.",
    ),
];

fn phrases(tag: &str) -> Option<&'static [&'static str]> {
    let phrases: &'static [&'static str] = match tag {
        "career" => &[
            "professional development",
            "career growth",
            "building your network",
            "industry connections",
        ],
        "creative" => &[
            "creative expression",
            "the arts",
            "artistic pursuits",
            "creative projects",
        ],
        "tech" => &["technology", "innovation", "tech skills", "cutting-edge projects"],
        "service" => &["community service", "making a difference", "helping others", "giving back"],
        "fitness" => &[
            "staying active",
            "physical wellness",
            "fitness activities",
            "an active lifestyle",
        ],
        "advocacy" => &["advocacy", "social change", "important causes", "driving impact"],
        _ => return None,
    };
    Some(phrases)
}

/// Template slot for an entry: sum of the name's UTF-16 code units modulo the
/// template count, so an entry always gets the same sentence shape
pub fn template_index(name: &str) -> usize {
    let hash: u64 = name.encode_utf16().map(u64::from).sum();
    (hash % TEMPLATES.len() as u64) as usize
}

/// Explain in one sentence why an entry was recommended
///
/// The two highest priority primary tags shared by the user and the entry
/// are described with a randomly chosen phrase each.
pub fn generate_match_explanation<R: Rng + ?Sized>(
    registry: &TagRegistry,
    result: &MatchResult,
    user_tags: &[Tag],
    rng: &mut R,
) -> String {
    let mut seen = HashSet::new();
    let matching: Vec<&Tag> = user_tags
        .iter()
        .filter(|tag| seen.insert(tag.as_str()))
        .filter(|tag| result.tags.contains(*tag))
        .collect();

    if matching.is_empty() {
        return GENERIC_EXPLANATION.to_string();
    }

    let mut primary: Vec<&Tag> = matching
        .into_iter()
        .filter(|tag| registry.is_primary(tag.as_str()))
        .collect();
    primary.sort_by_key(|tag| {
        PRIORITY
            .iter()
            .position(|name| tag.as_str() == *name)
            .unwrap_or(PRIORITY.len())
    });

    let interests: Vec<&str> = primary
        .iter()
        .take(2)
        .filter_map(|tag| phrases(tag.as_str()))
        .filter_map(|options| options.choose(rng).copied())
        .collect();

    let (before, after) = TEMPLATES[template_index(result.name())];
    match interests.as_slice() {
        [] => ALIGNED_EXPLANATION.to_string(),
        [only] => format!("{}{}{}", before, only, after),
        [first, second, ..] => format!("{}{} and {}{}", before, first, second, after),
    }
}
