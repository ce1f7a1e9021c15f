use crate::core::registry::{TagRegistry, HIGH_COMMITMENT, LOW_COMMITMENT};
use crate::models::{ScoreBreakdown, Tag, TagAnalysis};
use std::collections::{HashMap, HashSet};

/// Multiplier applied to the importance of each matched primary tag
const PRIMARY_MATCH_MULTIPLIER: f64 = 1.5;

const PRIMARY_WEIGHT: f64 = 0.5;
const OVERLAP_WEIGHT: f64 = 0.25;

const DIVERSITY_STEP: f64 = 0.05;
const DIVERSITY_CAP: f64 = 0.15;

/// Bonus per matched tag from [`IMPORTANT_TAGS`]
const IMPORTANT_TAG_BONUS: f64 = 0.1;
pub const IMPORTANT_TAGS: [&str; 4] = ["career", "service", "advocacy", "tech"];

/// Entries with more primary tags than this multiple of the user's are too broad
pub const SPECIFICITY_RATIO: f64 = 2.5;
const SPECIFICITY_PENALTY: f64 = 0.08;

const LOW_WANTS_HIGH_PENALTY: f64 = 0.6;
const HIGH_WANTS_LOW_PENALTY: f64 = 0.7;
const COMMITMENT_ALIGNED_BONUS: f64 = 1.2;

/// Count user tags and derive their importance
///
/// `importance = weight * (1 + ln(frequency + 1))`, so repeated answers
/// raise a tag's importance with diminishing returns.
pub fn analyze_user_tags(registry: &TagRegistry, user_tags: &[Tag]) -> TagAnalysis {
    let mut frequency: HashMap<Tag, usize> = HashMap::new();
    for tag in user_tags {
        *frequency.entry(tag.clone()).or_insert(0) += 1;
    }

    let importance = frequency
        .iter()
        .map(|(tag, &count)| {
            let weight = registry.weight(tag.as_str());
            (tag.clone(), weight * (1.0 + (count as f64 + 1.0).ln()))
        })
        .collect();

    TagAnalysis { frequency, importance }
}

/// Calculate a match score (0-1) between a user's tags and an entry's tags
pub fn calculate_match_score(
    registry: &TagRegistry,
    user_tags: &[Tag],
    entry_tags: &[Tag],
    analysis: Option<&TagAnalysis>,
) -> f64 {
    score_breakdown(registry, user_tags, entry_tags, analysis).final_score
}

/// Calculate a match score along with the factors it is built from
///
/// Scoring formula:
/// ```text
/// base  = primary_score * 0.50     # importance-weighted primary matches
///       + overlap_ratio * 0.25     # share of user interests matched
///       + diversity_bonus          # several interests matched at once
///       + important_bonus          # career/service/advocacy/tech matches
///       - specificity_penalty      # entry far broader than the user
/// score = clamp(clamp(base, 0, 1) * commitment, 0, 1)
/// ```
/// Tags missing from the registry are neither primary nor modifier and take
/// no part in matching.
pub fn score_breakdown(
    registry: &TagRegistry,
    user_tags: &[Tag],
    entry_tags: &[Tag],
    analysis: Option<&TagAnalysis>,
) -> ScoreBreakdown {
    if user_tags.is_empty() || entry_tags.is_empty() {
        return ScoreBreakdown {
            commitment: 1.0,
            ..ScoreBreakdown::default()
        };
    }

    let computed;
    let analysis = match analysis {
        Some(analysis) => analysis,
        None => {
            computed = analyze_user_tags(registry, user_tags);
            &computed
        }
    };

    let primary_user = distinct(user_tags, |tag| registry.is_primary(tag));
    let modifier_user = distinct(user_tags, |tag| registry.is_modifier(tag));
    let primary_entry = distinct(entry_tags, |tag| registry.is_primary(tag));
    let modifier_entry = distinct(entry_tags, |tag| registry.is_modifier(tag));

    // Primary interest match, weighted by importance
    let mut total_importance = 0.0;
    let mut match_sum = 0.0;
    for tag in &primary_user {
        let importance = analysis.importance_of(tag);
        total_importance += importance;
        if primary_entry.contains(tag) {
            match_sum += importance * PRIMARY_MATCH_MULTIPLIER;
        }
    }
    let primary_score = if total_importance > 0.0 {
        match_sum / total_importance
    } else {
        0.0
    };

    let commitment = commitment_score(&modifier_user, &modifier_entry);

    let matching: Vec<&Tag> = primary_user
        .iter()
        .filter(|tag| primary_entry.contains(*tag))
        .copied()
        .collect();

    let overlap_ratio = if primary_user.is_empty() {
        0.0
    } else {
        matching.len() as f64 / primary_user.len() as f64
    };

    let diversity_bonus = if matching.len() > 1 {
        DIVERSITY_CAP.min((matching.len() - 1) as f64 * DIVERSITY_STEP)
    } else {
        0.0
    };

    let important_matches = matching
        .iter()
        .filter(|tag| IMPORTANT_TAGS.contains(&tag.as_str()))
        .count();
    let important_bonus = IMPORTANT_TAG_BONUS * important_matches as f64;

    let specificity_penalty =
        if primary_entry.len() as f64 > primary_user.len() as f64 * SPECIFICITY_RATIO {
            SPECIFICITY_PENALTY
        } else {
            0.0
        };

    let base = (primary_score * PRIMARY_WEIGHT
        + overlap_ratio * OVERLAP_WEIGHT
        + diversity_bonus
        + important_bonus
        - specificity_penalty)
        .clamp(0.0, 1.0);

    ScoreBreakdown {
        primary_coverage: primary_score / PRIMARY_MATCH_MULTIPLIER,
        primary_score,
        commitment,
        overlap_ratio,
        diversity_bonus,
        important_bonus,
        specificity_penalty,
        final_score: (base * commitment).clamp(0.0, 1.0),
    }
}

/// Commitment multiplier, only adjusted when both sides state a level
fn commitment_score(user: &[&Tag], entry: &[&Tag]) -> f64 {
    if user.is_empty() || entry.is_empty() {
        return 1.0;
    }

    let has = |tags: &[&Tag], level: &str| tags.iter().any(|tag| tag.as_str() == level);
    let user_low = has(user, LOW_COMMITMENT);
    let user_high = has(user, HIGH_COMMITMENT);
    let entry_low = has(entry, LOW_COMMITMENT);
    let entry_high = has(entry, HIGH_COMMITMENT);

    if user_low && entry_high {
        LOW_WANTS_HIGH_PENALTY
    } else if user_high && entry_low {
        HIGH_WANTS_LOW_PENALTY
    } else if (user_low && entry_low) || (user_high && entry_high) {
        COMMITMENT_ALIGNED_BONUS
    } else {
        1.0
    }
}

/// Distinct tags passing `keep`, in first-seen order
fn distinct<'a>(tags: &'a [Tag], keep: impl Fn(&str) -> bool) -> Vec<&'a Tag> {
    let mut seen = HashSet::new();
    tags.iter()
        .filter(|tag| keep(tag.as_str()) && seen.insert(tag.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<Tag> {
        names.iter().map(|name| Tag::from(*name)).collect()
    }

    fn score(user: &[&str], entry: &[&str]) -> f64 {
        calculate_match_score(TagRegistry::standard(), &tags(user), &tags(entry), None)
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        assert_eq!(score(&["tech"], &[]), 0.0);
        assert_eq!(score(&[], &["tech"]), 0.0);
    }

    #[test]
    fn test_empty_inputs_keep_neutral_commitment() {
        let registry = TagRegistry::standard();
        let no_entry = score_breakdown(registry, &tags(&["tech", "high-commitment"]), &[], None);
        let no_user = score_breakdown(registry, &[], &tags(&["tech", "low-commitment"]), None);

        for breakdown in [no_entry, no_user] {
            assert_eq!(breakdown.commitment, 1.0);
            assert_eq!(breakdown.final_score, 0.0);
            assert_eq!(breakdown.primary_score, 0.0);
        }
    }

    #[test]
    fn test_importance_diminishing_returns() {
        let analysis =
            analyze_user_tags(TagRegistry::standard(), &tags(&["tech", "tech", "fitness"]));

        assert_eq!(analysis.frequency[&Tag::from("tech")], 2);
        let tech = analysis.importance[&Tag::from("tech")];
        assert!((tech - 1.3 * (1.0 + 3f64.ln())).abs() < 1e-9);

        let social = analyze_user_tags(TagRegistry::standard(), &tags(&["social"]));
        assert!((social.importance[&Tag::from("social")] - (1.0 + 2f64.ln())).abs() < 1e-9);
    }

    #[test]
    fn test_repeated_single_interest_full_coverage() {
        let breakdown = score_breakdown(
            TagRegistry::standard(),
            &tags(&["tech", "tech", "tech", "low-commitment"]),
            &tags(&["tech"]),
            None,
        );

        assert!((breakdown.primary_coverage - 1.0).abs() < 1e-9);
        assert!((breakdown.primary_score - 1.5).abs() < 1e-9);
        // Entry has no modifier tag, so commitment is untouched
        assert_eq!(breakdown.commitment, 1.0);
        // 0.75 + 0.25 + 0.1 important bonus, capped at 1
        assert_eq!(breakdown.final_score, 1.0);
    }

    #[test]
    fn test_commitment_mismatch_penalty() {
        let aligned = score(&["fitness", "high-commitment"], &["fitness", "high-commitment"]);
        let mismatched = score(&["fitness", "low-commitment"], &["fitness", "high-commitment"]);
        let high_on_low = score(&["fitness", "high-commitment"], &["fitness", "low-commitment"]);

        assert!(aligned > mismatched);
        // base = 0.75 + 0.25 = 1.0
        assert!((mismatched - 0.6).abs() < 1e-9);
        assert!((high_on_low - 0.7).abs() < 1e-9);
        assert_eq!(aligned, 1.0);
    }

    #[test]
    fn test_partial_overlap() {
        let breakdown = score_breakdown(
            TagRegistry::standard(),
            &tags(&["creative", "fitness"]),
            &tags(&["creative"]),
            None,
        );

        assert!((breakdown.overlap_ratio - 0.5).abs() < 1e-9);
        assert_eq!(breakdown.diversity_bonus, 0.0);
        assert_eq!(breakdown.important_bonus, 0.0);
        assert!(breakdown.final_score > 0.0 && breakdown.final_score < 1.0);
    }

    #[test]
    fn test_diversity_and_important_bonus() {
        let breakdown = score_breakdown(
            TagRegistry::standard(),
            &tags(&["career", "tech", "creative", "fitness", "service"]),
            &tags(&["career", "tech", "service"]),
            None,
        );

        assert!((breakdown.diversity_bonus - 0.10).abs() < 1e-9);
        assert!((breakdown.important_bonus - 0.30).abs() < 1e-9);
    }

    #[test]
    fn test_specificity_penalty_for_broad_entry() {
        let breakdown = score_breakdown(
            TagRegistry::standard(),
            &tags(&["creative"]),
            &tags(&["creative", "tech", "career"]),
            None,
        );

        assert_eq!(breakdown.specificity_penalty, 0.08);
    }

    #[test]
    fn test_unregistered_tags_ignored_for_matching() {
        assert_eq!(score(&["social"], &["social"]), 0.0);
    }

    #[test]
    fn test_shared_analysis_gives_same_score() {
        let registry = TagRegistry::standard();
        let user = tags(&["service", "advocacy", "service", "low-commitment"]);
        let entry = tags(&["advocacy", "low-commitment"]);
        let analysis = analyze_user_tags(registry, &user);

        assert_eq!(
            calculate_match_score(registry, &user, &entry, Some(&analysis)),
            calculate_match_score(registry, &user, &entry, None),
        );
    }
}
