use crate::core::registry::TagRegistry;
use crate::models::{MatchResult, Tag};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Entries must score strictly above this floor to be recommended
pub const MIN_SCORE: f64 = 0.15;

/// Score reported for the unpersonalized default list
pub const DEFAULT_SCORE: f64 = 0.3;

/// Scores closer than this are ordered by tag overlap instead
pub const TIE_EPSILON: f64 = 0.01;

pub const TOP_TIER_RATIO: f64 = 0.8;
pub const HIGH_TIER_RATIO: f64 = 0.6;
pub const MEDIUM_TIER_RATIO: f64 = 0.3;

/// Chance of jumping back to the top tier after each pick
pub const RESTART_CYCLE_PROBABILITY: f64 = 0.3;

/// Chance of shuffling the leading result along with the rest
pub const FULL_SHUFFLE_PROBABILITY: f64 = 0.1;

/// Score band relative to the best candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Top,
    High,
    Medium,
    Good,
}

impl Tier {
    /// Order in which tiers are visited while drawing
    pub const CYCLE: [Tier; 4] = [Tier::Top, Tier::High, Tier::Medium, Tier::Good];

    /// Place a score within the range between [`MIN_SCORE`] and the top score
    pub fn for_score(score: f64, top_score: f64) -> Tier {
        let range = top_score - MIN_SCORE;
        let ratio = if range > 0.0 { (score - MIN_SCORE) / range } else { 1.0 };

        if ratio >= TOP_TIER_RATIO {
            Tier::Top
        } else if ratio >= HIGH_TIER_RATIO {
            Tier::High
        } else if ratio >= MEDIUM_TIER_RATIO {
            Tier::Medium
        } else {
            Tier::Good
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Sort scored entries and drop those at or below [`MIN_SCORE`]
///
/// Entries are ordered by score, highest first. Runs of entries within
/// [`TIE_EPSILON`] of the run's leading score are reordered by how many of
/// their tags the user selected; remaining ties keep catalog order.
pub fn rank_candidates(mut scored: Vec<MatchResult>, user_tags: &[Tag]) -> Vec<MatchResult> {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    let wanted: HashSet<&Tag> = user_tags.iter().collect();
    let overlap = |result: &MatchResult| {
        result.tags.iter().filter(|tag| wanted.contains(tag)).count()
    };

    let mut start = 0;
    while start < scored.len() {
        let lead = scored[start].score;
        let end = scored[start..]
            .iter()
            .position(|result| lead - result.score > TIE_EPSILON)
            .map_or(scored.len(), |offset| start + offset);

        scored[start..end].sort_by_key(|result| std::cmp::Reverse(overlap(result)));
        start = end;
    }

    scored.retain(|result| result.score > MIN_SCORE);
    scored
}

/// Group ranked candidates into tiers, as indices into `ranked`
pub fn stratify(ranked: &[MatchResult]) -> [Vec<usize>; 4] {
    let mut tiers: [Vec<usize>; 4] = Default::default();
    let Some(top_score) = ranked.first().map(|result| result.score) else {
        return tiers;
    };

    for (index, result) in ranked.iter().enumerate() {
        tiers[Tier::for_score(result.score, top_score).index()].push(index);
    }
    tiers
}

/// Draw a varied shortlist of at most `count` entries from ranked candidates
///
/// Selection stages:
/// 1. Shuffle each tier
/// 2. Cycle top, high, medium, good, taking one unused entry per visit and
///    skipping entries whose primary tags repeat an earlier pick once two
///    results are in; after a pick, sometimes restart at the top tier
/// 3. Fill any shortfall with unused candidates in random order
/// 4. Shuffle everything after the first result (occasionally the first too)
pub fn select_diverse<R: Rng + ?Sized>(
    registry: &TagRegistry,
    ranked: &[MatchResult],
    count: usize,
    rng: &mut R,
) -> Vec<MatchResult> {
    let mut tiers = stratify(ranked);
    for tier in tiers.iter_mut() {
        tier.shuffle(rng);
    }

    tracing::debug!(
        "Tier sizes: top={}, high={}, medium={}, good={}",
        tiers[0].len(),
        tiers[1].len(),
        tiers[2].len(),
        tiers[3].len()
    );

    let signatures: Vec<Vec<&Tag>> = ranked
        .iter()
        .map(|result| primary_signature(registry, &result.tags))
        .collect();

    let mut selected: Vec<usize> = Vec::with_capacity(count);
    let mut used_names: HashSet<&str> = HashSet::new();
    let mut tier_index = 0usize;
    let mut attempts = 0usize;
    let max_attempts = ranked.len() * 2;

    while selected.len() < count && attempts < max_attempts {
        attempts += 1;

        let tier = &tiers[Tier::CYCLE[tier_index % Tier::CYCLE.len()].index()];
        let unused: Vec<usize> = tier
            .iter()
            .copied()
            .filter(|&index| !used_names.contains(ranked[index].name()))
            .collect();

        let Some(&candidate) = unused.choose(rng) else {
            tier_index += 1;
            continue;
        };

        let similar = selected
            .iter()
            .filter(|&&index| signatures[index] == signatures[candidate])
            .count();
        if similar >= 1 && selected.len() >= 2 {
            tier_index += 1;
            continue;
        }

        selected.push(candidate);
        used_names.insert(ranked[candidate].name());
        tier_index += 1;

        if rng.gen_bool(RESTART_CYCLE_PROBABILITY) && selected.len() < count {
            tier_index = 0;
        }
    }

    if selected.len() < count {
        let mut remaining: Vec<usize> = (0..ranked.len())
            .filter(|&index| !used_names.contains(ranked[index].name()))
            .collect();
        remaining.shuffle(rng);

        let needed = count - selected.len();
        tracing::debug!(
            "Filling {} of {} missing slots from remaining candidates",
            needed.min(remaining.len()),
            needed
        );
        selected.extend(remaining.into_iter().take(needed));
    }

    if selected.len() > 1 {
        selected[1..].shuffle(rng);
        if rng.gen_bool(FULL_SHUFFLE_PROBABILITY) {
            selected.shuffle(rng);
        }
    }

    selected.into_iter().map(|index| ranked[index].clone()).collect()
}

/// Sorted primary tags of an entry, used to spot near-duplicate picks
fn primary_signature<'a>(registry: &TagRegistry, tags: &'a [Tag]) -> Vec<&'a Tag> {
    let mut primary: Vec<&Tag> = tags
        .iter()
        .filter(|tag| registry.is_primary(tag.as_str()))
        .collect();
    primary.sort();
    primary
}
