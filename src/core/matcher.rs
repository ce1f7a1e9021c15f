use crate::core::{
    explain::generate_match_explanation,
    registry::TagRegistry,
    scoring::{analyze_user_tags, calculate_match_score},
    selector::{rank_candidates, select_diverse, DEFAULT_SCORE},
    tagger::assign_tags_with,
};
use crate::models::{CatalogEntry, MatchReport, MatchResult, Recommendation, Tag};
use rand::Rng;

/// Main matching orchestrator over a fixed catalog
///
/// # Pipeline Stages
/// 1. Tag every catalog entry from its text
/// 2. Score every entry against the user's tags
/// 3. Rank, filter and stratify into score tiers
/// 4. Draw a diverse shortlist
///
/// Entry tags only depend on the entry text, so they are derived once when
/// the matcher is built. Everything else is computed per request.
#[derive(Debug, Clone)]
pub struct Matcher {
    registry: &'static TagRegistry,
    catalog: Vec<CatalogEntry>,
    entry_tags: Vec<Vec<Tag>>,
}

impl Matcher {
    pub fn new(catalog: Vec<CatalogEntry>) -> Self {
        let registry = TagRegistry::standard();
        let entry_tags = catalog
            .iter()
            .map(|entry| assign_tags_with(registry, entry))
            .collect();

        Self {
            registry,
            catalog,
            entry_tags,
        }
    }

    pub fn catalog(&self) -> &[CatalogEntry] {
        &self.catalog
    }

    pub fn registry(&self) -> &'static TagRegistry {
        self.registry
    }

    /// Find the best matching entries for a user's collected tags
    ///
    /// Without tags the first `count` entries are returned in catalog order
    /// with a fixed score of [`DEFAULT_SCORE`]. Otherwise the result is a
    /// randomized, diversity-aware pick of at most `count` qualifying entries.
    ///
    /// # Arguments
    /// * `user_tags` - All tags from the quiz answers, duplicates included
    /// * `count` - Maximum number of matches to return
    /// * `rng` - Source of every random choice made during selection
    pub fn top_matches<R: Rng + ?Sized>(
        &self,
        user_tags: &[Tag],
        count: usize,
        rng: &mut R,
    ) -> Vec<MatchResult> {
        if user_tags.is_empty() {
            tracing::debug!("No user tags, returning first {} catalog entries", count);
            return self
                .tagged_entries()
                .take(count)
                .map(|(entry, tags)| MatchResult {
                    entry: entry.clone(),
                    tags: tags.to_vec(),
                    score: DEFAULT_SCORE,
                })
                .collect();
        }

        let analysis = analyze_user_tags(self.registry, user_tags);

        let scored: Vec<MatchResult> = self
            .tagged_entries()
            .map(|(entry, tags)| MatchResult {
                entry: entry.clone(),
                tags: tags.to_vec(),
                score: calculate_match_score(self.registry, user_tags, tags, Some(&analysis)),
            })
            .collect();

        let ranked = rank_candidates(scored, user_tags);
        tracing::debug!(
            "{} of {} entries qualify for {} user tags",
            ranked.len(),
            self.catalog.len(),
            user_tags.len()
        );

        select_diverse(self.registry, &ranked, count, rng)
    }

    /// Explain why a match was recommended
    pub fn explain<R: Rng + ?Sized>(
        &self,
        result: &MatchResult,
        user_tags: &[Tag],
        rng: &mut R,
    ) -> String {
        generate_match_explanation(self.registry, result, user_tags, rng)
    }

    /// Run a full match and attach an explanation to every result
    pub fn recommend<R: Rng + ?Sized>(
        &self,
        user_tags: &[Tag],
        count: usize,
        rng: &mut R,
    ) -> MatchReport {
        let matches = self.top_matches(user_tags, count, rng);
        let recommendations = matches
            .into_iter()
            .map(|result| {
                let explanation = self.explain(&result, user_tags, rng);
                Recommendation { result, explanation }
            })
            .collect();

        MatchReport {
            recommendations,
            user_tags: user_tags.to_vec(),
            total_candidates: self.catalog.len(),
        }
    }

    fn tagged_entries(&self) -> impl Iterator<Item = (&CatalogEntry, &[Tag])> {
        self.catalog
            .iter()
            .zip(self.entry_tags.iter().map(Vec::as_slice))
    }
}
