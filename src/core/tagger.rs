use crate::core::registry::{TagRegistry, DEFAULT_TAG};
use crate::models::{CatalogEntry, Tag};

/// Minimum accumulated score for a tag to be assigned
pub const TAG_THRESHOLD: f64 = 0.6;

/// Maximum number of tags assigned to one entry
pub const MAX_TAGS: usize = 6;

/// Extra score when the keyword appears in the entry name
const NAME_BOOST: f64 = 0.8;

/// Extra score when the keyword appears only in the description
const DESCRIPTION_BOOST: f64 = 0.3;

/// Bonus per additional matching keyword of the same tag
const MULTI_MATCH_BONUS: f64 = 0.2;

/// Assign tags to a catalog entry using the standard registry
pub fn assign_tags(entry: &CatalogEntry) -> Vec<Tag> {
    assign_tags_with(TagRegistry::standard(), entry)
}

/// Assign tags to a catalog entry from its name and description
///
/// Every registered tag accumulates a score from its matching keywords:
/// ```text
/// per keyword  = weight + (0.8 if in name, else 0.3 if in description)
/// tag score    = sum(per keyword) + (matches - 1) * 0.2
/// ```
/// Tags scoring at least [`TAG_THRESHOLD`] are returned highest first, at
/// most [`MAX_TAGS`] of them. An entry matching nothing gets [`DEFAULT_TAG`].
pub fn assign_tags_with(registry: &TagRegistry, entry: &CatalogEntry) -> Vec<Tag> {
    let name = entry.name.to_lowercase();
    let description = entry.description.to_lowercase();
    let full_text = format!("{} {}", name, description);

    let mut scored: Vec<(&Tag, f64)> = registry
        .iter()
        .filter_map(|registered| {
            let mut score = 0.0;
            let mut match_count = 0usize;

            for keyword in &registered.keywords {
                if !keyword.matches(&full_text) {
                    continue;
                }
                match_count += 1;
                score += registered.config.weight;

                if keyword.matches(&name) {
                    score += NAME_BOOST;
                } else if keyword.matches(&description) {
                    score += DESCRIPTION_BOOST;
                }
            }

            if match_count > 1 {
                score += (match_count - 1) as f64 * MULTI_MATCH_BONUS;
            }

            (score >= TAG_THRESHOLD).then_some((&registered.tag, score))
        })
        .collect();

    // Stable sort keeps registry order between equal scores
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut tags: Vec<Tag> = scored
        .into_iter()
        .take(MAX_TAGS)
        .map(|(tag, _)| tag.clone())
        .collect();

    if tags.is_empty() {
        tracing::trace!("No tag qualified for '{}', using default", entry.name);
        tags.push(Tag::from(DEFAULT_TAG));
    }

    tags
}
