use crate::core::filters::SearchQuery;
use crate::models::{Destination, RelevanceWeights};

/// Relevance score used to rank Explore results
///
/// Bonuses are additive, so a title that starts with the query earns both
/// the prefix and the contains bonus:
///
/// score = title_prefix      (title starts with query)
///       + title_contains    (title contains query)
///       + subtitle_contains (subtitle contains query)
///       + description_contains
pub fn relevance_score(
    destination: &Destination,
    query: &SearchQuery,
    weights: &RelevanceWeights,
) -> u32 {
    if query.is_empty() {
        return 0;
    }
    let title = destination.title.to_lowercase();
    let prefix = if title.starts_with(query.as_str()) {
        weights.title_prefix
    } else {
        0
    };

    prefix + contains_score(destination, &title, query, weights)
}

/// Score used by the Home search box
///
/// Same as [`relevance_score`] without the title prefix bonus.
pub fn home_score(destination: &Destination, query: &SearchQuery, weights: &RelevanceWeights) -> u32 {
    if query.is_empty() {
        return 0;
    }
    let title = destination.title.to_lowercase();
    contains_score(destination, &title, query, weights)
}

#[inline]
fn contains_score(
    destination: &Destination,
    title: &str,
    query: &SearchQuery,
    weights: &RelevanceWeights,
) -> u32 {
    let q = query.as_str();
    let mut score = 0;

    if title.contains(q) {
        score += weights.title_contains;
    }
    if destination.subtitle.to_lowercase().contains(q) {
        score += weights.subtitle_contains;
    }
    if destination.description_or_empty().to_lowercase().contains(q) {
        score += weights.description_contains;
    }

    score
}
