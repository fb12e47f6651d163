use rand::seq::SliceRandom;
use rand::Rng;
use crate::models::{
    CategoryFilter, Destination, DestinationDetail, DetailFact, FavoriteSet, RelevanceWeights,
    ScoredDestination, SearchMode,
};
use crate::core::{
    classifier::classify,
    filters::{matches_category_filter, matches_favorites, matches_text, SearchQuery},
    scoring::{home_score, relevance_score},
};

/// Number of destinations shown in the profile "visited" grid
pub const VISITED_SAMPLE_SIZE: usize = 6;

/// Result of a catalog search
#[derive(Debug)]
pub struct SearchResult {
    pub destinations: Vec<ScoredDestination>,
    pub mode: SearchMode,
    pub total_candidates: usize,
}

/// Catalog filter/rank engine
///
/// # Ranked pipeline (Explore)
/// 1. Category narrowing
/// 2. Text filtering
/// 3. Relevance scoring and stable sort (non-empty query only)
///
/// # Best-match pipeline (Home)
/// 1. Optional favorites narrowing
/// 2. Single highest scoring item for a non-empty query, the whole base otherwise
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    weights: RelevanceWeights,
}

impl SearchEngine {
    pub fn new(weights: RelevanceWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &RelevanceWeights {
        &self.weights
    }

    /// Full ranked search used by the Explore screen
    pub fn search(
        &self,
        catalog: &[Destination],
        filter: CategoryFilter,
        query: &str,
    ) -> SearchResult {
        let query = SearchQuery::new(query);

        let mut destinations: Vec<ScoredDestination> = catalog
            .iter()
            // Stage 1: category narrowing
            .filter(|d| matches_category_filter(d, filter))
            // Stage 2: text filtering
            .filter(|d| matches_text(d, &query))
            .map(|d| ScoredDestination {
                badge: classify(d),
                score: relevance_score(d, &query, &self.weights),
                destination: d.clone(),
            })
            .collect();

        // Stage 3: ranking. sort_by is stable, ties keep catalog order
        if !query.is_empty() {
            destinations.sort_by(|a, b| b.score.cmp(&a.score));
        }

        SearchResult {
            destinations,
            mode: SearchMode::Ranked,
            total_candidates: catalog.len(),
        }
    }

    /// Single-result search used by the Home search box
    ///
    /// For a non-empty query the best scoring item is returned even when it
    /// scores zero; the first one wins a tie.
    pub fn home_search(
        &self,
        base: &[Destination],
        favorites_only: bool,
        favorites: &FavoriteSet,
        query: &str,
    ) -> SearchResult {
        let query = SearchQuery::new(query);

        let narrowed = base
            .iter()
            .filter(|d| !favorites_only || matches_favorites(d, favorites));

        let destinations: Vec<ScoredDestination> = if query.is_empty() {
            narrowed
                .map(|d| ScoredDestination {
                    badge: classify(d),
                    score: 0,
                    destination: d.clone(),
                })
                .collect()
        } else {
            let mut best: Option<(&Destination, u32)> = None;
            for d in narrowed {
                let score = home_score(d, &query, &self.weights);
                if best.map_or(true, |(_, top)| score > top) {
                    best = Some((d, score));
                }
            }
            best.map(|(d, score)| ScoredDestination {
                badge: classify(d),
                score,
                destination: d.clone(),
            })
            .into_iter()
            .collect()
        };

        SearchResult {
            destinations,
            mode: SearchMode::BestMatch,
            total_candidates: base.len(),
        }
    }
}

/// Catalog entries whose title is a favorite, in catalog order
pub fn bookmarked(catalog: &[Destination], favorites: &FavoriteSet) -> Vec<Destination> {
    catalog
        .iter()
        .filter(|d| matches_favorites(d, favorites))
        .cloned()
        .collect()
}

/// Random placeholder sample for the "visited" grid
pub fn visited_sample<R: Rng + ?Sized>(catalog: &[Destination], rng: &mut R) -> Vec<Destination> {
    catalog
        .choose_multiple(rng, VISITED_SAMPLE_SIZE)
        .cloned()
        .collect()
}

/// Build the detail view for a destination
pub fn detail(destination: &Destination) -> DestinationDetail {
    let facts = [
        ("Duration", "6-7 hours"),
        ("Best Time", "Dec - Mar"),
        ("Difficulty", "Easy"),
        ("From", "$15"),
    ]
    .into_iter()
    .map(|(label, value)| DetailFact {
        label: label.to_string(),
        value: value.to_string(),
    })
    .collect();

    DestinationDetail {
        badge: classify(destination),
        rating_label: destination.rating_label(),
        facts,
        share_text: share_text(destination),
        destination: destination.clone(),
    }
}

/// Plain-text share message
pub fn share_text(destination: &Destination) -> String {
    format!(
        "{} — {}\nRating: {:.1}\n\n{}",
        destination.title,
        destination.subtitle,
        destination.rating,
        destination.description_or_empty()
    )
}
