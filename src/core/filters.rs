use crate::core::classifier::matches_category;
use crate::models::{CategoryFilter, Destination, FavoriteSet};

/// Normalized free-text query: trimmed and lowercased
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Category narrowing
///
/// Stage 1 of the Explore pipeline.
#[inline]
pub fn matches_category_filter(destination: &Destination, filter: CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::Only(category) => matches_category(destination, category),
    }
}

/// Text filtering
///
/// Stage 2 - substring match of the query against title, subtitle or
/// description. An empty query matches everything.
#[inline]
pub fn matches_text(destination: &Destination, query: &SearchQuery) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.as_str();

    destination.title.to_lowercase().contains(q)
        || destination.subtitle.to_lowercase().contains(q)
        || destination.description_or_empty().to_lowercase().contains(q)
}

/// Favorites narrowing used by the Home screen
#[inline]
pub fn matches_favorites(destination: &Destination, favorites: &FavoriteSet) -> bool {
    favorites.contains(&destination.title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn create_test_destination() -> Destination {
        Destination::new(
            "Nine Arch Bridge",
            "Ella, Demodara",
            "Iconic colonial-era viaduct amid lush tea country",
            4.8,
            "nine_arch_bridge",
        )
    }

    #[test]
    fn test_query_normalization() {
        let q = SearchQuery::new("  BriDGE \t");
        assert_eq!(q.as_str(), "bridge");
        assert!(SearchQuery::new("   ").is_empty());
    }

    #[test]
    fn test_text_match_fields() {
        let d = create_test_destination();
        assert!(matches_text(&d, &"arch".into()));
        assert!(matches_text(&d, &"demodara".into()));
        assert!(matches_text(&d, &"VIADUCT".into()));
        assert!(!matches_text(&d, &"beach".into()));
    }

    #[test]
    fn test_empty_query_matches() {
        let d = create_test_destination();
        assert!(matches_text(&d, &SearchQuery::default()));
    }

    #[test]
    fn test_category_filter() {
        let d = create_test_destination();
        assert!(matches_category_filter(&d, CategoryFilter::All));
        assert!(matches_category_filter(&d, CategoryFilter::Only(Category::Nature)));
        assert!(!matches_category_filter(&d, CategoryFilter::Only(Category::Culture)));
    }

    #[test]
    fn test_favorites_match() {
        let d = create_test_destination();
        let mut favorites = FavoriteSet::new();
        assert!(!matches_favorites(&d, &favorites));
        favorites.toggle("Nine Arch Bridge");
        assert!(matches_favorites(&d, &favorites));
    }
}
