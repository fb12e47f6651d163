use crate::models::{Category, Destination};

/// Badge keywords, in classification priority order
///
/// The first category with a matching keyword wins, so a beach whose
/// description mentions hills is still badged Beaches.
pub const BADGE_PRIORITY: [(Category, &[&str]); 6] = [
    (Category::Beaches, &["beach", "bay", "mirissa"]),
    (Category::Wildlife, &["park", "safari", "wildlife", "elephant", "leopard"]),
    (Category::Culture, &["temple", "stupa", "pagoda", "dagoba", "buddha"]),
    (
        Category::Heritage,
        &["fort", "ruins", "ancient", "palace", "citadel", "heritage", "lighthouse"],
    ),
    (Category::Nature, &["peak", "mount", "bridge", "forest", "tea", "waterfall"]),
    (Category::Scenic, &["view", "scenic", "train", "hill"]),
];

/// Keywords used by the category tabs
///
/// These differ from the badge lists (lighthouse counts as Culture, park as
/// Nature, tea and bridge as Scenic) and every category is tested on its own.
/// A card's badge and the tabs it shows up under can therefore disagree.
pub fn filter_keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::Culture => &["temple", "stupa", "pagoda", "dagoba", "buddha", "lighthouse"],
        Category::Nature => &["peak", "mount", "bridge", "park", "forest", "tea", "waterfall"],
        Category::Beaches => &["beach", "bay", "mirissa"],
        Category::Heritage => &["fort", "ruins", "ancient", "palace", "citadel", "heritage"],
        Category::Wildlife => &["park", "safari", "wildlife", "elephant", "leopard"],
        Category::Scenic => &["view", "scenic", "train", "tea", "hill", "bridge"],
        Category::Explore => &[],
    }
}

/// Single best-fit badge for a destination
///
/// Looks at title, subtitle and description.
pub fn classify(destination: &Destination) -> Category {
    let title = destination.title.to_lowercase();
    let subtitle = destination.subtitle.to_lowercase();
    let description = destination.description_or_empty().to_lowercase();

    BADGE_PRIORITY
        .iter()
        .find(|(_, keywords)| {
            keywords.iter().any(|k| {
                title.contains(k) || subtitle.contains(k) || description.contains(k)
            })
        })
        .map(|(category, _)| *category)
        .unwrap_or(Category::Explore)
}

/// Whether a destination belongs under a category tab
///
/// Only title and description are consulted. `Explore` has no keywords and
/// never matches.
#[inline]
pub fn matches_category(destination: &Destination, category: Category) -> bool {
    let title = destination.title.to_lowercase();
    let description = destination.description_or_empty().to_lowercase();

    filter_keywords(category)
        .iter()
        .any(|k| title.contains(k) || description.contains(k))
}
