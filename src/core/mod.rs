// Core engine exports
pub mod classifier;
pub mod currency;
pub mod engine;
pub mod filters;
pub mod scoring;

pub use classifier::{classify, filter_keywords, matches_category, BADGE_PRIORITY};
pub use currency::{Conversion, CurrencyConverter};
pub use engine::{bookmarked, detail, share_text, visited_sample, SearchEngine, SearchResult};
pub use filters::{matches_category_filter, matches_favorites, matches_text, SearchQuery};
pub use scoring::{home_score, relevance_score};
