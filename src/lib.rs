//! Pearl Trails - destination discovery service
//!
//! This library provides the catalog search engine behind the Pearl Trails
//! travel app: category classification, free-text filtering, relevance
//! ranking, favorites, profile preferences and a fixed-rate currency converter.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{classify, matches_category, CurrencyConverter, SearchEngine, SearchResult};
pub use self::models::{Category, CategoryFilter, Destination, FavoriteSet, RelevanceWeights, SearchMode};
pub use self::services::{Catalog, FavoritesHub, PreferenceStore};
