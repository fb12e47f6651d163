use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::models::domain::{Destination, ProfileStats, ScoredDestination, SearchMode};

/// Response for the destination search endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub destinations: Vec<ScoredDestination>,
    pub mode: SearchMode,
    pub query: String,
    pub category: String,
    pub total_results: usize,
}

/// Home screen payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeResponse {
    pub featured: Vec<ScoredDestination>,
    pub popular: Vec<Destination>,
    pub mode: SearchMode,
    #[serde(rename = "favoritesOnly")]
    pub favorites_only: bool,
    #[serde(rename = "favoriteCount")]
    pub favorite_count: usize,
    #[serde(rename = "favoriteBadge")]
    pub favorite_badge: String,
}

/// Current favorite titles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesResponse {
    pub titles: Vec<String>,
    pub count: usize,
}

/// Result of toggling a favorite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleFavoriteResponse {
    pub title: String,
    pub favorited: bool,
    pub count: usize,
    pub message: String,
}

/// Profile grid contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesResponse {
    pub tab: String,
    pub places: Vec<Destination>,
    pub message: Option<String>,
}

/// Profile stats response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: ProfileStats,
}

/// Currency conversion result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResponse {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub rate: f64,
    pub result: f64,
    #[serde(rename = "resultLabel")]
    pub result_label: String,
    #[serde(rename = "rateLabel")]
    pub rate_label: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Rate table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesResponse {
    pub base: String,
    pub rates: BTreeMap<String, f64>,
}

/// Generic acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub destinations: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
