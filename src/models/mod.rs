// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Category, CategoryFilter, Destination, DestinationDetail, DetailFact, FavoriteSet,
    NotificationSettings, Profile, ProfileStats, RelevanceWeights, ScoredDestination, SearchMode,
    UnknownCategory,
};
pub use requests::{
    ConvertRequest, HomeRequest, PlacesRequest, SaveProfileRequest, SearchRequest, SignupRequest,
    ToggleFavoriteRequest,
};
pub use responses::{
    ConversionResponse, ErrorResponse, FavoritesResponse, HealthResponse, HomeResponse,
    MessageResponse, PlacesResponse, RatesResponse, SearchResponse, StatsResponse,
    ToggleFavoriteResponse,
};
