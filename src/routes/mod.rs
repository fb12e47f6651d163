// Route exports
pub mod currency;
pub mod destinations;
pub mod favorites;
pub mod profile;

use actix_web::{web, HttpResponse};
use std::sync::Arc;
use crate::core::{CurrencyConverter, SearchEngine};
use crate::models::{ErrorResponse, RelevanceWeights};
use crate::services::{Catalog, FavoritesHub, PreferenceError, PreferenceStore, ProfileService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub engine: SearchEngine,
    pub favorites: Arc<FavoritesHub>,
    pub profile: Arc<ProfileService>,
    pub currency: Arc<CurrencyConverter>,
}

impl AppState {
    /// Wire services over a preference store, hydrating favorites from it
    pub async fn new(
        catalog: Catalog,
        weights: RelevanceWeights,
        store: Arc<dyn PreferenceStore>,
        currency: CurrencyConverter,
    ) -> Result<Self, PreferenceError> {
        let favorites = FavoritesHub::load(store.clone()).await?;

        Ok(Self {
            catalog: Arc::new(catalog),
            engine: SearchEngine::new(weights),
            favorites: Arc::new(favorites),
            profile: Arc::new(ProfileService::new(store)),
            currency: Arc::new(currency),
        })
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(destinations::configure)
            .configure(favorites::configure)
            .configure(profile::configure)
            .configure(currency::configure),
    );
}

pub(crate) fn bad_request(error: &str, message: impl ToString) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message: message.to_string(),
        status_code: 400,
    })
}

pub(crate) fn internal_error(error: &str, message: impl ToString) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: error.to_string(),
        message: message.to_string(),
        status_code: 500,
    })
}
