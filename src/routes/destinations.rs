use actix_web::{web, HttpResponse, Responder};
use crate::core::detail;
use crate::models::{
    CategoryFilter, ErrorResponse, HealthResponse, HomeRequest, HomeResponse, SearchRequest,
    SearchResponse,
};
use crate::routes::{bad_request, AppState};

/// Configure catalog and search routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/destinations", web::get().to(search_destinations))
        .route("/destinations/{title}", web::get().to(get_destination))
        .route("/home", web::get().to(home));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        destinations: state.catalog.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Explore screen search
///
/// GET /api/v1/destinations?category=nature&q=tea
///
/// Returns every match, ranked by relevance when a query is given and in
/// catalog order otherwise.
async fn search_destinations(
    state: web::Data<AppState>,
    query: web::Query<SearchRequest>,
) -> impl Responder {
    let filter = match query.category.as_deref().unwrap_or("all").parse::<CategoryFilter>() {
        Ok(filter) => filter,
        Err(e) => return bad_request("Invalid category", e),
    };
    let q = query.q.clone().unwrap_or_default();

    let result = state.engine.search(state.catalog.destinations(), filter, &q);

    tracing::debug!(
        "Explore search q={:?} category={:?}: {} of {} destinations",
        q,
        filter,
        result.destinations.len(),
        result.total_candidates
    );

    HttpResponse::Ok().json(SearchResponse {
        total_results: result.destinations.len(),
        destinations: result.destinations,
        mode: result.mode,
        query: q.trim().to_string(),
        category: query.category.clone().unwrap_or_else(|| "all".to_string()).to_lowercase(),
    })
}

/// Destination detail by exact title
async fn get_destination(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let title = path.into_inner();

    match state.catalog.get(&title) {
        Some(destination) => HttpResponse::Ok().json(detail(destination)),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Destination not found".to_string(),
            message: format!("No destination titled '{}'", title),
            status_code: 404,
        }),
    }
}

/// Home screen
///
/// GET /api/v1/home?q=bridge&favoritesOnly=true
///
/// The featured list is searched in best-match mode: one result for a
/// non-empty query. An explicit `favoritesOnly` is remembered for later
/// requests that omit it.
async fn home(
    state: web::Data<AppState>,
    query: web::Query<HomeRequest>,
) -> impl Responder {
    let favorites_only = match query.favorites_only {
        Some(selected) => {
            state.favorites.set_home_bookmarks_only(selected).await;
            selected
        }
        None => state.favorites.home_bookmarks_only().await,
    };

    let favorites = state.favorites.snapshot();
    let q = query.q.clone().unwrap_or_default();

    let result = state
        .engine
        .home_search(state.catalog.featured(), favorites_only, &favorites, &q);

    HttpResponse::Ok().json(HomeResponse {
        featured: result.destinations,
        popular: state.catalog.popular().to_vec(),
        mode: result.mode,
        favorites_only,
        favorite_count: favorites.len(),
        favorite_badge: format!("❤ {}", favorites.len()),
    })
}
