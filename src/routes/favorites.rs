use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{FavoritesResponse, ToggleFavoriteRequest, ToggleFavoriteResponse};
use crate::routes::{bad_request, AppState};

/// Configure favorite routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/favorites", web::get().to(list_favorites))
        .route("/favorites/toggle", web::post().to(toggle_favorite));
}

async fn list_favorites(state: web::Data<AppState>) -> impl Responder {
    let favorites = state.favorites.snapshot();
    HttpResponse::Ok().json(FavoritesResponse {
        count: favorites.len(),
        titles: favorites.titles(),
    })
}

/// Toggle favorite endpoint
///
/// POST /api/v1/favorites/toggle
///
/// Request body:
/// ```json
/// { "title": "Mirissa Beach" }
/// ```
///
/// Titles are not checked against the catalog.
async fn toggle_favorite(
    state: web::Data<AppState>,
    req: web::Json<ToggleFavoriteRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors);
    }

    let favorited = state.favorites.toggle(&req.title).await;
    let message = if favorited {
        "Added to favorites"
    } else {
        "Removed from favorites"
    };

    HttpResponse::Ok().json(ToggleFavoriteResponse {
        title: req.title.clone(),
        favorited,
        count: state.favorites.count(),
        message: message.to_string(),
    })
}
