use actix_web::{web, HttpResponse, Responder};
use crate::core::{bookmarked, visited_sample};
use crate::models::{
    MessageResponse, PlacesRequest, PlacesResponse, SaveProfileRequest, SignupRequest,
    StatsResponse,
};
use crate::routes::{bad_request, internal_error, AppState};
use crate::services::{profile_stats, ProfileError};

const NO_BOOKMARKS_MESSAGE: &str = "No bookmarks yet. Tap the heart on Home/Explore to add.";

/// Configure profile routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/profile", web::get().to(get_profile))
        .route("/profile", web::put().to(save_profile))
        .route("/profile", web::delete().to(clear_profile))
        .route("/profile/signup", web::post().to(signup))
        .route("/profile/stats", web::get().to(stats))
        .route("/profile/places", web::get().to(places))
        .route("/account", web::delete().to(delete_account));
}

fn profile_error(err: ProfileError) -> HttpResponse {
    match err {
        ProfileError::Validation(errors) => bad_request("Validation failed", errors),
        ProfileError::Store(e) => {
            tracing::error!("Preference store failure: {}", e);
            internal_error("Failed to access preferences", e)
        }
    }
}

async fn get_profile(state: web::Data<AppState>) -> impl Responder {
    match state.profile.load().await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => profile_error(e),
    }
}

/// Save the profile editor form
///
/// PUT /api/v1/profile
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "bio": "string",
///   "notifications": { "email": true, "push": false, "location": true },
///   "avatarUri": "content://..."
/// }
/// ```
async fn save_profile(
    state: web::Data<AppState>,
    req: web::Json<SaveProfileRequest>,
) -> impl Responder {
    match state.profile.save(&req).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => profile_error(e),
    }
}

/// Clear name and bio only
async fn clear_profile(state: web::Data<AppState>) -> impl Responder {
    match state.profile.clear().await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => profile_error(e),
    }
}

async fn signup(
    state: web::Data<AppState>,
    req: web::Json<SignupRequest>,
) -> impl Responder {
    match state.profile.signup(&req).await {
        Ok(profile) => HttpResponse::Created().json(profile),
        Err(e) => {
            tracing::info!("Sign-up rejected: {}", e);
            profile_error(e)
        }
    }
}

/// Wipe every stored preference, favorites included
async fn delete_account(state: web::Data<AppState>) -> impl Responder {
    if let Err(e) = state.profile.delete_account().await {
        return profile_error(e);
    }
    if let Err(e) = state.favorites.reload().await {
        tracing::warn!("Failed to reload favorites after account deletion: {}", e);
    }

    HttpResponse::Ok().json(MessageResponse {
        success: true,
        message: "Account deleted".to_string(),
    })
}

async fn stats(state: web::Data<AppState>) -> impl Responder {
    let stats = profile_stats(state.favorites.count(), &mut rand::thread_rng());
    HttpResponse::Ok().json(StatsResponse { stats })
}

/// Profile grid
///
/// GET /api/v1/profile/places?tab=visited|bookmarks
async fn places(
    state: web::Data<AppState>,
    query: web::Query<PlacesRequest>,
) -> impl Responder {
    let tab = query.tab.as_deref().unwrap_or("visited").trim().to_lowercase();
    let catalog = state.catalog.destinations();

    let (places, message) = match tab.as_str() {
        "visited" => (visited_sample(catalog, &mut rand::thread_rng()), None),
        "bookmarks" => {
            let places = bookmarked(catalog, &state.favorites.snapshot());
            let message = places.is_empty().then(|| NO_BOOKMARKS_MESSAGE.to_string());
            (places, message)
        }
        other => {
            return bad_request(
                "Invalid tab",
                format!("unknown tab '{}', expected visited or bookmarks", other),
            )
        }
    };

    HttpResponse::Ok().json(PlacesResponse { tab, places, message })
}
