// Integration tests for the Pearl Trails HTTP API

use actix_web::{http::StatusCode, test, web, App};
use pearl_trails::core::CurrencyConverter;
use pearl_trails::models::RelevanceWeights;
use pearl_trails::routes::{configure_routes, AppState};
use pearl_trails::services::{
    keys, Catalog, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore,
};
use serde_json::{json, Value};
use std::sync::Arc;

async fn create_state(store: Arc<dyn PreferenceStore>) -> AppState {
    AppState::new(
        Catalog::builtin(),
        RelevanceWeights::default(),
        store,
        CurrencyConverter::default(),
    )
    .await
    .unwrap()
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(configure_routes),
        )
        .await
    };
}

fn result_titles(body: &Value, field: &str) -> Vec<String> {
    body[field]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["title"].as_str().unwrap().to_string())
        .collect()
}

#[actix_web::test]
async fn test_health() {
    let app = init_app!(create_state(Arc::new(MemoryPreferenceStore::new())).await);

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["destinations"], 11);
}

#[actix_web::test]
async fn test_explore_search_ranked() {
    let app = init_app!(create_state(Arc::new(MemoryPreferenceStore::new())).await);

    let req = test::TestRequest::get()
        .uri("/api/v1/destinations?q=%20TEA%20")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(result_titles(&body, "destinations"), vec!["Tea Country Plantations", "Nine Arch Bridge"]);
    assert_eq!(body["mode"], "ranked");
    assert_eq!(body["query"], "TEA");
    assert_eq!(body["destinations"][0]["badge"], "nature");
}

#[actix_web::test]
async fn test_explore_category_tab() {
    let app = init_app!(create_state(Arc::new(MemoryPreferenceStore::new())).await);

    let req = test::TestRequest::get()
        .uri("/api/v1/destinations?category=Beaches")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(result_titles(&body, "destinations"), vec!["Nilaveli Beach", "Mirissa Beach"]);
    assert_eq!(body["total_results"], 2);

    let req = test::TestRequest::get()
        .uri("/api/v1/destinations?category=explore")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_destination_detail() {
    let app = init_app!(create_state(Arc::new(MemoryPreferenceStore::new())).await);

    let req = test::TestRequest::get()
        .uri("/api/v1/destinations/Nine%20Arch%20Bridge")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["destination"]["title"], "Nine Arch Bridge");
    assert_eq!(body["ratingLabel"], "4.8");

    let req = test::TestRequest::get()
        .uri("/api/v1/destinations/Atlantis")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_toggle_favorite_flow() {
    let store = Arc::new(MemoryPreferenceStore::new());
    let app = init_app!(create_state(store.clone()).await);

    let req = test::TestRequest::post()
        .uri("/api/v1/favorites/toggle")
        .set_json(json!({ "title": "Mirissa Beach" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["favorited"], true);
    assert_eq!(body["count"], 1);
    assert_eq!(body["message"], "Added to favorites");

    let prefs = store.snapshot().await.unwrap();
    assert!(prefs.get_string_set(keys::FAVORITES).unwrap().contains("Mirissa Beach"));

    let req = test::TestRequest::get().uri("/api/v1/favorites").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["titles"], json!(["Mirissa Beach"]));

    let req = test::TestRequest::post()
        .uri("/api/v1/favorites/toggle")
        .set_json(json!({ "title": "Mirissa Beach" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["favorited"], false);
    assert_eq!(body["message"], "Removed from favorites");
    assert_eq!(body["count"], 0);
}

#[actix_web::test]
async fn test_toggle_rejects_empty_title() {
    let app = init_app!(create_state(Arc::new(MemoryPreferenceStore::new())).await);

    let req = test::TestRequest::post()
        .uri("/api/v1/favorites/toggle")
        .set_json(json!({ "title": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_home_best_match_and_favorites_flag() {
    let app = init_app!(create_state(Arc::new(MemoryPreferenceStore::new())).await);

    let req = test::TestRequest::get().uri("/api/v1/home?q=bridge").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(result_titles(&body, "featured"), vec!["Nine Arch Bridge"]);
    assert_eq!(body["mode"], "bestMatch");
    assert_eq!(result_titles(&body, "popular"), vec!["Sigiriya Rock Fortress", "Yala National Park"]);

    let req = test::TestRequest::post()
        .uri("/api/v1/favorites/toggle")
        .set_json(json!({ "title": "Nilaveli Beach" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/home?favoritesOnly=true")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(result_titles(&body, "featured"), vec!["Nilaveli Beach"]);
    assert_eq!(body["favoriteBadge"], "❤ 1");

    // Selection is remembered when omitted
    let req = test::TestRequest::get().uri("/api/v1/home").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["favoritesOnly"], true);
    assert_eq!(result_titles(&body, "featured"), vec!["Nilaveli Beach"]);
}

#[actix_web::test]
async fn test_profile_defaults_and_save() {
    let app = init_app!(create_state(Arc::new(MemoryPreferenceStore::new())).await);

    let req = test::TestRequest::get().uri("/api/v1/profile").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "Travel Explorer");
    assert_eq!(body["bio"], "Sri Lanka Enthusiast");
    assert_eq!(body["hasAccount"], false);
    assert_eq!(body["notifications"], json!({ "email": true, "push": false, "location": true }));

    let req = test::TestRequest::put()
        .uri("/api/v1/profile")
        .set_json(json!({
            "name": "  Nimali  ",
            "bio": "Hiker",
            "notifications": { "email": false, "push": true, "location": true }
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "Nimali");
    assert_eq!(body["hasAccount"], true);
    assert_eq!(body["notifications"]["push"], true);
    assert!(body["joined"].as_str().unwrap().starts_with("Joined "));

    let req = test::TestRequest::delete().uri("/api/v1/profile").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "Travel Explorer");
    assert_eq!(body["hasAccount"], false);
}

#[actix_web::test]
async fn test_signup_validation() {
    let store = Arc::new(MemoryPreferenceStore::new());
    let app = init_app!(create_state(store.clone()).await);

    let req = test::TestRequest::post()
        .uri("/api/v1/profile/signup")
        .set_json(json!({ "name": "Kasun", "email": "not-an-email", "password": "secret1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/v1/profile/signup")
        .set_json(json!({ "name": "Kasun", "email": "kasun@example.com", "password": "123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/v1/profile/signup")
        .set_json(json!({ "name": "Kasun", "bio": "", "email": "kasun@example.com", "password": "secret1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let prefs = store.snapshot().await.unwrap();
    assert_eq!(prefs.get_string(keys::PROFILE_NAME), Some("Kasun"));
    assert_eq!(prefs.get_string(keys::SIGNUP_EMAIL), Some("kasun@example.com"));
}

#[actix_web::test]
async fn test_places_tabs() {
    let app = init_app!(create_state(Arc::new(MemoryPreferenceStore::new())).await);

    let req = test::TestRequest::get()
        .uri("/api/v1/profile/places?tab=bookmarks")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["places"], json!([]));
    assert_eq!(body["message"], "No bookmarks yet. Tap the heart on Home/Explore to add.");

    let req = test::TestRequest::get()
        .uri("/api/v1/profile/places?tab=visited")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["places"].as_array().unwrap().len(), 6);

    let req = test::TestRequest::get()
        .uri("/api/v1/profile/places?tab=wishlist")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_stats_bookmark_count() {
    let app = init_app!(create_state(Arc::new(MemoryPreferenceStore::new())).await);

    for title in ["Mirissa Beach", "Yala National Park"] {
        let req = test::TestRequest::post()
            .uri("/api/v1/favorites/toggle")
            .set_json(json!({ "title": title }))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get().uri("/api/v1/profile/stats").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["bookmarks"], 2);
    let visited = body["visited"].as_u64().unwrap();
    assert!((6..24).contains(&visited));
}

#[actix_web::test]
async fn test_delete_account_clears_favorites() {
    let app = init_app!(create_state(Arc::new(MemoryPreferenceStore::new())).await);

    let req = test::TestRequest::post()
        .uri("/api/v1/favorites/toggle")
        .set_json(json!({ "title": "Mirissa Beach" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::delete().uri("/api/v1/account").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);

    let req = test::TestRequest::get().uri("/api/v1/favorites").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["count"], 0);
}

#[actix_web::test]
async fn test_currency_endpoints() {
    let app = init_app!(create_state(Arc::new(MemoryPreferenceStore::new())).await);

    let req = test::TestRequest::get()
        .uri("/api/v1/currency/convert?from=usd&amount=10")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["from"], "USD");
    assert_eq!(body["to"], "LKR");
    assert_eq!(body["resultLabel"], "Rs. 3,075.00");

    let req = test::TestRequest::get()
        .uri("/api/v1/currency/convert?from=EUR&amount=abc")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["result"], 0.0);

    let req = test::TestRequest::get().uri("/api/v1/currency/rates").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["base"], "LKR");
    assert_eq!(body["rates"]["JPY"], 2.05);
}

#[actix_web::test]
async fn test_favorites_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    {
        let store = Arc::new(FilePreferenceStore::open(&path).await.unwrap());
        let app = init_app!(create_state(store).await);
        let req = test::TestRequest::post()
            .uri("/api/v1/favorites/toggle")
            .set_json(json!({ "title": "Galle Fort Lighthouse" }))
            .to_request();
        test::call_service(&app, req).await;
    }

    let store = Arc::new(FilePreferenceStore::open(&path).await.unwrap());
    let app = init_app!(create_state(store).await);
    let req = test::TestRequest::get()
        .uri("/api/v1/profile/places?tab=bookmarks")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(result_titles(&body, "places"), vec!["Galle Fort Lighthouse"]);
    assert!(body["message"].is_null());
}
