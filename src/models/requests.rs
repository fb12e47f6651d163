use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::NotificationSettings;

/// Explore screen search parameters
///
/// GET /api/v1/destinations?category=beaches&q=bay
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, alias = "query")]
    pub q: Option<String>,
}

/// Home screen search parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HomeRequest {
    #[serde(default, alias = "query")]
    pub q: Option<String>,
    #[serde(default, rename = "favoritesOnly", alias = "favorites_only")]
    pub favorites_only: Option<bool>,
}

/// Request to flip a favorite
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ToggleFavoriteRequest {
    #[validate(length(min = 1))]
    pub title: String,
}

/// Request to save the profile editor form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveProfileRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub notifications: NotificationSettings,
    #[serde(default, rename = "avatarUri", alias = "avatar_uri")]
    pub avatar_uri: Option<String>,
}

/// Inline sign-up form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[validate(email(message = "Enter a valid email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Profile grid tab selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlacesRequest {
    #[serde(default)]
    pub tab: Option<String>,
}

/// Currency conversion parameters
///
/// `amount` is kept as text so that unparseable input converts as zero
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertRequest {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
}
