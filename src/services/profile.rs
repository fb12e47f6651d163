use rand::Rng;
use std::ops::Range;
use std::sync::Arc;
use thiserror::Error;
use validator::Validate;
use crate::models::{NotificationSettings, Profile, ProfileStats, SaveProfileRequest, SignupRequest};
use crate::services::preferences::{keys, PreferenceEdit, PreferenceError, PreferenceStore};

pub const DEFAULT_NAME: &str = "Travel Explorer";
pub const DEFAULT_BIO: &str = "Sri Lanka Enthusiast";
pub const DEFAULT_JOINED: &str = "Joined Dec 2024";

/// Placeholder stat ranges, upper bound exclusive
pub const VISITED_RANGE: Range<u32> = 6..24;
pub const DAYS_JOINED_RANGE: Range<u32> = 30..365;
pub const TRIPS_RANGE: Range<u32> = 1..9;

/// Errors that can occur in profile operations
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Preference store error: {0}")]
    Store(#[from] PreferenceError),
}

/// Profile read/write over the preference store
pub struct ProfileService {
    store: Arc<dyn PreferenceStore>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Load the profile, filling in defaults for anything not stored
    pub async fn load(&self) -> Result<Profile, ProfileError> {
        let prefs = self.store.snapshot().await?;
        let defaults = NotificationSettings::default();

        let has_account = prefs.contains(keys::PROFILE_NAME) || prefs.contains(keys::PROFILE_BIO);

        Ok(Profile {
            name: prefs.get_string(keys::PROFILE_NAME).unwrap_or(DEFAULT_NAME).to_string(),
            bio: prefs.get_string(keys::PROFILE_BIO).unwrap_or(DEFAULT_BIO).to_string(),
            joined: prefs.get_string(keys::PROFILE_JOINED).unwrap_or(DEFAULT_JOINED).to_string(),
            avatar_uri: prefs.get_string(keys::PROFILE_AVATAR_URI).and_then(parse_avatar_uri),
            notifications: NotificationSettings {
                email: prefs.get_bool(keys::PREF_EMAIL).unwrap_or(defaults.email),
                push: prefs.get_bool(keys::PREF_PUSH).unwrap_or(defaults.push),
                location: prefs.get_bool(keys::PREF_LOCATION).unwrap_or(defaults.location),
            },
            has_account,
        })
    }

    /// Save the profile editor form
    ///
    /// The avatar is only written when one was picked, and the joined label
    /// is stamped on first save only.
    pub async fn save(&self, req: &SaveProfileRequest) -> Result<Profile, ProfileError> {
        let mut edit = PreferenceEdit::new()
            .set_string(keys::PROFILE_NAME, req.name.trim())
            .set_string(keys::PROFILE_BIO, req.bio.trim())
            .set_bool(keys::PREF_EMAIL, req.notifications.email)
            .set_bool(keys::PREF_PUSH, req.notifications.push)
            .set_bool(keys::PREF_LOCATION, req.notifications.location);

        if let Some(uri) = req.avatar_uri.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
            edit = edit.set_string(keys::PROFILE_AVATAR_URI, uri);
        }

        edit = edit.set_string_if_absent(keys::PROFILE_JOINED, joined_label(chrono::Local::now()));

        self.store.edit(edit).await?;
        tracing::info!("Profile saved");
        self.load().await
    }

    /// Inline sign-up: validate credentials, then store name, bio and email
    ///
    /// Fields are trimmed before validation, so surrounding whitespace
    /// never rejects an otherwise valid email.
    pub async fn signup(&self, req: &SignupRequest) -> Result<Profile, ProfileError> {
        let req = SignupRequest {
            name: req.name.trim().to_string(),
            bio: req.bio.trim().to_string(),
            email: req.email.trim().to_string(),
            password: req.password.clone(),
        };
        req.validate()?;

        let edit = PreferenceEdit::new()
            .set_string(keys::PROFILE_NAME, req.name.as_str())
            .set_string(keys::PROFILE_BIO, req.bio.as_str())
            .set_string(keys::SIGNUP_EMAIL, req.email.as_str())
            .set_string_if_absent(keys::PROFILE_JOINED, joined_label(chrono::Local::now()));

        self.store.edit(edit).await?;
        tracing::info!("Account created for {}", req.email);
        self.load().await
    }

    /// Forget name and bio, keeping everything else
    pub async fn clear(&self) -> Result<Profile, ProfileError> {
        let edit = PreferenceEdit::new()
            .remove(keys::PROFILE_NAME)
            .remove(keys::PROFILE_BIO);
        self.store.edit(edit).await?;
        tracing::info!("Profile cleared");
        self.load().await
    }

    /// Wipe every stored preference
    pub async fn delete_account(&self) -> Result<(), ProfileError> {
        self.store.clear().await?;
        tracing::info!("Account deleted, all preferences cleared");
        Ok(())
    }
}

/// "Joined Oct 2026"
pub fn joined_label<Tz: chrono::TimeZone>(now: chrono::DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("Joined {}", now.format("%b %Y"))
}

/// Keep an avatar URI only if it parses
fn parse_avatar_uri(raw: &str) -> Option<String> {
    match url::Url::parse(raw.trim()) {
        Ok(uri) => Some(uri.to_string()),
        Err(e) => {
            tracing::debug!("Ignoring unparseable avatar uri {:?}: {}", raw, e);
            None
        }
    }
}

/// Profile counters; everything but bookmarks is a randomized placeholder
pub fn profile_stats<R: Rng + ?Sized>(bookmarks: usize, rng: &mut R) -> ProfileStats {
    ProfileStats {
        bookmarks,
        visited: rng.gen_range(VISITED_RANGE),
        days_joined: rng.gen_range(DAYS_JOINED_RANGE),
        trips: rng.gen_range(TRIPS_RANGE),
    }
}
