use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors that can occur with preference storage
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Well-known preference keys
pub mod keys {
    pub const PROFILE_NAME: &str = "profile_name";
    pub const PROFILE_BIO: &str = "profile_bio";
    pub const PREF_EMAIL: &str = "pref_email";
    pub const PREF_PUSH: &str = "pref_push";
    pub const PREF_LOCATION: &str = "pref_location";
    pub const PROFILE_JOINED: &str = "profile_joined";
    pub const PROFILE_AVATAR_URI: &str = "profile_avatar_uri";
    pub const FAVORITES: &str = "favorites";
    pub const HOME_SELECTED_BOOKMARKS: &str = "home_selected_bookmarks";
    pub const SIGNUP_EMAIL: &str = "signup_email";
}

/// A stored preference value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    String(String),
    StringSet(BTreeSet<String>),
}

/// Point-in-time view of every stored preference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preferences(BTreeMap<String, PrefValue>);

impl Preferences {
    pub fn get(&self, key: &str) -> Option<&PrefValue> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// String value, or `None` when absent or of another type
    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(PrefValue::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.0.get(key) {
            Some(PrefValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn get_string_set(&self, key: &str) -> Option<&BTreeSet<String>> {
        match self.0.get(key) {
            Some(PrefValue::StringSet(set)) => Some(set),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn apply(&mut self, edit: PreferenceEdit) {
        for op in edit.ops {
            match op {
                EditOp::Set(key, value) => {
                    self.0.insert(key, value);
                }
                EditOp::SetIfAbsent(key, value) => {
                    self.0.entry(key).or_insert(value);
                }
                EditOp::Remove(key) => {
                    self.0.remove(&key);
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum EditOp {
    Set(String, PrefValue),
    SetIfAbsent(String, PrefValue),
    Remove(String),
}

/// Batch of changes applied all-or-nothing by [`PreferenceStore::edit`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceEdit {
    ops: Vec<EditOp>,
}

impl PreferenceEdit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: PrefValue) -> Self {
        self.ops.push(EditOp::Set(key.to_string(), value));
        self
    }

    pub fn set_string(self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, PrefValue::String(value.into()))
    }

    pub fn set_bool(self, key: &str, value: bool) -> Self {
        self.set(key, PrefValue::Bool(value))
    }

    pub fn set_string_set<I, S>(self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(
            key,
            PrefValue::StringSet(values.into_iter().map(Into::into).collect()),
        )
    }

    /// Write only if the key is not already present
    pub fn set_string_if_absent(mut self, key: &str, value: impl Into<String>) -> Self {
        self.ops.push(EditOp::SetIfAbsent(
            key.to_string(),
            PrefValue::String(value.into()),
        ));
        self
    }

    pub fn remove(mut self, key: &str) -> Self {
        self.ops.push(EditOp::Remove(key.to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }
}

/// Asynchronous key-value preference storage
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read every stored preference
    async fn snapshot(&self) -> Result<Preferences, PreferenceError>;

    /// Apply a batch of changes atomically
    async fn edit(&self, edit: PreferenceEdit) -> Result<(), PreferenceError>;

    /// Remove every stored preference
    async fn clear(&self) -> Result<(), PreferenceError>;
}

/// In-process preference store
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    prefs: RwLock<Preferences>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preferences(prefs: Preferences) -> Self {
        Self {
            prefs: RwLock::new(prefs),
        }
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn snapshot(&self) -> Result<Preferences, PreferenceError> {
        Ok(self.prefs.read().await.clone())
    }

    async fn edit(&self, edit: PreferenceEdit) -> Result<(), PreferenceError> {
        let mut prefs = self.prefs.write().await;
        prefs.apply(edit);
        Ok(())
    }

    async fn clear(&self) -> Result<(), PreferenceError> {
        *self.prefs.write().await = Preferences::default();
        Ok(())
    }
}

/// Preference store persisted as a single JSON document
///
/// Each write goes to a sibling temp file which is then renamed over the
/// target, so a crash mid-write leaves the previous document intact. The
/// in-memory copy only changes after the rename succeeds.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    prefs: RwLock<Preferences>,
}

impl FilePreferenceStore {
    /// Open the store, starting empty when the file does not exist yet
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self, PreferenceError> {
        let path = path.as_ref().to_path_buf();

        let prefs = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Preferences::default(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No preference file at {}, starting empty", path.display());
                Preferences::default()
            }
            Err(e) => return Err(e.into()),
        };

        tracing::debug!("Opened preference store {} ({} keys)", path.display(), prefs.len());

        Ok(Self {
            path,
            prefs: RwLock::new(prefs),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, prefs: &Preferences) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_vec_pretty(prefs)?;
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        tracing::trace!("Persisted {} preference keys", prefs.len());
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn snapshot(&self) -> Result<Preferences, PreferenceError> {
        Ok(self.prefs.read().await.clone())
    }

    async fn edit(&self, edit: PreferenceEdit) -> Result<(), PreferenceError> {
        let mut prefs = self.prefs.write().await;
        let mut next = prefs.clone();
        next.apply(edit);
        self.persist(&next).await?;
        *prefs = next;
        Ok(())
    }

    async fn clear(&self) -> Result<(), PreferenceError> {
        let mut prefs = self.prefs.write().await;
        let empty = Preferences::default();
        self.persist(&empty).await?;
        *prefs = empty;
        Ok(())
    }
}
