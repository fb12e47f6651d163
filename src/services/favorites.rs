use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use crate::models::FavoriteSet;
use crate::services::preferences::{keys, PreferenceEdit, PreferenceError, PreferenceStore};

/// Process-wide favorites state
///
/// Holds the one in-memory favorite set every handler reads from. Readers
/// take snapshots or subscribe for changes; toggles update the shared set
/// first and then persist it under `favorites`. A failed write is logged
/// and the in-memory change is kept.
pub struct FavoritesHub {
    store: Arc<dyn PreferenceStore>,
    state: watch::Sender<FavoriteSet>,
    // Serializes writes so an older snapshot never lands after a newer one
    write_lock: Mutex<()>,
}

impl FavoritesHub {
    /// Hydrate the favorite set from the preference store
    pub async fn load(store: Arc<dyn PreferenceStore>) -> Result<Self, PreferenceError> {
        let favorites = read_favorites(store.as_ref()).await?;
        tracing::debug!("Loaded {} favorites", favorites.len());

        let (state, _) = watch::channel(favorites);
        Ok(Self {
            store,
            state,
            write_lock: Mutex::new(()),
        })
    }

    /// Current favorite set
    pub fn snapshot(&self) -> FavoriteSet {
        self.state.borrow().clone()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.state.borrow().contains(title)
    }

    pub fn count(&self) -> usize {
        self.state.borrow().len()
    }

    /// Receive every future change to the favorite set
    pub fn subscribe(&self) -> watch::Receiver<FavoriteSet> {
        self.state.subscribe()
    }

    /// Flip a title's membership and return the new membership
    pub async fn toggle(&self, title: &str) -> bool {
        let mut favorited = false;
        self.state.send_modify(|set| favorited = set.toggle(title));

        tracing::debug!(
            "{} favorite: {}",
            if favorited { "Added" } else { "Removed" },
            title
        );

        self.persist().await;
        favorited
    }

    /// Re-read the set from the store, e.g. after the store was cleared
    pub async fn reload(&self) -> Result<(), PreferenceError> {
        let favorites = read_favorites(self.store.as_ref()).await?;
        self.state.send_replace(favorites);
        Ok(())
    }

    /// Persisted Home "favorites only" selection
    pub async fn home_bookmarks_only(&self) -> bool {
        match self.store.snapshot().await {
            Ok(prefs) => prefs.get_bool(keys::HOME_SELECTED_BOOKMARKS).unwrap_or(false),
            Err(e) => {
                tracing::warn!("Failed to read home bookmark selection: {}", e);
                false
            }
        }
    }

    pub async fn set_home_bookmarks_only(&self, selected: bool) {
        let edit = PreferenceEdit::new().set_bool(keys::HOME_SELECTED_BOOKMARKS, selected);
        if let Err(e) = self.store.edit(edit).await {
            tracing::warn!("Failed to persist home bookmark selection: {}", e);
        }
    }

    async fn persist(&self) {
        let _guard = self.write_lock.lock().await;
        // Latest state, taken under the lock
        let titles = self.snapshot().titles();
        let edit = PreferenceEdit::new().set_string_set(keys::FAVORITES, titles);

        if let Err(e) = self.store.edit(edit).await {
            tracing::warn!("Failed to persist favorites: {}", e);
        }
    }
}

async fn read_favorites(store: &dyn PreferenceStore) -> Result<FavoriteSet, PreferenceError> {
    let prefs = store.snapshot().await?;
    Ok(prefs
        .get_string_set(keys::FAVORITES)
        .cloned()
        .map(FavoriteSet::from)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::preferences::MemoryPreferenceStore;

    async fn create_hub() -> (Arc<MemoryPreferenceStore>, FavoritesHub) {
        let store = Arc::new(MemoryPreferenceStore::new());
        let hub = FavoritesHub::load(store.clone()).await.unwrap();
        (store, hub)
    }

    #[tokio::test]
    async fn test_toggle_persists() {
        let (store, hub) = create_hub().await;

        assert!(hub.toggle("Mirissa Beach").await);
        assert!(hub.contains("Mirissa Beach"));

        let prefs = store.snapshot().await.unwrap();
        assert!(prefs.get_string_set(keys::FAVORITES).unwrap().contains("Mirissa Beach"));

        assert!(!hub.toggle("Mirissa Beach").await);
        let prefs = store.snapshot().await.unwrap();
        assert!(prefs.get_string_set(keys::FAVORITES).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_hydrates_from_store() {
        let store = Arc::new(MemoryPreferenceStore::new());
        store
            .edit(PreferenceEdit::new().set_string_set(keys::FAVORITES, ["Nine Arch Bridge"]))
            .await
            .unwrap();

        let hub = FavoritesHub::load(store).await.unwrap();
        assert_eq!(hub.count(), 1);
        assert!(hub.contains("Nine Arch Bridge"));
    }

    #[tokio::test]
    async fn test_subscribers_see_toggles() {
        let (_, hub) = create_hub().await;
        let mut rx = hub.subscribe();

        hub.toggle("Yala National Park").await;
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().contains("Yala National Park"));
    }

    #[tokio::test]
    async fn test_reload_after_clear() {
        let (store, hub) = create_hub().await;
        hub.toggle("Galle Fort Lighthouse").await;

        store.clear().await.unwrap();
        hub.reload().await.unwrap();
        assert_eq!(hub.count(), 0);
    }

    #[tokio::test]
    async fn test_home_bookmark_flag() {
        let (_, hub) = create_hub().await;
        assert!(!hub.home_bookmarks_only().await);
        hub.set_home_bookmarks_only(true).await;
        assert!(hub.home_bookmarks_only().await);
    }
}
