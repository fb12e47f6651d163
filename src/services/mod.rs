// Service exports
pub mod catalog;
pub mod favorites;
pub mod preferences;
pub mod profile;

pub use catalog::{Catalog, CatalogError};
pub use favorites::FavoritesHub;
pub use preferences::{
    keys, FilePreferenceStore, MemoryPreferenceStore, PrefValue, PreferenceEdit, PreferenceError,
    PreferenceStore, Preferences,
};
pub use profile::{profile_stats, ProfileError, ProfileService};
