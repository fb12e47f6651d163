use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A browseable destination
///
/// `title` doubles as the identity of a destination: favorites and bookmark
/// lookups join on it, so a catalog never holds two records with the same title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub description: Option<String>,
    pub rating: f64,
    /// Opaque image handle resolved by the client
    pub image: String,
    #[serde(default)]
    pub category: Option<Category>,
}

impl Destination {
    pub fn new(title: &str, subtitle: &str, description: &str, rating: f64, image: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            description: Some(description.to_string()),
            rating,
            image: image.to_string(),
            category: None,
        }
    }

    /// Description or empty string when absent
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Rating formatted with one decimal place, e.g. "4.8"
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

/// Destination category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Culture,
    Nature,
    Beaches,
    Heritage,
    Wildlife,
    Scenic,
    Explore,
}

impl Category {
    /// Display label used on card badges
    pub fn label(&self) -> &'static str {
        match self {
            Category::Culture => "Culture",
            Category::Nature => "Nature",
            Category::Beaches => "Beaches",
            Category::Heritage => "Heritage",
            Category::Wildlife => "Wildlife",
            Category::Scenic => "Scenic",
            Category::Explore => "Explore",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category tab selection on the Explore screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Tabs in display order
    pub const TABS: [CategoryFilter; 7] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Culture),
        CategoryFilter::Only(Category::Nature),
        CategoryFilter::Only(Category::Beaches),
        CategoryFilter::Only(Category::Heritage),
        CategoryFilter::Only(Category::Wildlife),
        CategoryFilter::Only(Category::Scenic),
    ];
}

/// Category tab name that is not one of the selectable tabs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}', expected one of: all, culture, nature, beaches, heritage, wildlife, scenic")]
pub struct UnknownCategory(pub String);

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(CategoryFilter::All),
            "culture" => Ok(CategoryFilter::Only(Category::Culture)),
            "nature" => Ok(CategoryFilter::Only(Category::Nature)),
            "beaches" => Ok(CategoryFilter::Only(Category::Beaches)),
            "heritage" => Ok(CategoryFilter::Only(Category::Heritage)),
            "wildlife" => Ok(CategoryFilter::Only(Category::Wildlife)),
            "scenic" => Ok(CategoryFilter::Only(Category::Scenic)),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Set of favorited destination titles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet(BTreeSet<String>);

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.0.contains(title)
    }

    /// Flip membership of `title` and return the new membership.
    /// Titles are not checked against any catalog.
    pub fn toggle(&mut self, title: &str) -> bool {
        if self.0.remove(title) {
            false
        } else {
            self.0.insert(title.to_string());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn titles(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }

    pub fn as_set(&self) -> &BTreeSet<String> {
        &self.0
    }
}

impl From<BTreeSet<String>> for FavoriteSet {
    fn from(set: BTreeSet<String>) -> Self {
        Self(set)
    }
}

impl FromIterator<String> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A destination paired with its relevance score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredDestination {
    #[serde(flatten)]
    pub destination: Destination,
    pub badge: Category,
    pub score: u32,
}

/// Search result ordering mode
///
/// `Ranked` returns every match sorted by relevance (Explore screen);
/// `BestMatch` returns only the single highest scoring item (Home search box).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchMode {
    Ranked,
    BestMatch,
}

/// Relevance scoring weights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelevanceWeights {
    pub title_prefix: u32,
    pub title_contains: u32,
    pub subtitle_contains: u32,
    pub description_contains: u32,
}

impl Default for RelevanceWeights {
    fn default() -> Self {
        Self {
            title_prefix: 5,
            title_contains: 3,
            subtitle_contains: 2,
            description_contains: 1,
        }
    }
}

/// Notification toggles stored alongside the profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub location: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            push: false,
            location: true,
        }
    }
}

/// User profile as displayed on the Profile screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub bio: String,
    pub joined: String,
    #[serde(rename = "avatarUri")]
    pub avatar_uri: Option<String>,
    pub notifications: NotificationSettings,
    /// False after the profile has been cleared and before a new sign-up
    #[serde(rename = "hasAccount")]
    pub has_account: bool,
}

/// Placeholder counters shown on the Profile screen
///
/// Only `bookmarks` has a persisted basis; the rest are randomized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub bookmarks: usize,
    pub visited: u32,
    #[serde(rename = "daysJoined")]
    pub days_joined: u32,
    pub trips: u32,
}

/// Single fact tile on the detail screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailFact {
    pub label: String,
    pub value: String,
}

/// Destination detail view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationDetail {
    pub destination: Destination,
    pub badge: Category,
    #[serde(rename = "ratingLabel")]
    pub rating_label: String,
    pub facts: Vec<DetailFact>,
    #[serde(rename = "shareText")]
    pub share_text: String,
}
