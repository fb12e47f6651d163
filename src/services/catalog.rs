use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use crate::models::Destination;

/// Errors that can occur while building a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate destination title: {0}")]
    DuplicateTitle(String),

    #[error("Destination at position {0} has an empty title")]
    EmptyTitle(usize),

    #[error("Unknown destination in {list} list: {title}")]
    UnknownTitle { list: &'static str, title: String },

    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Immutable destination catalog
///
/// Titles are unique; favorites and bookmarks join on them.
#[derive(Debug, Clone)]
pub struct Catalog {
    destinations: Vec<Destination>,
    featured: Vec<Destination>,
    popular: Vec<Destination>,
}

/// On-disk catalog layout
///
/// ```toml
/// featured = ["Mirissa Beach"]
/// popular = ["Yala National Park"]
///
/// [[destinations]]
/// title = "Mirissa Beach"
/// subtitle = "Mirissa"
/// description = "Sweeping sandy bay"
/// rating = 4.7
/// image = "mirissa_beach"
/// ```
#[derive(Debug, Deserialize)]
struct CatalogFile {
    destinations: Vec<Destination>,
    #[serde(default)]
    featured: Option<Vec<String>>,
    #[serde(default)]
    popular: Vec<String>,
}

/// Number of catalog entries featured on Home when no list is given
const DEFAULT_FEATURED_COUNT: usize = 5;

const BUILTIN_POPULAR: [&str; 2] = ["Sigiriya Rock Fortress", "Yala National Park"];

impl Catalog {
    /// Build a catalog, rejecting empty and duplicate titles
    pub fn new(destinations: Vec<Destination>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(destinations.len());
        for (i, d) in destinations.iter().enumerate() {
            if d.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(i));
            }
            if !seen.insert(d.title.as_str()) {
                return Err(CatalogError::DuplicateTitle(d.title.clone()));
            }
        }

        let featured = destinations
            .iter()
            .take(DEFAULT_FEATURED_COUNT)
            .cloned()
            .collect();

        Ok(Self {
            destinations,
            featured,
            popular: Vec::new(),
        })
    }

    /// Select the Home featured and popular lists by title
    pub fn with_sections<S: AsRef<str>>(
        mut self,
        featured: &[S],
        popular: &[S],
    ) -> Result<Self, CatalogError> {
        self.featured = self.resolve("featured", featured)?;
        self.popular = self.resolve("popular", popular)?;
        Ok(self)
    }

    /// Built-in Sri Lanka catalog
    pub fn builtin() -> Self {
        let destinations = builtin_destinations();
        let featured: Vec<String> = destinations
            .iter()
            .take(DEFAULT_FEATURED_COUNT)
            .map(|d| d.title.clone())
            .collect();
        let popular: Vec<String> = BUILTIN_POPULAR.iter().map(|t| t.to_string()).collect();

        Self::new(destinations)
            .and_then(|c| c.with_sections(&featured, &popular))
            .unwrap_or_else(|e| unreachable!("built-in catalog is invalid: {}", e))
    }

    /// Load a catalog from a TOML file
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let file: CatalogFile = toml::from_str(&raw)?;

        let catalog = Self::new(file.destinations)?;
        let featured = match file.featured {
            Some(titles) => titles,
            None => catalog.featured.iter().map(|d| d.title.clone()).collect(),
        };

        tracing::debug!(
            "Loaded catalog from {} ({} destinations)",
            path.as_ref().display(),
            catalog.len()
        );
        catalog.with_sections(&featured, &file.popular)
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Home screen featured list
    pub fn featured(&self) -> &[Destination] {
        &self.featured
    }

    /// Home screen popular grid
    pub fn popular(&self) -> &[Destination] {
        &self.popular
    }

    /// Exact title lookup
    pub fn get(&self, title: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.title == title)
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    fn resolve<S: AsRef<str>>(
        &self,
        list: &'static str,
        titles: &[S],
    ) -> Result<Vec<Destination>, CatalogError> {
        titles
            .iter()
            .map(|t| {
                self.get(t.as_ref())
                    .cloned()
                    .ok_or_else(|| CatalogError::UnknownTitle {
                        list,
                        title: t.as_ref().to_string(),
                    })
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_destinations() -> Vec<Destination> {
    vec![
        Destination::new(
            "Adam's Peak (Sri Pada)",
            "Central Highlands",
            "Iconic pilgrimage mountain famed for the sacred footprint at its summit and stunning sunrise hikes.",
            4.8,
            "adams_peak",
        ),
        Destination::new(
            "Ruwanwelisaya Stupa",
            "Anuradhapura",
            "Ancient white dagoba built by King Dutugemunu—one of the most revered Buddhist stupas in Sri Lanka.",
            4.7,
            "ruwanwelisaya",
        ),
        Destination::new(
            "Nilaveli Beach",
            "Trincomalee District",
            "Palm-fringed shoreline with powdery sands and calm turquoise waters ideal for swimming and snorkelling.",
            4.6,
            "nilaveli_beach",
        ),
        Destination::new(
            "Dambulla Cave Temple",
            "Matale District",
            "UNESCO-listed cave complex filled with centuries-old Buddha statues and vibrant murals carved into the rock.",
            4.9,
            "dambulla_cave_temple",
        ),
        Destination::new(
            "Nine Arch Bridge",
            "Ella, Demodara",
            "Iconic colonial-era viaduct amid lush tea country—famous for the blue train crossing through misty hills.",
            4.8,
            "nine_arch_bridge",
        ),
        Destination::new(
            "Sigiriya Rock Fortress",
            "Matale District",
            "UNESCO-listed ancient rock citadel famed for its frescoes, mirror wall and royal gardens.",
            4.8,
            "sigiriya_rock",
        ),
        Destination::new(
            "Yala National Park",
            "Southern Province",
            "Sri Lanka’s premier wildlife reserve – home to elephants, leopards and lagoons full of birdlife.",
            4.7,
            "yala_jungle",
        ),
        Destination::new(
            "Galle Fort Lighthouse",
            "Galle",
            "Historic coastal fort and lighthouse with colonial lanes, ramparts and sunset views.",
            4.7,
            "galle_lighthouse",
        ),
        Destination::new(
            "Temple of the Sacred Tooth",
            "Kandy",
            "Sacred temple that houses the Relic of the Tooth of the Buddha, a vital pilgrimage site.",
            4.8,
            "temple_of_tooth",
        ),
        Destination::new(
            "Tea Country Plantations",
            "Hill Country",
            "Undulating emerald tea estates, misty hills and scenic factories with tastings.",
            4.6,
            "tea_plantation",
        ),
        Destination::new(
            "Mirissa Beach",
            "Mirissa",
            "A photogenic palm-studded headland and sweeping sandy bay on Sri Lanka's south coast.",
            4.7,
            "mirissa_beach",
        ),
    ]
}
