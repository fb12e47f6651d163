use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use crate::models::RelevanceWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub catalog: CatalogSettings,
    pub scoring: ScoringSettings,
    pub currency: CurrencySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: None,
        }
    }
}

/// Where preferences live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    #[default]
    File,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    pub path: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: "data/preferences.json".to_string(),
        }
    }
}

/// Catalog source; the built-in list is used when `path` is unset
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScoringSettings {
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_title_prefix_weight")]
    pub title_prefix: u32,
    #[serde(default = "default_title_contains_weight")]
    pub title_contains: u32,
    #[serde(default = "default_subtitle_weight")]
    pub subtitle_contains: u32,
    #[serde(default = "default_description_weight")]
    pub description_contains: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            title_prefix: default_title_prefix_weight(),
            title_contains: default_title_contains_weight(),
            subtitle_contains: default_subtitle_weight(),
            description_contains: default_description_weight(),
        }
    }
}

impl From<&WeightsConfig> for RelevanceWeights {
    fn from(w: &WeightsConfig) -> Self {
        Self {
            title_prefix: w.title_prefix,
            title_contains: w.title_contains,
            subtitle_contains: w.subtitle_contains,
            description_contains: w.description_contains,
        }
    }
}

fn default_title_prefix_weight() -> u32 { 5 }
fn default_title_contains_weight() -> u32 { 3 }
fn default_subtitle_weight() -> u32 { 2 }
fn default_description_weight() -> u32 { 1 }

/// Rate overrides, LKR per unit; the built-in table is used when unset
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CurrencySettings {
    pub rates: Option<BTreeMap<String, f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PEARL__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PEARL__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("PEARL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_platform_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("PEARL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Honour the conventional PORT and PREFERENCES_PATH variables set by
/// hosting platforms
fn apply_platform_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(port) = env::var("PORT") {
        match port.parse::<u16>() {
            Ok(port) => builder = builder.set_override("server.port", i64::from(port))?,
            Err(_) => tracing::warn!("Ignoring invalid PORT value: {}", port),
        }
    }
    if let Ok(path) = env::var("PREFERENCES_PATH") {
        builder = builder.set_override("storage.path", path)?;
    }

    builder.build()
}
