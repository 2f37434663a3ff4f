use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Environment variable consulted for the API key when no other source sets it
pub const LEGACY_API_KEY_VAR: &str = "MEALDB_API_KEY";

/// Settings for talking to TheMealDB and pacing the search experience
#[derive(Debug, Deserialize, Clone)]
pub struct FinderConfig {
    /// API key embedded in the request path ("1" is the public test key)
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL of the API, without the key segment
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds, applied by the HTTP client
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Quiet period before a suggestion lookup fires
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Fold case and whitespace before using a query as a cache key
    #[serde(default)]
    pub normalize_keys: bool,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout: default_timeout(),
            debounce_ms: default_debounce_ms(),
            normalize_keys: false,
        }
    }
}

// Default value functions
fn default_api_key() -> String {
    "1".to_string()
}

fn default_base_url() -> String {
    "https://www.themealdb.com/api/json/v1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_debounce_ms() -> u64 {
    300
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FINDER__ prefix
    /// 2. recipe-finder.toml file in current directory
    /// 3. MEALDB_API_KEY for the key only
    /// 4. Default values
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// The API key to use, falling back to the public key.
    pub fn api_key(&self) -> String {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .unwrap_or_else(default_api_key)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Load configuration from file and environment variables
///
/// Environment variable format: RECIPE_FINDER__BASE_URL, RECIPE_FINDER__DEBOUNCE_MS
pub fn load_config() -> Result<FinderConfig, ConfigError> {
    load_config_from("recipe-finder")
}

/// Same as [`load_config`] with an explicit config file name or path.
///
/// Environment values stay strings until deserialized so keys such as
/// "0123" are kept verbatim.
pub fn load_config_from(file: &str) -> Result<FinderConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name(file).required(false))
        .add_source(
            Environment::with_prefix("RECIPE_FINDER")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    let mut config: FinderConfig = settings.try_deserialize()?;
    if config.api_key.is_none() {
        config.api_key = std::env::var(LEGACY_API_KEY_VAR).ok();
    }
    Ok(config)
}
