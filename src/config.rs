use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Name of the optional config file in the working directory (without extension)
pub const CONFIG_FILE_NAME: &str = "recipe-finder";

/// Prefix for environment overrides, e.g. RECIPE_FINDER__BASE_URL
pub const ENV_PREFIX: &str = "RECIPE_FINDER";

/// Root of TheMealDB v1 JSON API
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct FinderConfig {
    /// Base URL of the recipe API, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds; the HTTP client default applies when unset
    #[serde(default)]
    pub timeout: Option<u64>,
    /// Maximum width and height of the thumbnail in pixels
    #[serde(default = "default_thumbnail_size")]
    pub thumbnail_size: u32,
    /// File name offered by the save prompt
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
    /// Extension appended to saved files that have none
    #[serde(default = "default_export_extension")]
    pub export_extension: String,
    /// Where log output goes
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: None,
            thumbnail_size: default_thumbnail_size(),
            export_file_name: default_export_file_name(),
            export_extension: default_export_extension(),
            log_file: None,
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_thumbnail_size() -> u32 {
    200
}

fn default_export_file_name() -> String {
    "Recipe".to_string()
}

fn default_export_extension() -> String {
    "txt".to_string()
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    /// Log file path, falling back to the system temp directory
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("recipe-finder.log"))
    }

    /// File name the save prompt starts with, e.g. "Recipe.txt"
    pub fn default_export_name(&self) -> String {
        if self.export_extension.is_empty() {
            self.export_file_name.clone()
        } else {
            format!("{}.{}", self.export_file_name, self.export_extension)
        }
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPE_FINDER__ prefix
/// 2. recipe-finder.toml file in current directory
/// 3. Default values
pub fn load_config() -> Result<FinderConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name(CONFIG_FILE_NAME).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
