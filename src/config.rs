use std::path::PathBuf;

use color_eyre::eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// YouTube Data API v3 key. The CLI flag and the YOUTUBE_API_KEY
    /// environment variable take precedence over this.
    #[serde(default)]
    api_key: Option<String>,

    #[serde(default = "default_api_base_url")]
    api_base_url: String,

    /// Page size cap for playlist item requests (API maximum is 50).
    /// Like `cache_ttl_seconds`, declared but not consumed yet; the exact
    /// duration walk pins the API maximum instead.
    #[serde(default = "default_max_results_per_page")]
    max_results_per_page: u32,

    /// Declared for a future response cache; nothing consumes it yet.
    #[serde(default = "default_cache_ttl_seconds")]
    cache_ttl_seconds: u64,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_max_results_per_page() -> u32 {
    50
}

fn default_cache_ttl_seconds() -> u64 {
    3600
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: default_api_base_url(),
            max_results_per_page: default_max_results_per_page(),
            cache_ttl_seconds: default_cache_ttl_seconds(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .wrap_err_with(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|path| path.join("playlist-length").join("config.toml"))
    }

    /// Load from the default path, falling back to defaults when no file
    /// exists yet.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path().ok_or(eyre!("No config directory found"))?;

        if config_path.exists() {
            Self::from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Create a default config file, if it doesn't exist
    pub fn create_default() -> Result<()> {
        let config_path = Self::config_path().ok_or(eyre!("No config directory found"))?;
        if config_path.exists() {
            return Err(eyre!(
                "Config file already exists: {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents =
            toml::to_string_pretty(&Self::default()).wrap_err("Failed to serialize config")?;
        std::fs::write(&config_path, contents)
            .wrap_err_with(|| format!("Failed to write {}", config_path.display()))?;
        Ok(())
    }

    pub fn api_key(&self) -> Option<String> {
        self.api_key.clone().filter(|key| !key.is_empty())
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}
