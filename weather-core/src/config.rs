use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf, time::Duration};

/// Environment variable holding the upstream API key.
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_CITY: &str = "Tacloban City,Leyte,Visayas";
pub const DEFAULT_UNITS: &str = "metric";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Gateway configuration.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// default_city = "Manila"
/// timeout_secs = 5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Upstream credential. Not validated; an empty key surfaces as an upstream rejection.
    pub api_key: String,

    /// Base URL of the provider, without a trailing endpoint path.
    pub base_url: String,

    /// City used when a request carries no `city` parameter.
    pub default_city: String,

    pub units: String,

    /// Upper bound on a single upstream call.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            default_city: DEFAULT_CITY.to_string(),
            units: DEFAULT_UNITS.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Load config from the default location, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    /// Load config from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Apply environment overrides using the given lookup.
    ///
    /// Production code passes `|k| std::env::var(k).ok()`.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV) {
            self.api_key = key;
        }
        self
    }

    /// Path to the config file inside the platform config directory.
    pub fn config_file_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "weather-gateway")
            .ok_or_else(|| anyhow!("Could not determine configuration directory for this platform"))?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}
