//! Configuration loading.
//!
//! Configuration is loaded from TOML files with the following resolution order:
//! 1. Explicit path (e.g. `--config <path>`)
//! 2. `~/.furrow/config.toml` (user)
//! 3. `/etc/furrow/config.toml` (system)
//! 4. Built-in defaults
//!
//! `FURROW_BACKEND_URL`, when set, replaces `backend.url`. The file is read
//! once; there is no hot reload.
//!
//! ```toml
//! [backend]
//! url = "http://models.farm.local:5000"
//! timeout_secs = 30
//!
//! [cache]
//! ttl_secs = 300
//! max_entries = 10000
//!
//! [fallback]
//! mode = "heuristic"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::backend::{BACKEND_URL_ENV, DEFAULT_BASE_URL};
use crate::cache::{CacheConfig, DEFAULT_TTL};
use crate::estimator::FallbackMode;
use crate::{FurrowError, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub cache: CacheSection,
    #[serde(default)]
    pub fallback: FallbackConfig,
}

/// Model-serving backend connection.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL (default: http://localhost:5000).
    #[serde(default = "default_url")]
    pub url: String,
    /// Per-request timeout in seconds (default: 300, the cache TTL).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TTL.as_secs()
}

/// Prediction cache settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSection {
    /// Freshness window in seconds (default: 300).
    #[serde(default = "default_ttl")]
    pub ttl_secs: u64,
    /// Maximum stored entries (default: 10000).
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl(),
            max_entries: default_max_entries(),
        }
    }
}

fn default_ttl() -> u64 {
    DEFAULT_TTL.as_secs()
}

fn default_max_entries() -> u64 {
    CacheConfig::default().max_entries
}

impl CacheSection {
    pub fn to_cache_config(&self) -> CacheConfig {
        CacheConfig::new()
            .ttl(Duration::from_secs(self.ttl_secs))
            .max_entries(self.max_entries)
    }
}

/// Fallback behaviour when the backend fails.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FallbackConfig {
    #[serde(default)]
    pub mode: FallbackMode,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// An explicit path must exist. Without one, the first existing standard
    /// location is used, or the built-in defaults when there is none.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::from_file(&path)?,
            None => Config::default(),
        };
        config.apply_overrides(std::env::var(BACKEND_URL_ENV).ok());
        Ok(config)
    }

    /// Parse a single TOML file, without environment overrides.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            FurrowError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        Self::parse(&content).map_err(|e| match e {
            FurrowError::Configuration(msg) => {
                FurrowError::Configuration(format!("Failed to parse config file {path:?}: {msg}"))
            }
            other => other,
        })
    }

    /// Parse TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FurrowError::Configuration(e.to_string()))
    }

    /// Apply the backend URL override, ignoring blank values.
    pub fn apply_overrides(&mut self, backend_url: Option<String>) {
        if let Some(url) = backend_url.filter(|u| !u.trim().is_empty()) {
            self.backend.url = url;
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.backend.timeout_secs)
    }

    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(FurrowError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // User config
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".furrow").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        // System config
        let system_config = PathBuf::from("/etc/furrow/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }
}
