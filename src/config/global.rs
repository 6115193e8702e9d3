//! Global configuration.
//!
//! Loaded from ~/.config/trove/trove.yml or .trove.yml

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

/// Global configuration for Trove.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Remote document store settings.
    pub store: StoreConfig,

    /// TUI settings.
    pub ui: UiConfig,

    /// Session file settings.
    pub session: SessionConfig,
}

impl GlobalConfig {
    /// Load configuration with fallback chain.
    ///
    /// Search order:
    /// 1. Explicit path if provided
    /// 2. .trove.yml in current directory
    /// 3. ~/.config/trove/trove.yml
    /// 4. Defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // Explicit path takes precedence
        if let Some(path) = config_path {
            return Self::load_from_file(path)
                .context(format!("Failed to load config from {}", path.display()));
        }

        // Try project config
        let project_config = PathBuf::from(".trove.yml");
        if project_config.exists() {
            match Self::load_from_file(&project_config) {
                Ok(config) => {
                    log::info!("Loaded config from .trove.yml");
                    return Ok(config);
                }
                Err(e) => {
                    log::warn!("Failed to load .trove.yml: {}", e);
                }
            }
        }

        // Try user config
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("trove").join("trove.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => {
                        log::info!("Loaded config from {}", user_config.display());
                        return Ok(config);
                    }
                    Err(e) => {
                        log::warn!("Failed to load {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // Use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.store.base_url.is_empty() {
            eyre::bail!("store.base-url must not be empty");
        }
        if self.store.collection.is_empty() {
            eyre::bail!("store.collection must not be empty");
        }
        if self.store.timeout_ms == 0 {
            eyre::bail!("store.timeout-ms must be > 0");
        }
        if self.ui.tick_rate_ms == 0 {
            eyre::bail!("ui.tick-rate-ms must be > 0");
        }
        Ok(())
    }
}

/// Remote document store settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base URL of the hosted document service.
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Collection holding tool records.
    pub collection: String,

    /// Timeout per request in milliseconds.
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: crate::config::DEFAULT_BASE_URL.to_string(),
            collection: crate::config::DEFAULT_COLLECTION.to_string(),
            timeout_ms: 30_000,
        }
    }
}

/// TUI settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event poll tick rate in milliseconds.
    #[serde(rename = "tick-rate-ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

/// Session file settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Path of the session file. Defaults to the platform data dir.
    pub file: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { file: None }
    }
}

impl SessionConfig {
    /// Resolve the session file path.
    pub fn path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("trove")
                .join("session.json")
        })
    }
}
