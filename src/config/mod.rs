//! Configuration system for Trove.
//!
//! One YAML file with a fallback chain:
//! 1. Explicit --config path
//! 2. .trove.yml in the current directory (project config)
//! 3. ~/.config/trove/trove.yml (user config)
//! 4. Defaults

use std::path::PathBuf;

use eyre::Result;

mod global;

pub use self::global::{GlobalConfig, SessionConfig, StoreConfig, UiConfig};

/// Default collection holding tool records.
pub const DEFAULT_COLLECTION: &str = "tools";

/// Default hosted store endpoint.
pub const DEFAULT_BASE_URL: &str = "https://docstore.trove.dev/v1";

/// Load configuration from the standard search paths.
pub fn load_config(explicit_path: Option<&PathBuf>) -> Result<GlobalConfig> {
    GlobalConfig::load(explicit_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_default() {
        // Should succeed with defaults when no config file exists
        let config = load_config(None).unwrap();
        assert_eq!(config.store.collection, DEFAULT_COLLECTION);
    }
}
