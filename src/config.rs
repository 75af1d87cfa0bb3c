use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::compare::DEFAULT_API_BASE;
use crate::error::{BumpError, Result};

/// File name looked up in the current directory and the user config directory.
pub const CONFIG_FILE_NAME: &str = "gomod-bump.toml";

/// Environment variable overriding [`Config::api_base`].
pub const ENV_API_BASE: &str = "GOMOD_BUMP_API_BASE";

/// Environment variable overriding [`Config::manifest`].
pub const ENV_MANIFEST: &str = "GOMOD_BUMP_MANIFEST";

fn default_module_host() -> String {
    "github.com".to_string()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_manifest() -> String {
    "go.mod".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_check_status() -> bool {
    true
}

/// Represents the complete configuration for gomod-bump.
///
/// Every field is optional in the file; missing ones take the defaults below.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Host prefix of the module path in go.mod
    #[serde(default = "default_module_host")]
    pub module_host: String,

    /// Base URL of the compare REST API
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Manifest file whose staged diff is read
    #[serde(default = "default_manifest")]
    pub manifest: String,

    /// Request timeout in seconds, 0 disables it
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Reject non-2xx compare responses
    #[serde(default = "default_check_status")]
    pub check_status: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            module_host: default_module_host(),
            api_base: default_api_base(),
            manifest: default_manifest(),
            timeout_secs: default_timeout_secs(),
            check_status: default_check_status(),
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// Apply `GOMOD_BUMP_*` environment overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_base) = std::env::var(ENV_API_BASE) {
            if !api_base.is_empty() {
                self.api_base = api_base;
            }
        }
        if let Ok(manifest) = std::env::var(ENV_MANIFEST) {
            if !manifest.is_empty() {
                self.manifest = manifest;
            }
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gomod-bump.toml` in current directory
/// 3. `gomod-bump.toml` in user config directory
/// 4. Default configuration if no file found
///
/// Environment overrides are applied on top of whichever was found.
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);

    let mut config = if let Some(path) = config_path {
        read_config(Path::new(path))?
    } else if local.exists() {
        read_config(&local)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(CONFIG_FILE_NAME);
        if user_path.exists() {
            read_config(&user_path)?
        } else {
            Config::default()
        }
    } else {
        Config::default()
    };

    config.apply_env_overrides();
    Ok(config)
}

fn read_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)
        .map_err(|e| BumpError::config(format!("cannot read '{}': {}", path.display(), e)))?;

    toml::from_str(&text)
        .map_err(|e| BumpError::config(format!("cannot parse '{}': {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.module_host, "github.com");
        assert_eq!(config.api_base, "https://api.github.com");
        assert_eq!(config.manifest, "go.mod");
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
        assert!(config.check_status);
    }

    #[test]
    fn test_zero_timeout_disables() {
        let config = Config {
            timeout_secs: 0,
            ..Config::default()
        };
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("check_status = false\n").unwrap();
        assert!(!config.check_status);
        assert_eq!(config.api_base, "https://api.github.com");
    }
}
