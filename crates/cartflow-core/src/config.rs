//! Configuration management for the cartflow suite.
//!
//! Provides TOML-based configuration loaded from a repo-local file with
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main suite configuration.
///
/// This is loaded from `cartflow.toml` in the working directory, or from the
/// path named by the `CARTFLOW_CONFIG` environment variable. If no file
/// exists, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// System-under-test settings
    pub target: TargetConfig,
    /// Browser automation settings
    pub browser: BrowserConfig,
    /// Timeout and polling settings
    pub timeouts: TimeoutConfig,
}

impl SuiteConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - `CARTFLOW_CONFIG` names a file that does not exist
    /// - The file exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let (config_path, explicit) = Self::config_path();

        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            let contents = fs::read_to_string(&config_path)?;
            let config = toml::from_str(&contents)?;
            Ok(config)
        } else if explicit {
            Err(ConfigError::NotFound {
                path: config_path.display().to_string(),
            })
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `CARTFLOW_BASE_URL`: Override the storefront base URL
    /// - `CARTFLOW_HEADLESS`: Override browser headless mode (true/false)
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;

        if let Ok(val) = std::env::var("CARTFLOW_BASE_URL") {
            if !val.is_empty() {
                tracing::debug!("Override base_url from env: {}", val);
                config.target.base_url = val;
            }
        }

        if let Ok(val) = std::env::var("CARTFLOW_HEADLESS") {
            if let Ok(headless) = val.parse() {
                tracing::debug!("Override browser.headless from env: {}", headless);
                config.browser.headless = headless;
            }
        }

        Ok(config)
    }

    /// Save configuration to disk at the resolved config path.
    pub fn save(&self) -> ConfigResult<()> {
        let (config_path, _) = Self::config_path();
        tracing::debug!("Saving config to {}", config_path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    /// Resolve the config file path.
    ///
    /// Returns the path and whether it was explicitly requested via
    /// `CARTFLOW_CONFIG` (an explicit path that is missing is an error,
    /// a missing default path is not).
    fn config_path() -> (PathBuf, bool) {
        match std::env::var("CARTFLOW_CONFIG") {
            Ok(path) if !path.is_empty() => (PathBuf::from(path), true),
            _ => (PathBuf::from("cartflow.toml"), false),
        }
    }
}

/// System-under-test settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Base URL of the storefront; all page paths are joined onto this
    pub base_url: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.saucedemo.com".to_string(),
        }
    }
}

/// Browser automation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Whether to run the browser headless
    pub headless: bool,
    /// Viewport width in pixels
    pub viewport_width: u32,
    /// Viewport height in pixels
    pub viewport_height: u32,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            viewport_width: 1280,
            viewport_height: 720,
        }
    }
}

/// Timeout and polling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Navigation timeout in milliseconds
    pub navigation_ms: u64,
    /// Element wait timeout in milliseconds
    pub wait_ms: u64,
    /// Poll interval for element waits in milliseconds
    pub poll_interval_ms: u64,
    /// Post-load quiescence window in milliseconds
    pub quiescence_ms: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            navigation_ms: 30_000,
            wait_ms: 10_000,
            poll_interval_ms: 100,
            quiescence_ms: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SuiteConfig::default();
        assert_eq!(config.target.base_url, "https://www.saucedemo.com");
        assert!(config.browser.headless);
        assert_eq!(config.browser.viewport_width, 1280);
        assert_eq!(config.timeouts.wait_ms, 10_000);
        assert_eq!(config.timeouts.poll_interval_ms, 100);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: SuiteConfig = toml::from_str(
            r#"
            [target]
            base_url = "http://localhost:3000"

            [browser]
            headless = false
            "#,
        )
        .expect("valid toml");

        assert_eq!(config.target.base_url, "http://localhost:3000");
        assert!(!config.browser.headless);
        assert_eq!(config.browser.viewport_width, 1280);
        assert_eq!(config.timeouts.navigation_ms, 30_000);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = SuiteConfig::default();
        config.target.base_url = "http://127.0.0.1:8080".to_string();
        config.timeouts.wait_ms = 3_000;

        let serialized = toml::to_string_pretty(&config).expect("serialize");
        let restored: SuiteConfig = toml::from_str(&serialized).expect("parse");

        assert_eq!(restored.target.base_url, "http://127.0.0.1:8080");
        assert_eq!(restored.timeouts.wait_ms, 3_000);
    }

    // The only test touching process env, so parallel tests cannot race on it
    #[test]
    fn test_load_from_env_config_path_with_overrides() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cartflow.toml");
        std::fs::write(&path, "[browser]\nheadless = true\n").expect("write config");

        std::env::set_var("CARTFLOW_CONFIG", &path);
        std::env::set_var("CARTFLOW_BASE_URL", "http://127.0.0.1:4444");
        std::env::set_var("CARTFLOW_HEADLESS", "false");

        let config = SuiteConfig::load_with_env().expect("load config");
        assert_eq!(config.target.base_url, "http://127.0.0.1:4444");
        assert!(!config.browser.headless);

        std::env::remove_var("CARTFLOW_CONFIG");
        std::env::remove_var("CARTFLOW_BASE_URL");
        std::env::remove_var("CARTFLOW_HEADLESS");

        // An explicit path that is missing is an error
        std::env::set_var("CARTFLOW_CONFIG", dir.path().join("missing.toml"));
        let result = SuiteConfig::load();
        std::env::remove_var("CARTFLOW_CONFIG");
        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let result: std::result::Result<SuiteConfig, _> = toml::from_str("target = 42");
        assert!(result.is_err());
    }
}
