use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/sentiview/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("sentiview").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads and validates an explicit config file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Replace the endpoint URL when one was given on the command line.
    pub fn apply_endpoint_override(&mut self, endpoint: Option<String>) {
        if let Some(url) = endpoint {
            self.endpoint.url = url;
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The endpoint is an absolute http or https URL
    /// - The tick rate is non-zero
    /// - At least one toast can be shown
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.endpoint_url()?;

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        if self.ui.max_toasts == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.max_toasts must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Parsed endpoint URL.
    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.endpoint.url).map_err(|e| ConfigError::ValidationError {
            message: format!("Invalid endpoint URL '{}': {}", self.endpoint.url, e),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::ValidationError {
                message: format!(
                    "Endpoint URL '{}' must use http or https, not '{}'",
                    self.endpoint.url, other
                ),
            }),
        }
    }
}
