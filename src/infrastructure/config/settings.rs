//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings.
//! Configuration is loaded from a TOML file; the store URL can be
//! overridden with `COPURCHASE_REDIS_URL` so credentials stay out of the file.
//!
//! # Example
//!
//! ```no_run
//! use copurchase::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use url::Url;

use super::logging::{LoggingConfig, LOG_FORMATS};
use super::recommender::{CatalogConfig, RecommenderConfig};
use crate::adapter::outbound::redis::settings::RedisSettings;
use crate::error::{ConfigError, Result};

/// Environment variable overriding `store.url`.
pub const REDIS_URL_ENV: &str = "COPURCHASE_REDIS_URL";

const STORE_SCHEMES: [&str; 3] = ["redis", "rediss", "unix"];

/// Main application configuration.
///
/// Every section is optional in the file and falls back to its defaults.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Sorted-set store connection.
    #[serde(default)]
    pub store: RedisSettings,

    /// Recommender service settings.
    #[serde(default)]
    pub recommender: RecommenderConfig,

    /// Product catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Applies the `COPURCHASE_REDIS_URL` override before validating.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path` if it exists, otherwise start from defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file is invalid, or if the defaults
    /// combined with the environment fail validation.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load(path);
        }

        let mut config = Self::default();
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(REDIS_URL_ENV) {
            if !url.trim().is_empty() {
                self.store.url = url;
            }
        }
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.store.url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "store.url" }.into());
        }

        let url = Url::parse(&self.store.url).map_err(|e| ConfigError::InvalidValue {
            field: "store.url",
            reason: e.to_string(),
        })?;
        if !STORE_SCHEMES.contains(&url.scheme()) {
            return Err(ConfigError::InvalidValue {
                field: "store.url",
                reason: format!("unsupported scheme '{}'", url.scheme()),
            }
            .into());
        }

        if self.store.connection_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "connection_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("must be one of {}", LOG_FORMATS.join(", ")),
            }
            .into());
        }

        Ok(())
    }

    /// Store URL with any password masked, for display.
    #[must_use]
    pub fn redacted_store_url(&self) -> String {
        match Url::parse(&self.store.url) {
            Ok(mut url) if url.password().is_some() => {
                // Only fails for URLs that cannot carry credentials.
                let _ = url.set_password(Some("****"));
                url.to_string()
            }
            _ => self.store.url.clone(),
        }
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.store.url, "redis://127.0.0.1:6379/0");
        assert_eq!(config.recommender.default_max_results, 6);
        assert!(config.catalog.path.is_none());
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn password_is_redacted() {
        let mut config = Config::default();
        config.store.url = "redis://:hunter2@cache.internal:6379/1".into();
        let shown = config.redacted_store_url();
        assert!(!shown.contains("hunter2"));
        assert!(shown.contains("****"));
    }

    #[test]
    fn url_without_password_is_unchanged() {
        let config = Config::default();
        assert_eq!(config.redacted_store_url(), "redis://127.0.0.1:6379/0");
    }

    #[test]
    fn http_scheme_is_rejected() {
        let mut config = Config::default();
        config.store.url = "http://localhost:6379".into();
        assert!(matches!(
            config.validate(),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "store.url",
                ..
            }))
        ));
    }
}
