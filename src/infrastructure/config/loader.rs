use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing provider credential: {0}")]
    MissingCredential(&'static str),

    #[error("Invalid base URL for {field}: {value}. Must start with http:// or https://")]
    InvalidBaseUrl { field: &'static str, value: String },

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .bankfeed/config.yaml (project config)
    /// 3. .bankfeed/local.yaml (local overrides, optional)
    /// 4. Environment variables (BANKFEED_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".bankfeed/config.yaml"))
            .merge(Yaml::file(".bankfeed/local.yaml"))
            .merge(Env::prefixed("BANKFEED_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("BANKFEED_").split("__"))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        // Provider credentials are required for every pipeline run
        if config.provider.client_id.is_empty() {
            return Err(ConfigError::MissingCredential("client_id"));
        }
        if config.provider.client_secret.is_empty() {
            return Err(ConfigError::MissingCredential("client_secret"));
        }
        if config.provider.redirect_uri.is_empty() {
            return Err(ConfigError::MissingCredential("redirect_uri"));
        }

        for (field, value) in [
            ("auth_base_url", &config.provider.auth_base_url),
            ("data_api_base_url", &config.provider.data_api_base_url),
        ] {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                return Err(ConfigError::InvalidBaseUrl {
                    field,
                    value: value.clone(),
                });
            }
        }

        if config.http.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.http.timeout_secs));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}
