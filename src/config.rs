//! Configuration management for the `TripCost` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TripCostError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `TripCost` application
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TripCostConfig {
    /// Web server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Rate dataset configuration
    #[serde(default)]
    pub dataset: DatasetConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Web server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the HTTP server listens on
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Rate dataset configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the CSV rate dataset
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_server_port() -> u16 {
    8080
}

fn default_dataset_path() -> String {
    "data/data.csv".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl TripCostConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with TRIPCOST_ prefix
        builder = builder.add_source(
            Environment::with_prefix("TRIPCOST")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: TripCostConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tripcost").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(TripCostError::config("Server port cannot be 0").into());
        }

        if self.dataset.path.is_empty() {
            return Err(TripCostError::config("Dataset path cannot be empty").into());
        }

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TripCostError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TripCostError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TripCostConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.dataset.path, "data/data.csv");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_default_config_validates() {
        let config = TripCostConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = TripCostConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_invalid_log_format() {
        let mut config = TripCostConfig::default();
        config.logging.format = "xml".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Invalid log format")
        );
    }

    #[test]
    fn test_config_validation_empty_dataset_path() {
        let mut config = TripCostConfig::default();
        config.dataset.path = String::new();
        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Dataset path cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_zero_port() {
        let mut config = TripCostConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_path_generation() {
        let path = TripCostConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("tripcost"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
