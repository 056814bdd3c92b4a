//! Application configuration

use config::{Config, ConfigBuilder, Environment};
use config::builder::DefaultState;
use serde::Deserialize;

use core_kernel::CoreError;
use infra_db::DatabaseConfig;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Database URL
    pub database_url: String,
    /// Log level
    pub log_level: String,
    /// Load the reference data set into an empty database
    pub load_sample_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://sellers.db".to_string(),
            log_level: "info".to_string(),
            load_sample_data: true,
        }
    }
}

impl AppConfig {
    /// Loads configuration from `SALES_`-prefixed environment variables
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_builder(
            Config::builder().add_source(Environment::with_prefix("SALES").try_parsing(true)),
        )
    }

    /// Builds configuration from arbitrary sources, defaulting missing keys
    ///
    /// # Errors
    ///
    /// `CoreError::Configuration` when a source fails or a value has the wrong type
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, CoreError> {
        builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| CoreError::configuration(e.to_string()))
    }

    /// Returns the connection settings for the database layer
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::new(self.database_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.database_url, "sqlite://sellers.db");
        assert_eq!(config.log_level, "info");
        assert!(config.load_sample_data);
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let builder = Config::builder()
            .set_override("log_level", "debug")
            .unwrap();
        let config = AppConfig::from_builder(builder).unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.database_url, "sqlite://sellers.db");
    }

    #[test]
    fn test_overrides_and_database_config() {
        let builder = Config::builder()
            .set_override("database_url", "sqlite::memory:")
            .unwrap()
            .set_override("load_sample_data", false)
            .unwrap();
        let config = AppConfig::from_builder(builder).unwrap();

        assert!(!config.load_sample_data);
        let db = config.database_config();
        assert_eq!(db.url, "sqlite::memory:");
        assert!(db.foreign_keys);
    }

    #[test]
    fn test_malformed_value_is_configuration_error() {
        let builder = Config::builder()
            .set_override("load_sample_data", "sometimes")
            .unwrap();
        let err = AppConfig::from_builder(builder).unwrap_err();

        assert!(matches!(err, CoreError::Configuration(_)));
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
