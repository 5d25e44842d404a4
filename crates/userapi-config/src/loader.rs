//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use std::path::Path;
use tracing::{debug, info};
use userapi_core::UserApiError;

/// Configuration loader.
#[derive(Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides (not committed)
    /// 4. Environment variables with `USERAPI__` prefix
    pub fn new(config_dir: impl Into<String>) -> Result<Self, UserApiError> {
        let config = Self::load_config(&config_dir.into())?;
        Ok(Self { config })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, UserApiError> {
        Self::new("./config")
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, UserApiError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("USERAPI_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        // 1. Default configuration
        let default_path = format!("{}/default.toml", config_dir);
        if Path::new(&default_path).exists() {
            debug!("Loading default config from: {}", default_path);
            builder = builder.add_source(File::with_name(&default_path).required(false));
        }

        // 2. Environment-specific configuration
        let env_path = format!("{}/{}.toml", config_dir, environment);
        if Path::new(&env_path).exists() {
            debug!("Loading environment config from: {}", env_path);
            builder = builder.add_source(File::with_name(&env_path).required(false));
        }

        // 3. Local overrides (not committed to version control)
        let local_path = format!("{}/local.toml", config_dir);
        if Path::new(&local_path).exists() {
            debug!("Loading local config from: {}", local_path);
            builder = builder.add_source(File::with_name(&local_path).required(false));
        }

        // 4. Environment variable overrides (USERAPI__ prefix)
        builder = builder.add_source(
            Environment::with_prefix("USERAPI")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error)?;

        let app_config: AppConfig = config.try_deserialize().map_err(config_error)?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validates the configuration.
    fn validate_config(config: &AppConfig) -> Result<(), UserApiError> {
        if config.database.url.is_empty() {
            return Err(UserApiError::configuration("Database URL is required"));
        }

        if config.server.tls_cert_path.is_empty() || config.server.tls_key_path.is_empty() {
            return Err(UserApiError::configuration(
                "TLS certificate and key paths are required",
            ));
        }

        Ok(())
    }
}

fn config_error(err: ConfigError) -> UserApiError {
    UserApiError::Configuration(err.to_string())
}
