//! TLS configuration for the HTTPS listener.
//!
//! The listener requires a PEM certificate/key pair; missing or
//! unreadable files are fatal before the port is bound.

use axum_server::tls_rustls::RustlsConfig;
use std::path::Path;
use tracing::info;
use userapi_config::ServerConfig;
use userapi_core::{UserApiError, UserApiResult};

/// Resolved TLS certificate/key paths.
#[derive(Debug, Clone)]
pub struct TlsSettings {
    cert_path: String,
    key_path: String,
}

impl TlsSettings {
    /// Resolves TLS paths from server configuration.
    ///
    /// Fails if either file does not exist, so a misconfigured server
    /// aborts before binding the listener.
    pub fn from_server_config(config: &ServerConfig) -> UserApiResult<Self> {
        let settings = Self::new(&config.tls_cert_path, &config.tls_key_path);
        settings.check_paths()?;
        Ok(settings)
    }

    /// Creates TLS settings with explicit paths.
    pub fn new(cert_path: impl Into<String>, key_path: impl Into<String>) -> Self {
        Self {
            cert_path: cert_path.into(),
            key_path: key_path.into(),
        }
    }

    /// Loads the rustls configuration from the PEM pair.
    pub async fn load(&self) -> UserApiResult<RustlsConfig> {
        let config = RustlsConfig::from_pem_file(&self.cert_path, &self.key_path)
            .await
            .map_err(|e| {
                UserApiError::Configuration(format!(
                    "Failed to load TLS identity from '{}' / '{}': {}",
                    self.cert_path, self.key_path, e
                ))
            })?;

        info!(
            "TLS identity loaded (cert: {}, key: {})",
            self.cert_path, self.key_path
        );
        Ok(config)
    }

    fn check_paths(&self) -> UserApiResult<()> {
        check_file(&self.cert_path, "TLS certificate")?;
        check_file(&self.key_path, "TLS private key")?;
        Ok(())
    }
}

fn check_file(path: &str, description: &str) -> UserApiResult<()> {
    if !Path::new(path).is_file() {
        return Err(UserApiError::Configuration(format!(
            "{} not found at '{}'",
            description, path
        )));
    }
    Ok(())
}
