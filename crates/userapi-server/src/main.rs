//! # UserAPI Server
//!
//! Main entry point for the user API: loads configuration, opens the
//! SQLite pool, applies the schema, and serves the REST router over
//! HTTPS until a shutdown signal arrives.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info};
use userapi_config::ConfigLoader;
use userapi_core::{UserApiError, UserApiResult};
use userapi_repository::{create_pool, SqliteUserRepository};
use userapi_rest::{create_router, AppState};

mod startup;
mod tls;

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting user API server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> UserApiResult<()> {
    // Load configuration
    let config = ConfigLoader::from_default_location()?.get();
    info!("Environment: {}", config.app.environment);

    // Open the store and apply the schema idempotently
    let db_pool = create_pool(&config.database).await?;
    db_pool.init_schema().await?;

    // Explicit dependency injection: the repository handle is the only
    // shared state the handlers see.
    let repository = Arc::new(SqliteUserRepository::new(db_pool.clone()));
    let state = AppState::new(repository);
    let router = create_router(state, &config.server);

    // Resolve the TLS identity before binding; missing files are fatal
    let tls_settings = tls::TlsSettings::from_server_config(&config.server)?;
    let rustls_config = tls_settings.load().await?;

    let addr: SocketAddr = config
        .server
        .addr()
        .parse()
        .map_err(|e| UserApiError::Configuration(format!("Invalid listen address: {}", e)))?;

    startup::print_startup_info(&config.server);
    info!("Starting HTTPS server on https://{}", addr);

    let handle = axum_server::Handle::new();
    tokio::spawn(shutdown_signal(handle.clone()));

    axum_server::bind_rustls(addr, rustls_config)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .map_err(|e| UserApiError::unknown(format!("HTTPS server error: {}", e)))?;

    db_pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,userapi=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal(handle: axum_server::Handle) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }

    handle.graceful_shutdown(Some(Duration::from_secs(10)));
}
