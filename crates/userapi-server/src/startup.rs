//! Server startup utilities.

use tracing::info;
use userapi_config::ServerConfig;

/// Prints server startup information.
pub fn print_startup_info(server: &ServerConfig) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("Users API:  https://{}/api/users", server.addr());
    info!("Health:     https://{}/health", server.addr());
    info!("{}", separator);
}
