//! Informational and health endpoints.

use crate::{responses::ApiResult, state::AppState};
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

/// Root informational response.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    /// Greeting line.
    pub info: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Creates the informational router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
}

/// Root endpoint: a greeting that doubles as a store liveness probe.
///
/// The List query is executed and its rows discarded; a failing store
/// surfaces here as a 500 before any greeting is returned.
async fn service_info(State(state): State<AppState>) -> ApiResult<InfoResponse> {
    state.users.find_all().await?;

    Ok(Json(InfoResponse {
        info: "Welcome to the user api".to_string(),
    }))
}

/// Process liveness: no store access.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
