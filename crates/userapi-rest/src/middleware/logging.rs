//! Request logging middleware.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::info;

/// Paths polled by orchestration; kept out of the request log.
const QUIET_PATHS: &[&str] = &["/health"];

/// Logs one line per completed request: method, path, status, and
/// elapsed time, under the `http` target.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    if QUIET_PATHS.contains(&path.as_str()) {
        return response;
    }

    info!(
        target: "http",
        method = %method,
        path = %path,
        status = %response.status().as_u16(),
        duration_ms = %start.elapsed().as_millis(),
        "request handled"
    );

    response
}
