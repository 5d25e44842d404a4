//! Application state for Axum handlers.

use std::sync::Arc;
use userapi_repository::UserRepository;

/// Shared application state.
///
/// The repository handle is the only state carried across requests;
/// the service itself holds no user data.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}
