//! API response types and error mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use userapi_core::{NotFoundBody, StoreErrorBody, UserApiError};

/// Application error type for Axum.
///
/// `NotFound` renders as `404 {"message": "User not found"}`; every
/// other variant renders as `500 {"error": <msg>}` with the message
/// carried verbatim.
#[derive(Debug)]
pub struct AppError(pub UserApiError);

impl From<UserApiError> for AppError {
    fn from(err: UserApiError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.0 {
            UserApiError::NotFound => {
                (StatusCode::NOT_FOUND, Json(NotFoundBody::new())).into_response()
            }
            err => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StoreErrorBody::from_error(&err)),
            )
                .into_response(),
        }
    }
}

/// Result type for Axum handlers returning a JSON body.
pub type ApiResult<T> = Result<Json<T>, AppError>;
