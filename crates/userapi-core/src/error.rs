//! Error taxonomy at the storage-access boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the user API.
///
/// Store-native errors are classified into this enum at the repository
/// boundary. Only `NotFound` is observable as a distinct HTTP status;
/// every other variant surfaces as a 500 carrying the underlying
/// message verbatim, so the variants can be differentiated later
/// without changing the HTTP contract.
#[derive(Error, Debug)]
pub enum UserApiError {
    /// The keyed row does not exist (zero rows matched or affected).
    #[error("User not found")]
    NotFound,

    /// A store constraint rejected the statement (unique, not-null).
    #[error("{0}")]
    ConstraintViolation(String),

    /// The store could not be reached or the connection failed.
    #[error("{0}")]
    StoreUnavailable(String),

    /// Any other store failure.
    #[error("{0}")]
    Unknown(String),

    /// Invalid or missing configuration; fatal at startup.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl UserApiError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::ConstraintViolation(_)
            | Self::StoreUnavailable(_)
            | Self::Unknown(_)
            | Self::Configuration(_) => 500,
        }
    }

    /// Creates an unknown store error.
    #[must_use]
    pub fn unknown<T: Into<String>>(message: T) -> Self {
        Self::Unknown(message.into())
    }

    /// Creates a store-unavailable error.
    #[must_use]
    pub fn unavailable<T: Into<String>>(message: T) -> Self {
        Self::StoreUnavailable(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for UserApiError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound,
            sqlx::Error::Database(db_err) => {
                // SQLite extended result codes: 2067 = UNIQUE,
                // 1555 = PRIMARY KEY, 1299 = NOT NULL.
                if let Some(code) = db_err.code() {
                    if code == "2067" || code == "1555" || code == "1299" {
                        return Self::ConstraintViolation(db_err.message().to_string());
                    }
                }
                Self::Unknown(db_err.message().to_string())
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::StoreUnavailable(err.to_string())
            }
            _ => Self::Unknown(err.to_string()),
        }
    }
}

/// Serializable body for 500-class responses: `{"error": <msg>}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreErrorBody {
    /// The underlying error's message text, verbatim.
    pub error: String,
}

/// Serializable body for 404 responses: `{"message": "User not found"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotFoundBody {
    /// Fixed human-readable message.
    pub message: String,
}

impl StoreErrorBody {
    /// Builds the body from an error, carrying its message verbatim.
    #[must_use]
    pub fn from_error(error: &UserApiError) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

impl NotFoundBody {
    /// Builds the fixed not-found body.
    #[must_use]
    pub fn new() -> Self {
        Self {
            message: "User not found".to_string(),
        }
    }
}

impl Default for NotFoundBody {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(UserApiError::NotFound.status_code(), 404);
        assert_eq!(
            UserApiError::ConstraintViolation("UNIQUE constraint failed".into()).status_code(),
            500
        );
        assert_eq!(UserApiError::unavailable("pool closed").status_code(), 500);
        assert_eq!(UserApiError::unknown("disk I/O error").status_code(), 500);
        assert_eq!(UserApiError::configuration("missing cert").status_code(), 500);
    }

    #[test]
    fn test_store_variants_display_verbatim() {
        let err = UserApiError::ConstraintViolation(
            "UNIQUE constraint failed: users.email".to_string(),
        );
        assert_eq!(err.to_string(), "UNIQUE constraint failed: users.email");

        let err = UserApiError::unknown("database is locked");
        assert_eq!(err.to_string(), "database is locked");
    }

    #[test]
    fn test_not_found_body_is_fixed() {
        let body = NotFoundBody::new();
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"message": "User not found"}));
    }

    #[test]
    fn test_store_error_body_carries_message() {
        let err = UserApiError::unknown("no such table: users");
        let body = StoreErrorBody::from_error(&err);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"error": "no such table: users"}));
    }
}
