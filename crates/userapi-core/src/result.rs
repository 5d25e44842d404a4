//! Result type alias for the user API.

use crate::UserApiError;

/// A specialized `Result` type for user API operations.
pub type UserApiResult<T> = Result<T, UserApiError>;
