//! Request and response DTOs for the users API.

use serde::{Deserialize, Serialize};
use userapi_core::User;

/// Incoming `name`/`email` record for Create and Update.
///
/// Fields are deliberately optional: an absent field is forwarded to
/// the store as NULL and surfaces as the store's NOT NULL violation
/// rather than being validated here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Response body for List: `{"users": [User...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
}

/// Response body for Create: the store-assigned id plus the submitted
/// fields, echoed without a re-fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedUserResponse {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Response body for Update: the path id and submitted fields, echoed
/// as given without a re-fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatedUserResponse {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}
