//! User entity.

use serde::{Deserialize, Serialize};

/// A user row as stored in the `users` table and exposed over HTTP.
///
/// The `id` is assigned by the store on insertion and is immutable for
/// the lifetime of the row; `name` and `email` are overwritten in place
/// by updates. Uniqueness of `email` is a store constraint, not an
/// application-level check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier, strictly positive, never reused.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Email address, unique across all users.
    pub email: String,
}

impl User {
    /// Creates a user from its stored fields.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
