//! Repository trait definitions.

use async_trait::async_trait;
use userapi_core::{User, UserApiResult};

/// Storage-access boundary for the `users` table.
///
/// Identifiers arrive as opaque strings taken from the request path and
/// are bound into statements without integer validation; a non-numeric
/// id simply matches no row. `name`/`email` arrive as `Option` so that
/// absent request fields bind SQL NULL and surface as the store's
/// NOT NULL violation rather than an application-level check.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetches all users in the store's natural order.
    async fn find_all(&self) -> UserApiResult<Vec<User>>;

    /// Fetches the user matching `id`, if any.
    async fn find_by_id(&self, id: &str) -> UserApiResult<Option<User>>;

    /// Inserts a new row and returns the store-assigned id.
    async fn insert(&self, name: Option<&str>, email: Option<&str>) -> UserApiResult<i64>;

    /// Overwrites the row matching `id`; returns rows affected.
    async fn update(
        &self,
        id: &str,
        name: Option<&str>,
        email: Option<&str>,
    ) -> UserApiResult<u64>;

    /// Removes the row matching `id`; returns rows affected.
    async fn delete(&self, id: &str) -> UserApiResult<u64>;
}
