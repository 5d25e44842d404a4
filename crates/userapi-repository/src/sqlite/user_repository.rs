//! SQLite user repository implementation.

use crate::{traits::UserRepository, DatabasePool};
use async_trait::async_trait;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use userapi_core::{User, UserApiResult};

/// SQLite user repository.
///
/// Holds the shared pool handle; every call is one statement. The id
/// parameter is bound as text and matched against the INTEGER primary
/// key through SQLite's column affinity, so `"5"` matches row 5 and a
/// non-numeric id matches nothing.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: Arc<DatabasePool>,
}

impl SqliteUserRepository {
    /// Creates a new SQLite user repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
            email: row.email,
        }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_all(&self) -> UserApiResult<Vec<User>> {
        debug!("Fetching all users");

        let rows = sqlx::query_as::<_, UserRow>("SELECT id, name, email FROM users")
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> UserApiResult<Option<User>> {
        debug!("Fetching user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>("SELECT id, name, email FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(row.map(User::from))
    }

    async fn insert(&self, name: Option<&str>, email: Option<&str>) -> UserApiResult<i64> {
        debug!("Inserting user: {:?} <{:?}>", name, email);

        let result = sqlx::query("INSERT INTO users (name, email) VALUES (?, ?)")
            .bind(name)
            .bind(email)
            .execute(self.pool.inner())
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update(
        &self,
        id: &str,
        name: Option<&str>,
        email: Option<&str>,
    ) -> UserApiResult<u64> {
        debug!("Updating user {}", id);

        let result = sqlx::query("UPDATE users SET name = ?, email = ? WHERE id = ?")
            .bind(name)
            .bind(email)
            .bind(id)
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &str) -> UserApiResult<u64> {
        debug!("Deleting user {}", id);

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected())
    }
}
