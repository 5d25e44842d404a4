//! Common test infrastructure for database integration tests.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use userapi_repository::DatabasePool;

/// In-memory test database wrapper.
///
/// Uses a single-connection pool so the in-memory database survives
/// across statements (each SQLite `:memory:` connection is its own
/// database).
pub struct TestDatabase {
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a fresh in-memory database with the schema applied.
    pub async fn new() -> Self {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .expect("valid in-memory URL");

        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .connect_with(options)
            .await
            .expect("Failed to open in-memory database");

        let pool = Arc::new(DatabasePool::with_pool(pool));
        pool.init_schema().await.expect("Failed to apply schema");

        Self { pool }
    }

    /// Returns the shared pool handle.
    pub fn pool(&self) -> Arc<DatabasePool> {
        self.pool.clone()
    }
}
