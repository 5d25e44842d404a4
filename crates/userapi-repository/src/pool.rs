//! Database connection pool management.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};
use userapi_config::DatabaseConfig;
use userapi_core::{UserApiError, UserApiResult};

/// Idempotent schema for the sole persisted relation.
const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS users
(
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    name  TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE
)";

/// SQLite pool wrapper.
pub struct DatabasePool {
    pool: SqlitePool,
}

impl DatabasePool {
    /// Creates a new database pool from configuration.
    ///
    /// The database file is created if it does not exist.
    pub async fn new(config: &DatabaseConfig) -> UserApiResult<Self> {
        info!("Connecting to SQLite database at {}", config.url);

        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| UserApiError::Configuration(format!("Invalid database URL: {}", e)))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .connect_with(options)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                UserApiError::StoreUnavailable(e.to_string())
            })?;

        info!("SQLite connection pool established");
        Ok(Self { pool })
    }

    /// Returns a reference to the underlying pool.
    #[must_use]
    pub fn inner(&self) -> &SqlitePool {
        &self.pool
    }

    /// Applies the `users` table schema, idempotently.
    pub async fn init_schema(&self) -> UserApiResult<()> {
        info!("Ensuring users table exists");
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    /// Closes the database pool.
    pub async fn close(&self) {
        info!("Closing database connection pool");
        self.pool.close().await;
    }

    /// Wraps a pre-existing pool.
    #[must_use]
    pub fn with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl std::ops::Deref for DatabasePool {
    type Target = SqlitePool;

    fn deref(&self) -> &Self::Target {
        &self.pool
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}

/// Creates a shared database pool.
pub async fn create_pool(config: &DatabaseConfig) -> UserApiResult<Arc<DatabasePool>> {
    let pool = DatabasePool::new(config).await?;
    Ok(Arc::new(pool))
}
