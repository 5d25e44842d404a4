//! # UserAPI Repository
//!
//! SQLx-backed data access for the `users` table.
//!
//! ```text
//! REST handlers
//!   ↓  Arc<dyn UserRepository>   (storage-access boundary)
//! SqliteUserRepository           (SQLx / SQLite)
//!   ↓
//! users(id, name, email)
//! ```
//!
//! Every repository operation is a single SQL statement and a single
//! round trip; existence on mutation is inferred from rows affected,
//! never from a preceding read.

pub mod pool;
pub mod sqlite;
pub mod traits;

pub use pool::*;
pub use sqlite::*;
pub use traits::*;
