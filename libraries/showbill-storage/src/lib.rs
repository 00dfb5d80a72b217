//! Showbill Storage
//!
//! `SQLite` database layer for the Showbill booking directory.
//!
//! This crate provides persistent storage for venues, artists, and the
//! shows that link them, along with the grouped, searched, and
//! partitioned views the directory pages are built from.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: Each entity owns its own queries and logic
//! - **Explicit Handle**: Callers construct a pool and pass it in; there
//!   is no global connection state
//! - **Commit-or-Rollback**: Multi-statement mutations run in a
//!   transaction and leave no partial state behind
//!
//! # Example
//!
//! ```rust,no_run
//! use showbill_storage::{SqliteStorageContext, create_pool, run_migrations};
//! use showbill_core::storage::StorageContext;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create database connection
//! let pool = create_pool("sqlite://showbill.db").await?;
//! run_migrations(&pool).await?;
//!
//! // Create storage context
//! let storage = SqliteStorageContext::new(pool);
//!
//! // List every venue grouped by city and state
//! let groups = storage.get_venues_grouped_by_location().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod context;
mod error;

// Vertical slices
pub mod artists;
pub mod shows;
pub mod venues;

pub use config::StorageConfig;
pub use context::SqliteStorageContext;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| StorageError::Migration(e.to_string()))
}

/// Create a new `SQLite` pool with default settings
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `sqlite://showbill.db`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    StorageConfig::new(database_url).connect().await
}
