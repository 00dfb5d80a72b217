/// Storage configuration
use crate::error::Result;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,
}

impl StorageConfig {
    /// Configuration pointing at `database_url` with default pool settings
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: default_max_connections(),
            busy_timeout_secs: default_busy_timeout_secs(),
        }
    }

    /// Open a `SQLite` connection pool using these settings
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or the connection fails
    pub async fn connect(&self) -> Result<SqlitePool> {
        let options = SqliteConnectOptions::from_str(&self.database_url)?
            .create_if_missing(true) // Create database file if it doesn't exist
            .journal_mode(SqliteJournalMode::Wal) // Use WAL mode for better concurrency
            .foreign_keys(true) // Show cascades rely on enforced references
            .busy_timeout(Duration::from_secs(self.busy_timeout_secs));

        let pool = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .connect_with(options)
            .await?;

        tracing::debug!("Opened database pool: {}", self.database_url);

        Ok(pool)
    }
}

// Default values
fn default_database_url() -> String {
    "sqlite://showbill.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_busy_timeout_secs() -> u64 {
    30
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            max_connections: default_max_connections(),
            busy_timeout_secs: default_busy_timeout_secs(),
        }
    }
}
