//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! to match production behavior and properly test migrations, constraints, and indexes.
#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use showbill_core::types::*;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = showbill_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        // Run migrations
        showbill_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// A start date `days` days in the future
pub fn days_from_now(days: i64) -> DateTime<Utc> {
    Utc::now() + Duration::days(days)
}

/// A start date `days` days in the past
pub fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days)
}

/// Test fixture: Create a venue with placeholder address and no genres
pub async fn create_test_venue(pool: &SqlitePool, name: &str, city: &str, state: &str) -> Venue {
    showbill_storage::venues::create(
        pool,
        CreateVenue {
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: "123 Main Street".to_string(),
            phone: None,
            genres: Vec::new(),
            image_link: None,
            facebook_link: None,
        },
    )
    .await
    .expect("Failed to create test venue")
}

/// Test fixture: Create an artist with no genres
pub async fn create_test_artist(pool: &SqlitePool, name: &str, city: &str, state: &str) -> Artist {
    showbill_storage::artists::create(
        pool,
        CreateArtist {
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            phone: None,
            genres: Vec::new(),
            image_link: None,
            facebook_link: None,
        },
    )
    .await
    .expect("Failed to create test artist")
}

/// Test fixture: Book a show for an existing artist and venue
pub async fn create_test_show(
    pool: &SqlitePool,
    artist_id: ArtistId,
    venue_id: VenueId,
    start_date: DateTime<Utc>,
) -> Show {
    showbill_storage::shows::create(
        pool,
        CreateShow {
            artist_id,
            venue_id,
            start_date,
        },
    )
    .await
    .expect("Failed to create test show")
}
