use crate::{artists, shows, venues};
use async_trait::async_trait;
use showbill_core::{error::Result, storage::StorageContext, types::*};
use sqlx::SqlitePool;

/// Storage context backed by `SQLite`
pub struct SqliteStorageContext {
    pool: SqlitePool,
}

impl SqliteStorageContext {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl StorageContext for SqliteStorageContext {
    // Venues
    async fn get_venues_grouped_by_location(&self) -> Result<Vec<LocationGroup>> {
        venues::get_grouped_by_location(&self.pool).await
    }

    async fn get_venue_by_id(&self, id: VenueId) -> Result<Option<Venue>> {
        venues::get_by_id(&self.pool, id).await
    }

    async fn get_venue_detail(&self, id: VenueId) -> Result<VenueDetail> {
        venues::get_detail(&self.pool, id).await
    }

    async fn search_venues(&self, term: &str) -> Result<SearchResults> {
        venues::search(&self.pool, term).await
    }

    async fn create_venue(&self, venue: CreateVenue) -> Result<Venue> {
        venues::create(&self.pool, venue).await
    }

    async fn update_venue(&self, id: VenueId, venue: UpdateVenue) -> Result<Venue> {
        venues::update(&self.pool, id, venue).await
    }

    async fn delete_venue(&self, id: VenueId) -> Result<()> {
        venues::delete(&self.pool, id).await
    }

    // Artists
    async fn get_all_artists(&self) -> Result<Vec<ArtistListing>> {
        artists::get_all(&self.pool).await
    }

    async fn get_artist_by_id(&self, id: ArtistId) -> Result<Option<Artist>> {
        artists::get_by_id(&self.pool, id).await
    }

    async fn get_artist_detail(&self, id: ArtistId) -> Result<ArtistDetail> {
        artists::get_detail(&self.pool, id).await
    }

    async fn search_artists(&self, term: &str) -> Result<SearchResults> {
        artists::search(&self.pool, term).await
    }

    async fn create_artist(&self, artist: CreateArtist) -> Result<Artist> {
        artists::create(&self.pool, artist).await
    }

    async fn update_artist(&self, id: ArtistId, artist: UpdateArtist) -> Result<Artist> {
        artists::update(&self.pool, id, artist).await
    }

    async fn delete_artist(&self, id: ArtistId) -> Result<()> {
        artists::delete(&self.pool, id).await
    }

    // Shows
    async fn get_all_shows(&self) -> Result<Vec<ShowListing>> {
        shows::get_all(&self.pool).await
    }

    async fn get_show_by_id(&self, id: ShowId) -> Result<Option<Show>> {
        shows::get_by_id(&self.pool, id).await
    }

    async fn create_show(&self, show: CreateShow) -> Result<Show> {
        shows::create(&self.pool, show).await
    }

    async fn delete_show(&self, id: ShowId) -> Result<()> {
        shows::delete(&self.pool, id).await
    }
}
