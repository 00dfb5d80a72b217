//! Storage trait for the booking directory

use crate::error::Result;
use crate::types::{
    Artist, ArtistDetail, ArtistId, ArtistListing, CreateArtist, CreateShow, CreateVenue,
    LocationGroup, SearchResults, Show, ShowId, ShowListing, UpdateArtist, UpdateVenue, Venue,
    VenueDetail, VenueId,
};
use async_trait::async_trait;

/// Storage context providing access to directory operations
///
/// This trait abstracts storage operations so callers hold one handle
/// and alternate backends (or test doubles) can stand in for `SQLite`.
#[async_trait]
pub trait StorageContext: Send + Sync {
    // ========================================================================
    // Venues
    // ========================================================================

    /// Get all venues grouped by (city, state)
    async fn get_venues_grouped_by_location(&self) -> Result<Vec<LocationGroup>>;

    /// Get venue by ID
    async fn get_venue_by_id(&self, id: VenueId) -> Result<Option<Venue>>;

    /// Get venue detail with its shows partitioned into past and upcoming
    async fn get_venue_detail(&self, id: VenueId) -> Result<VenueDetail>;

    /// Search venues by name (case-insensitive substring match)
    async fn search_venues(&self, term: &str) -> Result<SearchResults>;

    /// Create a new venue
    async fn create_venue(&self, venue: CreateVenue) -> Result<Venue>;

    /// Update a venue (`None` fields are left unchanged)
    async fn update_venue(&self, id: VenueId, venue: UpdateVenue) -> Result<Venue>;

    /// Delete a venue and its shows
    async fn delete_venue(&self, id: VenueId) -> Result<()>;

    // ========================================================================
    // Artists
    // ========================================================================

    /// Get the full artist roster (id and name only)
    async fn get_all_artists(&self) -> Result<Vec<ArtistListing>>;

    /// Get artist by ID
    async fn get_artist_by_id(&self, id: ArtistId) -> Result<Option<Artist>>;

    /// Get artist detail with their shows partitioned into past and upcoming
    async fn get_artist_detail(&self, id: ArtistId) -> Result<ArtistDetail>;

    /// Search artists by name (case-insensitive substring match)
    async fn search_artists(&self, term: &str) -> Result<SearchResults>;

    /// Create a new artist
    async fn create_artist(&self, artist: CreateArtist) -> Result<Artist>;

    /// Update an artist (`None` fields are left unchanged)
    async fn update_artist(&self, id: ArtistId, artist: UpdateArtist) -> Result<Artist>;

    /// Delete an artist and their shows
    async fn delete_artist(&self, id: ArtistId) -> Result<()>;

    // ========================================================================
    // Shows
    // ========================================================================

    /// Get all shows with venue and artist names attached
    async fn get_all_shows(&self) -> Result<Vec<ShowListing>>;

    /// Get show by ID
    async fn get_show_by_id(&self, id: ShowId) -> Result<Option<Show>>;

    /// Create a new show (the artist and venue must already exist)
    async fn create_show(&self, show: CreateShow) -> Result<Show>;

    /// Delete a show
    async fn delete_show(&self, id: ShowId) -> Result<()>;
}
