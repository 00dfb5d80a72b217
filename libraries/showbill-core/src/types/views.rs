//! Directory view types
//!
//! Read models for the listing, search, and detail pages. These carry
//! denormalized names and pre-partitioned show lists so callers can
//! render a page without issuing further lookups.

use serde::{Deserialize, Serialize};

use super::artist::{Artist, ArtistId};
use super::venue::{Venue, VenueId};

/// Venue entry within a location group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueSummary {
    pub id: VenueId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// All venues sharing one (city, state) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Minimal artist entry for the roster listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistListing {
    pub id: ArtistId,
    pub name: String,
}

/// A single search hit with its upcoming-show count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMatch {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Search results: the total match count plus the matching entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<SearchMatch>,
}

/// Show as it appears on a venue detail page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowWithArtist {
    pub artist_id: ArtistId,
    pub artist_name: String, // Denormalized
    pub artist_image_link: Option<String>,
    /// Start time rendered as an RFC 3339 string
    pub start_time: String,
}

/// Show as it appears on an artist detail page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowWithVenue {
    pub venue_id: VenueId,
    pub venue_name: String, // Denormalized
    pub venue_image_link: Option<String>,
    /// Start time rendered as an RFC 3339 string
    pub start_time: String,
}

/// Venue detail page: the venue plus its shows split into past and upcoming
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<ShowWithArtist>,
    pub upcoming_shows: Vec<ShowWithArtist>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// Artist detail page: the artist plus their shows split into past and upcoming
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub past_shows: Vec<ShowWithVenue>,
    pub upcoming_shows: Vec<ShowWithVenue>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// Show entry for the full shows listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowListing {
    pub venue_id: VenueId,
    pub venue_name: String, // Denormalized
    pub artist_id: ArtistId,
    pub artist_name: String, // Denormalized
    pub artist_image_link: Option<String>,
    /// Start time rendered as an RFC 3339 string
    pub start_time: String,
}
