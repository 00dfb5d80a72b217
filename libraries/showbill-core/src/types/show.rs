//! Show types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ArtistId, VenueId};

pub type ShowId = i64;

/// A booking of an artist at a venue for a specific start time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Show {
    pub id: ShowId,
    pub artist_id: ArtistId,
    pub venue_id: VenueId,
    pub start_date: DateTime<Utc>,
    pub created_at: String,
    pub updated_at: String,
}

impl Show {
    /// Whether this show starts strictly after `now`
    ///
    /// A show starting exactly at `now` is already underway and counts
    /// as past everywhere shows are partitioned or counted.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.start_date > now
    }
}

/// Data for creating a new show
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShow {
    pub artist_id: ArtistId,
    pub venue_id: VenueId,
    pub start_date: DateTime<Utc>,
}
