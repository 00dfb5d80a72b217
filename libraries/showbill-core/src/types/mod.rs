mod artist;
mod show;
mod venue;
mod views;

pub use artist::{Artist, ArtistId, CreateArtist, UpdateArtist};
pub use show::{CreateShow, Show, ShowId};
pub use venue::{CreateVenue, UpdateVenue, Venue, VenueId};
pub use views::{
    ArtistDetail, ArtistListing, LocationGroup, SearchMatch, SearchResults, ShowListing,
    ShowWithArtist, ShowWithVenue, VenueDetail, VenueSummary,
};
