//! Showbill Core
//!
//! Platform-agnostic core types, traits, and error handling for Showbill.
//!
//! This crate provides the foundational building blocks shared by every
//! storage backend and front end.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Venue`, `Artist`, `Show`, and their create/update inputs
//! - **View Types**: `LocationGroup`, `SearchResults`, `VenueDetail`, etc.
//! - **Core Traits**: `StorageContext`
//! - **Error Handling**: Unified `ShowbillError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use showbill_core::types::CreateVenue;
//!
//! let venue = CreateVenue {
//!     name: "The Musical Hop".to_string(),
//!     city: "San Francisco".to_string(),
//!     state: "CA".to_string(),
//!     address: "1015 Folsom Street".to_string(),
//!     phone: Some("123-123-1234".to_string()),
//!     genres: vec!["Jazz".to_string(), "Folk".to_string()],
//!     image_link: None,
//!     facebook_link: None,
//! };
//!
//! assert_eq!(venue.genres.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{Result, ShowbillError};
pub use storage::StorageContext;

// Export all types
pub use types::{
    // Entities (i64-based IDs)
    Artist, ArtistId, CreateArtist, UpdateArtist,
    Venue, VenueId, CreateVenue, UpdateVenue,
    Show, ShowId, CreateShow,
    // Views
    ArtistDetail, ArtistListing, LocationGroup, SearchMatch, SearchResults, ShowListing,
    ShowWithArtist, ShowWithVenue, VenueDetail, VenueSummary,
};
