//! Integration tests for the artists vertical slice
//!
//! Tests artist CRUD operations including:
//! - Creating artists with genres and optional links
//! - Roster listing with ids and names only
//! - Partial updates, including genre-only edits
//! - Artist detail with past/upcoming show partitioning
//! - Deletes that take the artist's shows with them

mod test_helpers;

use showbill_core::types::*;
use showbill_core::ShowbillError;
use test_helpers::*;

// ============================================================================
// Create & Get
// ============================================================================

#[tokio::test]
async fn test_create_and_get_artist() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let artist = showbill_storage::artists::create(
        pool,
        CreateArtist {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: Some("326-123-5000".to_string()),
            genres: vec!["Rock n Roll".to_string()],
            image_link: None,
            facebook_link: Some("https://www.facebook.com/GunsNPetals".to_string()),
        },
    )
    .await
    .expect("Failed to create artist");

    assert_eq!(artist.name, "Guns N Petals");
    assert_eq!(artist.city, "San Francisco");
    assert_eq!(artist.state, "CA");
    assert_eq!(artist.genres, vec!["Rock n Roll".to_string()]);

    let retrieved = showbill_storage::artists::get_by_id(pool, artist.id)
        .await
        .expect("Failed to get artist")
        .expect("Artist not found");

    assert_eq!(retrieved.id, artist.id);
    assert_eq!(retrieved.name, "Guns N Petals");
    assert_eq!(retrieved.phone, Some("326-123-5000".to_string()));
}

#[tokio::test]
async fn test_create_artist_requires_name() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let err = showbill_storage::artists::create(
        pool,
        CreateArtist {
            name: String::new(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: None,
            genres: Vec::new(),
            image_link: None,
            facebook_link: None,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ShowbillError::InvalidInput(_)));
}

#[tokio::test]
async fn test_get_all_artists_returns_roster() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let first = create_test_artist(pool, "Guns N Petals", "San Francisco", "CA").await;
    let second = create_test_artist(pool, "Matt Quevedo", "New York", "NY").await;
    let third = create_test_artist(pool, "The Wild Sax Band", "San Francisco", "CA").await;

    let roster = showbill_storage::artists::get_all(pool)
        .await
        .expect("Failed to list artists");

    assert_eq!(roster.len(), 3);

    // Roster comes back in id order with names attached
    assert_eq!(roster[0].id, first.id);
    assert_eq!(roster[0].name, "Guns N Petals");
    assert_eq!(roster[1].id, second.id);
    assert_eq!(roster[1].name, "Matt Quevedo");
    assert_eq!(roster[2].id, third.id);
    assert_eq!(roster[2].name, "The Wild Sax Band");
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_update_artist_genres_only_leaves_other_fields() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let artist = showbill_storage::artists::create(
        pool,
        CreateArtist {
            name: "Matt Quevedo".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            phone: Some("300-400-5000".to_string()),
            genres: vec!["Jazz".to_string()],
            image_link: None,
            facebook_link: None,
        },
    )
    .await
    .unwrap();

    let updated = showbill_storage::artists::update(
        pool,
        artist.id,
        UpdateArtist {
            genres: Some(vec!["Jazz".to_string(), "Classical".to_string()]),
            ..UpdateArtist::default()
        },
    )
    .await
    .expect("Failed to update artist");

    // The genre edit landed on genres, not on any other column
    assert_eq!(
        updated.genres,
        vec!["Jazz".to_string(), "Classical".to_string()]
    );
    assert_eq!(updated.name, "Matt Quevedo");
    assert_eq!(updated.city, "New York");
    assert_eq!(updated.state, "NY");
    assert_eq!(updated.phone, Some("300-400-5000".to_string()));
}

#[tokio::test]
async fn test_update_artist_blank_name_rejected() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let artist = create_test_artist(pool, "Guns N Petals", "San Francisco", "CA").await;

    let err = showbill_storage::artists::update(
        pool,
        artist.id,
        UpdateArtist {
            name: Some("  ".to_string()),
            ..UpdateArtist::default()
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ShowbillError::InvalidInput(_)));
}

#[tokio::test]
async fn test_update_missing_artist_returns_not_found() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let err = showbill_storage::artists::update(
        pool,
        424_242,
        UpdateArtist {
            name: Some("Nobody".to_string()),
            ..UpdateArtist::default()
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ShowbillError::NotFound { .. }));
}

#[tokio::test]
async fn test_update_artist_refreshes_updated_at() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let artist = create_test_artist(pool, "Guns N Petals", "San Francisco", "CA").await;

    // Backdate updated_at so the refresh is observable
    sqlx::query("UPDATE artists SET updated_at = '2000-01-01 00:00:00' WHERE id = ?")
        .bind(artist.id)
        .execute(pool)
        .await
        .expect("Failed to backdate artist");

    let updated = showbill_storage::artists::update(
        pool,
        artist.id,
        UpdateArtist {
            phone: Some("326-123-5001".to_string()),
            ..UpdateArtist::default()
        },
    )
    .await
    .expect("Failed to update artist");

    assert_eq!(updated.phone, Some("326-123-5001".to_string()));
    assert_ne!(updated.updated_at, "2000-01-01 00:00:00");
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_artist_removes_their_shows() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let venue = create_test_venue(pool, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(pool, "Guns N Petals", "San Francisco", "CA").await;
    let other = create_test_artist(pool, "Matt Quevedo", "New York", "NY").await;

    create_test_show(pool, artist.id, venue.id, days_from_now(10)).await;
    create_test_show(pool, other.id, venue.id, days_from_now(20)).await;

    showbill_storage::artists::delete(pool, artist.id)
        .await
        .expect("Failed to delete artist");

    // Only the deleted artist's show disappears
    let shows = showbill_storage::shows::get_all(pool).await.unwrap();
    assert_eq!(shows.len(), 1);
    assert_eq!(shows[0].artist_id, other.id);

    // The venue is untouched
    let venue_still_there = showbill_storage::venues::get_by_id(pool, venue.id)
        .await
        .unwrap();
    assert!(venue_still_there.is_some());
}

#[tokio::test]
async fn test_delete_missing_artist_returns_not_found() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let err = showbill_storage::artists::delete(pool, 9999)
        .await
        .unwrap_err();

    assert!(matches!(err, ShowbillError::NotFound { .. }));
}

// ============================================================================
// Detail
// ============================================================================

#[tokio::test]
async fn test_artist_detail_partitions_shows() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let hop = create_test_venue(pool, "The Musical Hop", "San Francisco", "CA").await;
    let park = create_test_venue(pool, "Park Square Live Music & Coffee", "New York", "NY").await;
    let artist = create_test_artist(pool, "The Wild Sax Band", "San Francisco", "CA").await;

    create_test_show(pool, artist.id, hop.id, days_ago(90)).await;
    create_test_show(pool, artist.id, park.id, days_from_now(7)).await;
    create_test_show(pool, artist.id, park.id, days_from_now(21)).await;

    let detail = showbill_storage::artists::get_detail(pool, artist.id)
        .await
        .expect("Failed to get artist detail");

    assert_eq!(detail.artist.id, artist.id);
    assert_eq!(detail.past_shows_count, 1);
    assert_eq!(detail.upcoming_shows_count, 2);

    assert_eq!(detail.past_shows[0].venue_id, hop.id);
    assert_eq!(detail.past_shows[0].venue_name, "The Musical Hop");

    for show in &detail.upcoming_shows {
        assert_eq!(show.venue_id, park.id);
        assert_eq!(show.venue_name, "Park Square Live Music & Coffee");
    }
}

#[tokio::test]
async fn test_artist_detail_missing_artist_not_found() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let err = showbill_storage::artists::get_detail(pool, 9999)
        .await
        .unwrap_err();

    assert!(matches!(err, ShowbillError::NotFound { .. }));
}
