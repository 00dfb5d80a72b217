use showbill_core::{error::Result, types::*};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

fn show_from_row(row: &SqliteRow) -> Result<Show> {
    Ok(Show {
        id: row.get("id"),
        artist_id: row.get("artist_id"),
        venue_id: row.get("venue_id"),
        start_date: chrono::DateTime::from_timestamp(row.get::<i64, _>("start_date"), 0)
            .ok_or_else(|| showbill_core::ShowbillError::storage("Invalid timestamp"))?,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<ShowListing>> {
    let rows = sqlx::query(
        "SELECT s.id, s.venue_id, s.artist_id, s.start_date,
                v.name AS venue_name,
                a.name AS artist_name, a.image_link AS artist_image_link
         FROM shows s
         INNER JOIN venues v ON s.venue_id = v.id
         INNER JOIN artists a ON s.artist_id = a.id
         ORDER BY s.start_date, s.id",
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| {
            let start_date = chrono::DateTime::from_timestamp(row.get::<i64, _>("start_date"), 0)
                .ok_or_else(|| showbill_core::ShowbillError::storage("Invalid timestamp"))?;

            Ok(ShowListing {
                venue_id: row.get("venue_id"),
                venue_name: row.get("venue_name"),
                artist_id: row.get("artist_id"),
                artist_name: row.get("artist_name"),
                artist_image_link: row.get("artist_image_link"),
                start_time: start_date.to_rfc3339(),
            })
        })
        .collect()
}

pub async fn get_by_id(pool: &SqlitePool, id: ShowId) -> Result<Option<Show>> {
    let row = sqlx::query(
        "SELECT id, artist_id, venue_id, start_date, created_at, updated_at
         FROM shows
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(|row| show_from_row(&row)).transpose()
}

/// Book a show; the artist and venue must both exist
pub async fn create(pool: &SqlitePool, show: CreateShow) -> Result<Show> {
    // Check and insert in one transaction so a concurrent delete cannot
    // slip between them
    let mut tx = pool.begin().await?;

    let artist_exists = sqlx::query("SELECT 1 FROM artists WHERE id = ?")
        .bind(show.artist_id)
        .fetch_optional(&mut *tx)
        .await?
        .is_some();

    if !artist_exists {
        return Err(showbill_core::ShowbillError::invalid_input(format!(
            "Artist {} does not exist",
            show.artist_id
        )));
    }

    let venue_exists = sqlx::query("SELECT 1 FROM venues WHERE id = ?")
        .bind(show.venue_id)
        .fetch_optional(&mut *tx)
        .await?
        .is_some();

    if !venue_exists {
        return Err(showbill_core::ShowbillError::invalid_input(format!(
            "Venue {} does not exist",
            show.venue_id
        )));
    }

    let result = sqlx::query(
        "INSERT INTO shows (artist_id, venue_id, start_date)
         VALUES (?, ?, ?)",
    )
    .bind(show.artist_id)
    .bind(show.venue_id)
    .bind(show.start_date.timestamp())
    .execute(&mut *tx)
    .await?;

    let id = result.last_insert_rowid();

    tx.commit().await?;

    tracing::debug!(
        "Created show {} (artist {} at venue {})",
        id,
        show.artist_id,
        show.venue_id
    );

    get_by_id(pool, id).await?.ok_or_else(|| {
        showbill_core::ShowbillError::Storage("Failed to retrieve created show".to_string())
    })
}

pub async fn delete(pool: &SqlitePool, id: ShowId) -> Result<()> {
    let result = sqlx::query("DELETE FROM shows WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(showbill_core::ShowbillError::not_found("Show", id));
    }

    tracing::debug!("Deleted show {}", id);

    Ok(())
}
