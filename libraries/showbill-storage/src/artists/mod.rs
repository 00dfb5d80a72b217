use chrono::Utc;
use showbill_core::{error::Result, types::*};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

fn decode_genres(raw: &str) -> Result<Vec<String>> {
    Ok(serde_json::from_str(raw)?)
}

fn encode_genres(genres: &[String]) -> Result<String> {
    Ok(serde_json::to_string(genres)?)
}

fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

fn artist_from_row(row: &SqliteRow) -> Result<Artist> {
    Ok(Artist {
        id: row.get("id"),
        name: row.get("name"),
        city: row.get("city"),
        state: row.get("state"),
        phone: row.get("phone"),
        genres: decode_genres(&row.get::<String, _>("genres"))?,
        image_link: row.get("image_link"),
        facebook_link: row.get("facebook_link"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<ArtistListing>> {
    let rows = sqlx::query(
        "SELECT id, name
         FROM artists
         ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| ArtistListing {
            id: row.get("id"),
            name: row.get("name"),
        })
        .collect())
}

pub async fn get_by_id(pool: &SqlitePool, id: ArtistId) -> Result<Option<Artist>> {
    let row = sqlx::query(
        "SELECT id, name, city, state, phone, genres, image_link, facebook_link,
                created_at, updated_at
         FROM artists
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(|row| artist_from_row(&row)).transpose()
}

/// Get an artist with their shows partitioned into past and upcoming
///
/// A show starting exactly now lands in `past_shows`.
pub async fn get_detail(pool: &SqlitePool, id: ArtistId) -> Result<ArtistDetail> {
    let artist = get_by_id(pool, id)
        .await?
        .ok_or_else(|| showbill_core::ShowbillError::not_found("Artist", id))?;

    let rows = sqlx::query(
        "SELECT s.id, s.artist_id, s.venue_id, s.start_date, s.created_at, s.updated_at,
                v.name AS venue_name, v.image_link AS venue_image_link
         FROM shows s
         INNER JOIN venues v ON s.venue_id = v.id
         WHERE s.artist_id = ?
         ORDER BY s.start_date",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    let now = Utc::now();
    let mut past_shows = Vec::new();
    let mut upcoming_shows = Vec::new();

    for row in rows {
        let show = Show {
            id: row.get("id"),
            artist_id: row.get("artist_id"),
            venue_id: row.get("venue_id"),
            start_date: chrono::DateTime::from_timestamp(row.get::<i64, _>("start_date"), 0)
                .ok_or_else(|| showbill_core::ShowbillError::storage("Invalid timestamp"))?,
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        };

        let entry = ShowWithVenue {
            venue_id: show.venue_id,
            venue_name: row.get("venue_name"),
            venue_image_link: row.get("venue_image_link"),
            start_time: show.start_date.to_rfc3339(),
        };

        if show.is_upcoming(now) {
            upcoming_shows.push(entry);
        } else {
            past_shows.push(entry);
        }
    }

    let past_shows_count = past_shows.len();
    let upcoming_shows_count = upcoming_shows.len();

    Ok(ArtistDetail {
        artist,
        past_shows,
        upcoming_shows,
        past_shows_count,
        upcoming_shows_count,
    })
}

/// Search artists by name, case-insensitively, anywhere in the name
///
/// An empty term matches every artist. `%` and `_` in the term match
/// themselves, not as wildcards.
pub async fn search(pool: &SqlitePool, term: &str) -> Result<SearchResults> {
    let search_pattern = like_pattern(term);
    let now = Utc::now().timestamp();

    let rows = sqlx::query(
        "SELECT a.id, a.name,
                (SELECT COUNT(*) FROM shows s
                 WHERE s.artist_id = a.id AND s.start_date > ?) AS num_upcoming_shows
         FROM artists a
         WHERE a.name LIKE ? ESCAPE '\\'
         ORDER BY a.name, a.id",
    )
    .bind(now)
    .bind(&search_pattern)
    .fetch_all(pool)
    .await?;

    let data: Vec<SearchMatch> = rows
        .into_iter()
        .map(|row| SearchMatch {
            id: row.get("id"),
            name: row.get("name"),
            num_upcoming_shows: row.get("num_upcoming_shows"),
        })
        .collect();

    Ok(SearchResults {
        count: data.len(),
        data,
    })
}

pub async fn create(pool: &SqlitePool, artist: CreateArtist) -> Result<Artist> {
    if artist.name.trim().is_empty() {
        return Err(showbill_core::ShowbillError::invalid_input(
            "Artist name is required",
        ));
    }
    if artist.city.trim().is_empty() {
        return Err(showbill_core::ShowbillError::invalid_input(
            "Artist city is required",
        ));
    }
    if artist.state.trim().is_empty() {
        return Err(showbill_core::ShowbillError::invalid_input(
            "Artist state is required",
        ));
    }

    let genres_json = encode_genres(&artist.genres)?;

    let result = sqlx::query(
        "INSERT INTO artists (name, city, state, phone, genres, image_link, facebook_link)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&genres_json)
    .bind(&artist.image_link)
    .bind(&artist.facebook_link)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();

    tracing::debug!("Created artist {}: {}", id, artist.name);

    get_by_id(pool, id).await?.ok_or_else(|| {
        showbill_core::ShowbillError::Storage("Failed to retrieve created artist".to_string())
    })
}

/// Update an artist; `None` fields are left as they are
pub async fn update(pool: &SqlitePool, id: ArtistId, artist: UpdateArtist) -> Result<Artist> {
    if matches!(&artist.name, Some(name) if name.trim().is_empty()) {
        return Err(showbill_core::ShowbillError::invalid_input(
            "Artist name cannot be blank",
        ));
    }
    if matches!(&artist.city, Some(city) if city.trim().is_empty()) {
        return Err(showbill_core::ShowbillError::invalid_input(
            "Artist city cannot be blank",
        ));
    }
    if matches!(&artist.state, Some(state) if state.trim().is_empty()) {
        return Err(showbill_core::ShowbillError::invalid_input(
            "Artist state cannot be blank",
        ));
    }

    let genres_json = match &artist.genres {
        Some(genres) => Some(encode_genres(genres)?),
        None => None,
    };

    let mut query_parts = Vec::new();
    let mut has_updates = false;

    if artist.name.is_some() {
        query_parts.push("name = ?");
        has_updates = true;
    }
    if artist.city.is_some() {
        query_parts.push("city = ?");
        has_updates = true;
    }
    if artist.state.is_some() {
        query_parts.push("state = ?");
        has_updates = true;
    }
    if artist.phone.is_some() {
        query_parts.push("phone = ?");
        has_updates = true;
    }
    if genres_json.is_some() {
        query_parts.push("genres = ?");
        has_updates = true;
    }
    if artist.image_link.is_some() {
        query_parts.push("image_link = ?");
        has_updates = true;
    }
    if artist.facebook_link.is_some() {
        query_parts.push("facebook_link = ?");
        has_updates = true;
    }

    if !has_updates {
        return get_by_id(pool, id)
            .await?
            .ok_or_else(|| showbill_core::ShowbillError::not_found("Artist", id));
    }

    query_parts.push("updated_at = datetime('now')");

    let query_str = format!("UPDATE artists SET {} WHERE id = ?", query_parts.join(", "));

    let mut query = sqlx::query(&query_str);

    if let Some(name) = &artist.name {
        query = query.bind(name);
    }
    if let Some(city) = &artist.city {
        query = query.bind(city);
    }
    if let Some(state) = &artist.state {
        query = query.bind(state);
    }
    if let Some(phone) = &artist.phone {
        query = query.bind(phone);
    }
    if let Some(genres_json) = &genres_json {
        query = query.bind(genres_json);
    }
    if let Some(image_link) = &artist.image_link {
        query = query.bind(image_link);
    }
    if let Some(facebook_link) = &artist.facebook_link {
        query = query.bind(facebook_link);
    }

    query = query.bind(id);

    query.execute(pool).await?;

    tracing::debug!("Updated artist {}", id);

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| showbill_core::ShowbillError::not_found("Artist", id))
}

/// Delete an artist; their shows go with them
pub async fn delete(pool: &SqlitePool, id: ArtistId) -> Result<()> {
    let result = sqlx::query("DELETE FROM artists WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(showbill_core::ShowbillError::not_found("Artist", id));
    }

    tracing::debug!("Deleted artist {} and their shows", id);

    Ok(())
}
