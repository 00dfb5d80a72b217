use std::collections::BTreeMap;

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

fn venue_from_row(row: &SqliteRow) -> Result<Venue> {
    Ok(Venue {
        id: row.get("id"),
        name: row.get("name"),
        city: row.get("city"),
        state: row.get("state"),
        address: row.get("address"),
        phone: row.get("phone"),
        genres: decode_genres(&row.get::<String, _>("genres"))?,
        image_link: row.get("image_link"),
        facebook_link: row.get("facebook_link"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

/// Get all venues grouped by their exact stored (city, state) pair
///
/// Groups come back in lexicographic (city, state) order; within a group
/// venues are sorted by ascending upcoming-show count.
pub async fn get_grouped_by_location(pool: &SqlitePool) -> Result<Vec<LocationGroup>> {
    let now = Utc::now().timestamp();

    let rows = sqlx::query(
        "SELECT v.id, v.name, v.city, v.state,
                (SELECT COUNT(*) FROM shows s
                 WHERE s.venue_id = v.id AND s.start_date > ?) AS num_upcoming_shows
         FROM venues v
         ORDER BY v.id",
    )
    .bind(now)
    .fetch_all(pool)
    .await?;

    let mut groups: BTreeMap<(String, String), Vec<VenueSummary>> = BTreeMap::new();
    for row in rows {
        let key = (row.get("city"), row.get("state"));
        groups.entry(key).or_default().push(VenueSummary {
            id: row.get("id"),
            name: row.get("name"),
            num_upcoming_shows: row.get("num_upcoming_shows"),
        });
    }

    Ok(groups
        .into_iter()
        .map(|((city, state), mut venues)| {
            // Stable sort: venues with equal counts stay in id order
            venues.sort_by_key(|v| v.num_upcoming_shows);
            LocationGroup {
                city,
                state,
                venues,
            }
        })
        .collect())
}

pub async fn get_by_id(pool: &SqlitePool, id: VenueId) -> Result<Option<Venue>> {
    let row = sqlx::query(
        "SELECT id, name, city, state, address, phone, genres, image_link, facebook_link,
                created_at, updated_at
         FROM venues
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(|row| venue_from_row(&row)).transpose()
}

/// Get a venue with its shows partitioned into past and upcoming
///
/// A show starting exactly now lands in `past_shows`.
pub async fn get_detail(pool: &SqlitePool, id: VenueId) -> Result<VenueDetail> {
    let venue = get_by_id(pool, id)
        .await?
        .ok_or_else(|| showbill_core::ShowbillError::not_found("Venue", id))?;

    let rows = sqlx::query(
        "SELECT s.id, s.artist_id, s.venue_id, s.start_date, s.created_at, s.updated_at,
                a.name AS artist_name, a.image_link AS artist_image_link
         FROM shows s
         INNER JOIN artists a ON s.artist_id = a.id
         WHERE s.venue_id = ?
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

        let entry = ShowWithArtist {
            artist_id: show.artist_id,
            artist_name: row.get("artist_name"),
            artist_image_link: row.get("artist_image_link"),
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

    Ok(VenueDetail {
        venue,
        past_shows,
        upcoming_shows,
        past_shows_count,
        upcoming_shows_count,
    })
}

/// Search venues by name, case-insensitively, anywhere in the name
///
/// An empty term matches every venue. `%` and `_` in the term match
/// themselves, not as wildcards.
pub async fn search(pool: &SqlitePool, term: &str) -> Result<SearchResults> {
    let search_pattern = like_pattern(term);
    let now = Utc::now().timestamp();

    let rows = sqlx::query(
        "SELECT v.id, v.name,
                (SELECT COUNT(*) FROM shows s
                 WHERE s.venue_id = v.id AND s.start_date > ?) AS num_upcoming_shows
         FROM venues v
         WHERE v.name LIKE ? ESCAPE '\\'
         ORDER BY v.name, v.id",
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

pub async fn create(pool: &SqlitePool, venue: CreateVenue) -> Result<Venue> {
    if venue.name.trim().is_empty() {
        return Err(showbill_core::ShowbillError::invalid_input(
            "Venue name is required",
        ));
    }
    if venue.city.trim().is_empty() {
        return Err(showbill_core::ShowbillError::invalid_input(
            "Venue city is required",
        ));
    }
    if venue.state.trim().is_empty() {
        return Err(showbill_core::ShowbillError::invalid_input(
            "Venue state is required",
        ));
    }
    if venue.address.trim().is_empty() {
        return Err(showbill_core::ShowbillError::invalid_input(
            "Venue address is required",
        ));
    }

    let genres_json = encode_genres(&venue.genres)?;

    let result = sqlx::query(
        "INSERT INTO venues (name, city, state, address, phone, genres, image_link, facebook_link)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&venue.name)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&genres_json)
    .bind(&venue.image_link)
    .bind(&venue.facebook_link)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();

    tracing::debug!("Created venue {}: {}", id, venue.name);

    get_by_id(pool, id).await?.ok_or_else(|| {
        showbill_core::ShowbillError::Storage("Failed to retrieve created venue".to_string())
    })
}

/// Update a venue; `None` fields are left as they are
pub async fn update(pool: &SqlitePool, id: VenueId, venue: UpdateVenue) -> Result<Venue> {
    if matches!(&venue.name, Some(name) if name.trim().is_empty()) {
        return Err(showbill_core::ShowbillError::invalid_input(
            "Venue name cannot be blank",
        ));
    }
    if matches!(&venue.city, Some(city) if city.trim().is_empty()) {
        return Err(showbill_core::ShowbillError::invalid_input(
            "Venue city cannot be blank",
        ));
    }
    if matches!(&venue.state, Some(state) if state.trim().is_empty()) {
        return Err(showbill_core::ShowbillError::invalid_input(
            "Venue state cannot be blank",
        ));
    }
    if matches!(&venue.address, Some(address) if address.trim().is_empty()) {
        return Err(showbill_core::ShowbillError::invalid_input(
            "Venue address cannot be blank",
        ));
    }

    let genres_json = match &venue.genres {
        Some(genres) => Some(encode_genres(genres)?),
        None => None,
    };

    let mut query_parts = Vec::new();
    let mut has_updates = false;

    if venue.name.is_some() {
        query_parts.push("name = ?");
        has_updates = true;
    }
    if venue.city.is_some() {
        query_parts.push("city = ?");
        has_updates = true;
    }
    if venue.state.is_some() {
        query_parts.push("state = ?");
        has_updates = true;
    }
    if venue.address.is_some() {
        query_parts.push("address = ?");
        has_updates = true;
    }
    if venue.phone.is_some() {
        query_parts.push("phone = ?");
        has_updates = true;
    }
    if genres_json.is_some() {
        query_parts.push("genres = ?");
        has_updates = true;
    }
    if venue.image_link.is_some() {
        query_parts.push("image_link = ?");
        has_updates = true;
    }
    if venue.facebook_link.is_some() {
        query_parts.push("facebook_link = ?");
        has_updates = true;
    }

    if !has_updates {
        return get_by_id(pool, id)
            .await?
            .ok_or_else(|| showbill_core::ShowbillError::not_found("Venue", id));
    }

    query_parts.push("updated_at = datetime('now')");

    let query_str = format!("UPDATE venues SET {} WHERE id = ?", query_parts.join(", "));

    let mut query = sqlx::query(&query_str);

    if let Some(name) = &venue.name {
        query = query.bind(name);
    }
    if let Some(city) = &venue.city {
        query = query.bind(city);
    }
    if let Some(state) = &venue.state {
        query = query.bind(state);
    }
    if let Some(address) = &venue.address {
        query = query.bind(address);
    }
    if let Some(phone) = &venue.phone {
        query = query.bind(phone);
    }
    if let Some(genres_json) = &genres_json {
        query = query.bind(genres_json);
    }
    if let Some(image_link) = &venue.image_link {
        query = query.bind(image_link);
    }
    if let Some(facebook_link) = &venue.facebook_link {
        query = query.bind(facebook_link);
    }

    query = query.bind(id);

    query.execute(pool).await?;

    tracing::debug!("Updated venue {}", id);

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| showbill_core::ShowbillError::not_found("Venue", id))
}

/// Delete a venue; its shows go with it
pub async fn delete(pool: &SqlitePool, id: VenueId) -> Result<()> {
    let result = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(showbill_core::ShowbillError::not_found("Venue", id));
    }

    tracing::debug!("Deleted venue {} and its shows", id);

    Ok(())
}
