//! PostgreSQL event repository

use anyhow::Result;
use async_trait::async_trait;
use common::error::DatabaseError;
use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::info;
use uuid::Uuid;

use super::EventRepository;
use crate::models::{Event, EventFilter, NewEvent, UpdateEvent};

/// Event repository backed by PostgreSQL
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new event repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn event_from_row(row: PgRow) -> Event {
    Event {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        date: row.get("event_date"),
        location: row.get("location"),
        event_type: row.get("event_type"),
        organizer_id: row.get("organizer_id"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Escape the LIKE wildcards of a keyword and wrap it for a substring match
fn contains_pattern(keyword: &str) -> String {
    let escaped = keyword
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn create(&self, new_event: &NewEvent) -> Result<Event> {
        info!("Creating event: {}", new_event.title);

        let row = sqlx::query(
            r#"
            INSERT INTO events (title, description, event_date, location, event_type, organizer_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, description, event_date, location, event_type, organizer_id,
                      created_at, updated_at
            "#,
        )
        .bind(&new_event.title)
        .bind(&new_event.description)
        .bind(new_event.date)
        .bind(&new_event.location)
        .bind(&new_event.event_type)
        .bind(new_event.organizer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        Ok(event_from_row(row))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>> {
        info!("Finding event by ID: {}", id);

        let row = sqlx::query(
            r#"
            SELECT id, title, description, event_date, location, event_type, organizer_id,
                   created_at, updated_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        Ok(row.map(event_from_row))
    }

    async fn update(&self, id: Uuid, changes: &UpdateEvent) -> Result<Option<Event>> {
        info!("Updating event: {}", id);

        let row = sqlx::query(
            r#"
            UPDATE events
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                event_date = COALESCE($4, event_date),
                location = COALESCE($5, location),
                event_type = CASE WHEN $6 THEN $7 ELSE event_type END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, description, event_date, location, event_type, organizer_id,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(changes.date)
        .bind(&changes.location)
        .bind(changes.event_type.is_some())
        .bind(changes.event_type.clone().flatten())
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        Ok(row.map(event_from_row))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        info!("Deleting event: {}", id);

        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::from_query)?;

        Ok(result.rows_affected() > 0)
    }

    async fn search(&self, filter: &EventFilter) -> Result<Vec<Event>> {
        info!("Searching events: {:?}", filter);

        let rows = sqlx::query(
            r#"
            SELECT id, title, description, event_date, location, event_type, organizer_id,
                   created_at, updated_at
            FROM events
            WHERE ($1::text IS NULL OR title ILIKE $1 OR description ILIKE $1)
              AND ($2::date IS NULL OR (event_date AT TIME ZONE 'UTC')::date = $2)
              AND ($3::text IS NULL OR location = $3)
              AND ($4::text IS NULL OR event_type = $4)
            ORDER BY created_at, id
            "#,
        )
        .bind(filter.keyword.as_deref().map(contains_pattern))
        .bind(filter.date)
        .bind(&filter.location)
        .bind(&filter.event_type)
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        Ok(rows.into_iter().map(event_from_row).collect())
    }
}
