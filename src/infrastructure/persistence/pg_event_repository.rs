//! PostgreSQL implementation of the event repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use super::like_pattern;
use crate::domain::entities::{Event, EventPatch, NewEvent};
use crate::domain::repositories::{EventFilter, EventRepository};
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct EventRow {
    id: i64,
    title: String,
    event_date: DateTime<Utc>,
    location: String,
    details: String,
    image: Option<String>,
}

impl From<EventRow> for Event {
    fn from(r: EventRow) -> Self {
        Event::new(r.id, r.title, r.event_date, r.location, r.details, r.image)
    }
}

/// PostgreSQL repository for events.
pub struct PgEventRepository {
    pool: Arc<PgPool>,
}

impl PgEventRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn create(&self, new_event: NewEvent) -> Result<Event, AppError> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            INSERT INTO events (title, event_date, location, details, image)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, event_date, location, details, image
            "#,
        )
        .bind(new_event.title)
        .bind(new_event.event_date)
        .bind(new_event.location)
        .bind(new_event.details)
        .bind(new_event.image)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Event>, AppError> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, title, event_date, location, details, image
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn next_upcoming(&self, now: DateTime<Utc>) -> Result<Option<Event>, AppError> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, title, event_date, location, details, image
            FROM events
            WHERE event_date > $1
            ORDER BY event_date ASC, id ASC
            LIMIT 1
            "#,
        )
        .bind(now)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list_all(&self) -> Result<Vec<Event>, AppError> {
        self.search(EventFilter::default()).await
    }

    async fn search(&self, filter: EventFilter) -> Result<Vec<Event>, AppError> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, title, event_date, location, details, image
            FROM events
            WHERE ($1::TEXT IS NULL OR title ILIKE $1 OR location ILIKE $1 OR details ILIKE $1)
              AND ($2::TIMESTAMPTZ IS NULL OR event_date >= $2)
              AND ($3::TIMESTAMPTZ IS NULL OR event_date < $3)
            ORDER BY event_date ASC, id ASC
            "#,
        )
        .bind(like_pattern(filter.search.as_deref()))
        .bind(filter.date_since)
        .bind(filter.date_before)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, patch: EventPatch) -> Result<Event, AppError> {
        let update_image = patch.image.is_some();
        let new_image = patch.image.flatten();

        let row = sqlx::query_as::<_, EventRow>(
            r#"
            UPDATE events SET
                title      = COALESCE($2::TEXT, title),
                event_date = COALESCE($3::TIMESTAMPTZ, event_date),
                location   = COALESCE($4::TEXT, location),
                details    = COALESCE($5::TEXT, details),
                image      = CASE WHEN $6 THEN $7::TEXT ELSE image END
            WHERE id = $1
            RETURNING id, title, event_date, location, details, image
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.event_date)
        .bind(patch.location)
        .bind(patch.details)
        .bind(update_image)
        .bind(new_image)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Into::into)
            .ok_or_else(|| AppError::not_found("Event not found", json!({"id": id})))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
