//! Repository trait for event data access.

use crate::domain::entities::{Event, EventPatch, NewEvent};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Search and filter options for the event listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    /// Case-insensitive substring matched against title, location and details.
    pub search: Option<String>,
    /// Only events taking place at or after this instant.
    pub date_since: Option<DateTime<Utc>>,
    /// Only events taking place before this instant.
    pub date_before: Option<DateTime<Utc>>,
}

/// Repository interface for events.
///
/// All listings are ordered by event date, earliest first.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgEventRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Stores a new event.
    async fn create(&self, new_event: NewEvent) -> Result<Event, AppError>;

    /// Finds an event by its identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<Event>, AppError>;

    /// Returns the earliest event strictly after `now`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn next_upcoming(&self, now: DateTime<Utc>) -> Result<Option<Event>, AppError>;

    /// Returns every event, earliest first.
    async fn list_all(&self) -> Result<Vec<Event>, AppError>;

    /// Returns events matching `filter`, earliest first.
    async fn search(&self, filter: EventFilter) -> Result<Vec<Event>, AppError>;

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no event has the given id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: EventPatch) -> Result<Event, AppError>;

    /// Deletes an event. Returns `Ok(false)` if it did not exist.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
