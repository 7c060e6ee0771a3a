//! Event service.

use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::Arc;

use crate::application::services::require_text;
use crate::domain::entities::{Event, EventPatch, EventSchedule, NewEvent};
use crate::domain::repositories::{EventFilter, EventRepository};
use crate::error::AppError;

const TITLE_MAX_CHARS: usize = 200;
const LOCATION_MAX_CHARS: usize = 300;

/// Service for the event calendar.
///
/// Methods that depend on the current time take it as an argument, so callers
/// sample the clock once per request and every classification in that request
/// agrees.
pub struct EventService<R: EventRepository> {
    repository: Arc<R>,
}

impl<R: EventRepository> EventService<R> {
    /// Creates a new event service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the next event starting after `now`, if any.
    pub async fn next_upcoming(&self, now: DateTime<Utc>) -> Result<Option<Event>, AppError> {
        self.repository.next_upcoming(now).await
    }

    /// Returns every event split into upcoming and past relative to `now`.
    ///
    /// Both lists are ordered by event date, earliest first.
    pub async fn schedule(&self, now: DateTime<Utc>) -> Result<EventSchedule, AppError> {
        let events = self.repository.list_all().await?;
        Ok(EventSchedule::partition(events, now))
    }

    /// Retrieves a single event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the event does not exist.
    pub async fn get_event(&self, id: i64) -> Result<Event, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found", json!({"id": id})))
    }

    /// Returns events matching the admin search and filters.
    pub async fn search_events(&self, filter: EventFilter) -> Result<Vec<Event>, AppError> {
        self.repository.search(filter).await
    }

    /// Schedules a new event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a text field is blank or too long.
    #[tracing::instrument(skip(self, new_event), fields(title = %new_event.title))]
    pub async fn create_event(&self, new_event: NewEvent) -> Result<Event, AppError> {
        require_text("title", &new_event.title, Some(TITLE_MAX_CHARS))?;
        require_text("location", &new_event.location, Some(LOCATION_MAX_CHARS))?;
        require_text("details", &new_event.details, None)?;

        let event = self.repository.create(new_event).await?;
        tracing::info!(id = event.id, date = %event.event_date, "Event scheduled");
        Ok(event)
    }

    /// Edits an existing event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the patch is empty or a provided field
    /// is invalid.
    /// Returns [`AppError::NotFound`] if the event does not exist.
    pub async fn update_event(&self, id: i64, patch: EventPatch) -> Result<Event, AppError> {
        if patch.is_empty() {
            return Err(AppError::bad_request(
                "Nothing to update",
                json!({"id": id}),
            ));
        }
        if let Some(title) = &patch.title {
            require_text("title", title, Some(TITLE_MAX_CHARS))?;
        }
        if let Some(location) = &patch.location {
            require_text("location", location, Some(LOCATION_MAX_CHARS))?;
        }
        if let Some(details) = &patch.details {
            require_text("details", details, None)?;
        }

        self.repository.update(id, patch).await
    }

    /// Deletes an event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the event does not exist.
    pub async fn delete_event(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::not_found("Event not found", json!({"id": id})));
        }
        tracing::info!(id, "Event deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockEventRepository;
    use chrono::Duration;

    fn create_test_event(id: i64, event_date: DateTime<Utc>) -> Event {
        Event::new(
            id,
            format!("Webinar {id}"),
            event_date,
            "Online".to_string(),
            "Details".to_string(),
            None,
        )
    }

    #[tokio::test]
    async fn test_schedule_partitions_at_now() {
        let now = Utc::now();
        let events = vec![
            create_test_event(1, now - Duration::days(10)),
            create_test_event(2, now),
            create_test_event(3, now + Duration::days(1)),
            create_test_event(4, now + Duration::days(5)),
        ];

        let mut mock_repo = MockEventRepository::new();
        mock_repo
            .expect_list_all()
            .times(1)
            .returning(move || Ok(events.clone()));

        let service = EventService::new(Arc::new(mock_repo));

        let schedule = service.schedule(now).await.unwrap();

        let upcoming: Vec<i64> = schedule.upcoming.iter().map(|e| e.id).collect();
        let past: Vec<i64> = schedule.past.iter().map(|e| e.id).collect();
        assert_eq!(upcoming, vec![3, 4]);
        assert_eq!(past, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_schedule_empty() {
        let mut mock_repo = MockEventRepository::new();
        mock_repo.expect_list_all().returning(|| Ok(Vec::new()));

        let service = EventService::new(Arc::new(mock_repo));

        assert!(service.schedule(Utc::now()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_next_upcoming_passes_now() {
        let now = Utc::now();
        let mut mock_repo = MockEventRepository::new();
        mock_repo
            .expect_next_upcoming()
            .withf(move |t| *t == now)
            .times(1)
            .returning(|t| Ok(Some(create_test_event(7, t + Duration::hours(2)))));

        let service = EventService::new(Arc::new(mock_repo));

        let next = service.next_upcoming(now).await.unwrap().unwrap();
        assert_eq!(next.id, 7);
        assert!(next.is_upcoming_at(now));
    }

    #[tokio::test]
    async fn test_create_event_rejects_long_location() {
        let mock_repo = MockEventRepository::new();
        let service = EventService::new(Arc::new(mock_repo));

        let result = service
            .create_event(NewEvent {
                title: "Summit".to_string(),
                event_date: Utc::now(),
                location: "x".repeat(301),
                details: "Talks".to_string(),
                image: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_get_event_not_found() {
        let mut mock_repo = MockEventRepository::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let service = EventService::new(Arc::new(mock_repo));

        let result = service.get_event(1).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_event() {
        let mut mock_repo = MockEventRepository::new();
        mock_repo
            .expect_delete()
            .withf(|id| *id == 4)
            .times(1)
            .returning(|_| Ok(true));

        let service = EventService::new(Arc::new(mock_repo));

        assert!(service.delete_event(4).await.is_ok());
    }
}
