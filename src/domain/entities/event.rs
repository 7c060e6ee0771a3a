//! Event entity and the upcoming/past classification.

use chrono::{DateTime, Utc};
use std::fmt;

/// A webinar, workshop or meetup.
///
/// Whether an event is upcoming is never stored: it is derived from
/// `event_date` and the time of evaluation, see [`Event::is_upcoming_at`].
#[derive(Debug, Clone)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub event_date: DateTime<Utc>,
    /// Physical address or a link to the virtual venue.
    pub location: String,
    pub details: String,
    /// Path of the promotional image relative to the media directory.
    pub image: Option<String>,
}

impl Event {
    /// Creates a new Event instance.
    pub fn new(
        id: i64,
        title: String,
        event_date: DateTime<Utc>,
        location: String,
        details: String,
        image: Option<String>,
    ) -> Self {
        Self {
            id,
            title,
            event_date,
            location,
            details,
            image,
        }
    }

    /// Returns true if the event starts strictly after `now`.
    pub fn is_upcoming_at(&self, now: DateTime<Utc>) -> bool {
        self.event_date > now
    }

    /// Classifies the event relative to `now`.
    pub fn status_at(&self, now: DateTime<Utc>) -> EventStatus {
        if self.is_upcoming_at(now) {
            EventStatus::Upcoming
        } else {
            EventStatus::Past
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.title, self.event_date.format("%Y-%m-%d"))
    }
}

/// Position of an event relative to the evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Upcoming,
    Past,
}

impl EventStatus {
    /// Marker used in listings.
    pub fn label(self) -> &'static str {
        match self {
            EventStatus::Upcoming => "✓ Upcoming",
            EventStatus::Past => "✗ Past",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Events split into upcoming and past at a single point in time.
///
/// Every event lands in exactly one of the two lists. Input order is kept, so
/// feeding events sorted by date yields both lists sorted by date.
#[derive(Debug, Clone, Default)]
pub struct EventSchedule {
    pub upcoming: Vec<Event>,
    pub past: Vec<Event>,
}

impl EventSchedule {
    pub fn partition(events: Vec<Event>, now: DateTime<Utc>) -> Self {
        let (upcoming, past) = events.into_iter().partition(|e| e.is_upcoming_at(now));
        Self { upcoming, past }
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.past.is_empty()
    }
}

/// Input data for creating a new event.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub event_date: DateTime<Utc>,
    pub location: String,
    pub details: String,
    pub image: Option<String>,
}

/// Partial update for an existing event.
///
/// `None` fields are left unchanged. `image: Some(None)` removes the image.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub details: Option<String>,
    pub image: Option<Option<String>>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.event_date.is_none()
            && self.location.is_none()
            && self.details.is_none()
            && self.image.is_none()
    }
}
