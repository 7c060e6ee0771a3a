//! Events page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::Response};
use chrono::Utc;

use crate::domain::entities::Event;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::flash::Flash;
use crate::web::layout::Layout;

/// Template for the events page.
///
/// Both lists are in ascending date order.
#[derive(Template, WebTemplate)]
#[template(path = "events.html")]
pub struct EventsTemplate {
    pub layout: Layout,
    pub upcoming: Vec<Event>,
    pub past: Vec<Event>,
}

/// Renders upcoming and past events.
///
/// # Endpoint
///
/// `GET /events`
///
/// An event dated exactly now is listed as past.
pub async fn events_handler(
    State(state): State<AppState>,
    flash: Flash,
) -> Result<Response, AppError> {
    let schedule = state.event_service.schedule(Utc::now()).await?;

    let page = EventsTemplate {
        layout: Layout::new(flash.notice()),
        upcoming: schedule.upcoming,
        past: schedule.past,
    };

    Ok(flash.consume(page))
}
