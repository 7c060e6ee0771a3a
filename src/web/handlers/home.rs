//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::Response};
use chrono::Utc;

use crate::domain::entities::{BlogPost, Event, Rating, Testimonial};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::flash::Flash;
use crate::web::layout::Layout;

/// Template for the home page.
///
/// Renders `templates/index.html` with:
/// - The most recent blog post
/// - The next upcoming event
/// - Featured approved testimonials and the testimonial submission form
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    pub latest_post: Option<BlogPost>,
    pub next_event: Option<Event>,
    pub testimonials: Vec<Testimonial>,
    pub ratings: Vec<Rating>,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
///
/// Every section is optional: an empty database renders the page with the
/// sections left empty.
pub async fn home_handler(
    State(state): State<AppState>,
    flash: Flash,
) -> Result<Response, AppError> {
    let now = Utc::now();

    let (latest_post, next_event, testimonials) = tokio::try_join!(
        state.blog_service.latest_post(),
        state.event_service.next_upcoming(now),
        state.testimonial_service.featured(),
    )?;

    let page = HomeTemplate {
        layout: Layout::new(flash.notice()),
        latest_post,
        next_event,
        testimonials,
        ratings: Rating::all().collect(),
    };

    Ok(flash.consume(page))
}
