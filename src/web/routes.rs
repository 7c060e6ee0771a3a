//! Public site route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    blog_detail_handler, blog_list_handler, contact_form_handler, contact_submit_handler,
    events_handler, health_handler, home_handler, submit_testimonial_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Public routes, no authentication.
///
/// Paths are registered without a trailing slash; the top-level router trims
/// one from incoming requests, so `/blog/` and `/blog` reach the same handler.
///
/// # Endpoints
///
/// - `GET  /` - Home page
/// - `GET  /blog` - All blog posts
/// - `GET  /blog/{id}` - One blog post
/// - `GET  /events` - Upcoming and past events
/// - `GET  /contact` - Contact form
/// - `POST /contact` - Contact form submission
/// - `POST /submit-testimonial` - Testimonial submission
/// - `GET  /health` - Database health check
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/blog", get(blog_list_handler))
        .route("/blog/{id}", get(blog_detail_handler))
        .route("/events", get(events_handler))
        .route(
            "/contact",
            get(contact_form_handler).post(contact_submit_handler),
        )
        .route("/submit-testimonial", post(submit_testimonial_handler))
        .route("/health", get(health_handler))
}
