//! Testimonial intake from the home page form.

use axum::{Form, extract::State, response::Response};

use crate::error::AppError;
use crate::state::AppState;
use crate::web::flash::{Notice, redirect_with_notice};
use crate::web::forms::TestimonialForm;

const HOME_PATH: &str = "/";

/// Accepts a testimonial for review.
///
/// # Endpoint
///
/// `POST /submit-testimonial`
///
/// Always redirects home. A valid submission is stored unapproved and
/// acknowledged; an invalid one stores nothing and shows a single error notice
/// without field details.
pub async fn submit_testimonial_handler(
    State(state): State<AppState>,
    Form(form): Form<TestimonialForm>,
) -> Result<Response, AppError> {
    match form.clean() {
        Ok(new_testimonial) => {
            state.testimonial_service.submit(new_testimonial).await?;
            Ok(redirect_with_notice(HOME_PATH, Notice::TestimonialReceived))
        }
        Err(errors) => {
            tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "Testimonial rejected");
            Ok(redirect_with_notice(HOME_PATH, Notice::TestimonialRejected))
        }
    }
}
