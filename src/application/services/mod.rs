//! Business logic services for the application layer.

pub mod blog_service;
pub mod event_service;
pub mod inquiry_service;
pub mod testimonial_service;

pub use blog_service::BlogService;
pub use event_service::EventService;
pub use inquiry_service::InquiryService;
pub use testimonial_service::{FEATURED_TESTIMONIALS, TestimonialService};

use crate::error::AppError;
use serde_json::json;

/// Checks a required text field entered by staff.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the value is blank or longer than
/// `max_chars` characters.
pub(crate) fn require_text(
    field: &'static str,
    value: &str,
    max_chars: Option<usize>,
) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::bad_request(
            format!("{field} must not be empty"),
            json!({"field": field}),
        ));
    }

    if let Some(max) = max_chars
        && value.chars().count() > max
    {
        return Err(AppError::bad_request(
            format!("{field} is too long"),
            json!({"field": field, "max": max}),
        ));
    }

    Ok(())
}
