//! Repository trait for testimonials.

use crate::domain::entities::{NewTestimonial, Rating, Testimonial};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Search and filter options for the testimonial listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestimonialFilter {
    /// Case-insensitive substring matched against name, company and comment.
    pub search: Option<String>,
    pub is_approved: Option<bool>,
    pub rating: Option<Rating>,
    /// Only testimonials submitted at or after this instant.
    pub submitted_since: Option<DateTime<Utc>>,
    /// Only testimonials submitted before this instant.
    pub submitted_before: Option<DateTime<Utc>>,
}

/// Repository interface for testimonials.
///
/// Listings are ordered newest first by submission time.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTestimonialRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    /// Stores a validated submission as unapproved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_testimonial: NewTestimonial) -> Result<Testimonial, AppError>;

    /// Finds a testimonial by its identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<Testimonial>, AppError>;

    /// Returns at most `limit` approved testimonials, newest first.
    async fn list_approved(&self, limit: i64) -> Result<Vec<Testimonial>, AppError>;

    /// Returns testimonials matching `filter`, newest first.
    async fn search(&self, filter: TestimonialFilter) -> Result<Vec<Testimonial>, AppError>;

    /// Marks every unapproved testimonial whose id is in `ids` as approved.
    ///
    /// Runs as a single statement. Returns the number of testimonials that
    /// changed state; already approved and unknown ids are not counted.
    async fn approve_many(&self, ids: &[i64]) -> Result<u64, AppError>;

    /// Deletes every testimonial whose id is in `ids`. Returns the number removed.
    async fn delete_many(&self, ids: &[i64]) -> Result<u64, AppError>;
}
