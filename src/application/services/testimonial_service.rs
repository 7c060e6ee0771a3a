//! Testimonial intake and moderation service.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{NewTestimonial, Testimonial};
use crate::domain::repositories::{TestimonialFilter, TestimonialRepository};
use crate::error::AppError;

/// Number of approved testimonials shown on the home page.
pub const FEATURED_TESTIMONIALS: i64 = 6;

/// Service for the testimonial approval workflow.
///
/// Visitors submit testimonials, which are stored unapproved. Staff approve
/// them in batches; only approved testimonials are ever shown publicly.
pub struct TestimonialService<R: TestimonialRepository> {
    repository: Arc<R>,
}

impl<R: TestimonialRepository> TestimonialService<R> {
    /// Creates a new testimonial service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores a validated submission. It stays hidden until approved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    #[tracing::instrument(skip(self, new_testimonial), fields(rating = %new_testimonial.rating))]
    pub async fn submit(&self, new_testimonial: NewTestimonial) -> Result<Testimonial, AppError> {
        let testimonial = self.repository.create(new_testimonial).await?;
        tracing::info!(id = testimonial.id, "Testimonial submitted for review");
        Ok(testimonial)
    }

    /// Returns the approved testimonials featured on the home page, newest first.
    pub async fn featured(&self) -> Result<Vec<Testimonial>, AppError> {
        self.repository.list_approved(FEATURED_TESTIMONIALS).await
    }

    /// Retrieves a single testimonial regardless of approval state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the testimonial does not exist.
    pub async fn get_testimonial(&self, id: i64) -> Result<Testimonial, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Testimonial not found", json!({"id": id})))
    }

    /// Returns testimonials matching the admin search and filters, newest first.
    pub async fn search_testimonials(
        &self,
        filter: TestimonialFilter,
    ) -> Result<Vec<Testimonial>, AppError> {
        self.repository.search(filter).await
    }

    /// Approves every selected testimonial in one batch.
    ///
    /// Returns the number of testimonials that became approved. Selecting an
    /// already approved testimonial again leaves it untouched and does not count.
    #[tracing::instrument(skip(self))]
    pub async fn approve(&self, ids: &[i64]) -> Result<u64, AppError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let approved = self.repository.approve_many(ids).await?;
        tracing::info!(approved, "Testimonials approved");
        Ok(approved)
    }

    /// Deletes the selected testimonials and returns how many were removed.
    pub async fn delete(&self, ids: &[i64]) -> Result<u64, AppError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let deleted = self.repository.delete_many(ids).await?;
        tracing::info!(deleted, "Testimonials deleted");
        Ok(deleted)
    }
}
