//! PostgreSQL implementation of the testimonial repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use super::like_pattern;
use crate::domain::entities::{NewTestimonial, Rating, Testimonial};
use crate::domain::repositories::{TestimonialFilter, TestimonialRepository};
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct TestimonialRow {
    id: i64,
    name: String,
    company: Option<String>,
    rating: i16,
    comment: String,
    is_approved: bool,
    submitted_at: DateTime<Utc>,
}

impl TryFrom<TestimonialRow> for Testimonial {
    type Error = AppError;

    fn try_from(r: TestimonialRow) -> Result<Self, Self::Error> {
        let rating = Rating::try_from(r.rating).map_err(|e| {
            AppError::internal(
                "Stored testimonial has an invalid rating",
                json!({"id": r.id, "error": e.to_string()}),
            )
        })?;

        Ok(Testimonial::new(
            r.id,
            r.name,
            r.company,
            rating,
            r.comment,
            r.is_approved,
            r.submitted_at,
        ))
    }
}

/// PostgreSQL repository for testimonials.
///
/// Approval is a single `UPDATE ... WHERE id = ANY($1)` statement, so a batch
/// either applies completely or not at all.
pub struct PgTestimonialRepository {
    pool: Arc<PgPool>,
}

impl PgTestimonialRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TestimonialRepository for PgTestimonialRepository {
    async fn create(&self, new_testimonial: NewTestimonial) -> Result<Testimonial, AppError> {
        let row = sqlx::query_as::<_, TestimonialRow>(
            r#"
            INSERT INTO testimonials (name, company, rating, comment)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, company, rating, comment, is_approved, submitted_at
            "#,
        )
        .bind(new_testimonial.name)
        .bind(new_testimonial.company)
        .bind(i16::from(new_testimonial.rating))
        .bind(new_testimonial.comment)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Testimonial>, AppError> {
        let row = sqlx::query_as::<_, TestimonialRow>(
            r#"
            SELECT id, name, company, rating, comment, is_approved, submitted_at
            FROM testimonials
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Testimonial::try_from).transpose()
    }

    async fn list_approved(&self, limit: i64) -> Result<Vec<Testimonial>, AppError> {
        let rows = sqlx::query_as::<_, TestimonialRow>(
            r#"
            SELECT id, name, company, rating, comment, is_approved, submitted_at
            FROM testimonials
            WHERE is_approved = TRUE
            ORDER BY submitted_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(Testimonial::try_from).collect()
    }

    async fn search(&self, filter: TestimonialFilter) -> Result<Vec<Testimonial>, AppError> {
        let rows = sqlx::query_as::<_, TestimonialRow>(
            r#"
            SELECT id, name, company, rating, comment, is_approved, submitted_at
            FROM testimonials
            WHERE ($1::TEXT IS NULL OR name ILIKE $1 OR company ILIKE $1 OR comment ILIKE $1)
              AND ($2::BOOLEAN IS NULL OR is_approved = $2)
              AND ($3::SMALLINT IS NULL OR rating = $3)
              AND ($4::TIMESTAMPTZ IS NULL OR submitted_at >= $4)
              AND ($5::TIMESTAMPTZ IS NULL OR submitted_at < $5)
            ORDER BY submitted_at DESC, id DESC
            "#,
        )
        .bind(like_pattern(filter.search.as_deref()))
        .bind(filter.is_approved)
        .bind(filter.rating.map(i16::from))
        .bind(filter.submitted_since)
        .bind(filter.submitted_before)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(Testimonial::try_from).collect()
    }

    async fn approve_many(&self, ids: &[i64]) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE testimonials SET is_approved = TRUE
            WHERE id = ANY($1) AND is_approved = FALSE
            "#,
        )
        .bind(ids)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_many(&self, ids: &[i64]) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = ANY($1)")
            .bind(ids)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
