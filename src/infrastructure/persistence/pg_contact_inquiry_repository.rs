//! PostgreSQL implementation of the contact inquiry repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use super::like_pattern;
use crate::domain::entities::{ContactInquiry, InquiryType, NewContactInquiry};
use crate::domain::repositories::{ContactInquiryRepository, InquiryFilter};
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct InquiryRow {
    id: i64,
    name: String,
    email: String,
    company_name: Option<String>,
    inquiry_type: String,
    message: String,
    submitted_at: DateTime<Utc>,
}

impl TryFrom<InquiryRow> for ContactInquiry {
    type Error = AppError;

    fn try_from(r: InquiryRow) -> Result<Self, Self::Error> {
        let inquiry_type = r.inquiry_type.parse::<InquiryType>().map_err(|e| {
            AppError::internal(
                "Stored inquiry has an unknown type",
                json!({"id": r.id, "error": e.to_string()}),
            )
        })?;

        Ok(ContactInquiry::new(
            r.id,
            r.name,
            r.email,
            r.company_name,
            inquiry_type,
            r.message,
            r.submitted_at,
        ))
    }
}

/// PostgreSQL repository for contact inquiries.
pub struct PgContactInquiryRepository {
    pool: Arc<PgPool>,
}

impl PgContactInquiryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactInquiryRepository for PgContactInquiryRepository {
    async fn create(&self, new_inquiry: NewContactInquiry) -> Result<ContactInquiry, AppError> {
        let row = sqlx::query_as::<_, InquiryRow>(
            r#"
            INSERT INTO contact_inquiries (name, email, company_name, inquiry_type, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, company_name, inquiry_type, message, submitted_at
            "#,
        )
        .bind(new_inquiry.name)
        .bind(new_inquiry.email)
        .bind(new_inquiry.company_name)
        .bind(new_inquiry.inquiry_type.code())
        .bind(new_inquiry.message)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ContactInquiry>, AppError> {
        let row = sqlx::query_as::<_, InquiryRow>(
            r#"
            SELECT id, name, email, company_name, inquiry_type, message, submitted_at
            FROM contact_inquiries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(ContactInquiry::try_from).transpose()
    }

    async fn search(&self, filter: InquiryFilter) -> Result<Vec<ContactInquiry>, AppError> {
        let rows = sqlx::query_as::<_, InquiryRow>(
            r#"
            SELECT id, name, email, company_name, inquiry_type, message, submitted_at
            FROM contact_inquiries
            WHERE ($1::TEXT IS NULL
                   OR name ILIKE $1
                   OR email ILIKE $1
                   OR company_name ILIKE $1
                   OR message ILIKE $1)
              AND ($2::TEXT IS NULL OR inquiry_type = $2)
              AND ($3::TIMESTAMPTZ IS NULL OR submitted_at >= $3)
              AND ($4::TIMESTAMPTZ IS NULL OR submitted_at < $4)
            ORDER BY submitted_at DESC, id DESC
            "#,
        )
        .bind(like_pattern(filter.search.as_deref()))
        .bind(filter.inquiry_type.map(InquiryType::code))
        .bind(filter.submitted_since)
        .bind(filter.submitted_before)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(ContactInquiry::try_from).collect()
    }

    async fn delete_many(&self, ids: &[i64]) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM contact_inquiries WHERE id = ANY($1)")
            .bind(ids)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
