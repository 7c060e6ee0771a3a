//! Repository trait for contact inquiries.

use crate::domain::entities::{ContactInquiry, InquiryType, NewContactInquiry};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Search and filter options for the inquiry listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InquiryFilter {
    /// Case-insensitive substring matched against name, email, company and message.
    pub search: Option<String>,
    pub inquiry_type: Option<InquiryType>,
    /// Only inquiries submitted at or after this instant.
    pub submitted_since: Option<DateTime<Utc>>,
    /// Only inquiries submitted before this instant.
    pub submitted_before: Option<DateTime<Utc>>,
}

/// Repository interface for contact inquiries.
///
/// Inquiries are append-only: there is no update operation. Listings are
/// ordered newest first.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgContactInquiryRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactInquiryRepository: Send + Sync {
    /// Stores a validated submission. `submitted_at` is set by the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_inquiry: NewContactInquiry) -> Result<ContactInquiry, AppError>;

    /// Finds an inquiry by its identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<ContactInquiry>, AppError>;

    /// Returns inquiries matching `filter`, newest first.
    async fn search(&self, filter: InquiryFilter) -> Result<Vec<ContactInquiry>, AppError>;

    /// Deletes every inquiry whose id is in `ids` in a single statement.
    ///
    /// Returns the number of rows removed. Unknown ids are ignored.
    async fn delete_many(&self, ids: &[i64]) -> Result<u64, AppError>;
}
