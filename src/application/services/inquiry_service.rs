//! Contact inquiry service.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{ContactInquiry, NewContactInquiry};
use crate::domain::repositories::{ContactInquiryRepository, InquiryFilter};
use crate::error::AppError;

/// Service for contact form intake and inquiry cleanup.
///
/// Inquiries can be submitted, read and deleted. There is no update path.
pub struct InquiryService<R: ContactInquiryRepository> {
    repository: Arc<R>,
}

impl<R: ContactInquiryRepository> InquiryService<R> {
    /// Creates a new inquiry service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores a validated contact form submission.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    #[tracing::instrument(
        skip(self, new_inquiry),
        fields(inquiry_type = new_inquiry.inquiry_type.code())
    )]
    pub async fn submit(&self, new_inquiry: NewContactInquiry) -> Result<ContactInquiry, AppError> {
        let inquiry = self.repository.create(new_inquiry).await?;
        tracing::info!(id = inquiry.id, "Contact inquiry received");
        Ok(inquiry)
    }

    /// Retrieves a single inquiry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the inquiry does not exist.
    pub async fn get_inquiry(&self, id: i64) -> Result<ContactInquiry, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Contact inquiry not found", json!({"id": id})))
    }

    /// Returns inquiries matching the admin search and filters, newest first.
    pub async fn search_inquiries(
        &self,
        filter: InquiryFilter,
    ) -> Result<Vec<ContactInquiry>, AppError> {
        self.repository.search(filter).await
    }

    /// Deletes the selected inquiries and returns how many were removed.
    pub async fn delete_inquiries(&self, ids: &[i64]) -> Result<u64, AppError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let deleted = self.repository.delete_many(ids).await?;
        tracing::info!(requested = ids.len(), deleted, "Contact inquiries deleted");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::InquiryType;
    use crate::domain::repositories::MockContactInquiryRepository;
    use chrono::Utc;

    fn jane() -> NewContactInquiry {
        NewContactInquiry {
            name: "Jane Doe".to_string(),
            email: "jane@biz.com".to_string(),
            company_name: None,
            inquiry_type: InquiryType::Demo,
            message: "Need a demo".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_stores_inquiry() {
        let mut mock_repo = MockContactInquiryRepository::new();
        mock_repo
            .expect_create()
            .withf(|n| *n == jane())
            .times(1)
            .returning(|n| {
                Ok(ContactInquiry::new(
                    11,
                    n.name,
                    n.email,
                    n.company_name,
                    n.inquiry_type,
                    n.message,
                    Utc::now(),
                ))
            });

        let service = InquiryService::new(Arc::new(mock_repo));

        let inquiry = service.submit(jane()).await.unwrap();
        assert_eq!(inquiry.id, 11);
        assert_eq!(inquiry.inquiry_type, InquiryType::Demo);
    }

    #[tokio::test]
    async fn test_delete_empty_selection_skips_store() {
        let mock_repo = MockContactInquiryRepository::new();
        let service = InquiryService::new(Arc::new(mock_repo));

        assert_eq!(service.delete_inquiries(&[]).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_reports_count() {
        let mut mock_repo = MockContactInquiryRepository::new();
        mock_repo
            .expect_delete_many()
            .withf(|ids| ids == [1, 2, 3])
            .times(1)
            .returning(|_| Ok(2));

        let service = InquiryService::new(Arc::new(mock_repo));

        assert_eq!(service.delete_inquiries(&[1, 2, 3]).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_get_missing_inquiry() {
        let mut mock_repo = MockContactInquiryRepository::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let service = InquiryService::new(Arc::new(mock_repo));

        let result = service.get_inquiry(5).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
