//! Repository trait for blog post data access.

use crate::domain::entities::{BlogPost, BlogPostPatch, NewBlogPost};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Search and filter options for the blog post listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogPostFilter {
    /// Case-insensitive substring matched against title and content.
    pub search: Option<String>,
    /// Only posts published at or after this instant.
    pub published_since: Option<DateTime<Utc>>,
    /// Only posts published before this instant.
    pub published_before: Option<DateTime<Utc>>,
}

/// Repository interface for blog posts.
///
/// All listings are ordered newest first by publication date.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBlogPostRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    /// Stores a new post. The publication date is set by the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_post: NewBlogPost) -> Result<BlogPost, AppError>;

    /// Finds a post by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<BlogPost>, AppError>;

    /// Returns the most recently published post, if any.
    async fn latest(&self) -> Result<Option<BlogPost>, AppError>;

    /// Returns every post, newest first.
    async fn list_all(&self) -> Result<Vec<BlogPost>, AppError>;

    /// Returns posts matching `filter`, newest first.
    async fn search(&self, filter: BlogPostFilter) -> Result<Vec<BlogPost>, AppError>;

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no post has the given id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: BlogPostPatch) -> Result<BlogPost, AppError>;

    /// Deletes a post. Returns `Ok(false)` if it did not exist.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
