//! Blog post service.

use crate::application::services::require_text;
use crate::domain::entities::{BlogPost, BlogPostPatch, NewBlogPost};
use crate::domain::repositories::{BlogPostFilter, BlogPostRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

const TITLE_MAX_CHARS: usize = 200;

/// Service for reading and editing blog posts.
///
/// The public site only reads; create, update and delete are used by the admin
/// tool.
pub struct BlogService<R: BlogPostRepository> {
    repository: Arc<R>,
}

impl<R: BlogPostRepository> BlogService<R> {
    /// Creates a new blog service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the most recently published post, if any.
    pub async fn latest_post(&self) -> Result<Option<BlogPost>, AppError> {
        self.repository.latest().await
    }

    /// Returns all posts, newest first.
    pub async fn list_posts(&self) -> Result<Vec<BlogPost>, AppError> {
        self.repository.list_all().await
    }

    /// Retrieves a single post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_post(&self, id: i64) -> Result<BlogPost, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Blog post not found", json!({"id": id})))
    }

    /// Returns posts matching the admin search and filters.
    pub async fn search_posts(&self, filter: BlogPostFilter) -> Result<Vec<BlogPost>, AppError> {
        self.repository.search(filter).await
    }

    /// Publishes a new post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the title or content is blank, or the
    /// title exceeds 200 characters.
    #[tracing::instrument(skip(self, new_post), fields(title = %new_post.title))]
    pub async fn create_post(&self, new_post: NewBlogPost) -> Result<BlogPost, AppError> {
        require_text("title", &new_post.title, Some(TITLE_MAX_CHARS))?;
        require_text("content", &new_post.content, None)?;

        let post = self.repository.create(new_post).await?;
        tracing::info!(id = post.id, "Blog post published");
        Ok(post)
    }

    /// Edits an existing post. The publication date is never changed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the patch is empty or a provided field
    /// is invalid.
    /// Returns [`AppError::NotFound`] if the post does not exist.
    pub async fn update_post(&self, id: i64, patch: BlogPostPatch) -> Result<BlogPost, AppError> {
        if patch.is_empty() {
            return Err(AppError::bad_request(
                "Nothing to update",
                json!({"id": id}),
            ));
        }
        if let Some(title) = &patch.title {
            require_text("title", title, Some(TITLE_MAX_CHARS))?;
        }
        if let Some(content) = &patch.content {
            require_text("content", content, None)?;
        }

        self.repository.update(id, patch).await
    }

    /// Deletes a post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post does not exist.
    pub async fn delete_post(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::not_found(
                "Blog post not found",
                json!({"id": id}),
            ));
        }
        tracing::info!(id, "Blog post deleted");
        Ok(())
    }
}
