//! PostgreSQL implementation of the blog post repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use super::like_pattern;
use crate::domain::entities::{BlogPost, BlogPostPatch, NewBlogPost};
use crate::domain::repositories::{BlogPostFilter, BlogPostRepository};
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct BlogPostRow {
    id: i64,
    title: String,
    content: String,
    publication_date: DateTime<Utc>,
    image: Option<String>,
}

impl From<BlogPostRow> for BlogPost {
    fn from(r: BlogPostRow) -> Self {
        BlogPost::new(r.id, r.title, r.content, r.publication_date, r.image)
    }
}

/// PostgreSQL repository for blog posts.
pub struct PgBlogPostRepository {
    pool: Arc<PgPool>,
}

impl PgBlogPostRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogPostRepository for PgBlogPostRepository {
    async fn create(&self, new_post: NewBlogPost) -> Result<BlogPost, AppError> {
        let row = sqlx::query_as::<_, BlogPostRow>(
            r#"
            INSERT INTO blog_posts (title, content, image)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, publication_date, image
            "#,
        )
        .bind(new_post.title)
        .bind(new_post.content)
        .bind(new_post.image)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<BlogPost>, AppError> {
        let row = sqlx::query_as::<_, BlogPostRow>(
            r#"
            SELECT id, title, content, publication_date, image
            FROM blog_posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn latest(&self) -> Result<Option<BlogPost>, AppError> {
        let row = sqlx::query_as::<_, BlogPostRow>(
            r#"
            SELECT id, title, content, publication_date, image
            FROM blog_posts
            ORDER BY publication_date DESC, id DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list_all(&self) -> Result<Vec<BlogPost>, AppError> {
        self.search(BlogPostFilter::default()).await
    }

    async fn search(&self, filter: BlogPostFilter) -> Result<Vec<BlogPost>, AppError> {
        let rows = sqlx::query_as::<_, BlogPostRow>(
            r#"
            SELECT id, title, content, publication_date, image
            FROM blog_posts
            WHERE ($1::TEXT IS NULL OR title ILIKE $1 OR content ILIKE $1)
              AND ($2::TIMESTAMPTZ IS NULL OR publication_date >= $2)
              AND ($3::TIMESTAMPTZ IS NULL OR publication_date < $3)
            ORDER BY publication_date DESC, id DESC
            "#,
        )
        .bind(like_pattern(filter.search.as_deref()))
        .bind(filter.published_since)
        .bind(filter.published_before)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, patch: BlogPostPatch) -> Result<BlogPost, AppError> {
        let update_image = patch.image.is_some();
        let new_image = patch.image.flatten();

        let row = sqlx::query_as::<_, BlogPostRow>(
            r#"
            UPDATE blog_posts SET
                title   = COALESCE($2::TEXT, title),
                content = COALESCE($3::TEXT, content),
                image   = CASE WHEN $4 THEN $5::TEXT ELSE image END
            WHERE id = $1
            RETURNING id, title, content, publication_date, image
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.content)
        .bind(update_image)
        .bind(new_image)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Into::into)
            .ok_or_else(|| AppError::not_found("Blog post not found", json!({"id": id})))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
