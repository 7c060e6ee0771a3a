//! Blog post entity.

use chrono::{DateTime, Utc};
use std::fmt;

/// A published blog article.
///
/// `publication_date` is assigned by the store when the post is created and is
/// never changed afterwards, so the public ordering of posts is stable.
#[derive(Debug, Clone)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub publication_date: DateTime<Utc>,
    /// Path of the cover image relative to the media directory.
    pub image: Option<String>,
}

impl BlogPost {
    /// Creates a new BlogPost instance.
    pub fn new(
        id: i64,
        title: String,
        content: String,
        publication_date: DateTime<Utc>,
        image: Option<String>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            publication_date,
            image,
        }
    }

    /// Returns true if a cover image is attached.
    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|path| !path.is_empty())
    }

    /// Returns the first `max_words` words of the content, with an ellipsis
    /// when anything was cut.
    pub fn excerpt(&self, max_words: usize) -> String {
        let mut words = self.content.split_whitespace();
        let head: Vec<&str> = words.by_ref().take(max_words).collect();
        let mut excerpt = head.join(" ");
        if words.next().is_some() {
            excerpt.push_str(" …");
        }
        excerpt
    }
}

impl fmt::Display for BlogPost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// Input data for creating a new blog post.
#[derive(Debug, Clone)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
}

/// Partial update for an existing blog post.
///
/// `None` fields are left unchanged. `image: Some(None)` removes the image.
/// There is deliberately no way to change the publication date.
#[derive(Debug, Clone, Default)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<Option<String>>,
}

impl BlogPostPatch {
    /// Returns true if the patch would not modify anything.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.image.is_none()
    }
}
