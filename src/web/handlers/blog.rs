//! Blog list and detail handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State, rejection::PathRejection},
    response::Response,
};

use serde_json::json;

use crate::domain::entities::BlogPost;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::flash::Flash;
use crate::web::layout::Layout;

/// Template for the blog list. Each post shows a 40-word excerpt.
#[derive(Template, WebTemplate)]
#[template(path = "blog_list.html")]
pub struct BlogListTemplate {
    pub layout: Layout,
    pub posts: Vec<BlogPost>,
}

#[derive(Template, WebTemplate)]
#[template(path = "blog_detail.html")]
pub struct BlogDetailTemplate {
    pub layout: Layout,
    pub post: BlogPost,
}

/// Lists every blog post, newest first.
///
/// # Endpoint
///
/// `GET /blog`
pub async fn blog_list_handler(
    State(state): State<AppState>,
    flash: Flash,
) -> Result<Response, AppError> {
    let posts = state.blog_service.list_posts().await?;

    let page = BlogListTemplate {
        layout: Layout::new(flash.notice()),
        posts,
    };

    Ok(flash.consume(page))
}

/// Shows a single blog post.
///
/// # Endpoint
///
/// `GET /blog/{id}`
///
/// # Errors
///
/// Responds with 404 if no post has this id or the id is not a number.
pub async fn blog_detail_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    flash: Flash,
) -> Result<Response, AppError> {
    let Path(id) = id.map_err(|rejection| {
        AppError::not_found(
            "Blog post not found",
            json!({ "reason": rejection.body_text() }),
        )
    })?;
    let post = state.blog_service.get_post(id).await?;

    let page = BlogDetailTemplate {
        layout: Layout::new(flash.notice()),
        post,
    };

    Ok(flash.consume(page))
}
