#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

use site_content::state::AppState;
use site_content::web::routes::public_routes;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

/// Public routes behind the same trailing-slash normalization as production,
/// without rate limiting (which needs connect info).
pub fn create_test_server(pool: PgPool) -> TestServer {
    let router = public_routes().with_state(create_test_state(pool));
    let app =
        Router::new().fallback_service(NormalizePathLayer::trim_trailing_slash().layer(router));
    TestServer::new(app).unwrap()
}

pub async fn create_test_post(
    pool: &PgPool,
    title: &str,
    content: &str,
    published_at: DateTime<Utc>,
) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO blog_posts (title, content, publication_date)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(published_at)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_event(pool: &PgPool, title: &str, event_date: DateTime<Utc>) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO events (title, event_date, location, details)
        VALUES ($1, $2, 'Cairo', 'Details')
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(event_date)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_testimonial(
    pool: &PgPool,
    name: &str,
    rating: i16,
    is_approved: bool,
    submitted_at: DateTime<Utc>,
) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO testimonials (name, rating, comment, is_approved, submitted_at)
        VALUES ($1, $2, 'Great work', $3, $4)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(rating)
    .bind(is_approved)
    .bind(submitted_at)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_inquiry(
    pool: &PgPool,
    name: &str,
    inquiry_type: &str,
    submitted_at: DateTime<Utc>,
) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO contact_inquiries (name, email, inquiry_type, message, submitted_at)
        VALUES ($1, 'client@example.com', $2, 'Hello', $3)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(inquiry_type)
    .bind(submitted_at)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
