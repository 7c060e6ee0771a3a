mod common;

use chrono::{Duration, Utc};
use site_content::AppError;
use site_content::domain::entities::{BlogPostPatch, NewBlogPost};
use site_content::domain::repositories::{BlogPostFilter, BlogPostRepository};
use site_content::infrastructure::persistence::PgBlogPostRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_post(pool: PgPool) {
    let repo = PgBlogPostRepository::new(Arc::new(pool));

    let before = Utc::now();
    let post = repo
        .create(NewBlogPost {
            title: "Launching our AI lab".to_string(),
            content: "We are opening a lab.".to_string(),
            image: Some("blog_images/lab.jpg".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(post.title, "Launching our AI lab");
    assert!(post.has_image());
    assert!(post.publication_date >= before - Duration::seconds(5));
}

#[sqlx::test]
async fn test_latest_and_list_order(pool: PgPool) {
    let now = Utc::now();
    common::create_test_post(&pool, "Old", "a", now - Duration::days(10)).await;
    let newest = common::create_test_post(&pool, "New", "b", now - Duration::days(1)).await;
    common::create_test_post(&pool, "Middle", "c", now - Duration::days(5)).await;

    let repo = PgBlogPostRepository::new(Arc::new(pool));

    let latest = repo.latest().await.unwrap().unwrap();
    assert_eq!(latest.id, newest);

    let titles: Vec<String> = repo
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, vec!["New", "Middle", "Old"]);
}

#[sqlx::test]
async fn test_latest_empty(pool: PgPool) {
    let repo = PgBlogPostRepository::new(Arc::new(pool));

    assert!(repo.latest().await.unwrap().is_none());
}

#[sqlx::test]
async fn test_search_filters(pool: PgPool) {
    let now = Utc::now();
    let old = now - Duration::days(40);
    common::create_test_post(&pool, "Rust in production", "memory safety", old).await;
    let recent = now - Duration::days(2);
    common::create_test_post(&pool, "Hiring", "We need RUST engineers", recent).await;
    common::create_test_post(&pool, "Prototyping", "fast iteration", now - Duration::days(1)).await;

    let repo = PgBlogPostRepository::new(Arc::new(pool));

    let matches = repo
        .search(BlogPostFilter {
            search: Some("rust".to_string()),
            published_since: None,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(matches.len(), 2);

    let recent = repo
        .search(BlogPostFilter {
            search: Some("rust".to_string()),
            published_since: Some(now - Duration::days(7)),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].title, "Hiring");
}

#[sqlx::test]
async fn test_search_treats_wildcards_literally(pool: PgPool) {
    let now = Utc::now();
    common::create_test_post(&pool, "snake_case naming", "a", now).await;
    common::create_test_post(&pool, "snakescase naming", "b", now).await;

    let repo = PgBlogPostRepository::new(Arc::new(pool));

    let matches = repo
        .search(BlogPostFilter {
            search: Some("snake_case".to_string()),
            published_since: None,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(matches.len(), 1);
}

#[sqlx::test]
async fn test_update_keeps_publication_date(pool: PgPool) {
    let published = Utc::now() - Duration::days(3);
    let id = common::create_test_post(&pool, "Draft title", "body", published).await;

    let repo = PgBlogPostRepository::new(Arc::new(pool));

    let updated = repo
        .update(
            id,
            BlogPostPatch {
                title: Some("Final title".to_string()),
                image: Some(Some("blog_images/final.png".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Final title");
    assert_eq!(updated.content, "body");
    assert_eq!(updated.image.as_deref(), Some("blog_images/final.png"));
    assert_eq!(
        updated.publication_date.timestamp_micros(),
        published.timestamp_micros()
    );

    let cleared = repo
        .update(
            id,
            BlogPostPatch {
                image: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(!cleared.has_image());
}

#[sqlx::test]
async fn test_update_missing_post(pool: PgPool) {
    let repo = PgBlogPostRepository::new(Arc::new(pool));

    let result = repo
        .update(
            999,
            BlogPostPatch {
                title: Some("x".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[sqlx::test]
async fn test_delete_post(pool: PgPool) {
    let id = common::create_test_post(&pool, "Gone", "soon", Utc::now()).await;
    let repo = PgBlogPostRepository::new(Arc::new(pool));

    assert!(repo.delete(id).await.unwrap());
    assert!(!repo.delete(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());
}
