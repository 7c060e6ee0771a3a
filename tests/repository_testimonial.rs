mod common;

use chrono::{Duration, Utc};
use site_content::domain::entities::{NewTestimonial, Rating};
use site_content::domain::repositories::{TestimonialFilter, TestimonialRepository};
use site_content::infrastructure::persistence::PgTestimonialRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_is_unapproved(pool: PgPool) {
    let repo = PgTestimonialRepository::new(Arc::new(pool));

    let testimonial = repo
        .create(NewTestimonial {
            name: "Omar".to_string(),
            company: Some("Acme".to_string()),
            rating: Rating::new(4).unwrap(),
            comment: "Great partner".to_string(),
        })
        .await
        .unwrap();

    assert!(!testimonial.is_approved);
    assert_eq!(testimonial.rating.value(), 4);
    assert_eq!(testimonial.to_string(), "Omar - 4 stars");
}

#[sqlx::test]
async fn test_store_rejects_out_of_range_rating(pool: PgPool) {
    let result =
        sqlx::query("INSERT INTO testimonials (name, rating, comment) VALUES ('a', 6, 'c')")
            .execute(&pool)
            .await;

    assert!(result.is_err());
}

#[sqlx::test]
async fn test_list_approved_newest_first_with_limit(pool: PgPool) {
    let now = Utc::now();
    for i in 0..8 {
        let name = format!("Approved {i}");
        common::create_test_testimonial(&pool, &name, 5, true, now - Duration::days(i)).await;
    }
    common::create_test_testimonial(&pool, "Pending", 5, false, now).await;

    let repo = PgTestimonialRepository::new(Arc::new(pool));

    let featured = repo.list_approved(6).await.unwrap();

    assert_eq!(featured.len(), 6);
    assert!(featured.iter().all(|t| t.is_approved));
    assert_eq!(featured[0].name, "Approved 0");
    assert_eq!(featured[5].name, "Approved 5");
}

#[sqlx::test]
async fn test_approve_many_is_idempotent(pool: PgPool) {
    let now = Utc::now();
    let a = common::create_test_testimonial(&pool, "A", 5, false, now).await;
    let b = common::create_test_testimonial(&pool, "B", 4, false, now).await;
    let c = common::create_test_testimonial(&pool, "C", 3, false, now).await;

    let repo = PgTestimonialRepository::new(Arc::new(pool));

    assert_eq!(repo.approve_many(&[a, b, c]).await.unwrap(), 3);
    assert_eq!(repo.approve_many(&[a, b, c]).await.unwrap(), 0);

    for id in [a, b, c] {
        assert!(repo.find_by_id(id).await.unwrap().unwrap().is_approved);
    }
}

#[sqlx::test]
async fn test_search_filters(pool: PgPool) {
    let now = Utc::now();
    common::create_test_testimonial(&pool, "Five pending", 5, false, now).await;
    common::create_test_testimonial(&pool, "Five approved", 5, true, now).await;
    let last_year = now - Duration::days(400);
    common::create_test_testimonial(&pool, "Three approved", 3, true, last_year).await;

    let repo = PgTestimonialRepository::new(Arc::new(pool));

    let pending = repo
        .search(TestimonialFilter {
            is_approved: Some(false),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);

    let five_stars = repo
        .search(TestimonialFilter {
            rating: Some(Rating::new(5).unwrap()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(five_stars.len(), 2);

    let this_year = repo
        .search(TestimonialFilter {
            search: Some("approved".to_string()),
            submitted_since: Some(now - Duration::days(30)),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(this_year.len(), 1);
    assert_eq!(this_year[0].name, "Five approved");
}

#[sqlx::test]
async fn test_delete_many(pool: PgPool) {
    let now = Utc::now();
    let a = common::create_test_testimonial(&pool, "A", 2, false, now).await;

    let repo = PgTestimonialRepository::new(Arc::new(pool.clone()));

    assert_eq!(repo.delete_many(&[a]).await.unwrap(), 1);
    assert_eq!(common::count_rows(&pool, "testimonials").await, 0);
}
