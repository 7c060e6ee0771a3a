mod common;

use chrono::{Duration, Utc};
use sqlx::PgPool;

#[sqlx::test]
async fn test_home_renders_empty_sections(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("No posts yet."));
    assert!(html.contains("No upcoming events."));
    assert!(html.contains("No testimonials yet."));
    assert!(html.contains("action=\"/submit-testimonial/\""));
}

#[sqlx::test]
async fn test_home_shows_latest_post_and_next_event(pool: PgPool) {
    let now = Utc::now();
    common::create_test_post(&pool, "Older announcement", "old", now - Duration::days(9)).await;
    common::create_test_post(&pool, "Fresh announcement", "new", now - Duration::hours(1)).await;
    common::create_test_event(&pool, "Past meetup", now - Duration::days(1)).await;
    common::create_test_event(&pool, "Next summit", now + Duration::days(3)).await;
    common::create_test_event(&pool, "Far conference", now + Duration::days(90)).await;

    let server = common::create_test_server(pool);

    let html = server.get("/").await.text();

    assert!(html.contains("Fresh announcement"));
    assert!(!html.contains("Older announcement"));
    assert!(html.contains("Next summit"));
    assert!(!html.contains("Past meetup"));
    assert!(!html.contains("Far conference"));
}

#[sqlx::test]
async fn test_home_shows_only_six_approved_testimonials(pool: PgPool) {
    let now = Utc::now();
    for i in 0..7 {
        let name = format!("Client {i}");
        common::create_test_testimonial(&pool, &name, 5, true, now - Duration::hours(i)).await;
    }
    common::create_test_testimonial(&pool, "Unreviewed", 1, false, now).await;

    let server = common::create_test_server(pool);

    let html = server.get("/").await.text();

    assert!(html.contains("Client 0"));
    assert!(html.contains("Client 5"));
    assert!(!html.contains("Client 6"));
    assert!(!html.contains("Unreviewed"));
    assert!(html.contains("★★★★★"));
}

#[sqlx::test]
async fn test_home_shows_and_clears_flash_notice(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server
        .get("/")
        .add_header("Cookie", "flash=testimonial_received")
        .await;

    response.assert_status_ok();
    assert!(
        response
            .text()
            .contains("Thank you for your testimonial! It will be reviewed and published soon.")
    );
    let set_cookie = response.header("set-cookie");
    assert!(set_cookie.to_str().unwrap().contains("Max-Age=0"));
}
