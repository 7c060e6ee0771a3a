mod common;

use chrono::{DateTime, Duration, TimeZone, Utc};
use site_content::domain::entities::{EventPatch, NewEvent};
use site_content::domain::period::Period;
use site_content::domain::repositories::{EventFilter, EventRepository};
use site_content::infrastructure::persistence::PgEventRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_event(pool: PgPool) {
    let repo = PgEventRepository::new(Arc::new(pool));
    let date = Utc::now() + Duration::days(14);

    let event = repo
        .create(NewEvent {
            title: "AI Summit".to_string(),
            event_date: date,
            location: "Cairo".to_string(),
            details: "Talks and demos".to_string(),
            image: None,
        })
        .await
        .unwrap();

    assert_eq!(event.title, "AI Summit");
    assert_eq!(event.event_date.timestamp(), date.timestamp());
    assert!(event.is_upcoming_at(Utc::now()));
}

#[sqlx::test]
async fn test_next_upcoming_is_strictly_after_now(pool: PgPool) {
    let now = Utc::now();
    common::create_test_event(&pool, "Right now", now).await;
    common::create_test_event(&pool, "Yesterday", now - Duration::days(1)).await;
    let soon = common::create_test_event(&pool, "Soon", now + Duration::hours(2)).await;
    common::create_test_event(&pool, "Later", now + Duration::days(30)).await;

    let repo = PgEventRepository::new(Arc::new(pool));

    let next = repo.next_upcoming(now).await.unwrap().unwrap();
    assert_eq!(next.id, soon);
}

#[sqlx::test]
async fn test_next_upcoming_none(pool: PgPool) {
    let now = Utc::now();
    common::create_test_event(&pool, "Past", now - Duration::days(2)).await;

    let repo = PgEventRepository::new(Arc::new(pool));

    assert!(repo.next_upcoming(now).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_all_ascending(pool: PgPool) {
    let now = Utc::now();
    common::create_test_event(&pool, "B", now + Duration::days(2)).await;
    common::create_test_event(&pool, "A", now - Duration::days(2)).await;
    common::create_test_event(&pool, "C", now + Duration::days(9)).await;

    let repo = PgEventRepository::new(Arc::new(pool));

    let titles: Vec<String> = repo
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.title)
        .collect();
    assert_eq!(titles, vec!["A", "B", "C"]);
}

#[sqlx::test]
async fn test_search_by_location(pool: PgPool) {
    let now = Utc::now();
    common::create_test_event(&pool, "Meetup", now).await;

    let repo = PgEventRepository::new(Arc::new(pool));

    let found = repo
        .search(EventFilter {
            search: Some("cai".to_string()),
            date_since: None,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(found.len(), 1);

    let none = repo
        .search(EventFilter {
            search: Some("Berlin".to_string()),
            date_since: None,
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[sqlx::test]
async fn test_update_event_date(pool: PgPool) {
    let now = Utc::now();
    let id = common::create_test_event(&pool, "Workshop", now - Duration::days(1)).await;

    let repo = PgEventRepository::new(Arc::new(pool));

    let moved = repo
        .update(
            id,
            EventPatch {
                event_date: Some(now + Duration::days(1)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(moved.is_upcoming_at(now));
    assert_eq!(moved.title, "Workshop");
    assert_eq!(moved.location, "Cairo");
}

#[sqlx::test]
async fn test_delete_event(pool: PgPool) {
    let id = common::create_test_event(&pool, "Cancelled", Utc::now()).await;
    let repo = PgEventRepository::new(Arc::new(pool));

    assert!(repo.delete(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());
}

async fn titles_in(repo: &PgEventRepository, period: Period, now: DateTime<Utc>) -> Vec<String> {
    let filter = EventFilter {
        date_since: period.since(now),
        date_before: period.until(now),
        ..Default::default()
    };
    repo.search(filter)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.title)
        .collect()
}

#[sqlx::test]
async fn test_search_period_excludes_later_events(pool: PgPool) {
    let now = Utc.with_ymd_and_hms(2030, 6, 18, 9, 0, 0).unwrap();
    common::create_test_event(&pool, "This morning", now + Duration::hours(1)).await;
    common::create_test_event(&pool, "Next week", now + Duration::days(7)).await;
    common::create_test_event(&pool, "Next year", now + Duration::days(400)).await;

    let repo = PgEventRepository::new(Arc::new(pool));

    assert_eq!(titles_in(&repo, Period::Today, now).await, ["This morning"]);
    assert_eq!(
        titles_in(&repo, Period::ThisMonth, now).await,
        ["This morning", "Next week"]
    );
    assert_eq!(
        titles_in(&repo, Period::ThisYear, now).await,
        ["This morning", "Next week"]
    );
    assert_eq!(titles_in(&repo, Period::AnyDate, now).await.len(), 3);
}
