//! Integration tests for contact CRUD and paged listing.
//!
//! Exercises the repository layer against a real database. Ignored by
//! default; run with `cargo test -- --ignored` against a PostgreSQL
//! instance (`DATABASE_URL`).

use sqlx::PgPool;
use wardbook_db::models::contact::{CreateContact, UpdateContact};
use wardbook_db::repositories::ContactRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_contact(last_name: &str, zip_code: &str) -> CreateContact {
    CreateContact {
        first_name: "Pat".to_string(),
        last_name: last_name.to_string(),
        email: format!("{}@example.com", last_name.to_lowercase()),
        phone: Some("2155551234".to_string()),
        address1: "1234 Market St".to_string(),
        address2: None,
        city: "Philadelphia".to_string(),
        state: "PA".to_string(),
        zip_code: zip_code.to_string(),
        division: None,
    }
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a PostgreSQL instance"]
async fn create_and_find_round_trip(pool: PgPool) {
    let created = ContactRepo::create(&pool, &new_contact("Murphy", "19107"))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.created_at, created.updated_at);

    let found = ContactRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("row should exist");
    assert_eq!(found.last_name, "Murphy");
    assert_eq!(found.division, None);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a PostgreSQL instance"]
async fn non_positive_ids_are_rejected_without_querying(pool: PgPool) {
    assert!(ContactRepo::find_by_id(&pool, 0).await.unwrap().is_none());
    assert!(ContactRepo::find_by_id(&pool, -7).await.unwrap().is_none());
    assert!(!ContactRepo::delete(&pool, 0).await.unwrap());
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a PostgreSQL instance"]
async fn update_patches_only_provided_fields(pool: PgPool) {
    let created = ContactRepo::create(&pool, &new_contact("Murphy", "19107"))
        .await
        .unwrap();

    let patch = UpdateContact {
        division: Some("0528".to_string()),
        ..UpdateContact::default()
    };
    let updated = ContactRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .expect("row should exist");

    assert_eq!(updated.division.as_deref(), Some("0528"));
    assert_eq!(updated.last_name, "Murphy");
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a PostgreSQL instance"]
async fn delete_removes_the_row(pool: PgPool) {
    let created = ContactRepo::create(&pool, &new_contact("Murphy", "19107"))
        .await
        .unwrap();
    assert!(ContactRepo::delete(&pool, created.id).await.unwrap());
    assert!(ContactRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
    assert!(!ContactRepo::delete(&pool, created.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Paged listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a PostgreSQL instance"]
async fn paged_listing_matches_pagination_state(pool: PgPool) {
    for i in 0..25 {
        ContactRepo::create(&pool, &new_contact(&format!("Voter{i:02}"), "19107"))
            .await
            .unwrap();
    }

    let (rows, pagination) = ContactRepo::list_page(&pool, Some(2), Some(10))
        .await
        .unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(pagination.total_rows, 25);
    assert_eq!(pagination.last_page, 3);
    assert_eq!(pagination.previous, Some(1));
    assert_eq!(pagination.next, Some(3));

    let (tail, pagination) = ContactRepo::list_page(&pool, Some(3), Some(10))
        .await
        .unwrap();
    assert_eq!(tail.len(), 5);
    assert_eq!(pagination.next, None);

    // Out-of-range requests clamp to the last page instead of serving air.
    let (clamped, pagination) = ContactRepo::list_page(&pool, Some(99), Some(10))
        .await
        .unwrap();
    assert_eq!(pagination.current_page, 3);
    assert_eq!(clamped.len(), 5);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires a PostgreSQL instance"]
async fn empty_table_pages_cleanly(pool: PgPool) {
    let (rows, pagination) = ContactRepo::list_page(&pool, Some(1), Some(10))
        .await
        .unwrap();
    assert!(rows.is_empty());
    assert_eq!(pagination.last_page, 0);
    assert_eq!(pagination.next, None);
}
