//! Store-level tests for the booking/room consistency rules, against an
//! in-memory SQLite database.

use std::str::FromStr;

use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use innhouse::db;
use innhouse::error::AppError;
use innhouse::models::booking::BookingRequest;

/// Single-connection in-memory pool, foreign keys off as in production.
/// One connection keeps every query on the same in-memory instance.
async fn memory_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(false);
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap()
}

/// Fresh in-memory database with the schema applied and the three seed
/// rooms present.
async fn setup() -> SqlitePool {
    let pool = memory_pool().await;
    db::init_schema(&pool).await.unwrap();
    pool
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn request(room_id: i64) -> BookingRequest {
    BookingRequest {
        customer_name: "Alice".into(),
        room_id,
        checkin: date("2024-01-01"),
        checkout: date("2024-01-03"),
    }
}

async fn room_available(pool: &SqlitePool, room_id: i64) -> bool {
    sqlx::query_scalar("SELECT available FROM rooms WHERE id = ?")
        .bind(room_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn booking_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn schema_init_seeds_three_rooms() {
    let pool = setup().await;
    let numbers: Vec<String> = sqlx::query_scalar("SELECT number FROM rooms ORDER BY id")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(numbers, ["101", "102", "201"]);
    for id in 1..=3 {
        assert!(room_available(&pool, id).await);
    }
}

#[tokio::test]
async fn creating_a_booking_takes_the_room() {
    let pool = setup().await;

    let booking_id = db::bookings::create(&pool, &request(1)).await.unwrap();

    let status: String = sqlx::query_scalar("SELECT status FROM bookings WHERE id = ?")
        .bind(booking_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(status, "booked");
    assert!(!room_available(&pool, 1).await);
    assert_eq!(booking_count(&pool).await, 1);
}

#[tokio::test]
async fn booking_an_unavailable_room_is_rejected_without_mutation() {
    let pool = setup().await;
    db::bookings::create(&pool, &request(1)).await.unwrap();

    let err = db::bookings::create(&pool, &request(1)).await.unwrap_err();
    assert!(matches!(err, AppError::RoomUnavailable));
    assert_eq!(booking_count(&pool).await, 1);
    assert!(!room_available(&pool, 1).await);
}

#[tokio::test]
async fn booking_a_missing_room_is_not_found() {
    let pool = setup().await;

    let err = db::bookings::create(&pool, &request(999)).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound("room")));
    assert_eq!(booking_count(&pool).await, 0);
}

#[tokio::test]
async fn released_statuses_free_the_room_and_occupying_take_it() {
    let pool = setup().await;
    let booking_id = db::bookings::create(&pool, &request(1)).await.unwrap();

    for (status, expected) in [
        ("cancelled", true),
        ("booked", false),
        ("checked-out", true),
        ("checked-in", false),
    ] {
        db::bookings::set_status(&pool, booking_id, status).await.unwrap();
        assert_eq!(room_available(&pool, 1).await, expected, "after {status}");
    }
}

#[tokio::test]
async fn unknown_status_is_written_but_leaves_the_room_flag_alone() {
    let pool = setup().await;
    let booking_id = db::bookings::create(&pool, &request(1)).await.unwrap();
    assert!(!room_available(&pool, 1).await);

    db::bookings::set_status(&pool, booking_id, "on-hold").await.unwrap();

    let status: String = sqlx::query_scalar("SELECT status FROM bookings WHERE id = ?")
        .bind(booking_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(status, "on-hold");
    assert!(!room_available(&pool, 1).await);
}

#[tokio::test]
async fn status_change_on_missing_booking_is_not_found() {
    let pool = setup().await;
    let err = db::bookings::set_status(&pool, 42, "cancelled").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound("booking")));
}

#[tokio::test]
async fn status_change_on_orphaned_booking_is_not_found() {
    let pool = setup().await;
    let booking_id = db::bookings::create(&pool, &request(1)).await.unwrap();
    db::rooms::delete(&pool, 1).await.unwrap();

    // The booking row survives the room deletion, but without a room to
    // join against it no longer resolves; nothing is written.
    let err = db::bookings::set_status(&pool, booking_id, "cancelled").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound("booking")));

    let status: String = sqlx::query_scalar("SELECT status FROM bookings WHERE id = ?")
        .bind(booking_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(status, "booked");
}

#[tokio::test]
async fn deleting_a_booking_always_frees_the_room() {
    let pool = setup().await;
    let booking_id = db::bookings::create(&pool, &request(1)).await.unwrap();
    db::bookings::set_status(&pool, booking_id, "checked-in").await.unwrap();
    assert!(!room_available(&pool, 1).await);

    db::bookings::delete(&pool, booking_id).await.unwrap();

    assert!(room_available(&pool, 1).await);
    assert_eq!(booking_count(&pool).await, 0);
}

#[tokio::test]
async fn deleting_a_missing_booking_is_not_found() {
    let pool = setup().await;
    let err = db::bookings::delete(&pool, 42).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound("booking")));
}

#[tokio::test]
async fn full_booking_lifecycle() {
    let pool = setup().await;

    // Room 101 (id 1) starts available; a valid booking takes it.
    let booking_id = db::bookings::create(&pool, &request(1)).await.unwrap();
    assert!(!room_available(&pool, 1).await);

    // A second attempt fails while the first booking is outstanding.
    let err = db::bookings::create(&pool, &request(1)).await.unwrap_err();
    assert!(matches!(err, AppError::RoomUnavailable));

    // Checking the guest out frees the room again.
    db::bookings::set_status(&pool, booking_id, "checked-out").await.unwrap();
    assert!(room_available(&pool, 1).await);

    // A new booking takes the room; deleting it frees the room regardless
    // of the booking's last status.
    let second = db::bookings::create(&pool, &request(1)).await.unwrap();
    db::bookings::set_status(&pool, second, "checked-in").await.unwrap();
    assert!(!room_available(&pool, 1).await);
    db::bookings::delete(&pool, second).await.unwrap();
    assert!(room_available(&pool, 1).await);
}

#[tokio::test]
async fn room_search_matches_number_or_type_substring() {
    let pool = setup().await;

    let (rooms, _) = db::rooms::search_page(&pool, "Suite", 1).await.unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].number, "201");

    let (rooms, _) = db::rooms::search_page(&pool, "10", 1).await.unwrap();
    let numbers: Vec<_> = rooms.iter().map(|r| r.number.as_str()).collect();
    assert_eq!(numbers, ["102", "101"]); // newest first

    let (rooms, page) = db::rooms::search_page(&pool, "nothing", 1).await.unwrap();
    assert!(rooms.is_empty());
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn room_listing_paginates_in_tens() {
    let pool = setup().await;
    for i in 0..25 {
        db::rooms::create(&pool, &format!("B{i:02}"), "Bulk", 60.0, true)
            .await
            .unwrap();
    }

    let (rooms, page) = db::rooms::search_page(&pool, "Bulk", 1).await.unwrap();
    assert_eq!(rooms.len(), 10);
    assert_eq!(page.total_rows, 25);
    assert_eq!(page.total_pages, 3);
    assert_eq!(rooms[0].number, "B24"); // ORDER BY id DESC

    let (rooms, _) = db::rooms::search_page(&pool, "Bulk", 3).await.unwrap();
    assert_eq!(rooms.len(), 5);
    assert_eq!(rooms[4].number, "B00");
}

#[tokio::test]
async fn booking_search_matches_customer_or_room_number() {
    let pool = setup().await;
    db::bookings::create(&pool, &request(1)).await.unwrap();
    db::bookings::create(
        &pool,
        &BookingRequest {
            customer_name: "Bob".into(),
            room_id: 2,
            checkin: date("2024-02-01"),
            checkout: date("2024-02-02"),
        },
    )
    .await
    .unwrap();

    let (found, _) = db::bookings::search_page(&pool, "Alice", 1).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].room_number, "101");

    let (found, _) = db::bookings::search_page(&pool, "102", 1).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].customer_name, "Bob");

    let (all, page) = db::bookings::search_page(&pool, "", 1).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn public_listing_joins_room_numbers() {
    let pool = setup().await;
    db::bookings::create(&pool, &request(3)).await.unwrap();

    let bookings = db::bookings::list_with_rooms(&pool).await.unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].room_number, "201");
    assert_eq!(bookings[0].status, "booked");
}

#[tokio::test]
async fn admin_room_edit_can_override_availability() {
    let pool = setup().await;
    db::bookings::create(&pool, &request(1)).await.unwrap();
    assert!(!room_available(&pool, 1).await);

    // Manual override is allowed even while a booking is outstanding.
    db::rooms::update(&pool, 1, "101", "Single", 55.0, true).await.unwrap();
    assert!(room_available(&pool, 1).await);
}

#[tokio::test]
async fn deleting_a_room_leaves_orphan_bookings() {
    let pool = setup().await;
    db::bookings::create(&pool, &request(1)).await.unwrap();

    db::rooms::delete(&pool, 1).await.unwrap();

    // The booking row survives; it just no longer joins to a room.
    assert_eq!(booking_count(&pool).await, 1);
    let joined = db::bookings::list_with_rooms(&pool).await.unwrap();
    assert!(joined.is_empty());
}

#[tokio::test]
async fn lazy_migration_adds_and_backfills_status() {
    let pool = memory_pool().await;

    // Simulate a database from before the status column existed.
    sqlx::query(
        r#"
        CREATE TABLE bookings (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            customer_name TEXT,
            room_id INTEGER,
            checkin TEXT,
            checkout TEXT
        )
        "#,
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query(
        "INSERT INTO bookings (customer_name, room_id, checkin, checkout) VALUES ('Old', 1, '2023-01-01', '2023-01-02')",
    )
    .execute(&pool)
    .await
    .unwrap();

    db::init_schema(&pool).await.unwrap();

    let status: String = sqlx::query_scalar("SELECT status FROM bookings WHERE customer_name = 'Old'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(status, "booked");
}
