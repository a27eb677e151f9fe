//! Booking store operations.
//!
//! Every write path here maintains the soft invariant between bookings and
//! the referenced room's `available` flag: a room is available iff its
//! last-known booking is in a released status, or it has no booking at all.
//! The flag is recomputed procedurally inside one transaction per request;
//! nothing in the schema enforces it.

use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::booking::{room_available_after, BookingRequest, BookingWithRoom, STATUS_BOOKED};
use crate::pagination::{Page, PER_PAGE};

/// Create a booking against an available room.
///
/// Fails with no mutation when the room does not exist or its `available`
/// flag is already false. On success the booking is inserted with status
/// "booked" and the room is flagged unavailable, atomically.
pub async fn create(pool: &SqlitePool, req: &BookingRequest) -> Result<i64, AppError> {
    let mut tx = pool.begin().await?;

    let available: Option<bool> = sqlx::query_scalar("SELECT available FROM rooms WHERE id = ?")
        .bind(req.room_id)
        .fetch_optional(&mut *tx)
        .await?;

    match available {
        None => return Err(AppError::NotFound("room")),
        Some(false) => return Err(AppError::RoomUnavailable),
        Some(true) => {}
    }

    let result = sqlx::query(
        "INSERT INTO bookings (customer_name, room_id, checkin, checkout, status) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&req.customer_name)
    .bind(req.room_id)
    .bind(req.checkin)
    .bind(req.checkout)
    .bind(STATUS_BOOKED)
    .execute(&mut *tx)
    .await?;

    sqlx::query("UPDATE rooms SET available = 0 WHERE id = ?")
        .bind(req.room_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(result.last_insert_rowid())
}

/// Write a booking's status verbatim and recompute the room flag from it.
/// Statuses outside the four known values are stored but leave the flag
/// untouched.
pub async fn set_status(pool: &SqlitePool, booking_id: i64, status: &str) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    // Joined lookup: a booking whose room was deleted reads as not found,
    // the same as on the detail page.
    let room_id: Option<i64> = sqlx::query_scalar(
        "SELECT b.room_id FROM bookings b JOIN rooms r ON b.room_id = r.id WHERE b.id = ?",
    )
    .bind(booking_id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(room_id) = room_id else {
        return Err(AppError::NotFound("booking"));
    };

    sqlx::query("UPDATE bookings SET status = ? WHERE id = ?")
        .bind(status)
        .bind(booking_id)
        .execute(&mut *tx)
        .await?;

    if let Some(available) = room_available_after(status) {
        sqlx::query("UPDATE rooms SET available = ? WHERE id = ?")
            .bind(available)
            .bind(room_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Delete a booking and free its room unconditionally, regardless of the
/// booking's prior status.
pub async fn delete(pool: &SqlitePool, booking_id: i64) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    let room_id: Option<i64> = sqlx::query_scalar("SELECT room_id FROM bookings WHERE id = ?")
        .bind(booking_id)
        .fetch_optional(&mut *tx)
        .await?;

    let Some(room_id) = room_id else {
        return Err(AppError::NotFound("booking"));
    };

    sqlx::query("DELETE FROM bookings WHERE id = ?")
        .bind(booking_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("UPDATE rooms SET available = 1 WHERE id = ?")
        .bind(room_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

pub async fn get_with_room(
    pool: &SqlitePool,
    booking_id: i64,
) -> Result<Option<BookingWithRoom>, AppError> {
    let booking = sqlx::query_as::<_, BookingWithRoom>(
        r#"
        SELECT b.id, b.customer_name, b.room_id, b.checkin, b.checkout, b.status,
               r.number AS room_number
        FROM bookings b JOIN rooms r ON b.room_id = r.id
        WHERE b.id = ?
        "#,
    )
    .bind(booking_id)
    .fetch_optional(pool)
    .await?;
    Ok(booking)
}

/// Public listing: all bookings joined with their room number.
pub async fn list_with_rooms(pool: &SqlitePool) -> Result<Vec<BookingWithRoom>, AppError> {
    let bookings = sqlx::query_as::<_, BookingWithRoom>(
        r#"
        SELECT b.id, b.customer_name, b.room_id, b.checkin, b.checkout, b.status,
               r.number AS room_number
        FROM bookings b JOIN rooms r ON b.room_id = r.id
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(bookings)
}

/// Admin listing: substring search on customer name or room number, newest
/// first, offset/limit pagination.
pub async fn search_page(
    pool: &SqlitePool,
    q: &str,
    requested_page: i64,
) -> Result<(Vec<BookingWithRoom>, Page), AppError> {
    let like = format!("%{q}%");

    let total: i64 = if q.is_empty() {
        sqlx::query_scalar("SELECT COUNT(*) FROM bookings b JOIN rooms r ON b.room_id = r.id")
            .fetch_one(pool)
            .await?
    } else {
        sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM bookings b JOIN rooms r ON b.room_id = r.id
            WHERE b.customer_name LIKE ? OR r.number LIKE ?
            "#,
        )
        .bind(&like)
        .bind(&like)
        .fetch_one(pool)
        .await?
    };

    let page = Page::new(requested_page, total);

    let select = r#"
        SELECT b.id, b.customer_name, b.room_id, b.checkin, b.checkout, b.status,
               r.number AS room_number
        FROM bookings b JOIN rooms r ON b.room_id = r.id
    "#;

    let bookings = if q.is_empty() {
        sqlx::query_as::<_, BookingWithRoom>(&format!(
            "{select} ORDER BY b.id DESC LIMIT ? OFFSET ?"
        ))
        .bind(PER_PAGE)
        .bind(page.offset())
        .fetch_all(pool)
        .await?
    } else {
        sqlx::query_as::<_, BookingWithRoom>(&format!(
            "{select} WHERE b.customer_name LIKE ? OR r.number LIKE ? ORDER BY b.id DESC LIMIT ? OFFSET ?"
        ))
        .bind(&like)
        .bind(&like)
        .bind(PER_PAGE)
        .bind(page.offset())
        .fetch_all(pool)
        .await?
    };

    Ok((bookings, page))
}
