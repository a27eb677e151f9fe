//! Room store operations. Plain CRUD with no referential checks against
//! bookings; deleting a room that still has bookings is permitted.

use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::room::Room;
use crate::pagination::{Page, PER_PAGE};

pub async fn create(
    pool: &SqlitePool,
    number: &str,
    kind: &str,
    price: f64,
    available: bool,
) -> Result<i64, AppError> {
    let result = sqlx::query("INSERT INTO rooms (number, type, price, available) VALUES (?, ?, ?, ?)")
        .bind(number)
        .bind(kind)
        .bind(price)
        .bind(available)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

/// Overwrite every field from admin input, including `available`. This can
/// desynchronize the flag from the booking lifecycle; that override is part
/// of the admin contract.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    number: &str,
    kind: &str,
    price: f64,
    available: bool,
) -> Result<(), AppError> {
    sqlx::query("UPDATE rooms SET number = ?, type = ?, price = ?, available = ? WHERE id = ?")
        .bind(number)
        .bind(kind)
        .bind(price)
        .bind(available)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    sqlx::query("DELETE FROM rooms WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Room>, AppError> {
    let room = sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(room)
}

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Room>, AppError> {
    let rooms = sqlx::query_as::<_, Room>("SELECT * FROM rooms")
        .fetch_all(pool)
        .await?;
    Ok(rooms)
}

/// Admin listing: substring search on number or type, newest first,
/// offset/limit pagination.
pub async fn search_page(
    pool: &SqlitePool,
    q: &str,
    requested_page: i64,
) -> Result<(Vec<Room>, Page), AppError> {
    let like = format!("%{q}%");

    let total: i64 = if q.is_empty() {
        sqlx::query_scalar("SELECT COUNT(*) FROM rooms")
            .fetch_one(pool)
            .await?
    } else {
        sqlx::query_scalar("SELECT COUNT(*) FROM rooms WHERE number LIKE ? OR type LIKE ?")
            .bind(&like)
            .bind(&like)
            .fetch_one(pool)
            .await?
    };

    let page = Page::new(requested_page, total);

    let rooms = if q.is_empty() {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms ORDER BY id DESC LIMIT ? OFFSET ?")
            .bind(PER_PAGE)
            .bind(page.offset())
            .fetch_all(pool)
            .await?
    } else {
        sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms WHERE number LIKE ? OR type LIKE ? ORDER BY id DESC LIMIT ? OFFSET ?",
        )
        .bind(&like)
        .bind(&like)
        .bind(PER_PAGE)
        .bind(page.offset())
        .fetch_all(pool)
        .await?
    };

    Ok((rooms, page))
}
