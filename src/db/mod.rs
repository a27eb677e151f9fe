//! SQLite pool setup and schema initialization.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

pub mod bookings;
pub mod rooms;

/// Open the pool. Foreign keys stay off: deleting a room out from under
/// its bookings is permitted and leaves orphan booking rows.
pub async fn get_db_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.foreign_keys(false);
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Create the schema if missing, apply the lazy `status` column migration
/// and seed the room inventory. Safe to run on every startup.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS rooms (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            number TEXT UNIQUE,
            type TEXT,
            price REAL,
            available INTEGER DEFAULT 1
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            customer_name TEXT,
            room_id INTEGER,
            checkin TEXT,
            checkout TEXT,
            status TEXT DEFAULT 'booked',
            FOREIGN KEY(room_id) REFERENCES rooms(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Databases created before the status column existed need it added.
    // The ALTER default only applies to new rows, so backfill explicitly.
    let has_status: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM pragma_table_info('bookings') WHERE name = 'status'",
    )
    .fetch_one(pool)
    .await?;

    if has_status == 0 {
        log::info!("adding missing bookings.status column");
        sqlx::query("ALTER TABLE bookings ADD COLUMN status TEXT DEFAULT 'booked'")
            .execute(pool)
            .await?;
    }
    sqlx::query("UPDATE bookings SET status = 'booked' WHERE status IS NULL")
        .execute(pool)
        .await?;

    // Seed a few rooms on first run.
    let room_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rooms")
        .fetch_one(pool)
        .await?;

    if room_count == 0 {
        log::info!("seeding initial room inventory");
        let seed = [
            ("101", "Single", 50.0),
            ("102", "Double", 80.0),
            ("201", "Suite", 150.0),
        ];
        for (number, kind, price) in seed {
            sqlx::query("INSERT INTO rooms (number, type, price, available) VALUES (?, ?, ?, 1)")
                .bind(number)
                .bind(kind)
                .bind(price)
                .execute(pool)
                .await?;
        }
    }

    Ok(())
}
