//! Public endpoints: room listing, booking creation, booking listing.

use actix_session::Session;
use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::db;
use crate::error::AppError;
use crate::handlers::{html, redirect};
use crate::models::booking::BookingForm;
use crate::session;
use crate::views;

pub async fn index(
    pool: web::Data<SqlitePool>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let rooms = db::rooms::list_all(&pool).await?;
    let flashes = session::take_flash(&session);
    Ok(html(views::index_page(&rooms, &flashes)))
}

pub async fn rooms(
    pool: web::Data<SqlitePool>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let rooms = db::rooms::list_all(&pool).await?;
    let flashes = session::take_flash(&session);
    Ok(html(views::rooms_page(&rooms, &flashes)))
}

/// POST /book. Every rejection is non-fatal: the reason is flashed and the
/// caller is sent back to the index with nothing mutated.
pub async fn book(
    pool: web::Data<SqlitePool>,
    session: Session,
    form: web::Form<BookingForm>,
) -> Result<HttpResponse, AppError> {
    let request = match form.parse() {
        Ok(request) => request,
        Err(reason) => {
            session::flash(&session, reason.flash_level(), reason.to_string());
            return Ok(redirect("/"));
        }
    };

    match db::bookings::create(&pool, &request).await {
        Ok(_) => {
            session::flash(
                &session,
                "success",
                format!(
                    "Room {} booked successfully for {} ({} \u{2192} {})",
                    request.room_id, request.customer_name, request.checkin, request.checkout
                ),
            );
            Ok(redirect("/"))
        }
        Err(db_err @ AppError::Database(_)) => Err(db_err),
        Err(reason) => {
            session::flash(&session, reason.flash_level(), reason.to_string());
            Ok(redirect("/"))
        }
    }
}

pub async fn bookings(
    pool: web::Data<SqlitePool>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let bookings = db::bookings::list_with_rooms(&pool).await?;
    let flashes = session::take_flash(&session);
    Ok(html(views::bookings_page(&bookings, &flashes)))
}
