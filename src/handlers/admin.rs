//! Admin section: room CRUD and booking lifecycle management. Every
//! handler checks the session flag first and bounces unauthenticated
//! callers to the login page.

use actix_session::Session;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::db;
use crate::error::AppError;
use crate::handlers::{html, redirect, require_admin};
use crate::models::room::RoomForm;
use crate::session;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub q: Option<String>,
}

impl ListQuery {
    fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }

    fn q(&self) -> &str {
        self.q.as_deref().map(str::trim).unwrap_or("")
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: String,
}

pub async fn index(session: Session, req: HttpRequest) -> HttpResponse {
    if let Some(resp) = require_admin(&session, req.path()) {
        return resp;
    }
    redirect("/admin/rooms")
}

// ---------------------------------------------------------------------
// Rooms
// ---------------------------------------------------------------------

pub async fn rooms_list(
    pool: web::Data<SqlitePool>,
    session: Session,
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    if let Some(resp) = require_admin(&session, req.path()) {
        return Ok(resp);
    }
    let (rooms, page) = db::rooms::search_page(&pool, query.q(), query.page()).await?;
    let flashes = session::take_flash(&session);
    Ok(html(views::admin_rooms_page(&rooms, &page, query.q(), &flashes)))
}

pub async fn new_room_form(session: Session, req: HttpRequest) -> HttpResponse {
    if let Some(resp) = require_admin(&session, req.path()) {
        return resp;
    }
    let flashes = session::take_flash(&session);
    html(views::room_form_page("New", None, &flashes))
}

pub async fn create_room(
    pool: web::Data<SqlitePool>,
    session: Session,
    req: HttpRequest,
    form: web::Form<RoomForm>,
) -> Result<HttpResponse, AppError> {
    if let Some(resp) = require_admin(&session, req.path()) {
        return Ok(resp);
    }
    db::rooms::create(&pool, &form.number, &form.kind, form.price, form.is_available()).await?;
    session::flash(&session, "success", "Room added");
    Ok(redirect("/admin/rooms"))
}

pub async fn edit_room_form(
    pool: web::Data<SqlitePool>,
    session: Session,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    if let Some(resp) = require_admin(&session, req.path()) {
        return Ok(resp);
    }
    let room_id = path.into_inner();
    match db::rooms::get(&pool, room_id).await? {
        Some(room) => {
            let flashes = session::take_flash(&session);
            Ok(html(views::room_form_page("Edit", Some(&room), &flashes)))
        }
        None => {
            session::flash(&session, "danger", "Room not found");
            Ok(redirect("/admin/rooms"))
        }
    }
}

pub async fn update_room(
    pool: web::Data<SqlitePool>,
    session: Session,
    req: HttpRequest,
    path: web::Path<i64>,
    form: web::Form<RoomForm>,
) -> Result<HttpResponse, AppError> {
    if let Some(resp) = require_admin(&session, req.path()) {
        return Ok(resp);
    }
    let room_id = path.into_inner();
    db::rooms::update(
        &pool,
        room_id,
        &form.number,
        &form.kind,
        form.price,
        form.is_available(),
    )
    .await?;
    session::flash(&session, "success", "Room updated");
    Ok(redirect("/admin/rooms"))
}

pub async fn delete_room(
    pool: web::Data<SqlitePool>,
    session: Session,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    if let Some(resp) = require_admin(&session, req.path()) {
        return Ok(resp);
    }
    db::rooms::delete(&pool, path.into_inner()).await?;
    session::flash(&session, "success", "Room deleted");
    Ok(redirect("/admin/rooms"))
}

// ---------------------------------------------------------------------
// Bookings
// ---------------------------------------------------------------------

pub async fn bookings_list(
    pool: web::Data<SqlitePool>,
    session: Session,
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    if let Some(resp) = require_admin(&session, req.path()) {
        return Ok(resp);
    }
    let (bookings, page) = db::bookings::search_page(&pool, query.q(), query.page()).await?;
    let flashes = session::take_flash(&session);
    Ok(html(views::admin_bookings_page(
        &bookings,
        &page,
        query.q(),
        &flashes,
    )))
}

pub async fn booking_detail(
    pool: web::Data<SqlitePool>,
    session: Session,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    if let Some(resp) = require_admin(&session, req.path()) {
        return Ok(resp);
    }
    let booking_id = path.into_inner();
    match db::bookings::get_with_room(&pool, booking_id).await? {
        Some(booking) => {
            let flashes = session::take_flash(&session);
            Ok(html(views::booking_detail_page(&booking, &flashes)))
        }
        None => {
            session::flash(&session, "danger", "Booking not found");
            Ok(redirect("/admin/bookings"))
        }
    }
}

/// POST on the booking detail page: write the submitted status and let the
/// store recompute the room flag.
pub async fn update_booking_status(
    pool: web::Data<SqlitePool>,
    session: Session,
    req: HttpRequest,
    path: web::Path<i64>,
    form: web::Form<StatusForm>,
) -> Result<HttpResponse, AppError> {
    if let Some(resp) = require_admin(&session, req.path()) {
        return Ok(resp);
    }
    let booking_id = path.into_inner();
    match db::bookings::set_status(&pool, booking_id, &form.status).await {
        Ok(()) => {
            session::flash(&session, "success", "Booking updated");
            Ok(redirect(&format!("/admin/bookings/{booking_id}")))
        }
        Err(AppError::NotFound(_)) => {
            session::flash(&session, "danger", "Booking not found");
            Ok(redirect("/admin/bookings"))
        }
        Err(other) => Err(other),
    }
}

pub async fn delete_booking(
    pool: web::Data<SqlitePool>,
    session: Session,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    if let Some(resp) = require_admin(&session, req.path()) {
        return Ok(resp);
    }
    match db::bookings::delete(&pool, path.into_inner()).await {
        Ok(()) => {
            session::flash(&session, "success", "Booking cancelled and room freed");
            Ok(redirect("/admin/bookings"))
        }
        Err(AppError::NotFound(_)) => {
            session::flash(&session, "danger", "Booking not found");
            Ok(redirect("/admin/bookings"))
        }
        Err(other) => Err(other),
    }
}
