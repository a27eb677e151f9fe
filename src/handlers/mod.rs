use actix_session::Session;
use actix_web::http::header;
use actix_web::HttpResponse;

use crate::session;

pub mod admin;
pub mod auth;
pub mod public;

pub fn redirect(to: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, to))
        .finish()
}

pub fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Admin gate. Returns a redirect to the login page (carrying the original
/// path as `next`) when the session has no admin flag.
pub fn require_admin(session: &Session, next: &str) -> Option<HttpResponse> {
    if session::is_admin(session) {
        None
    } else {
        Some(redirect(&format!("/admin/login?next={next}")))
    }
}
