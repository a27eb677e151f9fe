//! Admin login and logout. A single shared credential pair comes from the
//! environment; a match sets the admin flag in the signed session cookie.

use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::config::Config;
use crate::handlers::{html, redirect};
use crate::session;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct NextQuery {
    pub next: Option<String>,
}

pub async fn login_form(session: Session, query: web::Query<NextQuery>) -> HttpResponse {
    let flashes = session::take_flash(&session);
    html(views::login_page(&flashes, query.next.as_deref().unwrap_or("")))
}

pub async fn login(
    session: Session,
    config: web::Data<Config>,
    query: web::Query<NextQuery>,
    form: web::Form<LoginForm>,
) -> HttpResponse {
    if form.username == config.admin_user && form.password == config.admin_pass {
        session::set_admin(&session);
        session::flash(&session, "success", "Logged in as admin");
        // Only follow in-app targets.
        let next = match query.next.as_deref() {
            Some(path) if path.starts_with('/') => path,
            _ => "/admin/rooms",
        };
        return redirect(next);
    }

    // Deliberately the same message for unknown user and wrong password.
    session::flash(&session, "danger", "Invalid credentials");
    let flashes = session::take_flash(&session);
    html(views::login_page(&flashes, query.next.as_deref().unwrap_or("")))
}

pub async fn logout(session: Session) -> HttpResponse {
    session::clear_admin(&session);
    session::flash(&session, "success", "Logged out");
    redirect("/")
}
