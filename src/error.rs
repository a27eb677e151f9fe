//! Application error taxonomy.
//!
//! Everything except [`AppError::Database`] is recoverable: handlers turn
//! those variants into a flash message and a redirect, with no mutation
//! having happened. Store-level failures propagate and terminate the
//! request with a generic 500.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Please provide name, check-in and check-out dates.")]
    MissingFields,

    #[error("Dates must be in YYYY-MM-DD format.")]
    MalformedDate,

    #[error("Check-out must be after check-in.")]
    NonChronologicalDates,

    #[error("Selected {0} does not exist.")]
    NotFound(&'static str),

    #[error("Selected room is not available.")]
    RoomUnavailable,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// Flash category used when the error is surfaced to the user.
    pub fn flash_level(&self) -> &'static str {
        match self {
            AppError::RoomUnavailable => "warning",
            _ => "danger",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Database(e) => {
                log::error!("database error: {e}");
                HttpResponse::InternalServerError().body("Internal server error")
            }
            other => HttpResponse::build(other.status_code()).body(other.to_string()),
        }
    }
}
