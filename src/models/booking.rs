use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;

pub const STATUS_BOOKED: &str = "booked";
pub const STATUS_CHECKED_IN: &str = "checked-in";
pub const STATUS_CHECKED_OUT: &str = "checked-out";
pub const STATUS_CANCELLED: &str = "cancelled";

/// The statuses an admin can pick on the booking detail form.
pub const KNOWN_STATUSES: [&str; 4] = [
    STATUS_BOOKED,
    STATUS_CHECKED_IN,
    STATUS_CHECKED_OUT,
    STATUS_CANCELLED,
];

/// Room availability implied by a booking status.
///
/// `Some(true)` when the status releases the room, `Some(false)` when it
/// occupies it. Any other status string is written verbatim and leaves the
/// room flag untouched, so this returns `None` for it.
pub fn room_available_after(status: &str) -> Option<bool> {
    match status {
        STATUS_CANCELLED | STATUS_CHECKED_OUT => Some(true),
        STATUS_BOOKED | STATUS_CHECKED_IN => Some(false),
        _ => None,
    }
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Booking {
    pub id: i64,
    pub customer_name: String,
    pub room_id: i64,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub status: String,
}

/// Booking row joined with the referenced room's display number, as shown
/// on the public and admin listing pages.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct BookingWithRoom {
    pub id: i64,
    pub customer_name: String,
    pub room_id: i64,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub status: String,
    pub room_number: String,
}

/// Raw public booking form. Everything arrives as text; `parse` turns it
/// into a checked [`BookingRequest`] or a specific rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct BookingForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub room_id: String,
    #[validate(length(min = 1))]
    pub checkin: String,
    #[validate(length(min = 1))]
    pub checkout: String,
}

/// A validated booking request ready to hit the store.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub customer_name: String,
    pub room_id: i64,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
}

impl BookingForm {
    /// Validate field presence, date format (`YYYY-MM-DD`) and chronological
    /// order. A non-numeric room reference can never resolve to a row, so it
    /// is reported as "room not found" rather than a format error.
    pub fn parse(&self) -> Result<BookingRequest, AppError> {
        if self.validate().is_err() {
            return Err(AppError::MissingFields);
        }

        let checkin = NaiveDate::parse_from_str(self.checkin.trim(), "%Y-%m-%d")
            .map_err(|_| AppError::MalformedDate)?;
        let checkout = NaiveDate::parse_from_str(self.checkout.trim(), "%Y-%m-%d")
            .map_err(|_| AppError::MalformedDate)?;

        if checkin >= checkout {
            return Err(AppError::NonChronologicalDates);
        }

        let room_id: i64 = self
            .room_id
            .trim()
            .parse()
            .map_err(|_| AppError::NotFound("room"))?;

        Ok(BookingRequest {
            customer_name: self.name.trim().to_string(),
            room_id,
            checkin,
            checkout,
        })
    }
}
