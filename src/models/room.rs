use serde::{Deserialize, Serialize};

/// A bookable room. `available` is a plain 0/1 flag kept in sync with the
/// booking lifecycle by the write paths in `db::bookings` — there is no
/// constraint or trigger behind it.
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Room {
    pub id: i64,
    pub number: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    pub available: bool,
}

/// Admin room form (create and edit). The availability checkbox only posts
/// a value when ticked.
#[derive(Debug, Deserialize)]
pub struct RoomForm {
    pub number: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    pub available: Option<String>,
}

impl RoomForm {
    pub fn is_available(&self) -> bool {
        self.available.as_deref() == Some("on")
    }
}
