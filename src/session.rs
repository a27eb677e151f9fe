//! Admin session flag and flash messages, both kept in the signed session
//! cookie. The `Session` extractor is passed explicitly into every handler
//! that needs it; there is no global state.

use actix_session::Session;
use serde::{Deserialize, Serialize};

const ADMIN_KEY: &str = "admin";
const FLASH_KEY: &str = "flash";

/// One queued flash message. `level` matches the alert categories the
/// pages render: `success`, `warning` or `danger`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flash {
    pub level: String,
    pub message: String,
}

pub fn is_admin(session: &Session) -> bool {
    session
        .get::<bool>(ADMIN_KEY)
        .unwrap_or(None)
        .unwrap_or(false)
}

pub fn set_admin(session: &Session) {
    let _ = session.insert(ADMIN_KEY, true);
}

pub fn clear_admin(session: &Session) {
    session.remove(ADMIN_KEY);
}

/// Queue a flash message for the next rendered page.
pub fn flash(session: &Session, level: &str, message: impl Into<String>) {
    let mut queued = take_flash(session);
    queued.push(Flash {
        level: level.to_string(),
        message: message.into(),
    });
    let _ = session.insert(FLASH_KEY, queued);
}

/// Drain all queued flash messages.
pub fn take_flash(session: &Session) -> Vec<Flash> {
    let queued = session
        .get::<Vec<Flash>>(FLASH_KEY)
        .unwrap_or(None)
        .unwrap_or_default();
    session.remove(FLASH_KEY);
    queued
}
