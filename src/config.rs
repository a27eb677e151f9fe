//! Environment-backed configuration.

use actix_web::cookie::Key;
use std::env;

/// Runtime configuration, read once at startup from the environment
/// (optionally loaded from a `.env` file).
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub admin_user: String,
    pub admin_pass: String,
    pub session_key: Key,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://hotel.db?mode=rwc".to_string());
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let admin_user = env::var("ADMIN_USER").unwrap_or_else(|_| "admin".to_string());
        let admin_pass = env::var("ADMIN_PASS").unwrap_or_else(|_| "admin".to_string());

        // Signed-cookie key. SECRET_KEY must carry at least 64 bytes; a
        // fresh key per process invalidates sessions across restarts, which
        // is fine for this app.
        let session_key = match env::var("SECRET_KEY") {
            Ok(secret) if secret.len() >= 64 => Key::from(secret.as_bytes()),
            Ok(_) => {
                log::warn!("SECRET_KEY is shorter than 64 bytes, generating a random session key");
                Key::generate()
            }
            Err(_) => Key::generate(),
        };

        Self {
            database_url,
            bind_addr,
            admin_user,
            admin_pass,
            session_key,
        }
    }
}
