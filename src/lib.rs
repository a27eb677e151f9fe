//! Hotel reservation management: public room browsing and booking, plus a
//! session-gated admin section for room inventory and booking lifecycle.
//!
//! The booking write paths in [`db::bookings`] keep the room `available`
//! flag consistent with booking status; everything else is CRUD plumbing.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod session;
pub mod views;
