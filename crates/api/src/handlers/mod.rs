//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the repositories in `turnstile_db` and map errors
//! via [`AppError`](crate::error::AppError).

pub mod admin;
pub mod auth;
pub mod checkin;
pub mod qr;
pub mod registration;
pub mod reports;
