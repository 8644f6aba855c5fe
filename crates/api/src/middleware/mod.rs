//! Authentication middleware extractors.
//!
//! - [`auth::AdminSession`] -- Extracts a verified admin session from the
//!   session cookie.

pub mod auth;
