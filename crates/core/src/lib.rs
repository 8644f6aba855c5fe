//! Domain logic shared across the turnstile backend.
//!
//! Pure types and rules only: the error taxonomy, registration input
//! validation, and the membership identifier format. No I/O lives here.

pub mod error;
pub mod membership;
pub mod types;
pub mod validation;
