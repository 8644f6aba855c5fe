//! Admin authentication primitives.
//!
//! - [`session`] -- HMAC-signed expiring session tokens carried in a cookie.

pub mod session;
