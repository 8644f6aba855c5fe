//! Member entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use turnstile_core::types::{DbId, Timestamp};

/// A row from the `members` table.
///
/// All columns except `id` and `registered_at` are caller-supplied at
/// creation and immutable afterwards (no update path exists).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Member {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub mobile_number: String,
    pub membership_id: String,
    pub registered_at: Timestamp,
}

/// DTO for inserting a new member. Built from validated registration input
/// plus a freshly generated membership identifier.
#[derive(Debug, Clone)]
pub struct CreateMember {
    pub name: String,
    pub age: i32,
    pub mobile_number: String,
    pub membership_id: String,
}
