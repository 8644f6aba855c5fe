//! Entry record entity models and reporting rows.

use serde::Serialize;
use sqlx::FromRow;
use turnstile_core::types::{DbId, EntryDate, Timestamp};

/// A row from the `entry_records` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EntryRecord {
    pub id: DbId,
    pub member_id: DbId,
    pub entry_date: EntryDate,
    pub entry_timestamp: Timestamp,
    /// Reserved for future duration tracking; never written.
    pub exit_timestamp: Option<Timestamp>,
}

/// An entry record joined with the member's display fields, for the admin
/// daily log view.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EntryWithMember {
    pub id: DbId,
    pub member_id: DbId,
    pub entry_date: EntryDate,
    pub entry_timestamp: Timestamp,
    pub member_name: String,
    pub mobile_number: String,
    pub membership_id: String,
}

/// One `(date, count)` bucket of a trend aggregation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DailyCount {
    pub date: EntryDate,
    pub count: i64,
}
