//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication.

use serde::Deserialize;
use turnstile_core::types::EntryDate;

/// A single optional date (`?date=YYYY-MM-DD`); handlers default it to
/// today's UTC calendar date.
#[derive(Debug, Deserialize)]
pub struct DateParam {
    pub date: Option<EntryDate>,
}

/// An optional date range (`?from=&to=`); handlers default it to the last
/// seven days.
#[derive(Debug, Deserialize)]
pub struct DateRangeParams {
    pub from: Option<EntryDate>,
    pub to: Option<EntryDate>,
}
