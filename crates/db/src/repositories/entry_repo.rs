//! Repository for the `entry_records` table.

use sqlx::PgPool;
use turnstile_core::types::{DbId, EntryDate};

use crate::models::entry::{EntryRecord, EntryWithMember};

const COLUMNS: &str = "id, member_id, entry_date, entry_timestamp, exit_timestamp";

/// Provides access to check-in entry records.
pub struct EntryRepo;

impl EntryRepo {
    /// Insert an entry record for a member on a date, returning the row.
    ///
    /// `entry_timestamp` is set server-side to `NOW()`. A racing same-day
    /// duplicate violates `uq_entry_records_member_day`; callers translate
    /// via [`crate::unique_violation`].
    pub async fn create(
        pool: &PgPool,
        member_id: DbId,
        entry_date: EntryDate,
    ) -> Result<EntryRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO entry_records (member_id, entry_date)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EntryRecord>(&query)
            .bind(member_id)
            .bind(entry_date)
            .fetch_one(pool)
            .await
    }

    /// Find a member's entry on a given date, if any.
    pub async fn find_by_member_and_date(
        pool: &PgPool,
        member_id: DbId,
        entry_date: EntryDate,
    ) -> Result<Option<EntryRecord>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM entry_records WHERE member_id = $1 AND entry_date = $2");
        sqlx::query_as::<_, EntryRecord>(&query)
            .bind(member_id)
            .bind(entry_date)
            .fetch_optional(pool)
            .await
    }

    /// All entries on a date joined with member display fields, newest first.
    pub async fn list_on_date(
        pool: &PgPool,
        entry_date: EntryDate,
    ) -> Result<Vec<EntryWithMember>, sqlx::Error> {
        sqlx::query_as::<_, EntryWithMember>(
            "SELECT e.id, e.member_id, e.entry_date, e.entry_timestamp, \
                    m.name AS member_name, m.mobile_number, m.membership_id \
             FROM entry_records e \
             JOIN members m ON m.id = e.member_id \
             WHERE e.entry_date = $1 \
             ORDER BY e.entry_timestamp DESC",
        )
        .bind(entry_date)
        .fetch_all(pool)
        .await
    }

    /// All entries for one member, most recent date first.
    pub async fn list_for_member(
        pool: &PgPool,
        member_id: DbId,
    ) -> Result<Vec<EntryRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM entry_records
             WHERE member_id = $1
             ORDER BY entry_date DESC"
        );
        sqlx::query_as::<_, EntryRecord>(&query)
            .bind(member_id)
            .fetch_all(pool)
            .await
    }

    /// Number of entries on a date.
    pub async fn count_on_date(pool: &PgPool, entry_date: EntryDate) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM entry_records WHERE entry_date = $1")
            .bind(entry_date)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
