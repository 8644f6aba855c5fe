//! Read-only aggregate queries for the admin reporting views.

use sqlx::PgPool;
use turnstile_core::types::EntryDate;

use crate::models::entry::DailyCount;
use crate::models::member::Member;

/// Provides admin reporting aggregates. Never mutates.
pub struct ReportRepo;

impl ReportRepo {
    /// Members with no entry record on `date`, ordered by name.
    ///
    /// Computed as a single relational anti-join rather than diffing two
    /// full result sets in application code.
    pub async fn members_not_entered_on(
        pool: &PgPool,
        date: EntryDate,
    ) -> Result<Vec<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>(
            "SELECT m.id, m.name, m.age, m.mobile_number, m.membership_id, m.registered_at \
             FROM members m \
             WHERE NOT EXISTS ( \
                 SELECT 1 FROM entry_records e \
                 WHERE e.member_id = m.id AND e.entry_date = $1 \
             ) \
             ORDER BY m.name ASC",
        )
        .bind(date)
        .fetch_all(pool)
        .await
    }

    /// Entry counts per day within `[from, to]`, descending by date.
    ///
    /// Days with no entries produce no bucket.
    pub async fn daily_entry_trend(
        pool: &PgPool,
        from: EntryDate,
        to: EntryDate,
    ) -> Result<Vec<DailyCount>, sqlx::Error> {
        sqlx::query_as::<_, DailyCount>(
            "SELECT entry_date AS date, COUNT(id) AS count \
             FROM entry_records \
             WHERE entry_date BETWEEN $1 AND $2 \
             GROUP BY entry_date \
             ORDER BY entry_date DESC",
        )
        .bind(from)
        .bind(to)
        .fetch_all(pool)
        .await
    }

    /// Registration counts per day within `[from, to]`, grouped by the
    /// date-truncated `registered_at`, descending by date.
    pub async fn registration_trend(
        pool: &PgPool,
        from: EntryDate,
        to: EntryDate,
    ) -> Result<Vec<DailyCount>, sqlx::Error> {
        sqlx::query_as::<_, DailyCount>(
            "SELECT (registered_at AT TIME ZONE 'UTC')::date AS date, COUNT(id) AS count \
             FROM members \
             WHERE (registered_at AT TIME ZONE 'UTC')::date BETWEEN $1 AND $2 \
             GROUP BY date \
             ORDER BY date DESC",
        )
        .bind(from)
        .bind(to)
        .fetch_all(pool)
        .await
    }

    /// Number of distinct members with an entry on `date`.
    pub async fn members_entered_on_count(
        pool: &PgPool,
        date: EntryDate,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(DISTINCT member_id) FROM entry_records WHERE entry_date = $1",
        )
        .bind(date)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }
}
