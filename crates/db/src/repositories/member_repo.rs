//! Repository for the `members` table.

use sqlx::PgPool;
use turnstile_core::types::DbId;

use crate::models::member::{CreateMember, Member};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, age, mobile_number, membership_id, registered_at";

/// Escape LIKE metacharacters so a search term matches itself literally
/// inside an ILIKE pattern.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Provides access to registered members.
pub struct MemberRepo;

impl MemberRepo {
    /// Insert a new member, returning the created row.
    ///
    /// A racing duplicate mobile number or membership ID surfaces as a
    /// unique-constraint violation; callers translate via
    /// [`crate::unique_violation`].
    pub async fn create(pool: &PgPool, input: &CreateMember) -> Result<Member, sqlx::Error> {
        let query = format!(
            "INSERT INTO members (name, age, mobile_number, membership_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(&input.name)
            .bind(input.age)
            .bind(&input.mobile_number)
            .bind(&input.membership_id)
            .fetch_one(pool)
            .await
    }

    /// Find a member by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE id = $1");
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a member by mobile number (exact match).
    pub async fn find_by_mobile(
        pool: &PgPool,
        mobile_number: &str,
    ) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE mobile_number = $1");
        sqlx::query_as::<_, Member>(&query)
            .bind(mobile_number)
            .fetch_optional(pool)
            .await
    }

    /// Find a member by membership identifier (exact match).
    pub async fn find_by_membership_id(
        pool: &PgPool,
        membership_id: &str,
    ) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE membership_id = $1");
        sqlx::query_as::<_, Member>(&query)
            .bind(membership_id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a membership identifier is already assigned.
    ///
    /// Used by the identifier-generation retry loop; each call is an
    /// independent read, never part of a longer transaction.
    pub async fn membership_id_exists(
        pool: &PgPool,
        membership_id: &str,
    ) -> Result<bool, sqlx::Error> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM members WHERE membership_id = $1)")
                .bind(membership_id)
                .fetch_one(pool)
                .await?;
        Ok(exists.0)
    }

    /// List members, most recently registered first, with optional
    /// case-insensitive search over name, mobile number, and membership ID.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Member>, sqlx::Error> {
        match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM members
                     WHERE name ILIKE $1 OR mobile_number ILIKE $1 OR membership_id ILIKE $1
                     ORDER BY registered_at DESC
                     LIMIT $2 OFFSET $3"
                );
                sqlx::query_as::<_, Member>(&query)
                    .bind(format!("%{}%", escape_like(term)))
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM members
                     ORDER BY registered_at DESC
                     LIMIT $1 OFFSET $2"
                );
                sqlx::query_as::<_, Member>(&query)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// The most recently registered members, newest first.
    pub async fn recent(pool: &PgPool, limit: i64) -> Result<Vec<Member>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM members ORDER BY registered_at DESC LIMIT $1"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Total number of registered members.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM members")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Delete a member. Entry records cascade in the same statement's
    /// transaction via the foreign-key `ON DELETE CASCADE`.
    ///
    /// Not routed over HTTP; exists so the referential-integrity invariant
    /// holds if a delete operation is ever exposed. Returns `true` if a
    /// row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
