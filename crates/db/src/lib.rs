//! PostgreSQL persistence for the turnstile backend.
//!
//! Pool construction, embedded migrations, row models, and repositories.
//! Repositories return `sqlx::Error`; translation into domain errors
//! happens at the service layer via [`unique_violation`].

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial round-trip query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from the embedded `migrations/` directory.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// If `err` is a PostgreSQL unique-constraint violation (error code 23505),
/// return the violated constraint's name.
///
/// The service layer matches on the name (`uq_members_mobile_number`,
/// `uq_entry_records_member_day`) to turn a racing duplicate write into the
/// corresponding domain error instead of a raw storage failure.
pub fn unique_violation(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            db_err.constraint().map(str::to_string)
        }
        _ => None,
    }
}

/// Clamp a requested page size into `1..=max`, defaulting to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}

/// Clamp a requested offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
