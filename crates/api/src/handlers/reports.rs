//! Handlers for the admin reporting views (dashboard stats, daily logs,
//! trends). Read-only; all require a valid session via [`AdminSession`].

use axum::extract::{Query, State};
use axum::Json;
use chrono::{Duration, Utc};
use serde::Serialize;
use turnstile_core::error::CoreError;
use turnstile_core::types::EntryDate;
use turnstile_db::models::entry::{DailyCount, EntryWithMember};
use turnstile_db::models::member::Member;
use turnstile_db::repositories::{EntryRepo, MemberRepo, ReportRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::query::{DateParam, DateRangeParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// How many recent registrations the dashboard shows.
const RECENT_REGISTRATIONS: i64 = 5;
/// Default trend window in days.
const DEFAULT_TREND_DAYS: i64 = 7;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Dashboard statistics for `GET /admin/stats`.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_members: i64,
    pub entered_today: i64,
    pub not_entered_today: i64,
    pub today_entry_count: i64,
    pub recent_registrations: Vec<Member>,
}

/// Daily-log payload for `GET /admin/entries`.
#[derive(Debug, Serialize)]
pub struct EntriesOnDate {
    pub date: EntryDate,
    pub entries: Vec<EntryWithMember>,
}

/// Not-entered payload for `GET /admin/members/not-entered`.
#[derive(Debug, Serialize)]
pub struct NotEnteredOnDate {
    pub date: EntryDate,
    pub members: Vec<Member>,
}

/// Trend payload for `GET /admin/trends`.
#[derive(Debug, Serialize)]
pub struct TrendsResponse {
    pub from: EntryDate,
    pub to: EntryDate,
    /// Check-in counts per day, descending by date.
    pub daily_entries: Vec<DailyCount>,
    /// Registration counts per day, descending by date.
    pub registrations: Vec<DailyCount>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/stats
///
/// Key dashboard numbers plus the most recent registrations.
pub async fn stats(
    _session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<StatsResponse>>> {
    let today = Utc::now().date_naive();

    let total_members = MemberRepo::count(&state.pool).await?;
    let entered_today = ReportRepo::members_entered_on_count(&state.pool, today).await?;
    let today_entry_count = EntryRepo::count_on_date(&state.pool, today).await?;
    let recent_registrations = MemberRepo::recent(&state.pool, RECENT_REGISTRATIONS).await?;

    Ok(Json(DataResponse {
        data: StatsResponse {
            total_members,
            entered_today,
            not_entered_today: total_members - entered_today,
            today_entry_count,
            recent_registrations,
        },
    }))
}

/// GET /api/v1/admin/entries?date=
///
/// Entry log for a date (default: today, UTC), joined with member display
/// fields, newest first.
pub async fn entries_on_date(
    _session: AdminSession,
    State(state): State<AppState>,
    Query(params): Query<DateParam>,
) -> AppResult<Json<DataResponse<EntriesOnDate>>> {
    let date = params.date.unwrap_or_else(|| Utc::now().date_naive());
    let entries = EntryRepo::list_on_date(&state.pool, date).await?;

    Ok(Json(DataResponse {
        data: EntriesOnDate { date, entries },
    }))
}

/// GET /api/v1/admin/members/not-entered?date=
///
/// Members without an entry on the date (default: today, UTC), ordered by
/// name.
pub async fn members_not_entered(
    _session: AdminSession,
    State(state): State<AppState>,
    Query(params): Query<DateParam>,
) -> AppResult<Json<DataResponse<NotEnteredOnDate>>> {
    let date = params.date.unwrap_or_else(|| Utc::now().date_naive());
    let members = ReportRepo::members_not_entered_on(&state.pool, date).await?;

    Ok(Json(DataResponse {
        data: NotEnteredOnDate { date, members },
    }))
}

/// GET /api/v1/admin/trends?from=&to=
///
/// Daily entry and registration counts over a date range (default: the
/// last 7 days), both descending by date.
pub async fn trends(
    _session: AdminSession,
    State(state): State<AppState>,
    Query(params): Query<DateRangeParams>,
) -> AppResult<Json<DataResponse<TrendsResponse>>> {
    let to = params.to.unwrap_or_else(|| Utc::now().date_naive());
    let from = params
        .from
        .unwrap_or_else(|| to - Duration::days(DEFAULT_TREND_DAYS - 1));

    if from > to {
        return Err(AppError::Core(CoreError::Validation(
            "'from' must not be after 'to'".into(),
        )));
    }

    let daily_entries = ReportRepo::daily_entry_trend(&state.pool, from, to).await?;
    let registrations = ReportRepo::registration_trend(&state.pool, from, to).await?;

    Ok(Json(DataResponse {
        data: TrendsResponse {
            from,
            to,
            daily_entries,
            registrations,
        },
    }))
}
