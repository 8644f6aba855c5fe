//! Handlers for the `/checkin` resource.
//!
//! Admission control: a check-in is accepted only for a registered member,
//! at most once per UTC calendar day. The `(member_id, entry_date)` unique
//! constraint backstops the friendly same-day lookup, so a race between
//! two simultaneous check-ins still yields exactly one entry record.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use turnstile_core::error::{CheckInError, CoreError};
use turnstile_core::membership::is_membership_id;
use turnstile_db::models::entry::EntryRecord;
use turnstile_db::models::member::Member;
use turnstile_db::repositories::{EntryRepo, MemberRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /checkin` and `POST /checkin/precheck`.
///
/// Either identifier may be supplied. When both are present the mobile
/// number wins; the membership ID is only consulted when the mobile number
/// is absent or empty.
#[derive(Debug, Deserialize)]
pub struct CheckInRequest {
    pub mobile_number: Option<String>,
    pub membership_id: Option<String>,
}

/// Successful check-in payload.
#[derive(Debug, Serialize)]
pub struct CheckInResponse {
    pub entry: EntryRecord,
    pub member_name: String,
    pub membership_id: String,
}

/// Response body for `POST /checkin/precheck`, used by the form for
/// pre-submit feedback.
#[derive(Debug, Serialize)]
pub struct PrecheckResponse {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub already_checked_in_today: Option<bool>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/checkin
///
/// Admit a member for today. Returns 201 with the created entry record,
/// 404 if the identifier matches no member, or 409 carrying the existing
/// entry's timestamp if the member already checked in today.
pub async fn check_in(
    State(state): State<AppState>,
    Json(input): Json<CheckInRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<CheckInResponse>>)> {
    // 1. Resolve the identifier to a member; unknown identifiers are
    //    refused outright (no entry without prior registration).
    let member = lookup_member(&state.pool, &input)
        .await?
        .ok_or(CheckInError::MemberNotFound)?;

    // 2. Today's calendar date, computed from the current UTC time.
    let today = Utc::now().date_naive();

    // 3. Friendly same-day check, carrying the existing timestamp.
    if let Some(existing) = EntryRepo::find_by_member_and_date(&state.pool, member.id, today).await?
    {
        return Err(CheckInError::AlreadyCheckedIn {
            at: existing.entry_timestamp,
        }
        .into());
    }

    // 4. Insert. Losing a race to another check-in surfaces as a
    //    constraint violation, which we translate by re-reading the
    //    winning row for its timestamp.
    let entry = match EntryRepo::create(&state.pool, member.id, today).await {
        Ok(entry) => entry,
        Err(err)
            if turnstile_db::unique_violation(&err).as_deref()
                == Some("uq_entry_records_member_day") =>
        {
            let winner = EntryRepo::find_by_member_and_date(&state.pool, member.id, today)
                .await?
                .ok_or_else(|| {
                    AppError::InternalError("Entry vanished after constraint violation".into())
                })?;
            return Err(CheckInError::AlreadyCheckedIn {
                at: winner.entry_timestamp,
            }
            .into());
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(
        member_id = member.id,
        membership_id = %member.membership_id,
        entry_date = %entry.entry_date,
        "Member checked in"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CheckInResponse {
                entry,
                member_name: member.name,
                membership_id: member.membership_id,
            },
        }),
    ))
}

/// POST /api/v1/checkin/precheck
///
/// Pre-submit existence check for the check-in form. Never mutates; an
/// empty request reports `exists: false` rather than an error.
pub async fn precheck(
    State(state): State<AppState>,
    Json(input): Json<CheckInRequest>,
) -> AppResult<Json<PrecheckResponse>> {
    if identifier(&input.mobile_number).is_none() && identifier(&input.membership_id).is_none() {
        return Ok(Json(not_registered()));
    }

    let Some(member) = lookup_member(&state.pool, &input).await? else {
        return Ok(Json(not_registered()));
    };

    let today = Utc::now().date_naive();
    let already = EntryRepo::find_by_member_and_date(&state.pool, member.id, today)
        .await?
        .is_some();

    Ok(Json(PrecheckResponse {
        exists: true,
        name: Some(member.name),
        membership_id: Some(member.membership_id),
        already_checked_in_today: Some(already),
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn not_registered() -> PrecheckResponse {
    PrecheckResponse {
        exists: false,
        name: None,
        membership_id: None,
        already_checked_in_today: None,
    }
}

fn identifier(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Resolve a check-in identifier to a member.
///
/// Deterministic order: the mobile-number field wins when supplied,
/// otherwise the membership ID. The check-in form has a single input box
/// posting to `mobile_number`, so a well-formed `MEM-NNNNN` value in that
/// field is matched against the membership ID column instead. Rejects
/// requests carrying neither identifier.
async fn lookup_member(pool: &PgPool, input: &CheckInRequest) -> AppResult<Option<Member>> {
    match (identifier(&input.mobile_number), identifier(&input.membership_id)) {
        (Some(value), _) if is_membership_id(value) => {
            Ok(MemberRepo::find_by_membership_id(pool, value).await?)
        }
        (Some(mobile), _) => Ok(MemberRepo::find_by_mobile(pool, mobile).await?),
        (None, Some(membership_id)) => {
            Ok(MemberRepo::find_by_membership_id(pool, membership_id).await?)
        }
        (None, None) => Err(AppError::Core(CoreError::Validation(
            "Please enter either mobile number or membership ID".into(),
        ))),
    }
}
