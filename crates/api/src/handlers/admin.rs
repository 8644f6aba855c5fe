//! Handlers for the admin member views (list and detail).
//!
//! All handlers require a valid session via [`AdminSession`].

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use turnstile_core::error::CoreError;
use turnstile_core::types::DbId;
use turnstile_db::models::entry::EntryRecord;
use turnstile_db::models::member::Member;
use turnstile_db::repositories::{EntryRepo, MemberRepo};
use turnstile_db::{clamp_limit, clamp_offset};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// Default member-list page size.
const MEMBERS_DEFAULT_LIMIT: i64 = 20;
/// Maximum member-list page size.
const MEMBERS_MAX_LIMIT: i64 = 100;

/// Query params for `GET /admin/members`.
#[derive(Debug, Deserialize)]
pub struct MemberListParams {
    /// Case-insensitive search over name, mobile number, and membership ID.
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Response payload for `GET /admin/members/{id}`.
#[derive(Debug, Serialize)]
pub struct MemberDetail {
    pub member: Member,
    /// All entry records for the member, most recent date first.
    pub entries: Vec<EntryRecord>,
    pub total_entries: usize,
}

/// GET /api/v1/admin/members
///
/// List registered members, newest first, with optional search and
/// pagination.
pub async fn list_members(
    _session: AdminSession,
    State(state): State<AppState>,
    Query(params): Query<MemberListParams>,
) -> AppResult<Json<DataResponse<Vec<Member>>>> {
    let limit = clamp_limit(params.limit, MEMBERS_DEFAULT_LIMIT, MEMBERS_MAX_LIMIT);
    let offset = clamp_offset(params.offset);

    let members =
        MemberRepo::list(&state.pool, params.search.as_deref(), limit, offset).await?;

    Ok(Json(DataResponse { data: members }))
}

/// GET /api/v1/admin/members/{id}
///
/// A member plus their full entry history, entries ordered by entry date
/// descending. 404 for unknown ids.
pub async fn member_detail(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MemberDetail>>> {
    let member = MemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Member",
            id,
        }))?;

    let entries = EntryRepo::list_for_member(&state.pool, member.id).await?;
    let total_entries = entries.len();

    Ok(Json(DataResponse {
        data: MemberDetail {
            member,
            entries,
            total_entries,
        },
    }))
}
