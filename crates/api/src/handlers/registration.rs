//! Handlers for the `/register` resource.
//!
//! Registration is the only way members come into existence. The flow
//! validates input, allocates a unique membership identifier, and inserts
//! the member; the `uq_members_mobile_number` constraint is the
//! authoritative duplicate guard, with the pre-check existing only for a
//! friendlier error message.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use rand::rngs::OsRng;
use rand::TryRngCore;
use serde::Deserialize;
use sqlx::PgPool;
use turnstile_core::error::{CoreError, ValidationError};
use turnstile_core::membership::format_membership_id;
use turnstile_core::validation::validate_registration;
use turnstile_db::models::member::{CreateMember, Member};
use turnstile_db::repositories::MemberRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Defensive cap on identifier-generation attempts. At ~1/100,000
/// collision probability per draw this is effectively unreachable until
/// the identifier space is nearly full.
const MAX_ID_ATTEMPTS: u32 = 1_000;

/// Request body for `POST /register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub age: i32,
    pub mobile_number: String,
}

/// POST /api/v1/register
///
/// Validate and create a member. Returns 201 with the created row,
/// including the freshly assigned membership identifier.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Member>>)> {
    // 1. Shape checks: name, age, mobile (first failure wins).
    let valid = validate_registration(&input.name, input.age, &input.mobile_number)?;

    // 2. Duplicate pre-check for a friendly error; the unique constraint
    //    remains the guard against a racing registration.
    if MemberRepo::find_by_mobile(&state.pool, &valid.mobile_number)
        .await?
        .is_some()
    {
        return Err(ValidationError::DuplicateMobile.into());
    }

    // 3. Allocate a membership identifier.
    let membership_id = generate_membership_id(&state.pool).await?;

    // 4. Insert. A constraint violation here means we lost a race.
    let create = CreateMember {
        name: valid.name,
        age: valid.age,
        mobile_number: valid.mobile_number,
        membership_id,
    };
    let member = MemberRepo::create(&state.pool, &create)
        .await
        .map_err(|err| {
            match turnstile_db::unique_violation(&err).as_deref() {
                Some("uq_members_mobile_number") => ValidationError::DuplicateMobile.into(),
                _ => AppError::Database(err),
            }
        })?;

    tracing::info!(
        member_id = member.id,
        membership_id = %member.membership_id,
        "Member registered"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: member })))
}

/// Draw random `MEM-NNNNN` identifiers until one is unused.
///
/// Each existence check is its own read; no transaction is held across
/// retries. The attempt cap turns a (practically impossible) full
/// identifier space into a clean error instead of an endless loop.
async fn generate_membership_id(pool: &PgPool) -> AppResult<String> {
    for attempt in 1..=MAX_ID_ATTEMPTS {
        let suffix = OsRng
            .try_next_u32()
            .map_err(|e| AppError::InternalError(format!("OS random source failed: {e}")))?;
        let candidate = format_membership_id(suffix);

        if !MemberRepo::membership_id_exists(pool, &candidate).await? {
            return Ok(candidate);
        }
        tracing::debug!(attempt, %candidate, "Membership ID collision, retrying");
    }

    Err(AppError::Core(CoreError::IdentifierSpaceExhausted {
        attempts: MAX_ID_ATTEMPTS,
    }))
}
