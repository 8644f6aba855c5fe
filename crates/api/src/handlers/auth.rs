//! Handlers for admin login and logout.
//!
//! Authentication is a single shared credential pair from configuration.
//! A successful login sets an HttpOnly cookie holding an HMAC-signed
//! expiring token (see [`crate::auth::session`]); logout clears it.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::{AppendHeaders, IntoResponse};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use turnstile_core::error::CoreError;

use crate::auth::session::{clear_cookie_value, issue_token, session_cookie_value};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /admin/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload returned on successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub username: String,
    /// Session lifetime in seconds.
    pub expires_in: i64,
}

/// POST /api/v1/admin/login
///
/// Compare credentials against the configured admin secrets; on success
/// set the session cookie.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let config = &state.config;

    if input.username != config.admin_username || input.password != config.admin_password {
        tracing::warn!(username = %input.username, "Failed admin login attempt");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    let token = issue_token(&config.session, Utc::now());
    let cookie = session_cookie_value(&token, config.session.ttl_secs);

    tracing::info!(username = %input.username, "Admin logged in");

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(DataResponse {
            data: LoginResponse {
                username: input.username,
                expires_in: config.session.ttl_secs,
            },
        }),
    ))
}

/// POST /api/v1/admin/logout
///
/// Clear the session cookie. Returns 204 No Content.
pub async fn logout() -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, clear_cookie_value())]),
        StatusCode::NO_CONTENT,
    )
}
