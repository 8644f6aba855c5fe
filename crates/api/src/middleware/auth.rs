//! Session-cookie authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use chrono::Utc;
use turnstile_core::error::CoreError;

use crate::auth::session::{verify_token, SESSION_COOKIE};
use crate::error::AppError;
use crate::state::AppState;

/// A verified admin session extracted from the session cookie.
///
/// Use this as an extractor parameter in any admin-gated handler; the
/// handler body runs only if the cookie carries a valid, unexpired token:
///
/// ```ignore
/// async fn admin_only(_session: AdminSession) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminSession;

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|header| header.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .map(|(_, value)| value.to_string())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Admin login required".into()))
            })?;

        if !verify_token(&state.config.session, &token, Utc::now()) {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Session expired or invalid. Please login again.".into(),
            )));
        }

        Ok(AdminSession)
    }
}
