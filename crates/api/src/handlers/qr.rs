//! Handlers serving the two static QR images.
//!
//! Each image encodes a fixed absolute URL built from `PUBLIC_BASE_URL`.
//! The codes never expire and are shared by all users.

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;

use crate::error::{AppError, AppResult};
use crate::qr::qr_png;
use crate::state::AppState;

/// GET /api/v1/register/qr -- PNG pointing at the registration form.
pub async fn registration_qr(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    serve_qr(&format!("{}/register", state.config.public_base_url))
}

/// GET /api/v1/checkin/qr -- PNG pointing at the check-in form.
pub async fn checkin_qr(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    serve_qr(&format!("{}/checkin", state.config.public_base_url))
}

fn serve_qr(url: &str) -> AppResult<impl IntoResponse> {
    let png = qr_png(url).map_err(|e| AppError::InternalError(format!("QR render failed: {e}")))?;
    Ok(([(CONTENT_TYPE, "image/png")], png))
}
