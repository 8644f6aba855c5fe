use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use turnstile_core::error::{CheckInError, CoreError, ValidationError};

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain error taxonomy from `turnstile_core` and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce
/// consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A generic domain-level error from `turnstile_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A registration validation rejection.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A check-in admission rejection.
    #[error(transparent)]
    CheckIn(#[from] CheckInError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, detail) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                    None,
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone(), None)
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone(), None),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone(), None)
                }
                CoreError::IdentifierSpaceExhausted { attempts } => {
                    tracing::error!(attempts, "Membership identifier space exhausted");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "IDENTIFIER_SPACE_EXHAUSTED",
                        "Could not allocate a membership identifier".to_string(),
                        None,
                    )
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                        None,
                    )
                }
            },

            // --- Registration validation rejections ---
            AppError::Validation(v) => {
                let (status, code) = match v {
                    ValidationError::InvalidName => (StatusCode::BAD_REQUEST, "INVALID_NAME"),
                    ValidationError::InvalidAge => (StatusCode::BAD_REQUEST, "INVALID_AGE"),
                    ValidationError::InvalidMobile => (StatusCode::BAD_REQUEST, "INVALID_MOBILE"),
                    ValidationError::DuplicateMobile => (StatusCode::CONFLICT, "DUPLICATE_MOBILE"),
                };
                (status, code, v.to_string(), None)
            }

            // --- Check-in admission rejections ---
            AppError::CheckIn(c) => match c {
                CheckInError::MemberNotFound => (
                    StatusCode::NOT_FOUND,
                    "MEMBER_NOT_FOUND",
                    c.to_string(),
                    None,
                ),
                // Informational for the UX layer: carries the existing
                // entry's timestamp so it can be displayed.
                CheckInError::AlreadyCheckedIn { at } => (
                    StatusCode::CONFLICT,
                    "ALREADY_CHECKED_IN",
                    c.to_string(),
                    Some(json!({ "checked_in_at": at })),
                ),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone(), None)
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let (Some(obj), Some(detail)) = (body.as_object_mut(), detail) {
            if let Some(extra) = detail.as_object() {
                for (k, v) in extra {
                    obj.insert(k.clone(), v.clone());
                }
            }
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, message, and
/// optional detail object.
///
/// - `RowNotFound` maps to 404.
/// - Violations of the named unique constraints map to the corresponding
///   domain conflict. Handlers normally translate these before the error
///   reaches here; this mapping is the backstop for races the service-level
///   pre-checks miss.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(
    err: &sqlx::Error,
) -> (StatusCode, &'static str, String, Option<serde_json::Value>) {
    if let Some(constraint) = turnstile_db::unique_violation(err) {
        return match constraint.as_str() {
            "uq_members_mobile_number" => (
                StatusCode::CONFLICT,
                "DUPLICATE_MOBILE",
                ValidationError::DuplicateMobile.to_string(),
                None,
            ),
            "uq_entry_records_member_day" => (
                StatusCode::CONFLICT,
                "ALREADY_CHECKED_IN",
                "Already checked in today".to_string(),
                None,
            ),
            _ => (
                StatusCode::CONFLICT,
                "CONFLICT",
                format!("Duplicate value violates unique constraint: {constraint}"),
                None,
            ),
        };
    }

    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
            None,
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
                None,
            )
        }
    }
}
