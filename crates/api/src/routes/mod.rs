pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /register                     register a member (POST, public)
/// /register/qr                  registration form QR code (GET, public)
///
/// /checkin                      check a member in for today (POST, public)
/// /checkin/precheck             pre-submit identifier lookup (POST, public)
/// /checkin/qr                   check-in form QR code (GET, public)
///
/// /admin/login                  admin login, sets session cookie (POST)
/// /admin/logout                 clear session cookie (POST)
///
/// /admin/stats                  dashboard statistics (GET, session)
/// /admin/members                member list with search (GET, session)
/// /admin/members/not-entered    members without an entry on a date (GET, session)
/// /admin/members/{id}           member detail with entry history (GET, session)
/// /admin/entries                entry log for a date (GET, session)
/// /admin/trends                 entry and registration trends (GET, session)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Public registration endpoints.
        .route("/register", post(handlers::registration::register))
        .route("/register/qr", get(handlers::qr::registration_qr))
        // Public check-in endpoints.
        .route("/checkin", post(handlers::checkin::check_in))
        .route("/checkin/precheck", post(handlers::checkin::precheck))
        .route("/checkin/qr", get(handlers::qr::checkin_qr))
        // Admin session endpoints.
        .route("/admin/login", post(handlers::auth::login))
        .route("/admin/logout", post(handlers::auth::logout))
        // Admin reporting endpoints (session required via extractor).
        .route("/admin/stats", get(handlers::reports::stats))
        .route("/admin/members", get(handlers::admin::list_members))
        .route(
            "/admin/members/not-entered",
            get(handlers::reports::members_not_entered),
        )
        .route("/admin/members/{id}", get(handlers::admin::member_detail))
        .route("/admin/entries", get(handlers::reports::entries_on_date))
        .route("/admin/trends", get(handlers::reports::trends))
}
