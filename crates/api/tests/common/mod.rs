//! Shared helpers for API integration tests.
//!
//! Tests build the real application router via [`build_app_router`] so they
//! exercise the same middleware stack (CORS, request ID, timeout, tracing,
//! panic recovery) that production uses.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use turnstile_api::auth::session::SessionConfig;
use turnstile_api::config::ServerConfig;
use turnstile_api::router::build_app_router;
use turnstile_api::state::AppState;

/// Admin credentials used by [`test_config`] and [`login`].
pub const TEST_ADMIN_USERNAME: &str = "admin";
pub const TEST_ADMIN_PASSWORD: &str = "test-admin-password";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        public_base_url: "http://localhost:3000".to_string(),
        admin_username: TEST_ADMIN_USERNAME.to_string(),
        admin_password: TEST_ADMIN_PASSWORD.to_string(),
        session: SessionConfig {
            secret: "test-session-secret".to_string(),
            ttl_secs: 7200,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a Cookie header.
pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Consume a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
}

/// Log in with the test admin credentials and return the session cookie
/// (`name=value`, ready for a Cookie header).
pub async fn login(app: Router) -> String {
    let response = post_json(
        app,
        "/api/v1/admin/login",
        serde_json::json!({
            "username": TEST_ADMIN_USERNAME,
            "password": TEST_ADMIN_PASSWORD,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK, "login must succeed");

    let set_cookie = response
        .headers()
        .get("set-cookie")
        .expect("login must set the session cookie")
        .to_str()
        .unwrap();

    set_cookie
        .split(';')
        .next()
        .expect("cookie header must have a name=value part")
        .to_string()
}

/// Register a member through the API and return the created member JSON.
pub async fn register_member(
    app: Router,
    name: &str,
    age: i32,
    mobile_number: &str,
) -> serde_json::Value {
    let response = post_json(
        app,
        "/api/v1/register",
        serde_json::json!({
            "name": name,
            "age": age,
            "mobile_number": mobile_number,
        }),
    )
    .await;
    assert_eq!(
        response.status(),
        StatusCode::CREATED,
        "registration must succeed"
    );
    body_json(response).await["data"].clone()
}

/// Check a member in by mobile number and return the response.
pub async fn check_in_by_mobile(app: Router, mobile_number: &str) -> Response<Body> {
    post_json(
        app,
        "/api/v1/checkin",
        serde_json::json!({ "mobile_number": mobile_number }),
    )
    .await
}
