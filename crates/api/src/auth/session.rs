//! Admin session tokens.
//!
//! A session token is `{expiry}.{signature}` where `expiry` is a UTC Unix
//! timestamp and `signature` is the base64url-encoded HMAC-SHA256 of the
//! expiry string under the configured secret. The token is opaque to the
//! browser and stored in an HttpOnly cookie; nothing is stored server-side,
//! so "logout" is simply clearing the cookie.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use turnstile_core::types::Timestamp;

type HmacSha256 = Hmac<Sha256>;

/// Name of the admin session cookie.
pub const SESSION_COOKIE: &str = "turnstile_admin_session";

/// Default session lifetime in seconds (2 hours).
const DEFAULT_TTL_SECS: i64 = 7200;

/// Configuration for admin session tokens.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Session lifetime in seconds (default: 7200).
    pub ttl_secs: i64,
}

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// | Env Var            | Required | Default |
    /// |--------------------|----------|---------|
    /// | `SESSION_SECRET`   | **yes**  | --      |
    /// | `SESSION_TTL_SECS` | no       | `7200`  |
    ///
    /// # Panics
    ///
    /// Panics if `SESSION_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "SESSION_SECRET must not be empty");

        let ttl_secs: i64 = std::env::var("SESSION_TTL_SECS")
            .unwrap_or_else(|_| DEFAULT_TTL_SECS.to_string())
            .parse()
            .expect("SESSION_TTL_SECS must be a valid i64");

        Self { secret, ttl_secs }
    }
}

fn sign(secret: &str, payload: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(payload.as_bytes());
    URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
}

/// Issue a session token expiring `config.ttl_secs` after `now`.
pub fn issue_token(config: &SessionConfig, now: Timestamp) -> String {
    let expiry = (now.timestamp() + config.ttl_secs).to_string();
    let signature = sign(&config.secret, &expiry);
    format!("{expiry}.{signature}")
}

/// Verify a session token's signature and expiry against `now`.
///
/// Returns `false` for malformed, tampered, or expired tokens. Signature
/// comparison is constant-time via the hmac crate's `verify_slice`.
pub fn verify_token(config: &SessionConfig, token: &str, now: Timestamp) -> bool {
    let Some((expiry, signature)) = token.split_once('.') else {
        return false;
    };
    let Ok(expiry_ts) = expiry.parse::<i64>() else {
        return false;
    };
    if expiry_ts <= now.timestamp() {
        return false;
    }
    let Ok(sig_bytes) = URL_SAFE_NO_PAD.decode(signature) else {
        return false;
    };

    let mut mac = HmacSha256::new_from_slice(config.secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(expiry.as_bytes());
    mac.verify_slice(&sig_bytes).is_ok()
}

/// `Set-Cookie` value establishing the admin session.
pub fn session_cookie_value(token: &str, ttl_secs: i64) -> String {
    format!("{SESSION_COOKIE}={token}; Max-Age={ttl_secs}; Path=/; HttpOnly; SameSite=Lax")
}

/// `Set-Cookie` value clearing the admin session.
pub fn clear_cookie_value() -> String {
    format!("{SESSION_COOKIE}=; Max-Age=0; Path=/; HttpOnly; SameSite=Lax")
}
