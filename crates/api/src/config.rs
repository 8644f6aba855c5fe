use crate::auth::session::SessionConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Absolute base URL encoded into the static QR codes
    /// (default: `http://localhost:3000`).
    pub public_base_url: String,
    /// Shared admin username.
    pub admin_username: String,
    /// Shared admin password.
    pub admin_password: String,
    /// Admin session cookie configuration (secret, lifetime).
    pub session: SessionConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                  |
    /// |------------------------|--------------------------|
    /// | `HOST`                 | `0.0.0.0`                |
    /// | `PORT`                 | `3000`                   |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                     |
    /// | `PUBLIC_BASE_URL`      | `http://localhost:3000`  |
    /// | `ADMIN_USERNAME`       | `admin`                  |
    /// | `ADMIN_PASSWORD`       | --  (required)           |
    ///
    /// # Panics
    ///
    /// Panics if `ADMIN_PASSWORD` is unset or a numeric variable fails to
    /// parse; misconfiguration should fail fast at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let public_base_url = std::env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .trim_end_matches('/')
            .to_string();

        let admin_username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into());
        let admin_password =
            std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set in the environment");
        assert!(!admin_password.is_empty(), "ADMIN_PASSWORD must not be empty");

        let session = SessionConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            public_base_url,
            admin_username,
            admin_password,
            session,
        }
    }
}
