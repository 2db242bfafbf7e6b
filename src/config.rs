//! Endpoint configuration for the ClassPoint backend services.
//!
//! The backend exposes three logical bases: the users service (login and
//! registration), the auth service (token refresh), and the resource API
//! root (courses, quizzes, image upload). Defaults point at a local
//! development backend; `Config::from_env` reads overrides from the
//! environment, honoring a `.env` file if present.

/// Backend root used when no environment override is set.
const DEFAULT_ROOT: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for login/registration endpoints.
    pub users_base: String,
    /// Base URL for the token refresh endpoint.
    pub auth_base: String,
    /// Base URL for resource endpoints.
    pub api_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::with_root(DEFAULT_ROOT)
    }
}

impl Config {
    /// Build a configuration with every service under a single backend root.
    pub fn with_root(root: &str) -> Self {
        let root = root.trim_end_matches('/');
        Self {
            users_base: format!("{}/api/users", root),
            auth_base: format!("{}/api/auth", root),
            api_base: format!("{}/api", root),
        }
    }

    /// Load configuration from the environment.
    ///
    /// `CLASSPOINT_ROOT` relocates all three bases at once;
    /// `CLASSPOINT_USERS_BASE`, `CLASSPOINT_AUTH_BASE` and
    /// `CLASSPOINT_API_BASE` override them individually.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let mut config = match std::env::var("CLASSPOINT_ROOT") {
            Ok(root) => Self::with_root(&root),
            Err(_) => Self::default(),
        };
        if let Ok(base) = std::env::var("CLASSPOINT_USERS_BASE") {
            config.users_base = base;
        }
        if let Ok(base) = std::env::var("CLASSPOINT_AUTH_BASE") {
            config.auth_base = base;
        }
        if let Ok(base) = std::env::var("CLASSPOINT_API_BASE") {
            config.api_base = base;
        }
        config
    }
}
