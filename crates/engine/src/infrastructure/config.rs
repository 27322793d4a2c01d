//! Runtime configuration from environment variables.

use std::path::PathBuf;

const DEFAULT_DB_PATH: &str = "patchbay.db";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// Settings read once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite database file
    pub db_path: String,
    pub server_host: String,
    pub server_port: u16,
    /// Raw `CORS_ALLOWED_ORIGINS`: `*` or a comma-separated list
    pub cors_allowed_origins: Option<String>,
    /// Built frontend to serve for any non-API path
    pub static_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let server_port = var("SERVER_PORT")
            .or_else(|| var("PORT"))
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            db_path: var("PATCHBAY_DB").unwrap_or_else(|| DEFAULT_DB_PATH.into()),
            server_host: var("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
            server_port,
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS"),
            static_dir: var("STATIC_DIR").map(PathBuf::from),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
