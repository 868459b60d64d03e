// src/config.rs
use std::env;
use std::net::IpAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://products.db";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_MODELS_BASE_URL: &str = "/offer-for-you/models/";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub host: IpAddr,
    pub port: u16,
    /// Empty means any origin is allowed.
    pub cors_allowed_origins: Vec<String>,
    pub models_base_url: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
            cors_allowed_origins: Vec::new(),
            models_base_url: DEFAULT_MODELS_BASE_URL.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            database_url: lookup("DATABASE_URL")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.database_url),
            max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .filter(|n: &u32| *n > 0)
                .unwrap_or(defaults.max_connections),
            host: lookup("HOST")
                .and_then(|h| h.parse().ok())
                .unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            cors_allowed_origins,
            models_base_url: lookup("MODELS_BASE_URL")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.models_base_url),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }
}
