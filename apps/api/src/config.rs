//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//! `main` loads an optional `.env` file first, so local overrides can live there.

use std::env;

use ridehub_core::DEFAULT_ADMIN_EMAIL;
use ridehub_db::DEFAULT_DATABASE_URL;

/// Signing secret used when `SECRET_KEY` is not set. Fine for local runs only.
pub const DEFAULT_SECRET_KEY: &str = "change-me";

/// Longest accepted access token lifetime: one year.
pub const MAX_TOKEN_EXPIRE_MINUTES: i64 = 365 * 24 * 60;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// sqlx connection string
    pub database_url: String,

    /// HS256 secret for signing access tokens
    pub secret_key: String,

    /// Access token lifetime in minutes
    pub access_token_expire_minutes: i64,

    /// Email of the single admin account
    pub admin_email: String,

    /// Upper bound on pooled database connections
    pub db_max_connections: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: "0.0.0.0".to_string(),
            port: 8000,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            access_token_expire_minutes: 30,
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            db_max_connections: 5,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup` (environment variable name → value).
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            host: lookup("HOST").unwrap_or(defaults.host),

            port: parse_or("PORT", &lookup, defaults.port)?,

            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),

            secret_key: lookup("SECRET_KEY").unwrap_or(defaults.secret_key),

            access_token_expire_minutes: parse_or(
                "ACCESS_TOKEN_EXPIRE_MINUTES",
                &lookup,
                defaults.access_token_expire_minutes,
            )?,

            admin_email: lookup("ADMIN_EMAIL")
                .map(|email| email.trim().to_lowercase())
                .unwrap_or(defaults.admin_email),

            db_max_connections: parse_or("DB_MAX_CONNECTIONS", &lookup, defaults.db_max_connections)?,
        };

        if config.secret_key.is_empty() {
            return Err(ConfigError::MissingRequired("SECRET_KEY".to_string()));
        }
        if !(1..=MAX_TOKEN_EXPIRE_MINUTES).contains(&config.access_token_expire_minutes) {
            return Err(ConfigError::InvalidValue(
                "ACCESS_TOKEN_EXPIRE_MINUTES".to_string(),
            ));
        }
        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()));
        }

        Ok(config)
    }

    /// `host:port` for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Access token lifetime in seconds.
    pub fn access_token_lifetime_secs(&self) -> i64 {
        self.access_token_expire_minutes.saturating_mul(60)
    }

    /// Whether the signing secret is still the development default.
    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
