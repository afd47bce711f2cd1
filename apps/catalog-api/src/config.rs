//! Catalog API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. `main` loads a `.env` file first when one is present.

use std::env;
use std::str::FromStr;

/// Catalog API configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind address
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// SQLite database file
    pub database_path: String,

    /// Pool size
    pub db_max_connections: u32,

    /// Secret for signing access tokens
    pub access_secret: String,

    /// Secret for signing refresh tokens
    pub refresh_secret: String,

    /// Access token lifetime in seconds
    pub access_token_ttl_secs: i64,

    /// Refresh token lifetime in seconds
    pub refresh_token_ttl_secs: i64,

    /// Per-request timeout
    pub request_timeout_secs: u64,

    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = AppConfig {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),

            port: parse_var("PORT", "3000")?,

            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "./aurum_catalog.db".to_string()),

            db_max_connections: parse_var("DB_MAX_CONNECTIONS", "5")?,

            // Development defaults; production deployments MUST set both.
            access_secret: env::var("ACCESS_SECRET")
                .unwrap_or_else(|_| "aurum-dev-access-secret-change-in-production".to_string()),

            refresh_secret: env::var("REFRESH_SECRET")
                .unwrap_or_else(|_| "aurum-dev-refresh-secret-change-in-production".to_string()),

            access_token_ttl_secs: parse_var("ACCESS_TOKEN_TTL_SECS", "900")?, // 15 minutes

            refresh_token_ttl_secs: parse_var("REFRESH_TOKEN_TTL_SECS", "604800")?, // 7 days

            request_timeout_secs: parse_var("REQUEST_TIMEOUT_SECS", "30")?,

            cors_origins: parse_origins(&env::var("CORS_ORIGINS").unwrap_or_default()),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.access_secret.is_empty() {
            return Err(ConfigError::MissingRequired("ACCESS_SECRET".to_string()));
        }
        if self.refresh_secret.is_empty() {
            return Err(ConfigError::MissingRequired("REFRESH_SECRET".to_string()));
        }
        if self.access_token_ttl_secs <= 0 {
            return Err(ConfigError::InvalidValue("ACCESS_TOKEN_TTL_SECS".to_string()));
        }
        if self.refresh_token_ttl_secs <= 0 {
            return Err(ConfigError::InvalidValue("REFRESH_TOKEN_TTL_SECS".to_string()));
        }
        if self.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()));
        }
        Ok(())
    }

    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: FromStr>(name: &str, default: &str) -> Result<T, ConfigError> {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(name.to_string()))
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
