use std::env;

use thiserror::Error;

/// Process configuration, resolved once at startup.
///
/// Required values (the database URL and the token-signing secret) have no
/// fallback: startup aborts with a [`ConfigError`] instead of running with an
/// insecure default.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
    pub admin_username: String,
    pub admin_password: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("environment variable {0} must not be empty")]
    Empty(&'static str),

    #[error("invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

impl AppConfig {
    /// Build configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source. Split out from
    /// [`AppConfig::from_env`] so tests never have to mutate process-global
    /// environment state.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        if database_url.is_empty() {
            return Err(ConfigError::Empty("DATABASE_URL"));
        }

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        if jwt_secret.is_empty() {
            return Err(ConfigError::Empty("JWT_SECRET"));
        }

        Ok(Self {
            port: parse_or("PORT", &get, 3002)?,
            database_url,
            max_connections: parse_or("DATABASE_MAX_CONNECTIONS", &get, 5)?,
            jwt_secret,
            token_ttl_secs: parse_or("TOKEN_TTL_SECS", &get, 3600)?,
            admin_username: get("ADMIN_USERNAME").unwrap_or_else(|| "admin".to_string()),
            admin_password: get("ADMIN_PASSWORD").unwrap_or_else(|| "admin".to_string()),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    get: &impl Fn(&str) -> Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match get(name) {
        Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid(name, raw)),
        None => Ok(default),
    }
}
