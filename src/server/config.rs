use chrono::Duration;
use dioxus_logger::tracing::Level;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://holocron.db?mode=rwc";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_JWT_EXPIRY_MINUTES: i64 = 60;
const DEFAULT_LOG_LEVEL: Level = Level::INFO;

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_lifetime: Duration,
    pub bcrypt_cost: u32,

    pub host: String,
    pub port: u16,

    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            jwt_lifetime: token_lifetime(parse_optional_var(
                "JWT_EXPIRY_MINUTES",
                DEFAULT_JWT_EXPIRY_MINUTES,
            )?)?,
            bcrypt_cost: parse_optional_var("BCRYPT_COST", bcrypt::DEFAULT_COST)?,
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_optional_var("PORT", DEFAULT_PORT)?,
            log_level: parse_optional_var("LOG_LEVEL", DEFAULT_LOG_LEVEL)?,
        })
    }
}

/// Reads an optional environment variable, falling back to `default` when unset.
fn parse_optional_var<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

/// Converts the configured token lifetime into a duration.
///
/// # Returns
/// - `Ok(Duration)` - Positive lifetime that fits in a `chrono::Duration`
/// - `Err(ConfigError::InvalidEnvVar)` - Zero, negative, or out of range
fn token_lifetime(minutes: i64) -> Result<Duration, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvVar {
        name: "JWT_EXPIRY_MINUTES".to_string(),
        reason: reason.to_string(),
    };

    if minutes <= 0 {
        return Err(invalid("must be a positive number of minutes"));
    }

    Duration::try_minutes(minutes).ok_or_else(|| invalid("lifetime is too large"))
}
