//! Environment configuration
//!
//! Reads the rental desk settings from environment variables (optionally
//! loaded from a `.env` file by `main`).

use std::env;
use std::time::Duration;

use tracing::Level;

use super::database::{DatabaseConfig, DEFAULT_DATABASE_URL};
use crate::utils::errors::AppError;

pub const DEFAULT_MAX_LOGIN_ATTEMPTS: u32 = 3;

/// Environment configuration
#[derive(Debug, Clone)]
pub struct RentalConfig {
    pub database: DatabaseConfig,
    pub max_login_attempts: u32,
    pub log_level: Level,
}

impl Default for RentalConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            max_login_attempts: DEFAULT_MAX_LOGIN_ATTEMPTS,
            log_level: Level::INFO,
        }
    }
}

impl RentalConfig {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load the configuration from an arbitrary key lookup.
    ///
    /// Every variable is optional; malformed values are reported instead of
    /// silently falling back to the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut database = DatabaseConfig::with_url(
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
        );

        if let Some(secs) = lookup("DB_ACQUIRE_TIMEOUT_SECS") {
            let secs: u64 = parse_var("DB_ACQUIRE_TIMEOUT_SECS", &secs)?;
            database.acquire_timeout = Duration::from_secs(secs);
        }
        if let Some(flag) = lookup("INIT_SCHEMA") {
            database.init_schema = parse_flag("INIT_SCHEMA", &flag)?;
        }

        let max_login_attempts = match lookup("MAX_LOGIN_ATTEMPTS") {
            Some(value) => parse_var("MAX_LOGIN_ATTEMPTS", &value)?,
            None => DEFAULT_MAX_LOGIN_ATTEMPTS,
        };
        if max_login_attempts == 0 {
            return Err(AppError::Config(
                "MAX_LOGIN_ATTEMPTS must be at least 1".to_string(),
            ));
        }

        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => parse_var("LOG_LEVEL", &value)?,
            None => Level::INFO,
        };

        Ok(Self {
            database,
            max_login_attempts,
            log_level,
        })
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T, AppError>
where
    T: std::str::FromStr,
{
    value
        .trim()
        .parse()
        .map_err(|_| AppError::Config(format!("{} has an invalid value: '{}'", key, value)))
}

fn parse_flag(key: &str, value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::Config(format!(
            "{} must be a boolean, got '{}'",
            key, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<RentalConfig, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RentalConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.max_login_attempts, 3);
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.database.url, DEFAULT_DATABASE_URL);
        assert!(!config.database.init_schema);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("MAX_LOGIN_ATTEMPTS", "5"),
            ("LOG_LEVEL", "debug"),
            ("INIT_SCHEMA", "yes"),
            ("DB_ACQUIRE_TIMEOUT_SECS", "2"),
        ])
        .unwrap();
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.max_login_attempts, 5);
        assert_eq!(config.log_level, Level::DEBUG);
        assert!(config.database.init_schema);
        assert_eq!(config.database.acquire_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_invalid_values_are_reported() {
        assert!(matches!(
            config_from(&[("MAX_LOGIN_ATTEMPTS", "three")]),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            config_from(&[("MAX_LOGIN_ATTEMPTS", "0")]),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            config_from(&[("INIT_SCHEMA", "maybe")]),
            Err(AppError::Config(_))
        ));
    }
}
