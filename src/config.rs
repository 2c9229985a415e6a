//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables, optionally seeded from a `.env` file.

use crate::domain::LeapDayPolicy;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact book binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "info")
    pub log_level: String,

    /// Where 29 February birthdays land in common years (default: feb28)
    pub leap_day_policy: LeapDayPolicy,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `LEAP_DAY_POLICY`: `feb28` or `mar1` (default: `feb28`)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let leap_day_policy =
            Self::parse_env_policy("LEAP_DAY_POLICY", LeapDayPolicy::default())?;

        Ok(Config {
            log_level,
            leap_day_policy,
        })
    }

    /// Parse an environment variable as a leap-day policy with a default value.
    fn parse_env_policy(var_name: &str, default: LeapDayPolicy) -> ConfigResult<LeapDayPolicy> {
        match env::var(var_name) {
            Ok(val) => val.parse().map_err(|reason| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason,
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            leap_day_policy: LeapDayPolicy::default(),
        }
    }
}
