//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::Level;

/// Longest accepted `REPLY_DELAY_MS`: one hour.
pub const MAX_REPLY_DELAY_MS: u64 = 60 * 60 * 1000;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    /// Latency between a chat submission and its placeholder reply.
    pub reply_delay: Duration,
    pub cors_origin: HeaderValue,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 3000)),
            log_level: Level::INFO,
            reply_delay: Duration::from_millis(1000),
            cors_origin: HeaderValue::from_static("http://localhost:3000"),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // --- Server Settings ---
        let bind_address_str =
            lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str.parse::<SocketAddr>().map_err(|e| {
            ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string())
        })?;

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let cors_origin_str =
            lookup("CORS_ORIGIN").unwrap_or_else(|| "http://localhost:3000".to_string());
        let cors_origin = cors_origin_str.parse::<HeaderValue>().map_err(|e| {
            ConfigError::InvalidValue("CORS_ORIGIN".to_string(), e.to_string())
        })?;

        // --- Chat Settings ---
        let reply_delay = match lookup("REPLY_DELAY_MS") {
            Some(raw) => {
                let millis = raw.trim().parse::<u64>().map_err(|_| {
                    ConfigError::InvalidValue(
                        "REPLY_DELAY_MS".to_string(),
                        format!("'{}' is not a whole number of milliseconds", raw),
                    )
                })?;
                if millis > MAX_REPLY_DELAY_MS {
                    return Err(ConfigError::InvalidValue(
                        "REPLY_DELAY_MS".to_string(),
                        format!("{} exceeds the maximum of {} ms", millis, MAX_REPLY_DELAY_MS),
                    ));
                }
                Duration::from_millis(millis)
            }
            None => Duration::from_millis(1000),
        };

        Ok(Self {
            bind_address,
            log_level,
            reply_delay,
            cors_origin,
        })
    }

    /// The reply delay as a calendar duration for message timestamps.
    pub fn reply_delay_chrono(&self) -> Result<chrono::Duration, ConfigError> {
        chrono::Duration::from_std(self.reply_delay).map_err(|e| {
            ConfigError::InvalidValue("REPLY_DELAY_MS".to_string(), e.to_string())
        })
    }
}
