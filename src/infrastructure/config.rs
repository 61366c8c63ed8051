//! Application configuration management.
//!
//! Configuration is loaded once at startup from environment variables (with
//! a `.env` file honored via `dotenvy`). Every variable has a default, so a
//! bare environment yields a working in-memory setup; invalid values fail
//! with a per-variable error message.

use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Which store implementation backs the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Process-local maps; data is lost on restart. The job worker runs
    /// in-process because the queue is not shared.
    Memory,
    /// Redis; data and the job queue live in separate logical databases and
    /// the worker runs as its own process.
    Redis,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "redis" => Ok(Self::Redis),
            other => Err(format!("unknown backend '{other}' (expected 'memory' or 'redis')")),
        }
    }
}

impl std::fmt::Display for StoreBackend {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => write!(formatter, "memory"),
            Self::Redis => write!(formatter, "redis"),
        }
    }
}

/// Application configuration.
///
/// # Environment Variables
///
/// - `APP_HOST`: HTTP server host (default: `0.0.0.0`)
/// - `APP_PORT`: HTTP server port (default: `8000`)
/// - `STORE_BACKEND`: `memory` or `redis` (default: `memory`)
/// - `REDIS_URL`: data database (default: `redis://localhost:6379/1`)
/// - `REDIS_QUEUE_URL`: job queue database (default: `redis://localhost:6379/0`)
/// - `REDIS_KEY_PREFIX`: prefix for every key (default: empty)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP server host address.
    pub app_host: String,
    /// HTTP server port.
    pub app_port: u16,
    /// Store implementation selection.
    pub store_backend: StoreBackend,
    /// Redis connection URL for application data.
    pub redis_url: String,
    /// Redis connection URL for the job queue.
    ///
    /// A separate logical database from `redis_url` so job bookkeeping
    /// never collides with entity keys.
    pub redis_queue_url: String,
    /// Prefix prepended to every Redis key.
    pub redis_key_prefix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_host: "0.0.0.0".to_string(),
            app_port: 8000,
            store_backend: StoreBackend::Memory,
            redis_url: "redis://localhost:6379/1".to_string(),
            redis_queue_url: "redis://localhost:6379/0".to_string(),
            redis_key_prefix: String::new(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// Loads a `.env` file first if one is present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but cannot
    /// be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Ok(Self {
            app_host: get_optional_env("APP_HOST", defaults.app_host),
            app_port: get_optional_env_parsed("APP_PORT", defaults.app_port)?,
            store_backend: get_optional_env_parsed("STORE_BACKEND", defaults.store_backend)?,
            redis_url: get_optional_env("REDIS_URL", defaults.redis_url),
            redis_queue_url: get_optional_env("REDIS_QUEUE_URL", defaults.redis_queue_url),
            redis_key_prefix: get_optional_env("REDIS_KEY_PREFIX", defaults.redis_key_prefix),
        })
    }
}

/// Gets an optional environment variable with a default value.
fn get_optional_env(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

/// Gets an optional environment variable and parses it, with a default value.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the variable is set but cannot be
/// parsed.
fn get_optional_env_parsed<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env::var(key).map_or_else(
        |_| Ok(default),
        |value| {
            value
                .parse()
                .map_err(|error: T::Err| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: error.to_string(),
                })
        },
    )
}
