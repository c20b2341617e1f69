//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading
//! - Configuration validation
//! - Default value handling
//!
//! # Example
//!
//! ```
//! use literacy_metrics::config::{Config, DEFAULT_DATABASE_PATH};
//!
//! // Create a config directly (use Config::from_env() in production)
//! let config = Config {
//!     database_path: DEFAULT_DATABASE_PATH.to_string(),
//!     database_max_connections: 5,
//!     log_level: "info".to_string(),
//!     min_required_respondents: 5,
//!     text_sample_limit: 5,
//!     text_sample_max_chars: 200,
//! };
//!
//! assert!(literacy_metrics::config::validate_config(&config).is_ok());
//! ```

mod validation;

pub use validation::{
    validate_config, MAX_DATABASE_CONNECTIONS, MAX_REQUIRED_RESPONDENTS, MAX_TEXT_SAMPLE_CHARS,
    MAX_TEXT_SAMPLE_LIMIT,
};

use crate::error::ConfigError;

/// Default database path.
pub const DEFAULT_DATABASE_PATH: &str = "./data/literacy.db";

/// Default size of the taxonomy store connection pool.
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default number of responses required before narrative context is emitted.
pub const DEFAULT_MIN_REQUIRED_RESPONDENTS: u32 = 5;

/// Default number of free-text samples kept per category.
pub const DEFAULT_TEXT_SAMPLE_LIMIT: usize = 5;

/// Default truncation length of a free-text sample, in characters.
pub const DEFAULT_TEXT_SAMPLE_MAX_CHARS: usize = 200;

/// Application configuration.
///
/// Use [`Config::from_env`] to load configuration from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the `SQLite` database holding tenant rank definitions.
    pub database_path: String,
    /// Connections kept open to the taxonomy store.
    pub database_max_connections: u32,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,
    /// Responses required before narrative context is produced.
    pub min_required_respondents: u32,
    /// Free-text samples kept per category in the narrative aggregation.
    pub text_sample_limit: usize,
    /// Maximum characters kept from each free-text sample.
    pub text_sample_max_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            database_max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            min_required_respondents: DEFAULT_MIN_REQUIRED_RESPONDENTS,
            text_sample_limit: DEFAULT_TEXT_SAMPLE_LIMIT,
            text_sample_max_chars: DEFAULT_TEXT_SAMPLE_MAX_CHARS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables (with defaults):
    /// - `DATABASE_PATH`: Path to `SQLite` database (default: `./data/literacy.db`)
    /// - `DATABASE_MAX_CONNECTIONS`: Store connection pool size (default: `5`)
    /// - `LOG_LEVEL`: Logging level (default: `info`)
    /// - `MIN_REQUIRED_RESPONDENTS`: Responses needed for narrative context (default: `5`)
    /// - `TEXT_SAMPLE_LIMIT`: Free-text samples per category (default: `5`)
    /// - `TEXT_SAMPLE_MAX_CHARS`: Sample truncation length (default: `200`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a numeric variable does not parse or any
    /// value fails validation (see [`validate_config`]).
    #[must_use = "configuration should be used"]
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let database_path =
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.into());

        let database_max_connections =
            parse_env_u32("DATABASE_MAX_CONNECTIONS", DEFAULT_DATABASE_MAX_CONNECTIONS)?;

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());

        let min_required_respondents =
            parse_env_u32("MIN_REQUIRED_RESPONDENTS", DEFAULT_MIN_REQUIRED_RESPONDENTS)?;
        let text_sample_limit = parse_env_usize("TEXT_SAMPLE_LIMIT", DEFAULT_TEXT_SAMPLE_LIMIT)?;
        let text_sample_max_chars =
            parse_env_usize("TEXT_SAMPLE_MAX_CHARS", DEFAULT_TEXT_SAMPLE_MAX_CHARS)?;

        let config = Self {
            database_path,
            database_max_connections,
            log_level,
            min_required_respondents,
            text_sample_limit,
            text_sample_max_chars,
        };

        validate_config(&config)?;
        Ok(config)
    }
}

/// Parse an environment variable as u32, using a default if not set.
fn parse_env_u32(name: &str, default: u32) -> Result<u32, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a positive integer".into(),
        })
    })
}

/// Parse an environment variable as usize, using a default if not set.
fn parse_env_usize(name: &str, default: usize) -> Result<usize, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a non-negative integer".into(),
        })
    })
}
