//! Configuration validation.
//!
//! This module provides validation logic for configuration values,
//! ensuring they are within acceptable ranges.

use super::Config;
use crate::error::ConfigError;

/// Maximum allowed value for `MIN_REQUIRED_RESPONDENTS`.
pub const MAX_REQUIRED_RESPONDENTS: u32 = 1000;

/// Maximum allowed value for `TEXT_SAMPLE_LIMIT`.
pub const MAX_TEXT_SAMPLE_LIMIT: usize = 50;

/// Maximum allowed value for `TEXT_SAMPLE_MAX_CHARS`.
pub const MAX_TEXT_SAMPLE_CHARS: usize = 2000;

/// Maximum allowed value for `DATABASE_MAX_CONNECTIONS`.
pub const MAX_DATABASE_CONNECTIONS: u32 = 32;

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError::MissingRequired`] if `DATABASE_PATH` is blank, and
/// [`ConfigError::InvalidValue`] if any value is out of range:
/// - `MIN_REQUIRED_RESPONDENTS` must be between 1 and 1000
/// - `TEXT_SAMPLE_LIMIT` must be between 0 and 50
/// - `TEXT_SAMPLE_MAX_CHARS` must be between 1 and 2000
#[must_use = "validation result should be checked"]
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.database_path.trim().is_empty() {
        return Err(ConfigError::MissingRequired {
            var: "DATABASE_PATH".into(),
        });
    }

    if config.min_required_respondents == 0
        || config.min_required_respondents > MAX_REQUIRED_RESPONDENTS
    {
        return Err(ConfigError::InvalidValue {
            var: "MIN_REQUIRED_RESPONDENTS".into(),
            reason: format!("must be between 1 and {MAX_REQUIRED_RESPONDENTS}"),
        });
    }

    if config.database_max_connections == 0
        || config.database_max_connections > MAX_DATABASE_CONNECTIONS
    {
        return Err(ConfigError::InvalidValue {
            var: "DATABASE_MAX_CONNECTIONS".into(),
            reason: format!("must be between 1 and {MAX_DATABASE_CONNECTIONS}"),
        });
    }

    if config.text_sample_limit > MAX_TEXT_SAMPLE_LIMIT {
        return Err(ConfigError::InvalidValue {
            var: "TEXT_SAMPLE_LIMIT".into(),
            reason: format!("must be between 0 and {MAX_TEXT_SAMPLE_LIMIT}"),
        });
    }

    if config.text_sample_max_chars == 0 || config.text_sample_max_chars > MAX_TEXT_SAMPLE_CHARS {
        return Err(ConfigError::InvalidValue {
            var: "TEXT_SAMPLE_MAX_CHARS".into(),
            reason: format!("must be between 1 and {MAX_TEXT_SAMPLE_CHARS}"),
        });
    }

    Ok(())
}
