//! Error types for the literacy metrics engine.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors
//! - [`StorageError`]: Taxonomy store operation errors
//! - [`TaxonomyError`]: Rank definition shape violations
//! - [`ConfigError`]: Configuration errors
//! - [`InputError`]: Report input and date window errors
//!
//! Scoring and aggregation are total functions and never produce these errors;
//! they only surface at the persistence, configuration and input boundaries.
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Top-level application error.
///
/// This is the main error type returned by public API functions that cross
/// an I/O boundary. It wraps all subsystem errors for unified error handling.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Taxonomy validation error.
    #[error("Taxonomy error: {0}")]
    Taxonomy(#[from] TaxonomyError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input error.
    #[error("Input error: {0}")]
    Input(#[from] InputError),
}

/// Storage errors.
///
/// These errors represent failures in the rank definition store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Failed to connect to the database.
    #[error("Database connection failed: {message}")]
    ConnectionFailed {
        /// Description of the connection failure.
        message: String,
    },

    /// A database query failed.
    #[error("Query failed: {query} - {message}")]
    QueryFailed {
        /// The query that failed (may be truncated).
        query: String,
        /// Description of the failure.
        message: String,
    },

    /// Database migration failed.
    #[error("Migration failed: {version} - {message}")]
    MigrationFailed {
        /// The migration version that failed.
        version: String,
        /// Description of the failure.
        message: String,
    },

    /// Internal storage error.
    #[error("Internal storage error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

/// Rank definition shape violations.
///
/// Returned when a tenant tries to save a taxonomy that does not have
/// exactly five tiers with the stable `rank1..rank5` ids.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaxonomyError {
    /// Wrong number of tiers.
    #[error("Rank definition must have {expected} tiers, got {actual}")]
    InvalidTierCount {
        /// Required tier count.
        expected: usize,
        /// Tier count that was supplied.
        actual: usize,
    },

    /// A tier carries an id that does not match its position.
    #[error("Tier at position {position} must have id {expected}, got {actual}")]
    UnexpectedTierId {
        /// Zero-based tier position.
        position: usize,
        /// The id required at that position.
        expected: String,
        /// The id that was supplied.
        actual: String,
    },

    /// A tier has a blank display name.
    #[error("Tier {tier_id} has an empty name")]
    EmptyTierName {
        /// The tier id with the blank name.
        tier_id: String,
    },

    /// The definition names no organization.
    #[error("Rank definition has no organization id")]
    MissingOrganization,
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required configuration is missing.
    #[error("Missing required: {var}")]
    MissingRequired {
        /// The missing variable name.
        var: String,
    },

    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}

/// Input errors.
///
/// These errors represent unreadable report input or malformed date bounds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The input file could not be read.
    #[error("Failed to read {path}: {message}")]
    ReadFailed {
        /// Path that was read.
        path: String,
        /// Description of the failure.
        message: String,
    },

    /// The input document could not be parsed.
    #[error("Failed to parse input: {message}")]
    ParseFailed {
        /// Description of the parsing error.
        message: String,
    },

    /// A month bound is not in `YYYY-MM` form.
    #[error("Invalid month {value}: expected YYYY-MM")]
    InvalidMonth {
        /// The rejected value.
        value: String,
    },

    /// The window start lies after its end.
    #[error("Invalid window: {start} is after {end}")]
    InvalidWindow {
        /// Window start as supplied.
        start: String,
        /// Window end as supplied.
        end: String,
    },
}
