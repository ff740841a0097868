//! Error types for the Work-Time Reconciliation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during reconciliation.

use chrono::NaiveTime;
use thiserror::Error;

/// The main error type for the Work-Time Reconciliation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use worktime_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration option was unknown or carried an invalid value.
    #[error("Invalid configuration option '{key}': {message}")]
    InvalidOption {
        /// The option key that was rejected.
        key: String,
        /// A description of what made the option invalid.
        message: String,
    },

    /// An interval's end lies before its start.
    ///
    /// All intervals in this engine live within a single business day;
    /// punches spanning midnight are unsupported and are reported through
    /// this variant rather than silently wrapping.
    #[error("Interval out of range: end {end} lies before start {start}")]
    IntervalOutOfRange {
        /// The start of the rejected interval.
        start: NaiveTime,
        /// The end of the rejected interval.
        end: NaiveTime,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
