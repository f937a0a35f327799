//! Error types for the accounting engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll processing,
//! configuration loading, and form validation.

use thiserror::Error;

/// The main error type for the accounting engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. Every variant
/// is locally recoverable; none are fatal to the process.
///
/// # Example
///
/// ```
/// use books_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     id: "emp_042".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: emp_042");
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

    /// Referenced employee id does not exist.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: String,
    },

    /// Referenced adjustment id does not exist in the catalog.
    #[error("Adjustment not found in catalog: {id}")]
    AdjustmentNotFound {
        /// The adjustment id that was not found.
        id: String,
    },

    /// An adjustment in the catalog carried invalid data.
    #[error("Invalid adjustment '{name}': {message}")]
    InvalidAdjustment {
        /// The name of the invalid adjustment.
        name: String,
        /// A description of what made the adjustment invalid.
        message: String,
    },

    /// A pay period was invalid (zero-length, or month outside 1-12).
    #[error("Invalid pay period: {message}")]
    InvalidPeriod {
        /// A description of what made the period invalid.
        message: String,
    },

    /// Form input failed validation.
    ///
    /// Per-field messages live in the [`ValidationErrors`] map returned by
    /// [`validate_form`]; this variant carries the offending field names.
    ///
    /// [`ValidationErrors`]: crate::validation::ValidationErrors
    /// [`validate_form`]: crate::validation::validate_form
    #[error("Validation failed for fields: {fields}")]
    ValidationFailed {
        /// Comma-separated names of the fields that failed.
        fields: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
