//! Error types for the Benefits Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration,
//! reading or writing the employee store, and validating employee records.

use thiserror::Error;

/// The main error type for the Benefits Engine.
///
/// Lookups that find nothing are not errors: services return `Option` for
/// those, and the HTTP layer turns `None` into a 404.
///
/// # Example
///
/// ```
/// use benefits_engine::error::BenefitsError;
///
/// let error = BenefitsError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum BenefitsError {
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

    /// A benefit policy value is unusable (e.g. zero pay periods).
    #[error("Invalid policy field '{field}': {message}")]
    InvalidPolicy {
        /// The offending policy field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// The employee store is missing or could not be read.
    #[error("Employee data unavailable at '{path}': {message}")]
    DataUnavailable {
        /// Path of the backing store.
        path: String,
        /// The underlying I/O failure.
        message: String,
    },

    /// The employee store was read but its contents are not valid.
    #[error("Failed to parse employee data '{path}': {message}")]
    DataParseError {
        /// Path of the backing store.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The employee store could not be written (or backed up).
    #[error("Failed to write employee data '{path}': {message}")]
    DataWriteError {
        /// Path that was being written.
        path: String,
        /// The underlying failure.
        message: String,
    },

    /// The employee has both a spouse and a domestic partner.
    #[error("An employee may only have one spouse or domestic partner, not both.")]
    IneligibleDependents,

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

impl BenefitsError {
    /// Returns true for errors the caller can fix by correcting its input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            BenefitsError::IneligibleDependents | BenefitsError::InvalidEmployee { .. }
        )
    }
}

/// A type alias for Results that return BenefitsError.
pub type BenefitsResult<T> = Result<T, BenefitsError>;
