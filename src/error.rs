//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every validation and configuration failure the engine can report.
//! A non-positive taxable income is not an error: it is the legal zero-tax
//! state and never surfaces here.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use irsa_payroll::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/schedule.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/schedule.yaml");
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

    /// The bracket schedule is not a contiguous, terminated progression.
    #[error("Invalid tax bracket at position {index}: {message}")]
    InvalidBracketTable {
        /// Zero-based position of the offending bracket.
        index: usize,
        /// A description of what made the table invalid.
        message: String,
    },

    /// A percentage fell outside 0..=100.
    #[error("Invalid rate {value}: {message}")]
    InvalidRate {
        /// The rejected value, as written.
        value: String,
        /// A description of what made the rate invalid.
        message: String,
    },

    /// A monetary input was rejected at the boundary.
    #[error("Invalid amount for '{field}': {message}")]
    InvalidAmount {
        /// The input field that was invalid.
        field: String,
        /// A description of what made the amount invalid.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee '{employee_id}': {message}")]
    InvalidEmployee {
        /// The ID of the invalid employee.
        employee_id: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A pay period had an impossible date range.
    #[error("Invalid pay period: {message}")]
    InvalidPayPeriod {
        /// A description of what made the period invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
