//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll computation and
//! persistence.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::PayrollExists { month: 3, year: 2026 };
/// assert_eq!(error.to_string(), "Payroll already generated for 3/2026");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A payroll run already exists for the requested period.
    ///
    /// Generation is at-most-once per (month, year); callers must not
    /// retry without first deleting the existing run out of band.
    #[error("Payroll already generated for {month}/{year}")]
    PayrollExists {
        /// The month of the conflicting run (1-12).
        month: u32,
        /// The year of the conflicting run.
        year: i32,
    },

    /// No payroll run exists for the requested period.
    #[error("No payroll found for {month}/{year}")]
    PayrollNotFound {
        /// The requested month (1-12).
        month: u32,
        /// The requested year.
        year: i32,
    },

    /// No payslip figures exist for the user in the requested period.
    #[error("No payslip available for user {user_id} for {month}/{year}")]
    PayslipNotFound {
        /// The user whose payslip was requested.
        user_id: i64,
        /// The requested month (1-12).
        month: u32,
        /// The requested year.
        year: i32,
    },

    /// An overtime rule with the given id does not exist.
    #[error("Overtime rule not found: {id}")]
    RuleNotFound {
        /// The rule id that was not found.
        id: i64,
    },

    /// A user with the given id does not exist in the directory.
    #[error("User not found: {id}")]
    UserNotFound {
        /// The user id that was not found.
        id: i64,
    },

    /// A request field was missing or out of range.
    #[error("Invalid field '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Policy configuration file was not found at the specified path.
    #[error("Policy configuration not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy configuration file could not be parsed.
    #[error("Failed to parse policy configuration '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The backing store failed in a way that is not a domain condition.
    #[error("Store error: {message}")]
    Store {
        /// A description of the store failure.
        message: String,
    },
}

impl PayrollError {
    /// Builds a validation error for a named field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
