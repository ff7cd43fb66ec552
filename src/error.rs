//! Error types for the payroll calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll calculation,
//! record persistence, and policy loading.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::PayrollStatus;

/// The main error type for the payroll calculation engine.
///
/// All operations in the engine return this error type. Errors are `Clone`
/// and `PartialEq` so that per-employee failures can be collected into
/// batch outcomes and compared in tests.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::UnknownEmployee {
///     employee_id: "emp_404".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown employee: emp_404");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayrollError {
    /// The pay period was malformed (for example, end date before start date).
    #[error("Invalid pay period: {message}")]
    InvalidPeriod {
        /// A description of what made the period invalid.
        message: String,
    },

    /// A payroll run was requested for an empty batch of employees.
    #[error("Payroll batch contains no employees")]
    EmptyBatch,

    /// The same employee appeared more than once in a single batch.
    #[error("Duplicate employee in batch: {employee_id}")]
    DuplicateEmployee {
        /// The employee ID that appeared more than once.
        employee_id: String,
    },

    /// A salary structure was present but contained invalid values.
    #[error("Invalid salary structure for employee '{employee_id}': {message}")]
    InvalidSalaryStructure {
        /// The employee whose salary structure is invalid.
        employee_id: String,
        /// A description of the invalid value.
        message: String,
    },

    /// No salary structure is on file for an employee in the batch.
    #[error("No salary structure on file for employee: {employee_id}")]
    MissingSalaryStructure {
        /// The employee without a salary structure.
        employee_id: String,
    },

    /// More than one attendance record exists for the same employee and date.
    #[error("Conflicting attendance records for employee '{employee_id}' on {date}")]
    AttendanceConflict {
        /// The employee with conflicting records.
        employee_id: String,
        /// The date that has more than one record.
        date: NaiveDate,
    },

    /// A non-cancelled payroll record already exists for the employee and period.
    #[error("Payroll already processed for employee '{employee_id}' in period {period_start} to {period_end}")]
    DuplicatePeriod {
        /// The employee whose period is already processed.
        employee_id: String,
        /// The start date of the period.
        period_start: NaiveDate,
        /// The end date of the period.
        period_end: NaiveDate,
    },

    /// The requested employee ID is not present in the loaded roster.
    #[error("Unknown employee: {employee_id}")]
    UnknownEmployee {
        /// The employee ID that could not be resolved.
        employee_id: String,
    },

    /// No payroll record exists for the employee and period.
    #[error("No payroll record for employee '{employee_id}' in period {period_start} to {period_end}")]
    RecordNotFound {
        /// The employee the record was requested for.
        employee_id: String,
        /// The start date of the period.
        period_start: NaiveDate,
        /// The end date of the period.
        period_end: NaiveDate,
    },

    /// A payroll record status transition violated the state machine.
    #[error("Invalid payroll status transition: {from} -> {to}")]
    InvalidStatusTransition {
        /// The current status of the record.
        from: PayrollStatus,
        /// The status that was requested.
        to: PayrollStatus,
    },

    /// Policy configuration file was not found at the specified path.
    #[error("Policy file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy configuration file could not be parsed.
    #[error("Failed to parse policy file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl PayrollError {
    /// Returns true for errors that invalidate a whole batch before any
    /// employee is attempted.
    pub fn is_batch_validation(&self) -> bool {
        matches!(
            self,
            PayrollError::InvalidPeriod { .. }
                | PayrollError::EmptyBatch
                | PayrollError::DuplicateEmployee { .. }
                | PayrollError::InvalidSalaryStructure { .. }
        )
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
