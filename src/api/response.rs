//! Response types for the Payroll Engine API.
//!
//! This module defines the success and error response structures for the
//! HTTP API, including the mapping from [`PayrollError`] to stable error
//! codes and HTTP status codes.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PayrollError;
use crate::models::{PayrollCalculationResult, PayrollStatus};
use crate::orchestrator::{PreviewOutcome, ProcessOutcome};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// Stable error code for a payroll error, used in both top-level error
/// responses and per-employee error entries.
fn error_code(error: &PayrollError) -> &'static str {
    match error {
        PayrollError::InvalidPeriod { .. }
        | PayrollError::EmptyBatch
        | PayrollError::DuplicateEmployee { .. }
        | PayrollError::InvalidSalaryStructure { .. } => "VALIDATION_ERROR",
        PayrollError::MissingSalaryStructure { .. } => "MISSING_SALARY_STRUCTURE",
        PayrollError::AttendanceConflict { .. } => "ATTENDANCE_CONFLICT",
        PayrollError::DuplicatePeriod { .. } => "DUPLICATE_PERIOD",
        PayrollError::UnknownEmployee { .. } => "UNKNOWN_EMPLOYEE",
        PayrollError::RecordNotFound { .. } => "RECORD_NOT_FOUND",
        PayrollError::InvalidStatusTransition { .. } => "INVALID_STATUS_TRANSITION",
        PayrollError::ConfigNotFound { .. } | PayrollError::ConfigParseError { .. } => {
            "CONFIG_ERROR"
        }
    }
}

impl From<&PayrollError> for ApiError {
    fn from(error: &PayrollError) -> Self {
        ApiError::new(error_code(error), error.to_string())
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        // Only configuration problems are the server's fault.
        let status = match &error {
            PayrollError::ConfigNotFound { .. } | PayrollError::ConfigParseError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        };
        ApiErrorResponse {
            status,
            error: ApiError::from(&error),
        }
    }
}

/// A per-employee failure inside an otherwise successful batch response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeError {
    /// The employee the error applies to.
    pub employee_id: String,
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Response body for the preview endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewResponse {
    /// Calculation results, ordered by employee ID.
    pub results: Vec<PayrollCalculationResult>,
    /// Employees that could not be calculated, ordered by employee ID.
    pub errors: Vec<EmployeeError>,
}

/// One persisted payroll record in a process response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedEntry {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// Identifier of the persisted payroll record.
    pub payroll_record_id: Uuid,
    /// Status the record was committed with.
    pub status: PayrollStatus,
}

/// Response body for the process endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// Records committed to the ledger, ordered by employee ID.
    pub processed: Vec<ProcessedEntry>,
    /// Employees that could not be processed, ordered by employee ID.
    pub errors: Vec<EmployeeError>,
}

fn employee_errors(errors: BTreeMap<String, PayrollError>) -> Vec<EmployeeError> {
    errors
        .into_iter()
        .map(|(employee_id, error)| EmployeeError {
            employee_id,
            code: error_code(&error).to_string(),
            message: error.to_string(),
        })
        .collect()
}

impl From<PreviewOutcome> for PreviewResponse {
    fn from(outcome: PreviewOutcome) -> Self {
        PreviewResponse {
            results: outcome.results.into_values().collect(),
            errors: employee_errors(outcome.errors),
        }
    }
}

impl From<ProcessOutcome> for ProcessResponse {
    fn from(outcome: ProcessOutcome) -> Self {
        ProcessResponse {
            processed: outcome
                .processed
                .into_iter()
                .map(|(employee_id, receipt)| ProcessedEntry {
                    employee_id,
                    payroll_record_id: receipt.record_id,
                    status: receipt.status,
                })
                .collect(),
            errors: employee_errors(outcome.errors),
        }
    }
}
