//! HTTP request handlers for the Payroll Engine API.
//!
//! This module contains the handler functions for the two payroll
//! endpoints: `/payroll/preview` (calculate without persisting) and
//! `/payroll/process` (calculate and commit to the ledger).

use std::collections::BTreeMap;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::PayrollError;
use crate::models::PayPeriod;
use crate::orchestrator::{PreviewOutcome, ProcessOutcome};

use super::request::PayrollRunRequest;
use super::response::{ApiError, ApiErrorResponse, PreviewResponse, ProcessResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/preview", post(preview_handler))
        .route("/payroll/process", post(process_handler))
        .with_state(state)
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Rejects requests the orchestrator would refuse wholesale, before any
/// roster lookups run.
fn check_run_request(
    correlation_id: Uuid,
    employee_ids: &[String],
    period: &PayPeriod,
) -> Result<(), Response> {
    if employee_ids.is_empty() {
        warn!(correlation_id = %correlation_id, "Empty employee list");
        let api_error: ApiErrorResponse = PayrollError::EmptyBatch.into();
        return Err((
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response());
    }
    if let Err(err) = period.validate() {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Invalid pay period"
        );
        let api_error: ApiErrorResponse = err.into();
        return Err((
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response());
    }
    Ok(())
}

/// Handler for POST /payroll/preview.
///
/// Runs the calculation pipeline for the requested employees and returns
/// the results without touching the ledger.
async fn preview_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRunRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll preview request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let period: PayPeriod = request.period.into();
    if let Err(response) = check_run_request(correlation_id, &request.employee_ids, &period) {
        return response;
    }

    let (inputs, unknown) = state.resolve_batch(&request.employee_ids);

    let start_time = Instant::now();
    let outcome = if inputs.is_empty() {
        // Every requested ID was unknown; report them without running a batch.
        PreviewOutcome {
            results: BTreeMap::new(),
            errors: unknown,
        }
    } else {
        match state.orchestrator().preview(&inputs, &period) {
            Ok(mut outcome) => {
                outcome.errors.extend(unknown);
                outcome
            }
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "Preview rejected"
                );
                let api_error: ApiErrorResponse = err.into();
                return (
                    api_error.status,
                    [(header::CONTENT_TYPE, "application/json")],
                    Json(api_error.error),
                )
                    .into_response();
            }
        }
    };

    let duration = start_time.elapsed();
    info!(
        correlation_id = %correlation_id,
        employees = request.employee_ids.len(),
        results = outcome.results.len(),
        errors = outcome.errors.len(),
        duration_us = duration.as_micros(),
        "Preview completed"
    );

    let response: PreviewResponse = outcome.into();
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for POST /payroll/process.
///
/// Runs the same pipeline as preview, then commits one payroll record
/// per successful employee. Employees whose period was already processed
/// are reported as errors without affecting the rest of the batch.
async fn process_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRunRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll process request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let period: PayPeriod = request.period.into();
    if let Err(response) = check_run_request(correlation_id, &request.employee_ids, &period) {
        return response;
    }

    let (inputs, unknown) = state.resolve_batch(&request.employee_ids);

    let start_time = Instant::now();
    let outcome = if inputs.is_empty() {
        ProcessOutcome {
            processed: BTreeMap::new(),
            errors: unknown,
        }
    } else {
        match state
            .orchestrator()
            .process(&inputs, &period, request.notes.as_deref())
        {
            Ok(mut outcome) => {
                outcome.errors.extend(unknown);
                outcome
            }
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "Process run rejected"
                );
                let api_error: ApiErrorResponse = err.into();
                return (
                    api_error.status,
                    [(header::CONTENT_TYPE, "application/json")],
                    Json(api_error.error),
                )
                    .into_response();
            }
        }
    };

    let duration = start_time.elapsed();
    info!(
        correlation_id = %correlation_id,
        employees = request.employee_ids.len(),
        processed = outcome.processed.len(),
        errors = outcome.errors.len(),
        duration_us = duration.as_micros(),
        "Process run completed"
    );

    let response: ProcessResponse = outcome.into();
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
