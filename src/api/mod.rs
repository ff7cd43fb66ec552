//! HTTP API module for the Payroll Engine.
//!
//! This module provides the REST API endpoints for previewing and
//! processing payroll runs over a batch of employees.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{HolidayRequest, PayPeriodRequest, PayrollRunRequest};
pub use response::{ApiError, EmployeeError, PreviewResponse, ProcessResponse, ProcessedEntry};
pub use state::AppState;
