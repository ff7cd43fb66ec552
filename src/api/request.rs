//! Request types for the Payroll Engine API.
//!
//! These types mirror the domain models but are kept separate so the wire
//! format can evolve independently of the internal representations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Holiday, PayPeriod};

/// Request body for the preview and process endpoints.
///
/// Both endpoints accept the same shape; `notes` is only meaningful when
/// processing and is ignored by preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRunRequest {
    /// Identifiers of the employees to run payroll for.
    pub employee_ids: Vec<String>,
    /// The pay period to calculate over.
    pub period: PayPeriodRequest,
    /// Optional free-text notes attached to each persisted record.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Pay period as submitted by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// First day of the period (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
    /// Company holidays falling inside the period.
    #[serde(default)]
    pub holidays: Vec<HolidayRequest>,
}

/// A declared holiday within the pay period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRequest {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// Display name, e.g. "New Year's Day".
    pub name: String,
}

impl From<PayPeriodRequest> for PayPeriod {
    fn from(req: PayPeriodRequest) -> Self {
        PayPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
            holidays: req.holidays.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<HolidayRequest> for Holiday {
    fn from(req: HolidayRequest) -> Self {
        Holiday {
            date: req.date,
            name: req.name,
        }
    }
}
