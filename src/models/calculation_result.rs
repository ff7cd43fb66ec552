//! Payroll calculation result models.
//!
//! This module contains the [`PayrollCalculationResult`] type and its
//! associated structures that capture all outputs from a payroll
//! calculation: the monetary breakdown plus the attendance and leave
//! summaries it was derived from.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AttendanceSummary, LeaveSummary, PayPeriod, SalaryStructure};

/// The monetary breakdown of a payroll calculation.
///
/// All amounts are rounded to 2 decimal places using banker's rounding.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollCalculations;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let calculations = PayrollCalculations {
///     gross_salary: Decimal::from_str("33000.00").unwrap(),
///     total_allowances: Decimal::from_str("3000.00").unwrap(),
///     leave_deductions: Decimal::ZERO,
///     attendance_deductions: Decimal::from_str("1363.64").unwrap(),
///     total_deductions: Decimal::from_str("1863.64").unwrap(),
///     net_salary: Decimal::from_str("31136.36").unwrap(),
///     per_day_rate: Decimal::from_str("1363.64").unwrap(),
///     deductions_capped: false,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollCalculations {
    /// Basic salary plus allowances, before any deduction.
    pub gross_salary: Decimal,
    /// The allowances portion of the gross salary.
    pub total_allowances: Decimal,
    /// Deduction for unpaid leave days.
    pub leave_deductions: Decimal,
    /// Deduction for absences not covered by approved leave.
    pub attendance_deductions: Decimal,
    /// Sum of standard, leave, and attendance deductions.
    pub total_deductions: Decimal,
    /// Gross salary minus total deductions, floored at zero.
    pub net_salary: Decimal,
    /// The daily rate used for leave and attendance deductions: basic
    /// salary divided by the period's working days.
    pub per_day_rate: Decimal,
    /// True when deductions exceeded the gross salary and the net salary
    /// was clamped to zero.
    pub deductions_capped: bool,
}

/// The complete result of a payroll calculation for one employee.
///
/// Captures the monetary breakdown together with the inputs that produced
/// it, so a payslip can be audited without re-running the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollCalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub computed_at: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The ID of the employee the calculation is for.
    pub employee_id: String,
    /// The pay period for this calculation.
    pub pay_period: PayPeriod,
    /// The salary structure the calculation was based on.
    pub salary_structure: SalaryStructure,
    /// Aggregated attendance facts for the period.
    pub attendance: AttendanceSummary,
    /// Leave entitlement reconciliation for the period.
    pub leave: LeaveSummary,
    /// The monetary breakdown.
    pub calculations: PayrollCalculations,
}
