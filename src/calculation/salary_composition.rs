//! Salary composition logic.
//!
//! This module combines the salary structure with the deduction breakdown
//! into the final gross/net amounts. Intermediate arithmetic keeps full
//! precision; every currency value is rounded exactly once here, to 2
//! decimal places with banker's rounding, so no drift accumulates across
//! the pipeline.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{PayrollCalculations, SalaryStructure};

use super::deductions::DeductionBreakdown;

/// Rounds a currency amount to 2 decimal places, half to even.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// Composes the final salary amounts from the deduction breakdown.
///
/// The net salary is floored at zero: when deductions exceed the gross
/// salary the full deduction total is still reported, and
/// `deductions_capped` marks that the floor was applied.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{calculate_deductions, compose_salary};
/// use payroll_engine::models::{AttendanceSummary, LeaveSummary, SalaryStructure};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salary = SalaryStructure {
///     basic_salary: Decimal::from(30000),
///     allowances: Decimal::from(3000),
///     standard_deductions: Decimal::from(500),
/// };
/// let attendance = AttendanceSummary {
///     total_working_days: 22,
///     present_days: 20,
///     absent_days: 2,
///     late_days: 0,
///     half_days: 0,
///     leave_days: 1,
///     actual_working_days: Decimal::from(20),
/// };
/// let leave = LeaveSummary {
///     total_leaves_allowed: Decimal::from_str("2.0").unwrap(),
///     leaves_taken: Decimal::ONE,
///     excess_leaves: Decimal::ZERO,
///     unpaid_leaves: Decimal::ZERO,
/// };
///
/// let breakdown = calculate_deductions(&salary, &attendance, &leave);
/// let calculations = compose_salary(&salary, &breakdown);
/// assert_eq!(calculations.net_salary, Decimal::from_str("31136.36").unwrap());
/// ```
pub fn compose_salary(
    salary: &SalaryStructure,
    deductions: &DeductionBreakdown,
) -> PayrollCalculations {
    let gross = salary.gross();
    let net_raw = gross - deductions.total_deductions;
    let deductions_capped = net_raw < Decimal::ZERO;
    let net = net_raw.max(Decimal::ZERO);

    PayrollCalculations {
        gross_salary: round_currency(gross),
        total_allowances: round_currency(salary.allowances),
        leave_deductions: round_currency(deductions.leave_deductions),
        attendance_deductions: round_currency(deductions.attendance_deductions),
        total_deductions: round_currency(deductions.total_deductions),
        net_salary: round_currency(net),
        per_day_rate: round_currency(deductions.per_day_rate),
        deductions_capped,
    }
}
