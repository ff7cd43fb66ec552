//! Deduction calculation logic.
//!
//! This module converts the attendance and leave summaries into monetary
//! deductions using a per-day rate derived from the salary structure.

use rust_decimal::Decimal;

use crate::models::{AttendanceSummary, LeaveSummary, SalaryStructure};

/// The unrounded deduction amounts for one employee and period.
///
/// Amounts here carry full precision; rounding happens once, when the
/// salary is composed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeductionBreakdown {
    /// Basic salary divided by the period's working days, zero when the
    /// period has no working days.
    pub per_day_rate: Decimal,
    /// Statutory deductions independent of attendance.
    pub standard_deductions: Decimal,
    /// Unpaid leave days priced at the per-day rate.
    pub leave_deductions: Decimal,
    /// Unexplained absent days priced at the per-day rate.
    pub attendance_deductions: Decimal,
    /// Sum of the three deduction sources.
    pub total_deductions: Decimal,
}

/// Calculates the deductions for one employee over one period.
///
/// A period with no working days cannot dock pay: the per-day rate is
/// zero, so leave and attendance deductions are zero too, leaving only
/// the standard deductions.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_deductions;
/// use payroll_engine::models::{AttendanceSummary, LeaveSummary, SalaryStructure};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salary = SalaryStructure {
///     basic_salary: Decimal::from(22000),
///     allowances: Decimal::ZERO,
///     standard_deductions: Decimal::from(500),
/// };
/// let attendance = AttendanceSummary {
///     total_working_days: 22,
///     present_days: 21,
///     absent_days: 1,
///     late_days: 0,
///     half_days: 0,
///     leave_days: 0,
///     actual_working_days: Decimal::from(21),
/// };
/// let leave = LeaveSummary {
///     total_leaves_allowed: Decimal::from(2),
///     leaves_taken: Decimal::ZERO,
///     excess_leaves: Decimal::ZERO,
///     unpaid_leaves: Decimal::ZERO,
/// };
///
/// let breakdown = calculate_deductions(&salary, &attendance, &leave);
/// assert_eq!(breakdown.per_day_rate, Decimal::from(1000));
/// assert_eq!(breakdown.total_deductions, Decimal::from(1500));
/// ```
pub fn calculate_deductions(
    salary: &SalaryStructure,
    attendance: &AttendanceSummary,
    leave: &LeaveSummary,
) -> DeductionBreakdown {
    let per_day_rate = if attendance.total_working_days == 0 {
        Decimal::ZERO
    } else {
        salary.basic_salary / Decimal::from(attendance.total_working_days)
    };

    let leave_deductions = leave.unpaid_leaves * per_day_rate;
    let attendance_deductions =
        Decimal::from(attendance.unexplained_absent_days()) * per_day_rate;
    let total_deductions =
        salary.standard_deductions + leave_deductions + attendance_deductions;

    DeductionBreakdown {
        per_day_rate,
        standard_deductions: salary.standard_deductions,
        leave_deductions,
        attendance_deductions,
        total_deductions,
    }
}
