//! Calculation logic for the payroll engine.
//!
//! This module contains all the calculation functions for determining pay:
//! working-day calendars, attendance classification and aggregation, leave
//! reconciliation against prorated allowances, deduction pricing, salary
//! composition with rounding and floor rules, and the per-employee pipeline
//! that wires the stages together.

mod attendance_summary;
mod deductions;
mod leave_reconciliation;
mod payroll;
mod salary_composition;
mod working_days;

pub use attendance_summary::{classify_attendance, summarize_attendance};
pub use deductions::{DeductionBreakdown, calculate_deductions};
pub use leave_reconciliation::{approved_leave_dates, prorated_leave_allowance, reconcile_leave};
pub use payroll::{PayrollInput, calculate_payroll};
pub use salary_composition::{compose_salary, round_currency};
pub use working_days::{count_working_days, is_working_day, working_days};
