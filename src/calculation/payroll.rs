//! The per-employee payroll pipeline.
//!
//! This module wires the four calculation stages together: attendance
//! aggregation and leave reconciliation run first, their summaries feed the
//! deduction calculator, and the salary composer produces the final
//! amounts. The whole pipeline is pure; persisting the result is the
//! orchestrator's concern.

use chrono::Utc;
use uuid::Uuid;

use crate::config::PayrollPolicy;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    AttendanceRecord, Employee, LeaveRecord, PayPeriod, PayrollCalculationResult,
};

use super::attendance_summary::summarize_attendance;
use super::deductions::calculate_deductions;
use super::leave_reconciliation::{approved_leave_dates, reconcile_leave};
use super::salary_composition::compose_salary;

/// Everything the engine needs to calculate one employee's payroll.
///
/// The engine does not fetch data itself; the caller loads the employee,
/// their attendance records, and their leave records and hands them over.
#[derive(Debug, Clone)]
pub struct PayrollInput {
    /// The employee, carrying the salary structure and leave allowance.
    pub employee: Employee,
    /// The employee's attendance records. Records outside the period are
    /// ignored.
    pub attendance: Vec<AttendanceRecord>,
    /// The employee's leave records. Only approved records consume leave.
    pub leave: Vec<LeaveRecord>,
}

/// Calculates one employee's payroll for a period.
///
/// # Errors
///
/// - [`PayrollError::MissingSalaryStructure`] if the employee has no
///   salary structure on file.
/// - [`PayrollError::InvalidSalaryStructure`] if the structure violates
///   its bounds.
/// - [`PayrollError::AttendanceConflict`] if two attendance records fall
///   on the same date within the period.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{PayrollInput, calculate_payroll};
/// use payroll_engine::config::PayrollPolicy;
/// use payroll_engine::models::{Employee, PayPeriod, SalaryStructure};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let policy = PayrollPolicy::default();
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     holidays: vec![],
/// };
/// let input = PayrollInput {
///     employee: Employee {
///         id: "emp_001".to_string(),
///         name: "Priya Sharma".to_string(),
///         salary_structure: Some(SalaryStructure {
///             basic_salary: Decimal::from(30000),
///             allowances: Decimal::from(3000),
///             standard_deductions: Decimal::from(500),
///         }),
///         annual_leave_allowance: None,
///     },
///     attendance: vec![],
///     leave: vec![],
/// };
///
/// let result = calculate_payroll(&input, &period, &policy).unwrap();
/// assert_eq!(result.attendance.total_working_days, 22);
/// ```
pub fn calculate_payroll(
    input: &PayrollInput,
    period: &PayPeriod,
    policy: &PayrollPolicy,
) -> PayrollResult<PayrollCalculationResult> {
    let employee_id = &input.employee.id;
    let salary = input.employee.salary_structure.as_ref().ok_or_else(|| {
        PayrollError::MissingSalaryStructure {
            employee_id: employee_id.clone(),
        }
    })?;
    salary.validate(employee_id)?;

    let leave_dates = approved_leave_dates(&input.leave, period);
    let attendance =
        summarize_attendance(&input.attendance, period, policy, &leave_dates, employee_id)?;

    let allowance = input
        .employee
        .leave_allowance_or(policy.default_annual_leave_days());
    let leave = reconcile_leave(&input.leave, allowance, period, policy);

    let breakdown = calculate_deductions(salary, &attendance, &leave);
    let calculations = compose_salary(salary, &breakdown);

    Ok(PayrollCalculationResult {
        calculation_id: Uuid::new_v4(),
        computed_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: employee_id.clone(),
        pay_period: period.clone(),
        salary_structure: salary.clone(),
        attendance,
        leave,
        calculations,
    })
}
