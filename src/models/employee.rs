//! Employee model.
//!
//! This module defines the [`Employee`] struct representing a worker
//! whose payroll is calculated by the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SalaryStructure;

/// An employee as loaded from the HR system.
///
/// The engine receives employees with their records already loaded; it does
/// not look anything up. An employee without a salary structure can still be
/// submitted in a batch, but their calculation fails with a per-employee
/// error rather than aborting the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The agreed salary structure, if one is on file.
    #[serde(default)]
    pub salary_structure: Option<SalaryStructure>,
    /// Optional override of the annual leave allowance in days per year.
    /// When absent, the policy default applies.
    #[serde(default)]
    pub annual_leave_allowance: Option<Decimal>,
}

impl Employee {
    /// Returns the annual leave allowance, falling back to the given default.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Asha Rao".to_string(),
    ///     salary_structure: None,
    ///     annual_leave_allowance: None,
    /// };
    /// assert_eq!(employee.leave_allowance_or(Decimal::from(24)), Decimal::from(24));
    /// ```
    pub fn leave_allowance_or(&self, default: Decimal) -> Decimal {
        self.annual_leave_allowance.unwrap_or(default)
    }
}
