//! Salary structure model.
//!
//! This module defines the [`SalaryStructure`] type describing the fixed
//! monthly pay components agreed for an employee.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// The fixed pay components for an employee in a pay period.
///
/// The structure is read-only input to the engine: the engine never
/// modifies it, only derives deductions and net salary from it.
///
/// # Example
///
/// ```
/// use payroll_engine::models::SalaryStructure;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salary = SalaryStructure {
///     basic_salary: Decimal::from_str("30000").unwrap(),
///     allowances: Decimal::from_str("3000").unwrap(),
///     standard_deductions: Decimal::from_str("500").unwrap(),
/// };
/// assert_eq!(salary.gross(), Decimal::from_str("33000").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStructure {
    /// The base salary for the period. Must be positive.
    pub basic_salary: Decimal,
    /// Fixed allowances added on top of the base salary. Must not be negative.
    pub allowances: Decimal,
    /// Fixed deductions applied every period (insurance, fund contributions).
    /// Must not be negative.
    pub standard_deductions: Decimal,
}

impl SalaryStructure {
    /// Returns the gross salary before any deductions.
    pub fn gross(&self) -> Decimal {
        self.basic_salary + self.allowances
    }

    /// Validates the monetary constraints on this structure.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidSalaryStructure`] if the basic salary
    /// is not positive or either of the other components is negative.
    pub fn validate(&self, employee_id: &str) -> PayrollResult<()> {
        if self.basic_salary <= Decimal::ZERO {
            return Err(PayrollError::InvalidSalaryStructure {
                employee_id: employee_id.to_string(),
                message: format!("basic salary must be positive, got {}", self.basic_salary),
            });
        }
        if self.allowances < Decimal::ZERO {
            return Err(PayrollError::InvalidSalaryStructure {
                employee_id: employee_id.to_string(),
                message: format!("allowances must not be negative, got {}", self.allowances),
            });
        }
        if self.standard_deductions < Decimal::ZERO {
            return Err(PayrollError::InvalidSalaryStructure {
                employee_id: employee_id.to_string(),
                message: format!(
                    "standard deductions must not be negative, got {}",
                    self.standard_deductions
                ),
            });
        }
        Ok(())
    }
}
