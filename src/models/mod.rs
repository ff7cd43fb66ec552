//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod calculation_result;
mod employee;
mod leave;
mod pay_period;
mod payroll_record;
mod salary;
mod summary;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use calculation_result::{PayrollCalculationResult, PayrollCalculations};
pub use employee::Employee;
pub use leave::{LeaveRecord, LeaveStatus};
pub use pay_period::{Holiday, PayPeriod};
pub use payroll_record::{PayrollRecord, PayrollStatus};
pub use salary::SalaryStructure;
pub use summary::{AttendanceSummary, LeaveSummary};
