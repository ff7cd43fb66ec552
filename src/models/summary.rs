//! Attendance and leave summary models.
//!
//! These types carry the aggregated per-employee facts produced by the
//! attendance and leave stages. They are embedded in the final calculation
//! result so a payslip can be audited without re-running the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated attendance counts for one employee over one pay period.
///
/// Every working day of the period is classified into exactly one of the
/// four day counters, so `present_days + absent_days + late_days +
/// half_days == total_working_days`. Leave days are an overlay on absent
/// days, not a fifth category: a day covered by approved leave is counted
/// in both `absent_days` and `leave_days`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Number of working days in the period (weekends and holidays excluded).
    pub total_working_days: u32,
    /// Days with a full attendance and an on-time check-in.
    pub present_days: u32,
    /// Working days with no attendance record, or with neither time recorded.
    pub absent_days: u32,
    /// Days attended for a full duration but with a late check-in.
    pub late_days: u32,
    /// Days attended for less than the half-day threshold.
    pub half_days: u32,
    /// Absent days that are covered by approved leave.
    pub leave_days: u32,
    /// Effective days worked: present and late days count as one day each,
    /// half days as one half.
    pub actual_working_days: Decimal,
}

impl AttendanceSummary {
    /// Returns the number of absent days not covered by approved leave.
    ///
    /// These are the days that attract attendance deductions.
    pub fn unexplained_absent_days(&self) -> u32 {
        self.absent_days.saturating_sub(self.leave_days)
    }

    /// Returns the total number of classified days.
    ///
    /// Always equals [`total_working_days`](Self::total_working_days) for a
    /// summary produced by the engine.
    pub fn classified_days(&self) -> u32 {
        self.present_days + self.absent_days + self.late_days + self.half_days
    }
}

/// Leave entitlement reconciliation for one employee over one pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveSummary {
    /// Leave days allowed for this period, prorated from the annual allowance.
    pub total_leaves_allowed: Decimal,
    /// Approved leave days actually taken within the period.
    pub leaves_taken: Decimal,
    /// Leave taken beyond the allowance (zero if within allowance).
    pub excess_leaves: Decimal,
    /// Days of unpaid leave to deduct. Equals `excess_leaves`.
    pub unpaid_leaves: Decimal,
}
