//! Leave record model and related types.
//!
//! This module defines the [`LeaveRecord`] struct for a requested span of
//! leave and its [`LeaveStatus`]. Only approved records count toward leave
//! consumption.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The approval state of a leave record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Requested but not yet decided. Does not count as leave taken.
    Pending,
    /// Approved by HR. Counts toward the leave allowance.
    Approved,
    /// Rejected by HR. Does not count as leave taken.
    Rejected,
}

/// A span of requested leave, inclusive of both end dates.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{LeaveRecord, LeaveStatus};
/// use chrono::NaiveDate;
///
/// let leave = LeaveRecord {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 22).unwrap(),
///     status: LeaveStatus::Approved,
/// };
/// assert_eq!(leave.days(), 3);
/// assert!(leave.covers(NaiveDate::from_ymd_opt(2026, 1, 21).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// The first day of leave (inclusive).
    pub start_date: NaiveDate,
    /// The last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// The approval state of this record.
    pub status: LeaveStatus,
}

impl LeaveRecord {
    /// Returns true if the record has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }

    /// Returns the number of calendar days this record spans, inclusive.
    ///
    /// A record whose end date precedes its start date covers zero days.
    pub fn days(&self) -> i64 {
        if self.end_date < self.start_date {
            return 0;
        }
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Returns true if the given date falls within the leave span.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
