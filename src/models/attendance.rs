//! Attendance record model and related types.
//!
//! This module defines the [`AttendanceRecord`] struct holding the raw
//! check-in/check-out evidence for one calendar day, and the
//! [`AttendanceStatus`] classification derived from it.

use std::fmt;

use chrono::NaiveDate;
use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The classification of a single working day.
///
/// The status is derived, not stored: the aggregator classifies each raw
/// record against the payroll policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Checked in on time and worked at least the half-day threshold.
    Present,
    /// No evidence of presence for the day.
    Absent,
    /// Checked in after the late-arrival cutoff.
    Late,
    /// Worked less than the half-day duration threshold.
    HalfDay,
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Late => "late",
            AttendanceStatus::HalfDay => "half_day",
        };
        write!(f, "{}", name)
    }
}

/// The raw attendance evidence for one employee on one calendar day.
///
/// Either time may be missing: a day with no times is an absence, and a day
/// with partial evidence is classified by the aggregator. At most one record
/// may exist per employee and date; duplicates are a data conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The calendar day this record describes.
    pub date: NaiveDate,
    /// The recorded check-in time, if any.
    #[serde(default)]
    pub check_in: Option<NaiveTime>,
    /// The recorded check-out time, if any.
    #[serde(default)]
    pub check_out: Option<NaiveTime>,
}

impl AttendanceRecord {
    /// Calculates the worked duration in hours, when both times are present.
    ///
    /// A check-out time earlier than the check-in time is read as crossing
    /// midnight into the next day.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::AttendanceRecord;
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    ///
    /// let record = AttendanceRecord {
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    ///     check_in: NaiveTime::from_hms_opt(9, 0, 0),
    ///     check_out: NaiveTime::from_hms_opt(17, 30, 0),
    /// };
    /// assert_eq!(record.worked_hours(), Some(Decimal::new(85, 1))); // 8.5 hours
    /// ```
    pub fn worked_hours(&self) -> Option<Decimal> {
        let check_in = self.check_in?;
        let check_out = self.check_out?;

        let mut worked_minutes = (check_out - check_in).num_minutes();
        if worked_minutes < 0 {
            // Overnight: the check-out belongs to the next day.
            worked_minutes += 24 * 60;
        }

        Some(Decimal::new(worked_minutes, 0) / Decimal::new(60, 0))
    }
}
