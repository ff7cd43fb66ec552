//! Configuration types for payroll policy.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from YAML configuration files.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Rounding granularity for prorated leave allowances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveRounding {
    /// Round the prorated allowance to whole days.
    Whole,
    /// Round the prorated allowance to half days.
    Half,
}

/// Policy configuration file structure.
///
/// This is the raw shape of `policy.yaml`; it is normalized into a
/// [`PayrollPolicy`] before use.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyDocument {
    /// Weekday names treated as the weekend (e.g., "saturday").
    pub weekend: Vec<String>,
    /// Check-ins after this time are late.
    pub late_cutoff: NaiveTime,
    /// Attendance shorter than this many hours counts as a half day.
    pub half_day_below_hours: Decimal,
    /// Annual leave allowance in days for employees without their own.
    pub default_annual_leave_days: Decimal,
    /// Rounding granularity for prorated leave allowances.
    pub leave_rounding: LeaveRounding,
}

/// The validated payroll policy used by the calculation pipeline.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollPolicy;
/// use chrono::NaiveDate;
///
/// let policy = PayrollPolicy::default();
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 3).unwrap();
/// assert!(policy.is_weekend(saturday));
/// ```
#[derive(Debug, Clone)]
pub struct PayrollPolicy {
    /// Weekdays treated as the weekend.
    weekend: Vec<Weekday>,
    /// Check-ins after this time are late.
    late_cutoff: NaiveTime,
    /// Attendance shorter than this many hours counts as a half day.
    half_day_below_hours: Decimal,
    /// Annual leave allowance in days for employees without their own.
    default_annual_leave_days: Decimal,
    /// Rounding granularity for prorated leave allowances.
    leave_rounding: LeaveRounding,
}

impl PayrollPolicy {
    /// Builds a validated policy from a raw [`PolicyDocument`].
    ///
    /// # Errors
    ///
    /// Returns a description of the first problem found: an unknown
    /// weekday name, a non-positive half-day threshold, or a negative
    /// default leave allowance.
    pub fn from_document(doc: PolicyDocument) -> Result<Self, String> {
        let mut weekend = Vec::with_capacity(doc.weekend.len());
        for name in &doc.weekend {
            let day: Weekday = name
                .parse()
                .map_err(|_| format!("unknown weekday name: {}", name))?;
            if !weekend.contains(&day) {
                weekend.push(day);
            }
        }

        if doc.half_day_below_hours <= Decimal::ZERO {
            return Err(format!(
                "half_day_below_hours must be positive, got {}",
                doc.half_day_below_hours
            ));
        }

        if doc.default_annual_leave_days < Decimal::ZERO {
            return Err(format!(
                "default_annual_leave_days must not be negative, got {}",
                doc.default_annual_leave_days
            ));
        }

        Ok(Self {
            weekend,
            late_cutoff: doc.late_cutoff,
            half_day_below_hours: doc.half_day_below_hours,
            default_annual_leave_days: doc.default_annual_leave_days,
            leave_rounding: doc.leave_rounding,
        })
    }

    /// Returns the weekdays treated as the weekend.
    pub fn weekend(&self) -> &[Weekday] {
        &self.weekend
    }

    /// Returns whether the given date falls on a weekend day.
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekend.contains(&date.weekday())
    }

    /// Returns the late check-in cutoff time.
    pub fn late_cutoff(&self) -> NaiveTime {
        self.late_cutoff
    }

    /// Returns the half-day duration threshold in hours.
    pub fn half_day_below_hours(&self) -> Decimal {
        self.half_day_below_hours
    }

    /// Returns the default annual leave allowance in days.
    pub fn default_annual_leave_days(&self) -> Decimal {
        self.default_annual_leave_days
    }

    /// Returns the rounding granularity for prorated leave allowances.
    pub fn leave_rounding(&self) -> LeaveRounding {
        self.leave_rounding
    }
}

impl Default for PayrollPolicy {
    /// A Saturday/Sunday weekend, a 09:15 late cutoff, a 4-hour half-day
    /// threshold, and 24 annual leave days rounded to half days. Matches
    /// the shipped `config/policy.yaml`.
    fn default() -> Self {
        Self {
            weekend: vec![Weekday::Sat, Weekday::Sun],
            late_cutoff: NaiveTime::from_hms_opt(9, 15, 0).expect("valid time"),
            half_day_below_hours: Decimal::from(4),
            default_annual_leave_days: Decimal::from(24),
            leave_rounding: LeaveRounding::Half,
        }
    }
}
