//! Attendance aggregation logic.
//!
//! This module classifies each working day of a pay period from the raw
//! check-in/check-out records and reduces the classifications into an
//! [`AttendanceSummary`]. Every working day lands in exactly one of the
//! four status counters; days covered by approved leave are additionally
//! counted as leave days so deductions never double-penalize them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::{BTreeSet, HashMap};

use crate::config::PayrollPolicy;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{AttendanceRecord, AttendanceStatus, AttendanceSummary, PayPeriod};

use super::working_days::working_days;

/// Classifies a single attendance record.
///
/// # Rules
///
/// - No check-in and no check-out: [`AttendanceStatus::Absent`].
/// - Both times recorded: a duration below the policy's half-day threshold
///   is [`AttendanceStatus::HalfDay`] (even if the check-in was also late);
///   otherwise a check-in after the late cutoff is [`AttendanceStatus::Late`],
///   and an on-time check-in is [`AttendanceStatus::Present`].
/// - Check-in only: classified by the cutoff alone, since the duration is
///   unknown.
/// - Check-out only: [`AttendanceStatus::HalfDay`], the conservative
///   reading of a missing check-in.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::classify_attendance;
/// use payroll_engine::config::PayrollPolicy;
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let policy = PayrollPolicy::default();
/// let record = AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
///     check_in: NaiveTime::from_hms_opt(9, 0, 0),
///     check_out: NaiveTime::from_hms_opt(17, 0, 0),
/// };
/// assert_eq!(classify_attendance(&record, &policy), AttendanceStatus::Present);
/// ```
pub fn classify_attendance(record: &AttendanceRecord, policy: &PayrollPolicy) -> AttendanceStatus {
    match (record.check_in, record.check_out) {
        (None, None) => AttendanceStatus::Absent,
        (Some(check_in), Some(_)) => {
            let hours = record.worked_hours().unwrap_or(Decimal::ZERO);
            if hours < policy.half_day_below_hours() {
                AttendanceStatus::HalfDay
            } else if check_in > policy.late_cutoff() {
                AttendanceStatus::Late
            } else {
                AttendanceStatus::Present
            }
        }
        (Some(check_in), None) => {
            if check_in > policy.late_cutoff() {
                AttendanceStatus::Late
            } else {
                AttendanceStatus::Present
            }
        }
        (None, Some(_)) => AttendanceStatus::HalfDay,
    }
}

/// Reduces one employee's attendance records over a period into a summary.
///
/// Records outside the period are ignored. Every working day of the period
/// is classified exactly once: days with a record via
/// [`classify_attendance`], days without one as absent. Absent days whose
/// date appears in `leave_dates` are additionally counted as leave days.
///
/// # Errors
///
/// Returns [`PayrollError::AttendanceConflict`] if two records fall on the
/// same date within the period.
pub fn summarize_attendance(
    records: &[AttendanceRecord],
    period: &PayPeriod,
    policy: &PayrollPolicy,
    leave_dates: &BTreeSet<NaiveDate>,
    employee_id: &str,
) -> PayrollResult<AttendanceSummary> {
    let mut by_date: HashMap<NaiveDate, &AttendanceRecord> = HashMap::new();
    for record in records {
        if !period.contains_date(record.date) {
            continue;
        }
        if by_date.insert(record.date, record).is_some() {
            return Err(PayrollError::AttendanceConflict {
                employee_id: employee_id.to_string(),
                date: record.date,
            });
        }
    }

    let days = working_days(period, policy);
    let mut summary = AttendanceSummary {
        total_working_days: days.len() as u32,
        present_days: 0,
        absent_days: 0,
        late_days: 0,
        half_days: 0,
        leave_days: 0,
        actual_working_days: Decimal::ZERO,
    };

    for day in days {
        let status = match by_date.get(&day) {
            Some(record) => classify_attendance(record, policy),
            None => AttendanceStatus::Absent,
        };
        match status {
            AttendanceStatus::Present => summary.present_days += 1,
            AttendanceStatus::Late => summary.late_days += 1,
            AttendanceStatus::HalfDay => summary.half_days += 1,
            AttendanceStatus::Absent => {
                summary.absent_days += 1;
                if leave_dates.contains(&day) {
                    summary.leave_days += 1;
                }
            }
        }
    }

    summary.actual_working_days = Decimal::from(summary.present_days + summary.late_days)
        + Decimal::from(summary.half_days) / Decimal::TWO;

    debug_assert_eq!(summary.classified_days(), summary.total_working_days);

    Ok(summary)
}
