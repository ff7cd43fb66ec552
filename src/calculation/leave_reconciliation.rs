//! Leave reconciliation logic.
//!
//! This module reduces an employee's approved leave records over a pay
//! period against their prorated annual allowance, producing the
//! taken/excess/unpaid counts that drive leave deductions.
//!
//! Leave is consumed in calendar days: a record's span is clipped to the
//! period and every day of the intersection counts, deduplicated across
//! overlapping records so no calendar day is ever counted twice.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeSet;

use crate::config::{LeaveRounding, PayrollPolicy};
use crate::models::{LeaveRecord, LeaveSummary, PayPeriod};

/// Collects the distinct calendar days of approved leave within the period.
///
/// Pending and rejected records are skipped, as are records whose end date
/// precedes their start date. Spans reaching outside the period are clipped
/// to it. Overlapping records collapse into one day per calendar date.
pub fn approved_leave_dates(leaves: &[LeaveRecord], period: &PayPeriod) -> BTreeSet<NaiveDate> {
    let mut dates = BTreeSet::new();
    for leave in leaves {
        if !leave.is_approved() || leave.end_date < leave.start_date {
            continue;
        }
        let from = leave.start_date.max(period.start_date);
        let to = leave.end_date.min(period.end_date);
        if from > to {
            continue;
        }
        dates.extend(from.iter_days().take_while(|d| *d <= to));
    }
    dates
}

/// Prorates an annual leave allowance down to the period.
///
/// The allowance is scaled by the period's fraction of a 365-day year and
/// rounded half-up to the policy's granularity.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::prorated_leave_allowance;
/// use payroll_engine::config::LeaveRounding;
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     holidays: vec![],
/// };
///
/// // 24 days * 31/365 = 2.038..., rounded to the nearest half day.
/// let allowed = prorated_leave_allowance(Decimal::from(24), &period, LeaveRounding::Half);
/// assert_eq!(allowed, Decimal::from_str("2.0").unwrap());
/// ```
pub fn prorated_leave_allowance(
    annual_allowance: Decimal,
    period: &PayPeriod,
    rounding: LeaveRounding,
) -> Decimal {
    let raw = annual_allowance * period.year_fraction();
    match rounding {
        LeaveRounding::Whole => raw.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        LeaveRounding::Half => {
            (raw * Decimal::TWO).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                / Decimal::TWO
        }
    }
}

/// Reconciles approved leave against the allowance for one employee.
///
/// All leave taken beyond the prorated allowance is unpaid; there are no
/// partial-pay tiers.
pub fn reconcile_leave(
    leaves: &[LeaveRecord],
    annual_allowance: Decimal,
    period: &PayPeriod,
    policy: &PayrollPolicy,
) -> LeaveSummary {
    let total_leaves_allowed =
        prorated_leave_allowance(annual_allowance, period, policy.leave_rounding());
    let leaves_taken = Decimal::from(approved_leave_dates(leaves, period).len() as u64);
    let excess_leaves = (leaves_taken - total_leaves_allowed).max(Decimal::ZERO);

    LeaveSummary {
        total_leaves_allowed,
        leaves_taken,
        excess_leaves,
        unpaid_leaves: excess_leaves,
    }
}
