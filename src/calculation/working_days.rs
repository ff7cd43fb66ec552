//! Working-day calendar logic.
//!
//! This module determines which days of a pay period count as working days:
//! every calendar day that is neither a weekend day under the policy nor a
//! holiday listed on the period.

use chrono::NaiveDate;

use crate::config::PayrollPolicy;
use crate::models::PayPeriod;

/// Determines whether a date is a working day of the period.
///
/// A working day is a day inside the period that is neither a weekend day
/// under the policy nor listed as a holiday on the period. Dates outside
/// the period are never working days.
///
/// # Arguments
///
/// * `date` - The date to check
/// * `period` - The pay period providing the range and holiday list
/// * `policy` - The policy providing the weekend definition
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::is_working_day;
/// use payroll_engine::config::PayrollPolicy;
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let policy = PayrollPolicy::default();
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     holidays: vec![],
/// };
///
/// // 2026-01-05 is a Monday
/// assert!(is_working_day(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(), &period, &policy));
/// // 2026-01-03 is a Saturday
/// assert!(!is_working_day(NaiveDate::from_ymd_opt(2026, 1, 3).unwrap(), &period, &policy));
/// ```
pub fn is_working_day(date: NaiveDate, period: &PayPeriod, policy: &PayrollPolicy) -> bool {
    period.contains_date(date) && !policy.is_weekend(date) && !period.is_holiday(date)
}

/// Returns the working days of the period in chronological order.
pub fn working_days(period: &PayPeriod, policy: &PayrollPolicy) -> Vec<NaiveDate> {
    period
        .iter_days()
        .filter(|d| !policy.is_weekend(*d) && !period.is_holiday(*d))
        .collect()
}

/// Counts the working days of the period.
pub fn count_working_days(period: &PayPeriod, policy: &PayrollPolicy) -> u32 {
    working_days(period, policy).len() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Holiday;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_january_period() -> PayPeriod {
        PayPeriod {
            start_date: make_date("2026-01-01"),
            end_date: make_date("2026-01-31"),
            holidays: vec![],
        }
    }

    // ==========================================================================
    // WD-001: January 2026 has 22 working days with a Sat/Sun weekend
    // ==========================================================================
    #[test]
    fn test_wd_001_january_2026_working_day_count() {
        let policy = PayrollPolicy::default();
        let period = create_january_period();
        assert_eq!(count_working_days(&period, &policy), 22);
    }

    // ==========================================================================
    // WD-002: holidays reduce the working-day count
    // ==========================================================================
    #[test]
    fn test_wd_002_holiday_excluded() {
        let policy = PayrollPolicy::default();
        let mut period = create_january_period();
        // 2026-01-26 is a Monday.
        period.holidays.push(Holiday {
            date: make_date("2026-01-26"),
            name: "Republic Day".to_string(),
        });
        assert_eq!(count_working_days(&period, &policy), 21);
        assert!(!is_working_day(make_date("2026-01-26"), &period, &policy));
    }

    // ==========================================================================
    // WD-003: a holiday on a weekend does not double-count
    // ==========================================================================
    #[test]
    fn test_wd_003_holiday_on_weekend() {
        let policy = PayrollPolicy::default();
        let mut period = create_january_period();
        // 2026-01-04 is a Sunday.
        period.holidays.push(Holiday {
            date: make_date("2026-01-04"),
            name: "Sunday Holiday".to_string(),
        });
        assert_eq!(count_working_days(&period, &policy), 22);
    }

    #[test]
    fn test_weekend_days_are_not_working_days() {
        let policy = PayrollPolicy::default();
        let period = create_january_period();
        // 2026-01-03 is a Saturday, 2026-01-04 a Sunday.
        assert!(!is_working_day(make_date("2026-01-03"), &period, &policy));
        assert!(!is_working_day(make_date("2026-01-04"), &period, &policy));
    }

    #[test]
    fn test_date_outside_period_is_not_working_day() {
        let policy = PayrollPolicy::default();
        let period = create_january_period();
        // 2026-02-02 is a Monday, but outside the period.
        assert!(!is_working_day(make_date("2026-02-02"), &period, &policy));
    }

    #[test]
    fn test_working_days_ordered() {
        let policy = PayrollPolicy::default();
        let period = create_january_period();
        let days = working_days(&period, &policy);
        assert_eq!(days.first(), Some(&make_date("2026-01-01")));
        assert_eq!(days.last(), Some(&make_date("2026-01-30")));
        for pair in days.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_single_day_period() {
        let policy = PayrollPolicy::default();
        // 2026-01-14 is a Wednesday.
        let period = PayPeriod {
            start_date: make_date("2026-01-14"),
            end_date: make_date("2026-01-14"),
            holidays: vec![],
        };
        assert_eq!(count_working_days(&period, &policy), 1);
    }

    #[test]
    fn test_weekend_only_period_has_no_working_days() {
        let policy = PayrollPolicy::default();
        // Saturday and Sunday only.
        let period = PayPeriod {
            start_date: make_date("2026-01-03"),
            end_date: make_date("2026-01-04"),
            holidays: vec![],
        };
        assert_eq!(count_working_days(&period, &policy), 0);
        assert!(working_days(&period, &policy).is_empty());
    }
}
