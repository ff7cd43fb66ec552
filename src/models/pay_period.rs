//! Pay period and holiday models.
//!
//! This module contains the [`PayPeriod`] and [`Holiday`] types used to
//! define the calculation window for payroll calculations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// A holiday within a pay period.
///
/// Holidays are external configuration carried with the period; days listed
/// here are excluded from the working-day count.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
///     name: "Republic Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
}

/// A pay period with its date range and associated holidays.
///
/// A pay period defines the time window for payroll calculation. Both end
/// dates are inclusive.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayPeriod, Holiday};
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     holidays: vec![Holiday {
///         date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
///         name: "Republic Day".to_string(),
///     }],
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
/// assert!(period.is_holiday(NaiveDate::from_ymd_opt(2026, 1, 26).unwrap()));
/// assert_eq!(period.days(), 31);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
    /// Holidays that fall within this pay period.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Checks if a given date is listed as a holiday for this period.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.iter().any(|h| h.date == date)
    }

    /// Returns the number of calendar days in the period, inclusive.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Returns the fraction of a 365-day year this period covers.
    ///
    /// Used to prorate annual allowances. The year basis is fixed at 365
    /// days regardless of leap years.
    pub fn year_fraction(&self) -> Decimal {
        Decimal::from(self.days()) / Decimal::from(365)
    }

    /// Iterates every calendar day of the period in order.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start_date
            .iter_days()
            .take_while(move |d| *d <= self.end_date)
    }

    /// Validates the date range of this period.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidPeriod`] if the end date precedes the
    /// start date.
    pub fn validate(&self) -> PayrollResult<()> {
        if self.end_date < self.start_date {
            return Err(PayrollError::InvalidPeriod {
                message: format!(
                    "end date {} is before start date {}",
                    self.end_date, self.start_date
                ),
            });
        }
        Ok(())
    }
}
