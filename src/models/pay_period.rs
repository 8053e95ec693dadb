//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type and the accounting rule
//! that places any given date in its 16th-to-15th pay period.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Represents a pay period with an inclusive date range.
///
/// The depot settles pay on a 16th-to-15th cycle: a period runs from the
/// 16th of a month through the 15th of the following month, inclusive.
///
/// # Example
///
/// ```
/// use shiftpay_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
/// let period = PayPeriod::containing(today);
///
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2024, 6, 16).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
/// assert!(period.contains_date(today));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive, always the 16th).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive, always the 15th).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Returns the pay period that contains the given date.
    ///
    /// If the day-of-month is 16 or later the period starts in that month;
    /// otherwise it started on the 16th of the previous month.
    pub fn containing(today: NaiveDate) -> Self {
        let (start_year, start_month) = if today.day() >= 16 {
            (today.year(), today.month())
        } else if today.month() == 1 {
            (today.year() - 1, 12)
        } else {
            (today.year(), today.month() - 1)
        };

        let (end_year, end_month) = if start_month == 12 {
            (start_year + 1, 1)
        } else {
            (start_year, start_month + 1)
        };

        // The 16th and 15th exist in every month.
        let start_date = NaiveDate::from_ymd_opt(start_year, start_month, 16)
            .expect("the 16th exists in every month");
        let end_date = NaiveDate::from_ymd_opt(end_year, end_month, 15)
            .expect("the 15th exists in every month");

        Self {
            start_date,
            end_date,
        }
    }

    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// PP-001: day >= 16 selects the period starting that month
    #[test]
    fn test_containing_after_the_16th() {
        let period = PayPeriod::containing(date("2024-06-20"));
        assert_eq!(period.start_date, date("2024-06-16"));
        assert_eq!(period.end_date, date("2024-07-15"));
    }

    /// PP-002: day <= 15 selects the period started the previous month
    #[test]
    fn test_containing_before_the_16th() {
        let period = PayPeriod::containing(date("2024-06-15"));
        assert_eq!(period.start_date, date("2024-05-16"));
        assert_eq!(period.end_date, date("2024-06-15"));
    }

    /// PP-003: the 16th itself starts a new period
    #[test]
    fn test_containing_on_the_16th() {
        let period = PayPeriod::containing(date("2024-06-16"));
        assert_eq!(period.start_date, date("2024-06-16"));
        assert_eq!(period.end_date, date("2024-07-15"));
    }

    /// PP-004: early-January dates fall in the period started in December
    #[test]
    fn test_containing_wraps_year_backward() {
        let period = PayPeriod::containing(date("2025-01-10"));
        assert_eq!(period.start_date, date("2024-12-16"));
        assert_eq!(period.end_date, date("2025-01-15"));
    }

    /// PP-005: late-December periods end in January of the next year
    #[test]
    fn test_containing_wraps_year_forward() {
        let period = PayPeriod::containing(date("2024-12-20"));
        assert_eq!(period.start_date, date("2024-12-16"));
        assert_eq!(period.end_date, date("2025-01-15"));
    }

    #[test]
    fn test_contains_date_is_inclusive() {
        let period = PayPeriod::containing(date("2024-06-20"));
        assert!(period.contains_date(period.start_date));
        assert!(period.contains_date(period.end_date));
        assert!(period.contains_date(date("2024-07-01")));
        assert!(!period.contains_date(date("2024-06-15")));
        assert!(!period.contains_date(date("2024-07-16")));
    }

    #[test]
    fn test_serialize_pay_period() {
        let period = PayPeriod::containing(date("2024-06-20"));
        let json = serde_json::to_string(&period).unwrap();
        assert!(json.contains("\"start_date\":\"2024-06-16\""));
        assert!(json.contains("\"end_date\":\"2024-07-15\""));
    }
}
