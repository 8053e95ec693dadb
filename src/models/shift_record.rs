//! Shift record model.
//!
//! This module defines the [`ShiftRecord`] struct representing one taxi
//! shift as entered by the driver, along with the overnight rollover rule
//! that turns the pair of wall-clock times into absolute instants.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Serde helper for `HH:MM` times.
///
/// Shift records carry clock times without seconds, both in the flat
/// record file and over the API. Used via `#[serde(with = "time_hm")]`.
pub mod time_hm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    /// The wire format for clock times.
    pub const FORMAT: &str = "%H:%M";

    /// Serializes a time as `HH:MM`.
    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    /// Deserializes a time from `HH:MM`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Represents one shift as entered by the driver.
///
/// `clock_out` is the time the driver left the garage (the shift start)
/// and `clock_in` the time they returned (the shift end), following taxi
/// depot convention. When `clock_in` as a time-of-day is not strictly
/// later than `clock_out`, the shift is assumed to span midnight and ends
/// on the day after `date`.
///
/// # Examples
///
/// ```
/// use shiftpay_engine::models::ShiftRecord;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let record = ShiftRecord {
///     date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     revenue: 50_000,
///     clock_out: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     clock_in: NaiveTime::from_hms_opt(3, 30, 0).unwrap(),
/// };
/// // Overnight shift: ends at 03:30 on 2024-06-02.
/// assert_eq!(record.worked_minutes(), 630);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// The calendar date the shift started on (local wall clock, no zone).
    pub date: NaiveDate,
    /// Revenue taken during the shift, in whole yen.
    pub revenue: u64,
    /// The time the driver left the garage (shift start).
    #[serde(with = "time_hm")]
    pub clock_out: NaiveTime,
    /// The time the driver returned to the garage (shift end).
    #[serde(with = "time_hm")]
    pub clock_in: NaiveTime,
}

impl ShiftRecord {
    /// Returns the absolute start instant of the shift.
    pub fn start_instant(&self) -> NaiveDateTime {
        self.date.and_time(self.clock_out)
    }

    /// Returns the absolute end instant of the shift.
    ///
    /// If the naive same-day interval would be empty or negative, the end
    /// rolls over to the day after `date`.
    pub fn end_instant(&self) -> NaiveDateTime {
        let naive_end = self.date.and_time(self.clock_in);
        if naive_end > self.start_instant() {
            naive_end
        } else {
            naive_end
                .checked_add_days(Days::new(1))
                .unwrap_or(naive_end)
        }
    }

    /// Returns the total worked duration of the shift in minutes.
    pub fn worked_minutes(&self) -> i64 {
        (self.end_instant() - self.start_instant()).num_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, revenue: u64, out: &str, inn: &str) -> ShiftRecord {
        ShiftRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            revenue,
            clock_out: NaiveTime::parse_from_str(out, "%H:%M").unwrap(),
            clock_in: NaiveTime::parse_from_str(inn, "%H:%M").unwrap(),
        }
    }

    /// SR-001: same-day shift when clock-in is later than clock-out
    #[test]
    fn test_same_day_shift() {
        let r = record("2024-06-02", 42_000, "09:00", "18:00");
        assert_eq!(r.start_instant().to_string(), "2024-06-02 09:00:00");
        assert_eq!(r.end_instant().to_string(), "2024-06-02 18:00:00");
        assert_eq!(r.worked_minutes(), 540);
    }

    /// SR-002: overnight shift when clock-in is earlier than clock-out
    #[test]
    fn test_overnight_shift_rolls_end_to_next_day() {
        let r = record("2024-06-01", 50_000, "17:00", "03:30");
        assert_eq!(r.end_instant().to_string(), "2024-06-02 03:30:00");
        assert_eq!(r.worked_minutes(), 630); // 10.5 hours
    }

    /// SR-003: equal times are treated as a full 24-hour overnight shift
    #[test]
    fn test_equal_times_roll_over() {
        let r = record("2024-06-01", 0, "20:00", "20:00");
        assert_eq!(r.worked_minutes(), 24 * 60);
    }

    /// SR-004: overnight rollover across a month boundary
    #[test]
    fn test_rollover_across_month_boundary() {
        let r = record("2024-06-30", 38_000, "19:00", "02:00");
        assert_eq!(r.end_instant().to_string(), "2024-07-01 02:00:00");
        assert_eq!(r.worked_minutes(), 420);
    }

    #[test]
    fn test_serialization_uses_hh_mm_times() {
        let r = record("2024-06-01", 50_000, "17:00", "03:30");
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"clock_out\":\"17:00\""));
        assert!(json.contains("\"clock_in\":\"03:30\""));
        assert!(json.contains("\"date\":\"2024-06-01\""));

        let back: ShiftRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn test_deserialization_rejects_seconds() {
        let json = r#"{
            "date": "2024-06-01",
            "revenue": 50000,
            "clock_out": "17:00:00",
            "clock_in": "03:30"
        }"#;
        assert!(serde_json::from_str::<ShiftRecord>(json).is_err());
    }
}
