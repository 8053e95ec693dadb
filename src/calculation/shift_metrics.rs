//! Per-shift derived metrics.
//!
//! This module turns one [`ShiftRecord`] into its derived hour figures:
//! total worked hours, night hours, and overtime hours.

use rust_decimal::Decimal;

use crate::models::ShiftRecord;

use super::night_hours::{NightWindowMode, night_minutes};

/// Hours worked beyond this threshold in a single shift count as overtime.
pub const OVERTIME_THRESHOLD_HOURS: u32 = 9;

/// The derived hour figures for one shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftMetrics {
    /// Total worked hours, rounded to two decimal places.
    pub total_hours: Decimal,
    /// Hours accrued in the night window, rounded to two decimal places.
    pub night_hours: Decimal,
    /// Hours worked beyond the overtime threshold, rounded to two decimal
    /// places; never negative.
    pub overtime_hours: Decimal,
}

/// Converts a minute count to decimal hours.
fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::from(minutes) / Decimal::from(60)
}

/// Computes the derived metrics for one shift record.
///
/// Pure function of its input: no side effects, deterministic, and the
/// record is not mutated. Night hours use the reference tick-sampled
/// accrual; see [`compute_shift_metrics_with`] for the exact-intersection
/// alternative.
///
/// # Examples
///
/// ```
/// use shiftpay_engine::calculation::compute_shift_metrics;
/// use shiftpay_engine::models::ShiftRecord;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let record = ShiftRecord {
///     date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     revenue: 50_000,
///     clock_out: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     clock_in: NaiveTime::from_hms_opt(3, 30, 0).unwrap(),
/// };
///
/// let metrics = compute_shift_metrics(&record);
/// assert_eq!(metrics.total_hours, Decimal::new(105, 1)); // 10.5
/// assert_eq!(metrics.overtime_hours, Decimal::new(15, 1)); // 1.5
/// assert_eq!(metrics.night_hours, Decimal::new(55, 1)); // 5.5
/// ```
pub fn compute_shift_metrics(record: &ShiftRecord) -> ShiftMetrics {
    compute_shift_metrics_with(record, NightWindowMode::TickSampled)
}

/// Computes the derived metrics for one shift record with an explicit
/// night-window accrual mode.
pub fn compute_shift_metrics_with(record: &ShiftRecord, mode: NightWindowMode) -> ShiftMetrics {
    let start = record.start_instant();
    let end = record.end_instant();

    let worked = minutes_to_hours(record.worked_minutes());
    let overtime = (worked - Decimal::from(OVERTIME_THRESHOLD_HOURS)).max(Decimal::ZERO);
    let night = minutes_to_hours(night_minutes(start, end, mode));

    ShiftMetrics {
        total_hours: worked.round_dp(2),
        night_hours: night.round_dp(2),
        overtime_hours: overtime.round_dp(2),
    }
}
