//! Night-hour accrual.
//!
//! This module computes how much of a shift falls in the night window
//! (22:00 through 04:59), during which a premium rate applies.
//!
//! The reference behaviour walks the shift in fixed 30-minute ticks and
//! counts a whole tick as night when its *starting* wall-clock hour is in
//! the window, clamping only at the shift end. That sampling over- and
//! under-counts boundary minutes depending on tick alignment: a tick
//! starting at 21:45 is not night even though it overlaps 22:00, while a
//! tick starting at 04:45 is fully night even though it runs past 05:00.
//! [`NightWindowMode::ExactOverlap`] is the documented alternative that
//! intersects the shift with the true half-open night window; it is never
//! selected implicitly.

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};

/// First wall-clock hour of the night window (inclusive).
pub const NIGHT_START_HOUR: u32 = 22;

/// Wall-clock hour the night window ends at (exclusive).
pub const NIGHT_END_HOUR: u32 = 5;

/// The sampling step of the reference accrual, in minutes.
pub const TICK_MINUTES: i64 = 30;

/// How night hours are accrued over a shift interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NightWindowMode {
    /// The reference behaviour: fixed 30-minute tick sampling.
    #[default]
    TickSampled,
    /// True half-open intersection with the nightly 22:00-05:00 window.
    ExactOverlap,
}

/// Returns whether a wall-clock hour falls in the night window.
fn is_night_hour(hour: u32) -> bool {
    hour >= NIGHT_START_HOUR || hour < NIGHT_END_HOUR
}

/// Computes the night minutes accrued over `[start, end)`.
///
/// # Examples
///
/// ```
/// use shiftpay_engine::calculation::{night_minutes, NightWindowMode};
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2024-06-01 21:45", "%Y-%m-%d %H:%M").unwrap();
/// let end = NaiveDateTime::parse_from_str("2024-06-01 22:45", "%Y-%m-%d %H:%M").unwrap();
///
/// // The 21:45 tick is not night; only the 22:15 tick counts.
/// assert_eq!(night_minutes(start, end, NightWindowMode::TickSampled), 30);
/// // The true overlap with the window is 22:00-22:45.
/// assert_eq!(night_minutes(start, end, NightWindowMode::ExactOverlap), 45);
/// ```
pub fn night_minutes(start: NaiveDateTime, end: NaiveDateTime, mode: NightWindowMode) -> i64 {
    match mode {
        NightWindowMode::TickSampled => tick_sampled_minutes(start, end),
        NightWindowMode::ExactOverlap => exact_overlap_minutes(start, end),
    }
}

/// Walks `[start, end)` in 30-minute ticks, counting ticks whose starting
/// hour is in the window and clamping the final tick to the shift end.
fn tick_sampled_minutes(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let tick = Duration::minutes(TICK_MINUTES);
    let mut minutes = 0;
    let mut current = start;
    while current < end {
        if is_night_hour(current.time().hour()) {
            let tick_end = std::cmp::min(current + tick, end);
            minutes += (tick_end - current).num_minutes();
        }
        current += tick;
    }
    minutes
}

/// Sums the exact overlap of `[start, end)` with each nightly window
/// `[d 22:00, d+1 05:00)` the shift can touch.
fn exact_overlap_minutes(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let window_open = NaiveTime::from_hms_opt(NIGHT_START_HOUR, 0, 0)
        .expect("22:00 is a valid time");
    let window_close = NaiveTime::from_hms_opt(NIGHT_END_HOUR, 0, 0)
        .expect("05:00 is a valid time");

    let mut minutes = 0;
    // The window anchored on the day before the shift start can still
    // overlap (a shift starting at 03:00 sits in the previous night).
    let mut day = start.date().pred_opt().unwrap_or(start.date());
    while day <= end.date() {
        let next_day = match day.succ_opt() {
            Some(d) => d,
            None => break,
        };
        let window_start = day.and_time(window_open);
        let window_end = next_day.and_time(window_close);

        let overlap_start = std::cmp::max(start, window_start);
        let overlap_end = std::cmp::min(end, window_end);
        if overlap_end > overlap_start {
            minutes += (overlap_end - overlap_start).num_minutes();
        }
        day = next_day;
    }
    minutes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    /// NH-001: pinned golden value for the reference 17:00-03:30 shift
    #[test]
    fn test_golden_overnight_shift_tick_sampled() {
        // Ticks at 22:00, 22:30, ... 03:00 - eleven half-hour ticks.
        let minutes = night_minutes(
            dt("2024-06-01 17:00"),
            dt("2024-06-02 03:30"),
            NightWindowMode::TickSampled,
        );
        assert_eq!(minutes, 330); // 5.5 hours
    }

    /// NH-002: the same shift under exact intersection
    #[test]
    fn test_golden_overnight_shift_exact() {
        let minutes = night_minutes(
            dt("2024-06-01 17:00"),
            dt("2024-06-02 03:30"),
            NightWindowMode::ExactOverlap,
        );
        assert_eq!(minutes, 330);
    }

    /// NH-003: a tick starting at 21:45 is not counted as night
    #[test]
    fn test_tick_before_window_is_not_night() {
        let minutes = night_minutes(
            dt("2024-06-01 21:45"),
            dt("2024-06-01 22:45"),
            NightWindowMode::TickSampled,
        );
        assert_eq!(minutes, 30);
        // Exact intersection counts the 22:00-22:45 overlap instead.
        let exact = night_minutes(
            dt("2024-06-01 21:45"),
            dt("2024-06-01 22:45"),
            NightWindowMode::ExactOverlap,
        );
        assert_eq!(exact, 45);
    }

    /// NH-004: a tick starting at 04:45 is fully counted as night
    #[test]
    fn test_tick_straddling_window_end_is_night() {
        let minutes = night_minutes(
            dt("2024-06-02 04:45"),
            dt("2024-06-02 06:00"),
            NightWindowMode::TickSampled,
        );
        assert_eq!(minutes, 30);
        let exact = night_minutes(
            dt("2024-06-02 04:45"),
            dt("2024-06-02 06:00"),
            NightWindowMode::ExactOverlap,
        );
        assert_eq!(exact, 15);
    }

    /// NH-005: a daytime shift accrues nothing under either mode
    #[test]
    fn test_daytime_shift_accrues_nothing() {
        for mode in [NightWindowMode::TickSampled, NightWindowMode::ExactOverlap] {
            let minutes = night_minutes(dt("2024-06-01 09:00"), dt("2024-06-01 18:00"), mode);
            assert_eq!(minutes, 0, "mode {:?}", mode);
        }
    }

    /// NH-006: a full 24-hour shift accrues the whole 7-hour window
    #[test]
    fn test_full_day_shift_accrues_whole_window() {
        for mode in [NightWindowMode::TickSampled, NightWindowMode::ExactOverlap] {
            let minutes = night_minutes(dt("2024-06-01 20:00"), dt("2024-06-02 20:00"), mode);
            assert_eq!(minutes, 7 * 60, "mode {:?}", mode);
        }
    }

    /// NH-007: an early-morning shift sits in the previous night's window
    #[test]
    fn test_early_morning_shift_exact_overlap() {
        let minutes = night_minutes(
            dt("2024-06-02 03:00"),
            dt("2024-06-02 04:30"),
            NightWindowMode::ExactOverlap,
        );
        assert_eq!(minutes, 90);
    }

    /// NH-008: the final tick is clamped to the shift end
    #[test]
    fn test_final_tick_clamped_to_shift_end() {
        // Ticks at 23:00, 23:30, 00:00; the last covers only 10 minutes.
        let minutes = night_minutes(
            dt("2024-06-01 23:00"),
            dt("2024-06-02 00:10"),
            NightWindowMode::TickSampled,
        );
        assert_eq!(minutes, 70);
    }

    #[test]
    fn test_empty_interval_accrues_nothing() {
        let at = dt("2024-06-01 23:00");
        assert_eq!(night_minutes(at, at, NightWindowMode::TickSampled), 0);
        assert_eq!(night_minutes(at, at, NightWindowMode::ExactOverlap), 0);
    }
}
