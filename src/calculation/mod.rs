//! Calculation logic for the shift pay engine.
//!
//! This module contains the pure pay-engine functions: per-shift metric
//! derivation (total, night, and overtime hours), night-window accrual,
//! commission base pay selection, and the aggregate pay breakdown.

mod base_pay;
mod breakdown;
mod night_hours;
mod shift_metrics;

pub use base_pay::select_base_pay;
pub use breakdown::{NIGHT_RATE_YEN, OVERTIME_RATE_YEN, compute_breakdown, deduction_rate};
pub use night_hours::{
    NIGHT_END_HOUR, NIGHT_START_HOUR, NightWindowMode, TICK_MINUTES, night_minutes,
};
pub use shift_metrics::{
    OVERTIME_THRESHOLD_HOURS, ShiftMetrics, compute_shift_metrics, compute_shift_metrics_with,
};
