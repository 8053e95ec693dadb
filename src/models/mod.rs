//! Data models for the shift pay engine.
//!
//! This module contains the shift record entered by the driver, the pay
//! period used for archiving, and the derived pay breakdown.

mod breakdown;
mod pay_period;
mod shift_record;

pub use breakdown::PayBreakdown;
pub use pay_period::PayPeriod;
pub use shift_record::{ShiftRecord, time_hm};
