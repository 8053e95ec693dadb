//! Pay breakdown model.
//!
//! This module defines [`PayBreakdown`], the aggregate figures derived
//! from the full record set. A breakdown is never persisted; it is
//! recomputed from scratch on every evaluation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The aggregate pay figures for a set of shift records.
///
/// Monetary fields are whole yen; hour fields are decimal hours rounded
/// to two places. Decimals serialize as strings so no precision is lost
/// on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Total revenue across all records, in yen.
    pub total_revenue: u64,
    /// Total night hours across all records.
    pub total_night_hours: Decimal,
    /// Total overtime hours across all records.
    pub total_overtime_hours: Decimal,
    /// The commission base amount selected from the tier table, in yen.
    pub base_pay: u64,
    /// The night-hour premium, in yen.
    pub night_premium: u64,
    /// The overtime premium, in yen.
    pub overtime_premium: u64,
    /// Base pay plus both premiums, in yen.
    pub gross_pay: u64,
    /// The payroll deduction withheld from gross pay, in yen.
    pub deduction: u64,
    /// Gross pay minus the deduction, in yen.
    pub take_home: u64,
}

impl PayBreakdown {
    /// Returns the all-zero breakdown produced by an empty record set.
    pub fn zero() -> Self {
        Self {
            total_revenue: 0,
            total_night_hours: Decimal::ZERO,
            total_overtime_hours: Decimal::ZERO,
            base_pay: 0,
            night_premium: 0,
            overtime_premium: 0,
            gross_pay: 0,
            deduction: 0,
            take_home: 0,
        }
    }
}
