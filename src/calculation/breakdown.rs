//! Aggregate pay breakdown.
//!
//! This module folds the full record set into a [`PayBreakdown`]: total
//! revenue, summed night and overtime hours, the selected commission base
//! amount, the two premiums, the deduction, and the take-home figure.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::CommissionTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{PayBreakdown, ShiftRecord};

use super::base_pay::select_base_pay;
use super::shift_metrics::compute_shift_metrics;

/// Premium rate for night hours, in yen per hour.
pub const NIGHT_RATE_YEN: u64 = 600;

/// Premium rate for overtime hours, in yen per hour.
pub const OVERTIME_RATE_YEN: u64 = 250;

/// The payroll deduction rate applied to gross pay (11.5%).
pub fn deduction_rate() -> Decimal {
    Decimal::new(115, 3)
}

/// Truncates a non-negative decimal yen amount to a whole-yen integer.
fn floor_yen(amount: Decimal) -> EngineResult<u64> {
    amount
        .floor()
        .to_u64()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("amount {amount} cannot be represented in whole yen"),
        })
}

/// Computes the full pay breakdown for a set of shift records.
///
/// A stateless, idempotent recomputation over the entire record set:
/// per-record metrics are summed, the base amount is selected from the
/// tier table against the aggregate revenue, and each monetary figure is
/// truncated to whole yen independently, after multiplying the rounded
/// hour sums by the premium rates. Total over any input including the
/// empty set, which yields the all-zero breakdown.
///
/// # Examples
///
/// ```
/// use shiftpay_engine::calculation::compute_breakdown;
/// use shiftpay_engine::config::CommissionTable;
///
/// let breakdown = compute_breakdown(&[], &CommissionTable::new(vec![])).unwrap();
/// assert_eq!(breakdown.take_home, 0);
/// ```
pub fn compute_breakdown(
    records: &[ShiftRecord],
    table: &CommissionTable,
) -> EngineResult<PayBreakdown> {
    let mut total_revenue: u64 = 0;
    let mut night_hours = Decimal::ZERO;
    let mut overtime_hours = Decimal::ZERO;

    for record in records {
        let metrics = compute_shift_metrics(record);
        total_revenue += record.revenue;
        night_hours += metrics.night_hours;
        overtime_hours += metrics.overtime_hours;
    }

    let base_pay = select_base_pay(total_revenue, table);
    let night_premium = floor_yen(night_hours * Decimal::from(NIGHT_RATE_YEN))?;
    let overtime_premium = floor_yen(overtime_hours * Decimal::from(OVERTIME_RATE_YEN))?;
    let gross_pay = base_pay + night_premium + overtime_premium;
    let deduction = floor_yen(Decimal::from(gross_pay) * deduction_rate())?;
    let take_home = gross_pay - deduction;

    Ok(PayBreakdown {
        total_revenue,
        total_night_hours: night_hours,
        total_overtime_hours: overtime_hours,
        base_pay,
        night_premium,
        overtime_premium,
        gross_pay,
        deduction,
        take_home,
    })
}
