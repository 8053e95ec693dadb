//! Commission base pay selection.
//!
//! This module selects the fixed base payout from the commission tier
//! table for a given aggregate revenue.

use crate::config::CommissionTable;

/// Selects the base payout for the given total revenue.
///
/// Highest-qualifying-tier policy: among all tiers whose threshold the
/// revenue meets or exceeds, the tier with the highest threshold wins and
/// its `base_amount` is returned. If no tier qualifies, or the table is
/// empty, the base pay is zero. A single scan over the table means an
/// unordered or sparse table loaded from an external source behaves the
/// same as an ordered one.
///
/// # Examples
///
/// ```
/// use shiftpay_engine::calculation::select_base_pay;
/// use shiftpay_engine::config::{CommissionTable, CommissionTier};
///
/// let table = CommissionTable::new(vec![
///     CommissionTier { threshold: 500_000, base_amount: 285_100 },
///     CommissionTier { threshold: 400_000, base_amount: 231_200 },
/// ]);
///
/// assert_eq!(select_base_pay(520_000, &table), 285_100);
/// assert_eq!(select_base_pay(400_000, &table), 231_200);
/// assert_eq!(select_base_pay(399_999, &table), 0);
/// ```
pub fn select_base_pay(total_revenue: u64, table: &CommissionTable) -> u64 {
    table
        .tiers()
        .iter()
        .filter(|tier| total_revenue >= tier.threshold)
        .max_by_key(|tier| tier.threshold)
        .map(|tier| tier.base_amount)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CommissionTier;

    fn reference_table() -> CommissionTable {
        CommissionTable::new(
            [
                (400_000, 231_200),
                (450_000, 258_400),
                (500_000, 285_100),
                (550_000, 311_800),
                (600_000, 338_900),
                (650_000, 365_600),
                (700_000, 392_400),
                (750_000, 419_600),
                (800_000, 448_300),
                (850_000, 478_200),
                (900_000, 508_712),
            ]
            .into_iter()
            .map(|(threshold, base_amount)| CommissionTier {
                threshold,
                base_amount,
            })
            .collect(),
        )
    }

    /// BP-001: exact match on the top threshold selects the top tier
    #[test]
    fn test_exact_top_threshold_match() {
        assert_eq!(select_base_pay(900_000, &reference_table()), 508_712);
    }

    /// BP-002: revenue beyond the top threshold still selects the top tier
    #[test]
    fn test_revenue_beyond_top_threshold() {
        assert_eq!(select_base_pay(925_000, &reference_table()), 508_712);
    }

    /// BP-003: zero revenue qualifies for no tier
    #[test]
    fn test_zero_revenue() {
        assert_eq!(select_base_pay(0, &reference_table()), 0);
    }

    /// BP-004: an empty table yields zero base pay, not an error
    #[test]
    fn test_empty_table() {
        let table = CommissionTable::new(vec![]);
        assert_eq!(select_base_pay(900_000, &table), 0);
    }

    /// BP-005: revenue between thresholds selects the band below it
    #[test]
    fn test_between_thresholds_selects_lower_band() {
        assert_eq!(select_base_pay(449_999, &reference_table()), 231_200);
        assert_eq!(select_base_pay(450_000, &reference_table()), 258_400);
    }

    /// BP-006: selection is independent of table ordering
    #[test]
    fn test_unordered_table() {
        let table = CommissionTable::new(vec![
            CommissionTier {
                threshold: 600_000,
                base_amount: 338_900,
            },
            CommissionTier {
                threshold: 400_000,
                base_amount: 231_200,
            },
            CommissionTier {
                threshold: 500_000,
                base_amount: 285_100,
            },
        ]);
        assert_eq!(select_base_pay(610_000, &table), 338_900);
        assert_eq!(select_base_pay(480_000, &table), 231_200);
    }
}
