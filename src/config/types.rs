//! Commission tier configuration types.

use serde::{Deserialize, Serialize};

/// One commission tier: a revenue floor mapped to a fixed base payout.
///
/// # Example
///
/// ```
/// use shiftpay_engine::config::CommissionTier;
///
/// let tier = CommissionTier {
///     threshold: 900_000,
///     base_amount: 508_712,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionTier {
    /// The revenue floor (inclusive), in yen.
    pub threshold: u64,
    /// The fixed payout awarded once total revenue meets the floor, in yen.
    pub base_amount: u64,
}

/// The full commission tier table.
///
/// Thresholds are unique; selection against the table is by
/// highest-qualifying-tier, not interpolation. The table does not need to
/// be ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionTable {
    tiers: Vec<CommissionTier>,
}

impl CommissionTable {
    /// Creates a table from a list of tiers.
    pub fn new(tiers: Vec<CommissionTier>) -> Self {
        Self { tiers }
    }

    /// Returns the tiers in the table.
    pub fn tiers(&self) -> &[CommissionTier] {
        &self.tiers
    }

    /// Returns whether the table has no tiers.
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        let table = CommissionTable::new(vec![]);
        assert!(table.is_empty());
        assert!(table.tiers().is_empty());
    }

    #[test]
    fn test_table_deserializes_from_yaml() {
        let yaml = r#"
tiers:
  - threshold: 400000
    base_amount: 231200
  - threshold: 900000
    base_amount: 508712
"#;
        let table: CommissionTable = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(table.tiers().len(), 2);
        assert_eq!(table.tiers()[1].threshold, 900_000);
        assert_eq!(table.tiers()[1].base_amount, 508_712);
    }
}
