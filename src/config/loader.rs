//! Commission tier configuration loading.
//!
//! This module loads the [`CommissionTable`] from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::CommissionTable;

impl CommissionTable {
    /// Loads a commission table from a YAML file.
    ///
    /// # File Format
    ///
    /// ```text
    /// tiers:
    ///   - threshold: 400000
    ///     base_amount: 231200
    ///   - threshold: 450000
    ///     base_amount: 258400
    /// ```
    ///
    /// # Returns
    ///
    /// Returns the table on success, or an error if:
    /// - The file does not exist (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    ///
    /// An empty `tiers` list is valid and yields a base pay of zero for
    /// every revenue figure.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shiftpay_engine::config::CommissionTable;
    ///
    /// let table = CommissionTable::load("./config/commission.yaml")?;
    /// # Ok::<(), shiftpay_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
