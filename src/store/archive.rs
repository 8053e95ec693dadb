//! Pay-period archive store.
//!
//! Closed pay periods archive into one file each, named by the period's
//! start and end dates. Archive files use the same row schema as the live
//! record store, are created only on explicit user action, and are never
//! mutated after creation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};
use crate::models::{PayPeriod, ShiftRecord};

use super::records::format_file;

/// The archive store: a directory of immutable per-period record files.
///
/// # Example
///
/// ```no_run
/// use shiftpay_engine::store::ArchiveStore;
/// use shiftpay_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let archive = ArchiveStore::new("/app/data/archive");
/// let period = PayPeriod::containing(NaiveDate::from_ymd_opt(2024, 6, 20).unwrap());
/// let path = archive.write(&period, &[])?;
/// # Ok::<(), shiftpay_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ArchiveStore {
    dir: PathBuf,
}

impl ArchiveStore {
    /// Creates an archive store backed by the given directory.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the archive directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the archive file name for a pay period.
    pub fn file_name(period: &PayPeriod) -> String {
        format!(
            "entries_{}_{}.csv",
            period.start_date.format("%Y-%m-%d"),
            period.end_date.format("%Y-%m-%d"),
        )
    }

    /// Returns the archive file path for a pay period.
    pub fn path_for(&self, period: &PayPeriod) -> PathBuf {
        self.dir.join(Self::file_name(period))
    }

    /// Writes the archive file for a closed pay period.
    ///
    /// Fails with `ArchiveExists` if the period was already archived;
    /// archive files are never overwritten.
    pub fn write(&self, period: &PayPeriod, records: &[ShiftRecord]) -> EngineResult<PathBuf> {
        let path = self.path_for(period);
        let path_str = path.display().to_string();

        if path.exists() {
            return Err(EngineError::ArchiveExists { path: path_str });
        }

        fs::create_dir_all(&self.dir).map_err(|e| EngineError::StoreWriteError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        fs::write(&path, format_file(records)).map_err(|e| EngineError::StoreWriteError {
            path: path_str,
            message: e.to_string(),
        })?;

        Ok(path)
    }
}
