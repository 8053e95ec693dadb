//! The interactive session owning the live record set.
//!
//! The session is the single writer and single reader of the in-memory
//! record list and its backing store. Every operation is synchronous and
//! runs to completion before returning; the pay engine stays a pure
//! function receiving the record list as an explicit argument.
//!
//! Persistence failures on a mutation do not roll the mutation back: the
//! in-memory state remains authoritative and the failure is surfaced to
//! the caller as a warning. Failures that would corrupt the record set
//! (a bad index, a refused archive) abort with no partial mutation.

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::warn;

use crate::calculation::compute_breakdown;
use crate::config::CommissionTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{PayBreakdown, PayPeriod, ShiftRecord};
use crate::store::{ArchiveStore, RecordStore};

/// The result of a save attempt after an in-memory mutation.
///
/// `None` means the record file was rewritten; `Some` carries the warning
/// text for a failed save that left memory updated but the file stale.
pub type SaveWarning = Option<String>;

/// The outcome of closing a pay period.
#[derive(Debug, Clone)]
pub struct ArchiveOutcome {
    /// The pay period that was closed.
    pub period: PayPeriod,
    /// The number of records moved into the archive.
    pub archived: usize,
    /// The archive file path, when any records were archived.
    pub path: Option<PathBuf>,
    /// A warning when rewriting the live store failed afterwards.
    pub warning: SaveWarning,
}

/// An interactive session over the live record set.
#[derive(Debug)]
pub struct Session {
    store: RecordStore,
    records: Vec<ShiftRecord>,
}

impl Session {
    /// Opens a session against the given store.
    ///
    /// A load failure is non-fatal: the session starts with an empty
    /// record set and the failure is logged as a warning, since the
    /// in-memory list is the authoritative state from here on.
    pub fn open(store: RecordStore) -> Self {
        let records = match store.load() {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "record store unreadable, starting with an empty record set");
                Vec::new()
            }
        };
        Self { store, records }
    }

    /// Returns the live record set.
    pub fn records(&self) -> &[ShiftRecord] {
        &self.records
    }

    /// Returns the earliest and latest record dates, if any records exist.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.iter().map(|r| r.date).min()?;
        let last = self.records.iter().map(|r| r.date).max()?;
        Some((first, last))
    }

    /// Appends a record and rewrites the store.
    pub fn add_record(&mut self, record: ShiftRecord) -> SaveWarning {
        self.records.push(record);
        self.save_with_warning()
    }

    /// Replaces the record at `index` and rewrites the store.
    ///
    /// An out-of-range index aborts with `RecordNotFound` and no
    /// mutation.
    pub fn update_record(&mut self, index: usize, record: ShiftRecord) -> EngineResult<SaveWarning> {
        let slot = self
            .records
            .get_mut(index)
            .ok_or(EngineError::RecordNotFound { index })?;
        *slot = record;
        Ok(self.save_with_warning())
    }

    /// Removes the record at `index` and rewrites the store.
    pub fn delete_record(&mut self, index: usize) -> EngineResult<SaveWarning> {
        if index >= self.records.len() {
            return Err(EngineError::RecordNotFound { index });
        }
        self.records.remove(index);
        Ok(self.save_with_warning())
    }

    /// Computes the pay breakdown over the full current record set.
    pub fn breakdown(&self, table: &CommissionTable) -> EngineResult<PayBreakdown> {
        compute_breakdown(&self.records, table)
    }

    /// Closes the pay period containing `today`.
    ///
    /// The period's records are written to the archive first; only when
    /// the archive file exists are they removed from the live set. A
    /// period with no records archives nothing and creates no file. An
    /// existing archive for the period aborts with no mutation.
    pub fn archive_period(
        &mut self,
        archive: &ArchiveStore,
        today: NaiveDate,
    ) -> EngineResult<ArchiveOutcome> {
        let period = PayPeriod::containing(today);
        let in_period: Vec<ShiftRecord> = self
            .records
            .iter()
            .filter(|r| period.contains_date(r.date))
            .cloned()
            .collect();

        if in_period.is_empty() {
            return Ok(ArchiveOutcome {
                period,
                archived: 0,
                path: None,
                warning: None,
            });
        }

        let path = archive.write(&period, &in_period)?;
        self.records.retain(|r| !period.contains_date(r.date));

        Ok(ArchiveOutcome {
            period,
            archived: in_period.len(),
            path: Some(path),
            warning: self.save_with_warning(),
        })
    }

    /// Rewrites the store, turning a failure into a warning.
    fn save_with_warning(&self) -> SaveWarning {
        match self.store.save(&self.records) {
            Ok(()) => None,
            Err(e) => {
                warn!(error = %e, "record store save failed, in-memory state is authoritative");
                Some(e.to_string())
            }
        }
    }
}
