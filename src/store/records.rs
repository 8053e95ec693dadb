//! Flat-file record store.
//!
//! Shift records persist to a plain text file with fixed columns
//! `date,revenue,clock_out,clock_in`, a header row, and one row per
//! shift. Every save is a full overwrite; there is no append log and no
//! transaction. None of the four fields can contain a comma, so rows are
//! split on commas directly.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime};

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftRecord;

/// The fixed header row of the record file.
pub const STORE_HEADER: &str = "date,revenue,clock_out,clock_in";

/// Formats one record as a store row.
pub(crate) fn format_row(record: &ShiftRecord) -> String {
    format!(
        "{},{},{},{}",
        record.date.format("%Y-%m-%d"),
        record.revenue,
        record.clock_out.format("%H:%M"),
        record.clock_in.format("%H:%M"),
    )
}

/// Formats a full record file: header plus one row per record.
pub(crate) fn format_file(records: &[ShiftRecord]) -> String {
    let mut out = String::from(STORE_HEADER);
    out.push('\n');
    for record in records {
        out.push_str(&format_row(record));
        out.push('\n');
    }
    out
}

/// Parses one store row into a record.
fn parse_row(line: &str, line_number: usize, path: &str) -> EngineResult<ShiftRecord> {
    let row_error = |message: String| EngineError::StoreReadError {
        path: path.to_string(),
        message: format!("line {line_number}: {message}"),
    };

    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 4 {
        return Err(row_error(format!("expected 4 fields, found {}", fields.len())));
    }

    let date = NaiveDate::parse_from_str(fields[0], "%Y-%m-%d")
        .map_err(|_| row_error(format!("invalid date '{}'", fields[0])))?;
    let revenue: u64 = fields[1]
        .parse()
        .map_err(|_| row_error(format!("invalid revenue '{}'", fields[1])))?;
    let clock_out = NaiveTime::parse_from_str(fields[2], "%H:%M")
        .map_err(|_| row_error(format!("invalid clock_out time '{}'", fields[2])))?;
    let clock_in = NaiveTime::parse_from_str(fields[3], "%H:%M")
        .map_err(|_| row_error(format!("invalid clock_in time '{}'", fields[3])))?;

    Ok(ShiftRecord {
        date,
        revenue,
        clock_out,
        clock_in,
    })
}

/// The live record store: one flat file holding the current record set.
///
/// # Example
///
/// ```no_run
/// use shiftpay_engine::store::RecordStore;
///
/// let store = RecordStore::new("/app/data/entries.csv");
/// let records = store.load()?;
/// # Ok::<(), shiftpay_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Creates a store backed by the given file path.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all records from the store file.
    ///
    /// A missing file is not an error: it is the first run and yields an
    /// empty record set. An unreadable or malformed file returns
    /// `StoreReadError`; the caller decides whether to degrade to an
    /// empty set.
    pub fn load(&self) -> EngineResult<Vec<ShiftRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let path_str = self.path.display().to_string();
        let content = fs::read_to_string(&self.path).map_err(|e| EngineError::StoreReadError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        let mut lines = content.lines().enumerate();
        match lines.next() {
            Some((_, header)) if header == STORE_HEADER => {}
            Some((_, header)) => {
                return Err(EngineError::StoreReadError {
                    path: path_str,
                    message: format!("unexpected header '{header}'"),
                });
            }
            None => return Ok(Vec::new()),
        }

        let mut records = Vec::new();
        for (index, line) in lines {
            if line.is_empty() {
                continue;
            }
            records.push(parse_row(line, index + 1, &path_str)?);
        }
        Ok(records)
    }

    /// Saves the full record set, overwriting the store file.
    pub fn save(&self, records: &[ShiftRecord]) -> EngineResult<()> {
        let path_str = self.path.display().to_string();

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| EngineError::StoreWriteError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;
        }

        fs::write(&self.path, format_file(records)).map_err(|e| EngineError::StoreWriteError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn record(date: &str, revenue: u64, out: &str, inn: &str) -> ShiftRecord {
        ShiftRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            revenue,
            clock_out: NaiveTime::parse_from_str(out, "%H:%M").unwrap(),
            clock_in: NaiveTime::parse_from_str(inn, "%H:%M").unwrap(),
        }
    }

    /// RS-001: a missing file loads as an empty record set
    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("entries.csv"));
        assert!(store.load().unwrap().is_empty());
    }

    /// RS-002: records survive a save/load cycle byte-for-byte
    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("entries.csv"));
        let records = vec![
            record("2024-06-01", 50_000, "17:00", "03:30"),
            record("2024-06-02", 42_000, "09:00", "18:00"),
        ];

        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            content,
            "date,revenue,clock_out,clock_in\n\
             2024-06-01,50000,17:00,03:30\n\
             2024-06-02,42000,09:00,18:00\n"
        );
    }

    /// RS-003: saving is a full overwrite, not an append
    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("entries.csv"));

        store
            .save(&[record("2024-06-01", 50_000, "17:00", "03:30")])
            .unwrap();
        store
            .save(&[record("2024-06-03", 61_000, "16:00", "02:00")])
            .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].revenue, 61_000);
    }

    /// RS-004: a malformed row fails with line context
    #[test]
    fn test_malformed_row_fails_with_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.csv");
        fs::write(
            &path,
            "date,revenue,clock_out,clock_in\n2024-06-01,notanumber,17:00,03:30\n",
        )
        .unwrap();

        let result = RecordStore::new(&path).load();
        match result {
            Err(EngineError::StoreReadError { message, .. }) => {
                assert!(message.contains("line 2"));
                assert!(message.contains("notanumber"));
            }
            other => panic!("Expected StoreReadError, got {:?}", other),
        }
    }

    /// RS-005: a file with the wrong header is rejected
    #[test]
    fn test_wrong_header_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.csv");
        fs::write(&path, "day,money,start,end\n").unwrap();

        let result = RecordStore::new(&path).load();
        assert!(matches!(result, Err(EngineError::StoreReadError { .. })));
    }

    /// RS-006: saving an empty set leaves just the header
    #[test]
    fn test_save_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("entries.csv"));
        store.save(&[]).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "date,revenue,clock_out,clock_in\n");
        assert!(store.load().unwrap().is_empty());
    }
}
