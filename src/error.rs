//! Error types for the shift pay engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration,
//! persisting shift records, or computing a pay breakdown.

use thiserror::Error;

/// The main error type for the shift pay engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use shiftpay_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/commission.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/commission.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Commission tier configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Commission tier configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift record field was malformed or inconsistent.
    #[error("Invalid record field '{field}': {message}")]
    InvalidRecord {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A record index did not refer to an existing record.
    #[error("No record at index {index}")]
    RecordNotFound {
        /// The index that was requested.
        index: usize,
    },

    /// The record store could not be read.
    #[error("Failed to read record store '{path}': {message}")]
    StoreReadError {
        /// The path of the store file.
        path: String,
        /// A description of the read failure.
        message: String,
    },

    /// The record store or an archive file could not be written.
    #[error("Failed to write record store '{path}': {message}")]
    StoreWriteError {
        /// The path of the store file.
        path: String,
        /// A description of the write failure.
        message: String,
    },

    /// An archive file for the pay period already exists.
    ///
    /// Archive files are never mutated after creation.
    #[error("Archive file already exists: {path}")]
    ArchiveExists {
        /// The path of the existing archive file.
        path: String,
    },

    /// A general calculation error occurred.
    ///
    /// With validated input this indicates a defect; the recomputation is
    /// aborted rather than returning partial figures.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// Publishing a report to the remote object store failed.
    #[error("Upload failed: {message}")]
    UploadError {
        /// A description of the upload failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
