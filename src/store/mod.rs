//! Persistence for shift records.
//!
//! The live record set persists to one flat tabular file with
//! last-write-wins overwrite semantics; closed pay periods archive into
//! immutable per-period files with the same row schema.

mod archive;
mod records;

pub use archive::ArchiveStore;
pub use records::{RecordStore, STORE_HEADER};
