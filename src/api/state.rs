//! Application state for the shift pay API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, Mutex};

use crate::config::CommissionTable;
use crate::session::Session;
use crate::store::ArchiveStore;
use crate::upload::ObjectStore;

/// Shared application state.
///
/// Holds the single interactive session behind a mutex (there is exactly
/// one logical user session; the lock only serializes handler access to
/// it), the loaded commission tier table, the archive store, and the
/// optional report uploader.
#[derive(Clone)]
pub struct AppState {
    session: Arc<Mutex<Session>>,
    tiers: Arc<CommissionTable>,
    archive: Arc<ArchiveStore>,
    uploader: Option<Arc<dyn ObjectStore>>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(session: Session, tiers: CommissionTable, archive: ArchiveStore) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            tiers: Arc::new(tiers),
            archive: Arc::new(archive),
            uploader: None,
        }
    }

    /// Attaches a remote object store for publishing reports.
    pub fn with_uploader(mut self, uploader: Arc<dyn ObjectStore>) -> Self {
        self.uploader = Some(uploader);
        self
    }

    /// Returns the session mutex.
    pub fn session(&self) -> &Mutex<Session> {
        &self.session
    }

    /// Returns the commission tier table.
    pub fn tiers(&self) -> &CommissionTable {
        &self.tiers
    }

    /// Returns the archive store.
    pub fn archive(&self) -> &ArchiveStore {
        &self.archive
    }

    /// Returns the report uploader, if one is configured.
    pub fn uploader(&self) -> Option<&Arc<dyn ObjectStore>> {
        self.uploader.as_ref()
    }
}
