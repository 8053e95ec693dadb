//! HTTP API module for the shift pay engine.
//!
//! This module provides the REST API endpoints for entering shift
//! records, computing the pay breakdown, rendering and publishing the
//! report, and archiving pay periods.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ArchiveRequest, RecordRequest};
pub use response::{
    ApiError, ArchiveResponse, MutationResponse, PublishResponse, RecordEntry, RecordListResponse,
};
pub use state::AppState;
