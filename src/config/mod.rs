//! Commission tier configuration.
//!
//! The tier table maps aggregate revenue floors to fixed base payouts and
//! loads from a YAML file shipped with the deployment.

mod loader;
mod types;

pub use types::{CommissionTable, CommissionTier};
