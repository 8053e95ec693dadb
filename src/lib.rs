//! Take-home pay estimation engine for commission-based taxi drivers.
//!
//! This crate computes estimated take-home pay from manually entered
//! shift records (date, revenue, clock-out and clock-in times), applying
//! a tiered commission schedule plus night-hour and overtime premium
//! rules. Records persist to a flat tabular file, close into per-period
//! archives, and the computed breakdown renders as a plain-text report
//! that can optionally be published to a remote object store.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod session;
pub mod store;
pub mod upload;
