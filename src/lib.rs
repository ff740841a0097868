//! Work-Time Reconciliation Engine.
//!
//! This crate reconstructs a person's monthly work-time ledger from raw
//! per-day attendance registrations (clock punches, manual corrections,
//! day-type codes, irregularity notes) and computes worked duration,
//! required duration, overtime, weekly overtime rollups, and a predicted
//! checkout time for the current day.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
