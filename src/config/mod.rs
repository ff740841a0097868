//! Configuration loading and management for the Work-Time Reconciliation
//! Engine.
//!
//! This module provides the strongly-typed [`EngineConfig`] and the YAML
//! loading entry point.
//!
//! # Example
//!
//! ```no_run
//! use worktime_engine::config;
//!
//! let config = config::load("./config/engine.yaml").unwrap();
//! println!("Standard day: {} minutes", config.standard_day_minutes);
//! ```

mod loader;
mod types;

pub use loader::load;
pub use types::EngineConfig;
