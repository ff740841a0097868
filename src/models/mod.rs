//! Core data models for the Work-Time Reconciliation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod day_code;
mod duration;
mod fetch_result;
mod prestation;
mod raw_day;

pub use day_code::DayCode;
pub use fetch_result::FetchResult;
pub use prestation::Prestation;
pub use raw_day::{MonthSignals, RawDaySignals};
