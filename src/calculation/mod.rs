//! Calculation logic for the Work-Time Reconciliation Engine.
//!
//! This module contains the reconciliation pipeline: primitive interval
//! arithmetic, registration normalization, the lunch-break compensation
//! heuristic, per-day reconciliation, month aggregation with weekly
//! overtime rollups, and checkout prediction for the current day.

mod checkout;
mod day;
mod intervals;
mod lunch;
mod month;
mod registrations;

pub use checkout::predict_checkout;
pub use day::reconcile_day;
pub use intervals::{duration_between, paired_intervals_total};
pub use lunch::{compensate_for_lunch, is_in_lunch_hours, time_out_during_lunch};
pub use month::{days_in_month, reconcile_month};
pub use registrations::normalize_registrations;
