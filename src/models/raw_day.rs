//! Raw per-day attendance signals.
//!
//! This module defines [`RawDaySignals`], the engine's input record for one
//! calendar day, as handed over by the external page-fetching collaborator.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// The raw signals scraped for one calendar day.
///
/// Tick times come from the automated time clock; manual registrations are
/// hand-entered corrections or supplements. Both sequences arrive in the
/// portal's own chronological order and may be empty. The portal may also
/// report a pre-computed total worked duration for the day.
///
/// # Example
///
/// ```
/// use worktime_engine::models::RawDaySignals;
/// use chrono::NaiveTime;
///
/// let signals = RawDaySignals {
///     raw_day_code: "L".to_string(),
///     tick_times: vec![
///         NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///         NaiveTime::from_hms_opt(16, 30, 0).unwrap(),
///     ],
///     ..RawDaySignals::default()
/// };
/// assert!(signals.has_registrations());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDaySignals {
    /// The portal's raw day-type code (e.g. "L", "FEE", "CAO", or empty).
    #[serde(default)]
    pub raw_day_code: String,
    /// Clock-in/out timestamps recorded by the automated time clock.
    #[serde(default)]
    pub tick_times: Vec<NaiveTime>,
    /// Clock-in/out timestamps entered by hand.
    #[serde(default)]
    pub manual_registrations: Vec<NaiveTime>,
    /// Free-text anomaly report for the day (e.g. a missing punch).
    #[serde(default)]
    pub irregularities: String,
    /// The total worked duration as reported by the portal, if any.
    #[serde(default, with = "crate::models::duration::duration_secs_opt")]
    pub reported_total: Option<TimeDelta>,
}

impl RawDaySignals {
    /// Whether the day carries at least one tick or manual registration.
    pub fn has_registrations(&self) -> bool {
        !self.tick_times.is_empty() || !self.manual_registrations.is_empty()
    }

    /// The earliest registration of the day, across both sequences.
    pub fn first_registration(&self) -> Option<NaiveTime> {
        self.tick_times
            .iter()
            .chain(self.manual_registrations.iter())
            .copied()
            .min()
    }
}

/// Per-day raw signals for a whole month, keyed by calendar day.
///
/// Days missing from the map reconcile as the all-empty signal set.
pub type MonthSignals = BTreeMap<NaiveDate, RawDaySignals>;
