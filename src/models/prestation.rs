//! The per-day computed work-time record.
//!
//! This module defines [`Prestation`], the reconciled result for one
//! calendar day.

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// The computed work-time record for one calendar day.
///
/// A `Prestation` is produced once per day by the day reconciler with its
/// week fields unset; the month aggregator then replaces the record of each
/// week's last day with one carrying the week's cumulative overtime, via
/// [`Prestation::with_week_overtime`]. Records are never mutated in place.
///
/// The identity `overtime == duration - needed_duration` holds for every
/// `Prestation` the engine produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prestation {
    /// The calendar day this record covers.
    pub day: NaiveDate,
    /// The worked duration for the day.
    #[serde(with = "crate::models::duration::duration_secs")]
    pub duration: TimeDelta,
    /// The required duration for the day.
    #[serde(with = "crate::models::duration::duration_secs")]
    pub needed_duration: TimeDelta,
    /// Worked minus required duration; negative when under time.
    #[serde(with = "crate::models::duration::duration_secs")]
    pub overtime: TimeDelta,
    /// The week's cumulative overtime, set only on the last day of its week.
    #[serde(default, with = "crate::models::duration::duration_secs_opt")]
    pub week_overtime: Option<TimeDelta>,
    /// Clock-in/out timestamps recorded by the automated time clock.
    pub tick_times: Vec<NaiveTime>,
    /// Clock-in/out timestamps entered by hand.
    pub manual_registrations: Vec<NaiveTime>,
    /// The portal's raw day-type code.
    pub raw_day_code: String,
    /// Free-text anomaly report for the day.
    pub irregularities: String,
    /// The resolved comment for the day.
    pub comment: String,
    /// Whether this record closes its ISO week.
    pub last_day_of_week: bool,
}

impl Prestation {
    /// Returns a copy of this record tagged as the last day of its week,
    /// carrying the week's cumulative overtime.
    pub fn with_week_overtime(self, week_overtime: TimeDelta) -> Prestation {
        Prestation {
            week_overtime: Some(week_overtime),
            last_day_of_week: true,
            ..self
        }
    }

    /// Whether the day carried at least one tick or manual registration.
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
