//! Lunch-break compensation heuristic.
//!
//! A day's punch pairs may or may not already contain an explicit lunch
//! punch-out. This module decides whether a computed total still needs the
//! standard lunch break subtracted, by inspecting how much punched-out time
//! overlaps the configured lunch window.

use chrono::{NaiveTime, TimeDelta};

use crate::config::EngineConfig;
use crate::error::EngineResult;

use super::intervals::duration_between;

/// Whether a time of day falls strictly inside the configured lunch window.
///
/// Both window boundaries are exclusive: a punch at exactly the window
/// start or end is not "during lunch".
pub fn is_in_lunch_hours(time: NaiveTime, config: &EngineConfig) -> bool {
    config.lunch_window_start < time && time < config.lunch_window_end
}

/// Measures the time observed "out during lunch" from a day's punch pairs.
///
/// Scans consecutive (in, out) pairs in order and returns on the first
/// pair overlapping the lunch window:
///
/// - both ends inside the window: the full interval;
/// - only the end inside: from the window start to the end;
/// - only the start inside: from the start to the window end;
/// - neither: keep scanning.
///
/// Returns zero when no pair overlaps the window.
pub fn time_out_during_lunch(
    registrations: &[NaiveTime],
    config: &EngineConfig,
) -> EngineResult<TimeDelta> {
    for pair in registrations.chunks_exact(2) {
        let (start, end) = (pair[0], pair[1]);
        match (
            is_in_lunch_hours(start, config),
            is_in_lunch_hours(end, config),
        ) {
            (true, true) => return duration_between(start, end),
            (false, true) => return duration_between(config.lunch_window_start, end),
            (true, false) => return duration_between(start, config.lunch_window_end),
            (false, false) => {}
        }
    }
    Ok(TimeDelta::zero())
}

/// Applies the lunch correction to a computed day total.
///
/// When the observed out-during-lunch time is longer than the configured
/// lunch break, the person already took their break within a punch gap and
/// the total passes through unchanged; otherwise the standard lunch break
/// is subtracted. This keeps an explicit lunch punch-out from being counted
/// twice.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::compensate_for_lunch;
/// use worktime_engine::config::EngineConfig;
/// use chrono::{NaiveTime, TimeDelta};
///
/// let config = EngineConfig::default();
/// let time = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
///
/// // A 60-minute lunch gap is already punched out: nothing to subtract.
/// let punches = [time(8, 0), time(12, 0), time(13, 0), time(17, 0)];
/// let total = compensate_for_lunch(TimeDelta::hours(8), &punches, &config).unwrap();
/// assert_eq!(total, TimeDelta::hours(8));
///
/// // A single punch pair hides lunch inside it: subtract the break.
/// let punches = [time(8, 0), time(16, 30)];
/// let total = compensate_for_lunch(TimeDelta::minutes(510), &punches, &config).unwrap();
/// assert_eq!(total, TimeDelta::hours(8));
/// ```
pub fn compensate_for_lunch(
    total: TimeDelta,
    registrations: &[NaiveTime],
    config: &EngineConfig,
) -> EngineResult<TimeDelta> {
    let observed_break = time_out_during_lunch(registrations, config)?;
    if observed_break > config.lunch_break() {
        Ok(total)
    } else {
        Ok(total - config.lunch_break())
    }
}
