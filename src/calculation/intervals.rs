//! Primitive interval arithmetic over times of day.
//!
//! All intervals in this engine live within a single business day;
//! arithmetic never crosses midnight.

use chrono::{NaiveTime, TimeDelta};

use crate::error::{EngineError, EngineResult};

/// Returns the duration from `start` to `end`.
///
/// # Arguments
///
/// * `start` - The start of the interval
/// * `end` - The end of the interval; must not lie before `start`
///
/// # Returns
///
/// The non-negative duration `end - start`, or
/// [`EngineError::IntervalOutOfRange`] when `end` lies before `start`.
/// An interval spanning midnight has no representation within a single
/// business day and is rejected rather than silently wrapped.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::duration_between;
/// use chrono::{NaiveTime, TimeDelta};
///
/// let start = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(12, 30, 0).unwrap();
/// assert_eq!(duration_between(start, end).unwrap(), TimeDelta::minutes(270));
/// assert!(duration_between(end, start).is_err());
/// ```
pub fn duration_between(start: NaiveTime, end: NaiveTime) -> EngineResult<TimeDelta> {
    if end < start {
        return Err(EngineError::IntervalOutOfRange { start, end });
    }
    Ok(end - start)
}

/// Sums the durations of consecutive (in, out) registration pairs.
///
/// Pairs up the sequence as 1st+2nd, 3rd+4th, and so on. A trailing
/// unpaired registration is ignored; callers that care about parity check
/// the count before calling.
pub fn paired_intervals_total(registrations: &[NaiveTime]) -> EngineResult<TimeDelta> {
    let mut total = TimeDelta::zero();
    for pair in registrations.chunks_exact(2) {
        total = total + duration_between(pair[0], pair[1])?;
    }
    Ok(total)
}
