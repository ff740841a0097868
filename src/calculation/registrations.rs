//! Registration normalization.

use chrono::NaiveTime;

/// Merges tick-clock and manual registrations into one normalized sequence.
///
/// The result is the union of both inputs, sorted ascending, with
/// exact-duplicate instants collapsed to one. A manual entry and a tick
/// entry at the identical instant count once; there is no semantic merge
/// beyond that.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::normalize_registrations;
/// use chrono::NaiveTime;
///
/// let eight = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
/// let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
///
/// let normalized = normalize_registrations(&[noon, eight], &[eight]);
/// assert_eq!(normalized, vec![eight, noon]);
/// ```
pub fn normalize_registrations(ticks: &[NaiveTime], manual: &[NaiveTime]) -> Vec<NaiveTime> {
    let mut all: Vec<NaiveTime> = ticks.iter().chain(manual.iter()).copied().collect();
    all.sort_unstable();
    all.dedup();
    all
}
