//! Checkout prediction for the current day.

use chrono::{NaiveDateTime, NaiveTime, TimeDelta};

use crate::config::EngineConfig;
use crate::models::Prestation;

/// Predicts the clock time at which the person may leave today.
///
/// Starting from today's earliest registration, adds the standard day
/// length and the lunch break, then subtracts the month's accumulated
/// overtime. Returns `None` when the list holds no record for today or
/// today carries no registration.
///
/// Predictions landing before the configured nudge threshold compute a
/// thirty-minute-earlier variant, but the returned prediction is the
/// unadjusted one, keeping this engine in step with the portal's own
/// numbers.
pub fn predict_checkout(
    prestations: &[Prestation],
    total_overtime: TimeDelta,
    config: &EngineConfig,
    now: NaiveDateTime,
) -> Option<NaiveTime> {
    let today = prestations.iter().find(|p| p.day == now.date())?;
    let first_check_in = today.first_registration()?;

    let checkout =
        first_check_in + config.standard_day_duration() + config.lunch_break() - total_overtime;

    if checkout < config.checkout_nudge_threshold {
        // Deliberately unused: the prediction stays unadjusted.
        let _nudged = checkout - TimeDelta::minutes(30);
    }

    Some(checkout)
}
