//! Per-day reconciliation.
//!
//! This module turns one day's raw signals into a [`Prestation`]: worked
//! duration, required duration, overtime, and the resolved comment.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use tracing::warn;

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::{DayCode, Prestation, RawDaySignals};

use super::intervals::{duration_between, paired_intervals_total};
use super::lunch::compensate_for_lunch;
use super::registrations::normalize_registrations;

/// Reconciles one calendar day into a [`Prestation`].
///
/// The record leaves this function with its week fields unset; the month
/// aggregator tags week boundaries afterwards. "Today" and the current
/// wall-clock time are both derived from the injected `now`, never from an
/// ambient clock, so reconciliation is a pure function of its inputs.
///
/// # Arguments
///
/// * `date` - The calendar day to reconcile
/// * `signals` - The day's raw signals
/// * `config` - The reconciliation knobs
/// * `now` - The injected current date and time
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::reconcile_day;
/// use worktime_engine::config::EngineConfig;
/// use worktime_engine::models::RawDaySignals;
/// use chrono::{NaiveDate, TimeDelta};
///
/// let config = EngineConfig::default();
/// let day = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();
/// let now = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap()
///     .and_hms_opt(9, 0, 0).unwrap();
///
/// let signals = RawDaySignals {
///     raw_day_code: "FEE".to_string(),
///     reported_total: Some(TimeDelta::zero()),
///     ..RawDaySignals::default()
/// };
/// let prestation = reconcile_day(day, &signals, &config, now).unwrap();
/// assert_eq!(prestation.needed_duration, TimeDelta::zero());
/// assert_eq!(prestation.comment, "Holiday");
/// ```
pub fn reconcile_day(
    date: NaiveDate,
    signals: &RawDaySignals,
    config: &EngineConfig,
    now: NaiveDateTime,
) -> EngineResult<Prestation> {
    let duration = worked_duration(date, signals, config, now)?;
    let needed_duration = needed_duration(date, signals, duration, config, now);
    let overtime = duration - needed_duration;
    let comment = resolve_comment(signals);

    Ok(Prestation {
        day: date,
        duration,
        needed_duration,
        overtime,
        week_overtime: None,
        tick_times: signals.tick_times.clone(),
        manual_registrations: signals.manual_registrations.clone(),
        raw_day_code: signals.raw_day_code.clone(),
        irregularities: signals.irregularities.clone(),
        comment,
        last_day_of_week: false,
    })
}

/// Determines the day's worked duration.
///
/// A non-zero reported total wins outright. A zero or absent total falls
/// back to live estimation when the day is today, or to recomputation from
/// punches when manual registrations exist; otherwise the reported value
/// stands as-is.
fn worked_duration(
    date: NaiveDate,
    signals: &RawDaySignals,
    config: &EngineConfig,
    now: NaiveDateTime,
) -> EngineResult<TimeDelta> {
    let reported = signals.reported_total.unwrap_or_else(TimeDelta::zero);

    if date == now.date() && reported.is_zero() {
        return live_estimate(signals, config, now);
    }

    if reported.is_zero() && !signals.manual_registrations.is_empty() {
        return recompute_from_punches(date, reported, signals, config);
    }

    Ok(reported)
}

/// Estimates the in-progress worked duration for the current day.
///
/// Elapsed time runs from the earliest registration to the injected
/// current time. Past the midday boundary the lunch break is assumed taken
/// and subtracted; before it, nothing is subtracted yet.
fn live_estimate(
    signals: &RawDaySignals,
    config: &EngineConfig,
    now: NaiveDateTime,
) -> EngineResult<TimeDelta> {
    let Some(check_in) = signals.first_registration() else {
        return Ok(TimeDelta::zero());
    };

    let elapsed = duration_between(check_in, now.time())?;
    if now.time() > config.midday_boundary {
        Ok(elapsed - config.lunch_break())
    } else {
        Ok(elapsed)
    }
}

/// Recomputes a day total from its normalized punches.
///
/// An odd punch count makes the pairing ambiguous, and a computed value
/// below the fallback is an unreliable underestimate; both keep the
/// fallback.
fn recompute_from_punches(
    date: NaiveDate,
    fallback: TimeDelta,
    signals: &RawDaySignals,
    config: &EngineConfig,
) -> EngineResult<TimeDelta> {
    let registrations =
        normalize_registrations(&signals.tick_times, &signals.manual_registrations);

    if registrations.len() % 2 != 0 {
        warn!(
            day = %date,
            count = registrations.len(),
            "odd registration count, keeping reported total"
        );
        return Ok(fallback);
    }

    let computed = paired_intervals_total(&registrations)?;
    let computed = compensate_for_lunch(computed, &registrations, config)?;

    if fallback > computed {
        Ok(fallback)
    } else {
        Ok(computed)
    }
}

/// Determines the day's required duration.
fn needed_duration(
    date: NaiveDate,
    signals: &RawDaySignals,
    worked: TimeDelta,
    config: &EngineConfig,
    now: NaiveDateTime,
) -> TimeDelta {
    if DayCode::from_raw_code(&signals.raw_day_code).is_non_working() {
        return TimeDelta::zero();
    }

    if !signals.has_registrations() {
        return TimeDelta::zero();
    }

    if date == now.date() {
        // The day is still in progress; nothing beyond the standard day is
        // required, and nothing beyond what was worked so far either.
        worked.min(config.standard_day_duration())
    } else {
        config.standard_day_duration()
    }
}

/// Resolves the day's comment: irregularities first, then the holiday
/// marker, then the raw day code.
fn resolve_comment(signals: &RawDaySignals) -> String {
    if !signals.irregularities.is_empty() {
        signals.irregularities.clone()
    } else if DayCode::from_raw_code(&signals.raw_day_code).is_non_working() {
        "Holiday".to_string()
    } else if !signals.raw_day_code.is_empty() {
        signals.raw_day_code.clone()
    } else {
        String::new()
    }
}
