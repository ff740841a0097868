//! Month aggregation: the engine's entry point.
//!
//! Drives the day reconciler over every calendar day of the requested
//! month, filters empty weekend days, tags week boundaries with cumulative
//! overtime, and sums the month totals.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Weekday};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::{FetchResult, MonthSignals, Prestation, RawDaySignals};

use super::checkout::predict_checkout;
use super::day::reconcile_day;

/// Enumerates every calendar day of the given date's month.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::days_in_month;
/// use chrono::NaiveDate;
///
/// let leap_february = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
/// assert_eq!(days_in_month(leap_february).len(), 29);
/// ```
pub fn days_in_month(date: NaiveDate) -> Vec<NaiveDate> {
    let first = date.with_day(1).expect("the first of a month always exists");
    first
        .iter_days()
        .take_while(|day| day.month() == date.month())
        .collect()
}

/// Reconciles a whole month of raw signals into a [`FetchResult`].
///
/// Every calendar day of the requested month is reconciled (days missing
/// from the signal map count as empty), weekend days without registrations
/// are dropped, the last retained day of each ISO week is tagged with the
/// week's cumulative overtime, and the month totals and today's checkout
/// prediction are attached.
///
/// # Arguments
///
/// * `config` - The reconciliation knobs
/// * `requested` - Any date within the month to reconcile
/// * `signals` - Raw signals per calendar day
/// * `now` - The injected current date and time
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::reconcile_month;
/// use worktime_engine::config::EngineConfig;
/// use worktime_engine::models::MonthSignals;
/// use chrono::NaiveDate;
///
/// let config = EngineConfig::default();
/// let requested = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
/// let now = NaiveDate::from_ymd_opt(2026, 4, 7).unwrap()
///     .and_hms_opt(9, 0, 0).unwrap();
///
/// let result = reconcile_month(&config, requested, &MonthSignals::new(), now).unwrap();
/// // March 2026 has 22 weekdays; empty weekend days are dropped.
/// assert_eq!(result.prestations.len(), 22);
/// ```
pub fn reconcile_month(
    config: &EngineConfig,
    requested: NaiveDate,
    signals: &MonthSignals,
    now: NaiveDateTime,
) -> EngineResult<FetchResult> {
    let empty_day = RawDaySignals::default();

    let mut prestations = Vec::new();
    for date in days_in_month(requested) {
        let day_signals = signals.get(&date).unwrap_or(&empty_day);
        let prestation = reconcile_day(date, day_signals, config, now)?;
        debug!(
            day = %prestation.day,
            worked_minutes = prestation.duration.num_minutes(),
            overtime_minutes = prestation.overtime.num_minutes(),
            "reconciled day"
        );
        prestations.push(prestation);
    }

    let prestations = filter_weekend_days(prestations);
    let prestations = tag_week_boundaries(prestations);

    let total_duration = prestations
        .iter()
        .fold(TimeDelta::zero(), |total, p| total + p.duration);
    let total_overtime = prestations
        .iter()
        .fold(TimeDelta::zero(), |total, p| total + p.overtime);

    let checkout_time = predict_checkout(&prestations, total_overtime, config, now);

    info!(
        month = %requested.format("%Y-%m"),
        days = prestations.len(),
        total_minutes = total_duration.num_minutes(),
        overtime_minutes = total_overtime.num_minutes(),
        "month reconciled"
    );

    Ok(FetchResult {
        fetched_at: now,
        requested_date: requested,
        prestations,
        total_duration,
        total_overtime,
        checkout_time,
    })
}

fn is_weekend_day(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Drops weekend days carrying no registration at all; weekdays always
/// stay.
fn filter_weekend_days(prestations: Vec<Prestation>) -> Vec<Prestation> {
    prestations
        .into_iter()
        .filter(|p| !is_weekend_day(p.day) || p.has_registrations())
        .collect()
}

/// Tags the chronologically last record of each ISO week with the week's
/// cumulative overtime.
///
/// Two passes: per-week sums and closing days first, then a rebuild that
/// replaces each closing record by value. A month never contains two
/// distinct weeks sharing an ISO week number, so the number alone is a
/// sufficient key.
fn tag_week_boundaries(prestations: Vec<Prestation>) -> Vec<Prestation> {
    let mut week_overtime: HashMap<u32, TimeDelta> = HashMap::new();
    let mut week_close: HashMap<u32, NaiveDate> = HashMap::new();

    for prestation in &prestations {
        let week = prestation.day.iso_week().week();
        let sum = week_overtime.entry(week).or_insert_with(TimeDelta::zero);
        *sum = *sum + prestation.overtime;

        let close = week_close.entry(week).or_insert(prestation.day);
        if prestation.day > *close {
            *close = prestation.day;
        }
    }

    prestations
        .into_iter()
        .map(|prestation| {
            let week = prestation.day.iso_week().week();
            if week_close[&week] == prestation.day {
                let total = week_overtime[&week];
                prestation.with_week_overtime(total)
            } else {
                prestation
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// A `now` outside any month used by these tests.
    fn elsewhere() -> NaiveDateTime {
        date(2027, 6, 15).and_hms_opt(10, 0, 0).unwrap()
    }

    fn worked_day(minutes: i64) -> RawDaySignals {
        RawDaySignals {
            raw_day_code: "L".to_string(),
            tick_times: vec![time(8, 0), time(16, 30)],
            reported_total: Some(TimeDelta::minutes(minutes)),
            ..RawDaySignals::default()
        }
    }

    #[test]
    fn test_days_in_month_spans_every_calendar_day() {
        assert_eq!(days_in_month(date(2026, 3, 15)).len(), 31);
        assert_eq!(days_in_month(date(2026, 4, 1)).len(), 30);
        // Leap and non-leap February.
        assert_eq!(days_in_month(date(2024, 2, 20)).len(), 29);
        assert_eq!(days_in_month(date(2026, 2, 20)).len(), 28);

        let days = days_in_month(date(2026, 3, 15));
        assert_eq!(days[0], date(2026, 3, 1));
        assert_eq!(days[30], date(2026, 3, 31));
    }

    #[test]
    fn test_empty_weekend_days_are_dropped() {
        // March 2026: 31 days, 9 weekend days, all signals empty.
        let result =
            reconcile_month(&EngineConfig::default(), date(2026, 3, 1), &MonthSignals::new(), elsewhere())
                .unwrap();
        assert_eq!(result.prestations.len(), 22);
        assert!(result.prestations.iter().all(|p| !is_weekend_day(p.day)));
    }

    #[test]
    fn test_weekend_day_with_registration_is_kept() {
        // Saturday 2026-03-07 carries one tick time.
        let mut signals = MonthSignals::new();
        signals.insert(
            date(2026, 3, 7),
            RawDaySignals {
                tick_times: vec![time(9, 0)],
                ..RawDaySignals::default()
            },
        );

        let result = reconcile_month(
            &EngineConfig::default(),
            date(2026, 3, 1),
            &signals,
            elsewhere(),
        )
        .unwrap();
        assert_eq!(result.prestations.len(), 23);
        assert!(result.prestations.iter().any(|p| p.day == date(2026, 3, 7)));
    }

    #[test]
    fn test_week_boundaries_carry_cumulative_overtime() {
        // First full week of March 2026 (Mon 2nd - Fri 6th): +30 on Monday,
        // -15 on Wednesday.
        let mut signals = MonthSignals::new();
        signals.insert(date(2026, 3, 2), worked_day(510));
        signals.insert(date(2026, 3, 4), worked_day(465));
        signals.insert(date(2026, 3, 5), worked_day(480));

        let result = reconcile_month(
            &EngineConfig::default(),
            date(2026, 3, 1),
            &signals,
            elsewhere(),
        )
        .unwrap();

        let friday = result
            .prestations
            .iter()
            .find(|p| p.day == date(2026, 3, 6))
            .unwrap();
        assert!(friday.last_day_of_week);
        assert_eq!(friday.week_overtime, Some(TimeDelta::minutes(15)));

        let monday = result
            .prestations
            .iter()
            .find(|p| p.day == date(2026, 3, 2))
            .unwrap();
        assert!(!monday.last_day_of_week);
        assert_eq!(monday.week_overtime, None);
    }

    #[test]
    fn test_week_closed_by_registered_saturday() {
        // A worked Saturday survives the weekend filter and closes its week
        // instead of Friday.
        let mut signals = MonthSignals::new();
        signals.insert(date(2026, 3, 6), worked_day(480));
        signals.insert(
            date(2026, 3, 7),
            RawDaySignals {
                tick_times: vec![time(9, 0), time(12, 0)],
                reported_total: Some(TimeDelta::hours(3)),
                ..RawDaySignals::default()
            },
        );

        let result = reconcile_month(
            &EngineConfig::default(),
            date(2026, 3, 1),
            &signals,
            elsewhere(),
        )
        .unwrap();

        let saturday = result
            .prestations
            .iter()
            .find(|p| p.day == date(2026, 3, 7))
            .unwrap();
        assert!(saturday.last_day_of_week);

        let friday = result
            .prestations
            .iter()
            .find(|p| p.day == date(2026, 3, 6))
            .unwrap();
        assert!(!friday.last_day_of_week);
    }

    #[test]
    fn test_every_week_is_tagged_exactly_once() {
        let result = reconcile_month(
            &EngineConfig::default(),
            date(2026, 3, 1),
            &MonthSignals::new(),
            elsewhere(),
        )
        .unwrap();

        let mut weeks_seen = std::collections::HashSet::new();
        for prestation in &result.prestations {
            if prestation.last_day_of_week {
                assert!(weeks_seen.insert(prestation.day.iso_week().week()));
            }
        }
        let all_weeks: std::collections::HashSet<u32> = result
            .prestations
            .iter()
            .map(|p| p.day.iso_week().week())
            .collect();
        assert_eq!(weeks_seen, all_weeks);
    }

    #[test]
    fn test_month_totals_sum_retained_days() {
        let mut signals = MonthSignals::new();
        signals.insert(date(2026, 3, 2), worked_day(510));
        signals.insert(date(2026, 3, 3), worked_day(450));

        let result = reconcile_month(
            &EngineConfig::default(),
            date(2026, 3, 1),
            &signals,
            elsewhere(),
        )
        .unwrap();

        assert_eq!(result.total_duration, TimeDelta::minutes(960));
        // +30 and -30 cancel out.
        assert_eq!(result.total_overtime, TimeDelta::zero());
        assert_eq!(result.checkout_time, None);
        assert_eq!(result.fetched_at, elsewhere());
        assert_eq!(result.requested_date, date(2026, 3, 1));
    }

    #[test]
    fn test_prestations_are_ordered_ascending() {
        let result = reconcile_month(
            &EngineConfig::default(),
            date(2026, 3, 1),
            &MonthSignals::new(),
            elsewhere(),
        )
        .unwrap();

        for window in result.prestations.windows(2) {
            assert!(window[0].day < window[1].day);
        }
    }

    #[test]
    fn test_requested_mid_month_date_reconciles_whole_month() {
        let result = reconcile_month(
            &EngineConfig::default(),
            date(2026, 3, 17),
            &MonthSignals::new(),
            elsewhere(),
        )
        .unwrap();
        assert_eq!(result.prestations.first().unwrap().day, date(2026, 3, 2));
        assert_eq!(result.prestations.last().unwrap().day, date(2026, 3, 31));
    }
}
