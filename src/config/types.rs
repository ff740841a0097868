//! Configuration types for work-time reconciliation.
//!
//! This module contains the strongly-typed configuration structure that
//! is deserialized from a YAML configuration file.

use std::collections::HashMap;

use chrono::{NaiveTime, TimeDelta};
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// The knobs governing work-time reconciliation.
///
/// Every field carries the documented default, so a configuration file
/// only needs to name the values it wants to change — and library users
/// who are happy with the defaults need no file at all.
///
/// # Example
///
/// ```
/// use worktime_engine::config::EngineConfig;
/// use chrono::TimeDelta;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.standard_day_duration(), TimeDelta::minutes(480));
/// assert_eq!(config.lunch_break(), TimeDelta::minutes(30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Length of a standard working day, in minutes (default 480).
    #[serde(default = "default_standard_day_minutes")]
    pub standard_day_minutes: u32,
    /// Length of the standard lunch break, in minutes (default 30).
    #[serde(default = "default_lunch_minutes")]
    pub lunch_minutes: u32,
    /// Start of the lunch window (default 12:00).
    #[serde(default = "default_lunch_window_start")]
    pub lunch_window_start: NaiveTime,
    /// End of the lunch window (default 14:00).
    #[serde(default = "default_lunch_window_end")]
    pub lunch_window_end: NaiveTime,
    /// Boundary after which live estimation assumes lunch was taken
    /// (default 14:00).
    #[serde(default = "default_midday_boundary")]
    pub midday_boundary: NaiveTime,
    /// Threshold below which the checkout prediction computes its
    /// thirty-minute nudge (default 14:30).
    #[serde(default = "default_checkout_nudge_threshold")]
    pub checkout_nudge_threshold: NaiveTime,
}

fn default_standard_day_minutes() -> u32 {
    480
}

fn default_lunch_minutes() -> u32 {
    30
}

fn default_lunch_window_start() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).expect("valid literal time")
}

fn default_lunch_window_end() -> NaiveTime {
    NaiveTime::from_hms_opt(14, 0, 0).expect("valid literal time")
}

fn default_midday_boundary() -> NaiveTime {
    NaiveTime::from_hms_opt(14, 0, 0).expect("valid literal time")
}

fn default_checkout_nudge_threshold() -> NaiveTime {
    NaiveTime::from_hms_opt(14, 30, 0).expect("valid literal time")
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            standard_day_minutes: default_standard_day_minutes(),
            lunch_minutes: default_lunch_minutes(),
            lunch_window_start: default_lunch_window_start(),
            lunch_window_end: default_lunch_window_end(),
            midday_boundary: default_midday_boundary(),
            checkout_nudge_threshold: default_checkout_nudge_threshold(),
        }
    }
}

impl EngineConfig {
    /// The standard working day as a duration.
    pub fn standard_day_duration(&self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.standard_day_minutes))
    }

    /// The standard lunch break as a duration.
    pub fn lunch_break(&self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.lunch_minutes))
    }

    /// Checks that the configuration is internally consistent.
    ///
    /// The lunch window must be well-formed: its start must lie strictly
    /// before its end.
    pub fn validate(&self) -> EngineResult<()> {
        if self.lunch_window_start >= self.lunch_window_end {
            return Err(EngineError::InvalidOption {
                key: "lunch_window_end".to_string(),
                message: format!(
                    "lunch window end {} must lie after start {}",
                    self.lunch_window_end, self.lunch_window_start
                ),
            });
        }
        Ok(())
    }

    /// Builds a configuration from a plain string map.
    ///
    /// This is the entry point for callers that receive configuration as
    /// untyped key/value pairs (e.g. from a host application's own config
    /// layer). Unknown keys and unparseable values are rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use worktime_engine::config::EngineConfig;
    ///
    /// let overrides = HashMap::from([
    ///     ("standard_day_minutes".to_string(), "456".to_string()),
    ///     ("lunch_window_start".to_string(), "11:30".to_string()),
    /// ]);
    /// let config = EngineConfig::from_overrides(&overrides).unwrap();
    /// assert_eq!(config.standard_day_minutes, 456);
    /// assert_eq!(config.lunch_minutes, 30);
    /// ```
    pub fn from_overrides(overrides: &HashMap<String, String>) -> EngineResult<EngineConfig> {
        let mut config = EngineConfig::default();
        for (key, value) in overrides {
            match key.as_str() {
                "standard_day_minutes" => {
                    config.standard_day_minutes = parse_minutes(key, value)?;
                }
                "lunch_minutes" => {
                    config.lunch_minutes = parse_minutes(key, value)?;
                }
                "lunch_window_start" => {
                    config.lunch_window_start = parse_time(key, value)?;
                }
                "lunch_window_end" => {
                    config.lunch_window_end = parse_time(key, value)?;
                }
                "midday_boundary" => {
                    config.midday_boundary = parse_time(key, value)?;
                }
                "checkout_nudge_threshold" => {
                    config.checkout_nudge_threshold = parse_time(key, value)?;
                }
                _ => {
                    return Err(EngineError::InvalidOption {
                        key: key.clone(),
                        message: "unknown option".to_string(),
                    });
                }
            }
        }
        config.validate()?;
        Ok(config)
    }
}

fn parse_minutes(key: &str, value: &str) -> EngineResult<u32> {
    value.parse().map_err(|_| EngineError::InvalidOption {
        key: key.to_string(),
        message: format!("'{}' is not a number of minutes", value),
    })
}

fn parse_time(key: &str, value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| EngineError::InvalidOption {
            key: key.to_string(),
            message: format!("'{}' is not a time of day", value),
        })
}
