//! Day-type classification codes.
//!
//! This module defines the [`DayCode`] enum mapping the timesheet portal's
//! short textual day codes onto a closed set of variants.

use serde::{Deserialize, Serialize};

/// The external classification of a calendar day.
///
/// The portal annotates each day with a short code: "L" for a normal
/// workday, "FEE" for a holiday, "CAO" for collective leave, or nothing at
/// all. Any code outside this set resolves to [`DayCode::Unknown`] and is
/// treated like a normal day for required-duration purposes.
///
/// # Example
///
/// ```
/// use worktime_engine::models::DayCode;
///
/// assert_eq!(DayCode::from_raw_code("FEE"), DayCode::Holiday);
/// assert_eq!(DayCode::from_raw_code("xyz"), DayCode::Unknown);
/// assert!(DayCode::Holiday.is_non_working());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCode {
    /// A normal workday (raw code "L").
    Normal,
    /// A holiday (raw code "FEE").
    Holiday,
    /// Collective leave (raw code "CAO").
    Cao,
    /// Any unrecognized or absent day code.
    Unknown,
}

impl DayCode {
    /// Resolves a raw portal code to a day code.
    ///
    /// Resolution is by exact match; anything unmatched maps to
    /// [`DayCode::Unknown`] rather than failing.
    pub fn from_raw_code(raw_code: &str) -> DayCode {
        match raw_code {
            "L" => DayCode::Normal,
            "FEE" => DayCode::Holiday,
            "CAO" => DayCode::Cao,
            _ => DayCode::Unknown,
        }
    }

    /// Returns the raw portal code for this day code.
    pub fn raw_code(&self) -> &'static str {
        match self {
            DayCode::Normal => "L",
            DayCode::Holiday => "FEE",
            DayCode::Cao => "CAO",
            DayCode::Unknown => "",
        }
    }

    /// Whether this day code marks a day with no required working time.
    ///
    /// Both holidays and collective leave carry a required duration of
    /// zero, regardless of any registrations on the day.
    pub fn is_non_working(&self) -> bool {
        matches!(self, DayCode::Holiday | DayCode::Cao)
    }
}

impl std::fmt::Display for DayCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayCode::Normal => write!(f, "Normal"),
            DayCode::Holiday => write!(f, "Holiday"),
            DayCode::Cao => write!(f, "CAO"),
            DayCode::Unknown => write!(f, "Unknown"),
        }
    }
}
