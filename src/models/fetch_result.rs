//! The month-level reconciliation result.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use super::Prestation;

/// The complete reconciled ledger for one month.
///
/// Produced by the month aggregator; consumed by a presentation or
/// reporting collaborator. The prestation list is ordered ascending by day
/// and excludes weekend days without any registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    /// When the reconciliation was computed.
    pub fetched_at: NaiveDateTime,
    /// The originally requested date identifying the month.
    pub requested_date: NaiveDate,
    /// The reconciled records, one per retained calendar day.
    pub prestations: Vec<Prestation>,
    /// Total worked duration across all retained days.
    #[serde(with = "crate::models::duration::duration_secs")]
    pub total_duration: TimeDelta,
    /// Total overtime across all retained days.
    #[serde(with = "crate::models::duration::duration_secs")]
    pub total_overtime: TimeDelta,
    /// The predicted checkout time for the current day, if any.
    pub checkout_time: Option<NaiveTime>,
}
