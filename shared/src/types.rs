//! Common types used across the pipeline

use std::num::NonZeroUsize;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, PipelineResult};

/// A ledger date after calendar normalization
///
/// `Unknown` marks inventory-only snapshots that carry no timestamped movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizedDate {
    Unknown,
    Known(NaiveDate),
}

impl NormalizedDate {
    pub fn known(&self) -> Option<NaiveDate> {
        match self {
            NormalizedDate::Known(date) => Some(*date),
            NormalizedDate::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, NormalizedDate::Unknown)
    }
}

impl From<Option<NaiveDate>> for NormalizedDate {
    fn from(date: Option<NaiveDate>) -> Self {
        date.map_or(NormalizedDate::Unknown, NormalizedDate::Known)
    }
}

/// Trailing time windows offered on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Window {
    LastDay,
    LastWeek,
    #[default]
    LastMonth,
}

impl Window {
    pub const ALL: [Window; 3] = [Window::LastDay, Window::LastWeek, Window::LastMonth];

    pub fn days(&self) -> i64 {
        match self {
            Window::LastDay => 1,
            Window::LastWeek => 7,
            Window::LastMonth => 30,
        }
    }

    /// Resolve a window from its length in days
    pub fn from_days(days: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.days() == days)
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Window::LastDay => write!(f, "Last Day"),
            Window::LastWeek => write!(f, "Last Week"),
            Window::LastMonth => write!(f, "Last Month"),
        }
    }
}

/// Count of distinct dated days in the full ledger
///
/// This is the denominator of average daily demand and is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DateSpan(NonZeroUsize);

impl DateSpan {
    pub fn new(distinct_dates: usize) -> PipelineResult<Self> {
        NonZeroUsize::new(distinct_dates)
            .map(DateSpan)
            .ok_or(PipelineError::NoDatedFacts)
    }

    pub fn days(&self) -> usize {
        self.0.get()
    }
}

/// Date range covered by the ledger
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_days() {
        assert_eq!(Window::LastDay.days(), 1);
        assert_eq!(Window::LastWeek.days(), 7);
        assert_eq!(Window::LastMonth.days(), 30);
    }

    #[test]
    fn test_window_from_days() {
        assert_eq!(Window::from_days(7), Some(Window::LastWeek));
        assert_eq!(Window::from_days(14), None);
    }

    #[test]
    fn test_date_span_rejects_zero() {
        assert_eq!(DateSpan::new(0), Err(PipelineError::NoDatedFacts));
        assert_eq!(DateSpan::new(12).unwrap().days(), 12);
    }

    #[test]
    fn test_unknown_date_orders_first() {
        let known = NormalizedDate::Known(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(NormalizedDate::Unknown < known);
        assert!(NormalizedDate::Unknown.is_unknown());
        assert_eq!(known.known(), NaiveDate::from_ymd_opt(2024, 1, 1));
    }
}
