//! Trailing time window filtering

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};

use crate::models::{JoinedRecord, TransactionFact};
use crate::types::{DateRange, NormalizedDate, Window};

/// Latest known date across the ledger
pub fn reference_date(facts: &[TransactionFact]) -> Option<NaiveDate> {
    facts.iter().filter_map(|f| f.date.known()).max()
}

/// Earliest and latest known dates across the ledger
pub fn date_range(facts: &[TransactionFact]) -> Option<DateRange> {
    let start = facts.iter().filter_map(|f| f.date.known()).min()?;
    let end = reference_date(facts)?;
    Some(DateRange { start, end })
}

/// Number of distinct known dates across the ledger
pub fn distinct_dates(facts: &[TransactionFact]) -> usize {
    facts
        .iter()
        .filter_map(|f| f.date.known())
        .collect::<HashSet<_>>()
        .len()
}

/// Inclusion predicate for a window of `days` ending at `reference`
///
/// Unknown dates always pass; they mark inventory-only records. A window
/// reaching past the earliest representable date covers everything.
pub fn within_days(date: &NormalizedDate, reference: NaiveDate, days: i64) -> bool {
    let start = Duration::try_days(days).and_then(|span| reference.checked_sub_signed(span));
    match (date, start) {
        (NormalizedDate::Unknown, _) | (_, None) => true,
        (NormalizedDate::Known(d), Some(start)) => *d >= start,
    }
}

pub fn within_window(date: &NormalizedDate, reference: NaiveDate, window: Window) -> bool {
    within_days(date, reference, window.days())
}

/// Keep the records that fall inside `window`
pub fn filter_window<'a, I>(records: I, reference: NaiveDate, window: Window) -> Vec<&'a JoinedRecord>
where
    I: IntoIterator<Item = &'a JoinedRecord>,
{
    records
        .into_iter()
        .filter(|r| within_window(&r.date, reference, window))
        .collect()
}
