//! Precomputed stock snapshot and the dashboard query interface
//!
//! Building a snapshot completes the universe, joins the ledger onto it and
//! fixes the reference date and date span. The result is read-only; each
//! query re-runs only the selection filter, window filter and aggregation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{PipelineError, PipelineResult};
use crate::models::{
    AggregateRow, DashboardView, JoinedRecord, Selection, SelectionOptions, TransactionFact,
    WindowTotals,
};
use crate::pipeline::{
    aggregate, apply_selection, complete_universe, date_range, distinct_dates, filter_window,
    join_facts, reference_date, selection_options, total_quantity,
};
use crate::types::{DateRange, DateSpan, Window};

/// Largest quantity or inventory magnitude a single ledger row may carry
///
/// Keeps every sum and threshold product well inside [`Decimal`] range.
pub fn max_measure() -> Decimal {
    Decimal::new(1_000_000_000_000_000, 0)
}

/// Size and time coverage of a loaded snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotStats {
    pub fact_count: usize,
    pub universe_size: usize,
    pub joined_count: usize,
    pub date_span: DateSpan,
    pub coverage: DateRange,
    pub overall_quantity: Decimal,
}

/// The joined ledger, ready to answer dashboard queries
#[derive(Debug, Clone)]
pub struct StockSnapshot {
    records: Vec<JoinedRecord>,
    reference_date: NaiveDate,
    stats: SnapshotStats,
}

impl StockSnapshot {
    /// Complete, join and index a normalized ledger
    ///
    /// Fails with [`PipelineError::NoDatedFacts`] when no fact carries a known
    /// date, which includes an empty ledger, and with
    /// [`PipelineError::MeasureOutOfRange`] when a measure exceeds [`max_measure`].
    pub fn build(facts: Vec<TransactionFact>) -> PipelineResult<Self> {
        check_measures(&facts)?;
        let reference = reference_date(&facts).ok_or(PipelineError::NoDatedFacts)?;
        let coverage = date_range(&facts).ok_or(PipelineError::NoDatedFacts)?;
        let date_span = DateSpan::new(distinct_dates(&facts))?;

        let universe = complete_universe(&facts);
        let records = join_facts(&facts, &universe);

        let stats = SnapshotStats {
            fact_count: facts.len(),
            universe_size: universe.len(),
            joined_count: records.len(),
            date_span,
            coverage,
            overall_quantity: facts
                .iter()
                .map(|f| f.total_quantity.unwrap_or(Decimal::ZERO))
                .sum(),
        };

        Ok(Self {
            records,
            reference_date: reference,
            stats,
        })
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn date_span(&self) -> DateSpan {
        self.stats.date_span
    }

    pub fn stats(&self) -> &SnapshotStats {
        &self.stats
    }

    /// Quantity moved in each window under the selection's category and product
    pub fn window_totals(&self, selection: &Selection) -> WindowTotals {
        let scoped = apply_selection(&self.records, &selection.catalog_scope());
        let mut totals = WindowTotals::default();
        for window in Window::ALL {
            let in_window = filter_window(scoped.iter().copied(), self.reference_date, window);
            totals.set(window, total_quantity(in_window));
        }
        totals
    }

    /// Window totals with nothing selected
    pub fn global_totals(&self) -> WindowTotals {
        self.window_totals(&Selection::default())
    }

    /// Aggregate rows under the full selection and window
    pub fn aggregate_rows(&self, selection: &Selection, window: Window) -> Vec<AggregateRow> {
        let selected = apply_selection(&self.records, selection);
        let in_window = filter_window(selected, self.reference_date, window);
        aggregate(in_window, self.stats.date_span)
    }

    pub fn options(&self, selection: &Selection) -> SelectionOptions {
        selection_options(&self.records, selection)
    }

    /// Answer one dashboard interaction
    pub fn query(&self, selection: &Selection, window: Window) -> DashboardView {
        DashboardView {
            selection: selection.clone(),
            window,
            reference_date: self.reference_date,
            totals: self.window_totals(selection),
            rows: self.aggregate_rows(selection, window),
        }
    }
}

fn check_measures(facts: &[TransactionFact]) -> PipelineResult<()> {
    let limit = max_measure();
    for (row, fact) in facts.iter().enumerate() {
        let measures = [
            ("total_quantity", fact.total_quantity),
            ("total_inventory", fact.total_inventory),
        ];
        for (field, value) in measures {
            if let Some(value) = value.filter(|v| v.abs() > limit) {
                return Err(PipelineError::MeasureOutOfRange { row, field, value });
            }
        }
    }
    Ok(())
}
