//! Dashboard query service
//!
//! Owns the precomputed snapshot for the lifetime of the run and answers each
//! selection change with a fresh filter-and-aggregate pass.

use std::sync::Arc;

use shared::{
    DashboardView, Selection, SelectionOptions, SnapshotStats, StockSnapshot, TransactionFact,
    Window, WindowTotals,
};

use crate::error::AppResult;

/// Dashboard service over a read-only stock snapshot
#[derive(Clone)]
pub struct DashboardService {
    snapshot: Arc<StockSnapshot>,
}

impl DashboardService {
    /// Build the snapshot once from a loaded ledger
    pub fn new(facts: Vec<TransactionFact>) -> AppResult<Self> {
        let snapshot = StockSnapshot::build(facts)?;
        let stats = snapshot.stats();
        tracing::info!(
            facts = stats.fact_count,
            universe = stats.universe_size,
            joined = stats.joined_count,
            date_span = stats.date_span.days(),
            reference_date = %snapshot.reference_date(),
            "Stock snapshot ready"
        );
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn from_snapshot(snapshot: StockSnapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }

    pub fn stats(&self) -> &SnapshotStats {
        self.snapshot.stats()
    }

    /// Answer one dashboard interaction
    pub fn query(&self, selection: &Selection, window: Window) -> DashboardView {
        let view = self.snapshot.query(selection, window);
        tracing::debug!(
            ?selection,
            %window,
            rows = view.rows.len(),
            "Dashboard query evaluated"
        );
        if view.is_empty() {
            tracing::debug!("Selection matched no stock records");
        }
        view
    }

    /// Dropdown values for the current selection
    pub fn options(&self, selection: &Selection) -> SelectionOptions {
        self.snapshot.options(selection)
    }

    /// Window totals across the whole ledger
    pub fn global_totals(&self) -> WindowTotals {
        self.snapshot.global_totals()
    }
}
