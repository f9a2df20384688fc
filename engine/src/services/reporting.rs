//! Reporting service for the dashboard JSON report
//! Bundles a query result with ledger coverage and dropdown options

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::{
    AggregateRow, DateRange, SelectableField, Selection, SelectionOptions, Window, WindowTotals,
};

use super::DashboardService;
use crate::error::AppResult;

/// Reporting service
#[derive(Clone)]
pub struct ReportingService {
    dashboard: DashboardService,
}

/// Selected dropdown labels, with "all" spelled out
#[derive(Debug, Serialize)]
pub struct SelectionLabels {
    pub category: String,
    pub product: String,
    pub store: String,
    pub color: String,
}

impl SelectionLabels {
    fn from_selection(selection: &Selection) -> Self {
        let label = |field: SelectableField| selection.filter(field).label(field).to_string();
        Self {
            category: label(SelectableField::Category),
            product: label(SelectableField::Product),
            store: label(SelectableField::Store),
            color: label(SelectableField::Color),
        }
    }
}

/// Full dashboard report
#[derive(Debug, Serialize)]
pub struct StockReport {
    pub selection: SelectionLabels,
    pub window: Window,
    pub window_days: i64,
    pub reference_date: NaiveDate,
    pub coverage: DateRange,
    pub date_span_days: usize,
    pub overall_quantity: Decimal,
    /// Totals across the whole ledger
    pub global_totals: WindowTotals,
    /// Totals under the category and product selection
    pub selection_totals: WindowTotals,
    pub options: SelectionOptions,
    pub row_count: usize,
    pub rows: Vec<AggregateRow>,
}

impl StockReport {
    pub fn to_json(&self, pretty: bool) -> AppResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

impl ReportingService {
    pub fn new(dashboard: DashboardService) -> Self {
        Self { dashboard }
    }

    /// Evaluate a selection and bundle everything the dashboard renders
    pub fn report(&self, selection: &Selection, window: Window) -> StockReport {
        let view = self.dashboard.query(selection, window);
        let stats = self.dashboard.stats();

        StockReport {
            selection: SelectionLabels::from_selection(selection),
            window,
            window_days: window.days(),
            reference_date: view.reference_date,
            coverage: stats.coverage.clone(),
            date_span_days: stats.date_span.days(),
            overall_quantity: stats.overall_quantity,
            global_totals: self.dashboard.global_totals(),
            selection_totals: view.totals,
            options: self.dashboard.options(selection),
            row_count: view.rows.len(),
            rows: view.rows,
        }
    }
}
