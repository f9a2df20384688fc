//! WebAssembly module for the Stock Sense dashboard
//!
//! Provides client-side computation for:
//! - Building a stock snapshot from ledger rows
//! - Evaluating dashboard selections
//! - Jalali date conversion
//! - Reorder thresholds for a daily demand

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
use shared::{normalize_date, normalize_transactions, DemandRate, StockSnapshot};

/// Dashboard over a snapshot built once in the browser
#[wasm_bindgen]
pub struct StockDashboard {
    snapshot: StockSnapshot,
}

#[wasm_bindgen]
impl StockDashboard {
    /// Build from a JSON array of ledger rows with text cells
    #[wasm_bindgen(constructor)]
    pub fn new(rows_json: &str) -> Result<StockDashboard, JsValue> {
        let dashboard = Self::from_json(rows_json).map_err(|e| JsValue::from_str(&e))?;
        let stats = dashboard.snapshot.stats();
        web_sys::console::log_1(&JsValue::from_str(&format!(
            "Stock snapshot ready: {} rows, {} combinations, {} dated days",
            stats.fact_count,
            stats.universe_size,
            stats.date_span.days()
        )));
        Ok(dashboard)
    }

    /// Evaluate a selection; labels use the "All ..." form for no filter
    pub fn query(
        &self,
        category: &str,
        product: &str,
        store: &str,
        color: &str,
        window_days: i64,
    ) -> Result<String, JsValue> {
        self.query_json(category, product, store, color, window_days)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Dropdown labels for the current selection, "All ..." first
    pub fn options(
        &self,
        category: &str,
        product: &str,
        store: &str,
        color: &str,
    ) -> Result<String, JsValue> {
        self.options_json(category, product, store, color)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Day, week and month totals across the whole ledger
    #[wasm_bindgen(js_name = globalTotals)]
    pub fn global_totals(&self) -> Result<String, JsValue> {
        to_json(&self.snapshot.global_totals()).map_err(|e| JsValue::from_str(&e))
    }
}

impl StockDashboard {
    fn from_json(rows_json: &str) -> Result<Self, String> {
        let rows: Vec<RawTransaction> = serde_json::from_str(rows_json)
            .map_err(|e| format!("Invalid ledger JSON: {}", e))?;
        let facts = normalize_transactions(rows).map_err(|e| e.to_string())?;
        let snapshot = StockSnapshot::build(facts).map_err(|e| e.to_string())?;
        Ok(Self { snapshot })
    }

    fn query_json(
        &self,
        category: &str,
        product: &str,
        store: &str,
        color: &str,
        window_days: i64,
    ) -> Result<String, String> {
        let window = Window::from_days(window_days)
            .ok_or_else(|| format!("Unsupported window: {} days", window_days))?;
        let selection = Selection::from_labels(category, product, store, color);
        to_json(&self.snapshot.query(&selection, window))
    }

    fn options_json(
        &self,
        category: &str,
        product: &str,
        store: &str,
        color: &str,
    ) -> Result<String, String> {
        let selection = Selection::from_labels(category, product, store, color);
        let options = self.snapshot.options(&selection);
        let labels: Vec<(SelectableField, Vec<String>)> = SelectableField::ORDER
            .iter()
            .map(|field| (*field, options.labels(*field)))
            .collect();
        to_json(&labels)
    }
}

/// Convert a Jalali `YYYY/MM/DD` date to ISO Gregorian; empty for missing dates
#[wasm_bindgen]
pub fn convert_jalali_date(raw: &str) -> Result<String, JsValue> {
    jalali_to_iso(raw).map_err(|e| JsValue::from_str(&e))
}

fn jalali_to_iso(raw: &str) -> Result<String, String> {
    match normalize_date(Some(raw)).map_err(|e| e.to_string())? {
        NormalizedDate::Known(date) => Ok(date.format("%Y-%m-%d").to_string()),
        NormalizedDate::Unknown => Ok(String::new()),
    }
}

/// Reorder thresholds for an average daily demand
#[wasm_bindgen]
pub fn calculate_reorder_thresholds(average_daily_demand: &str) -> Result<String, JsValue> {
    reorder_thresholds(average_daily_demand).map_err(|e| JsValue::from_str(&e))
}

#[derive(Serialize)]
struct ReorderThresholds {
    short_term: Decimal,
    medium_term: Decimal,
    long_term: Decimal,
}

fn reorder_thresholds(average_daily_demand: &str) -> Result<String, String> {
    let average = Decimal::from_str(average_daily_demand.trim())
        .map_err(|e| format!("Invalid demand '{}': {}", average_daily_demand, e))?;
    let rate = DemandRate::daily(average);
    to_json(&ReorderThresholds {
        short_term: rate.reorder_quantity(ReorderHorizon::ShortTerm),
        medium_term: rate.reorder_quantity(ReorderHorizon::MediumTerm),
        long_term: rate.reorder_quantity(ReorderHorizon::LongTerm),
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEDGER_JSON: &str = r#"[
        {"date": "1403/02/31", "DLP": "101", "DLPC": "10", "name": "Canvas Tote",
         "code": "CT-01", "color": "Red", "category": "Bags", "store": "North",
         "total_quantity": "2", "total_inventory": "40"},
        {"date": "1403/02/30", "DLP": "202", "DLPC": "20", "name": "Trail Shoe",
         "code": "TS-02", "color": "Black", "category": "Shoes", "store": "South",
         "total_quantity": "4", "total_inventory": "12"},
        {"date": null, "DLP": "101", "DLPC": "10", "name": "Canvas Tote",
         "code": "CT-01", "color": "Red", "category": "Bags", "store": "South",
         "total_quantity": "", "total_inventory": "nan"}
    ]"#;

    #[test]
    fn test_dashboard_query() {
        let dashboard = StockDashboard::from_json(LEDGER_JSON).unwrap();
        let json = dashboard
            .query_json("Bags", "All products", "All stores", "All colors", 1)
            .unwrap();
        let view: DashboardView = serde_json::from_str(&json).unwrap();

        // Tote in both stores, South never traded it
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.totals.last_day, Decimal::from(2));
    }

    #[test]
    fn test_unsupported_window() {
        let dashboard = StockDashboard::from_json(LEDGER_JSON).unwrap();
        assert!(dashboard
            .query_json("All categories", "All products", "All stores", "All colors", 14)
            .is_err());
    }

    #[test]
    fn test_options_lead_with_all_label() {
        let dashboard = StockDashboard::from_json(LEDGER_JSON).unwrap();
        let json = dashboard
            .options_json("Shoes", "All products", "All stores", "All colors")
            .unwrap();
        let labels: Vec<(SelectableField, Vec<String>)> = serde_json::from_str(&json).unwrap();

        assert_eq!(labels[1].1, vec!["All products", "202"]);
    }

    #[test]
    fn test_invalid_ledger_json() {
        assert!(StockDashboard::from_json("{not json").is_err());
        assert!(StockDashboard::from_json("[]").is_err());
    }

    #[test]
    fn test_convert_jalali_date() {
        assert_eq!(jalali_to_iso("1403/01/01").unwrap(), "2024-03-20");
        assert_eq!(jalali_to_iso("").unwrap(), "");
        assert!(jalali_to_iso("1403/13/01").is_err());
    }

    #[test]
    fn test_reorder_thresholds() {
        let json = reorder_thresholds("2").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        // 2 per day over 5.5, 19.5 and 36 days
        let threshold = |key: &str| Decimal::from_str(value[key].as_str().unwrap()).unwrap();
        assert_eq!(threshold("short_term"), Decimal::from(11));
        assert_eq!(threshold("medium_term"), Decimal::from(39));
        assert_eq!(threshold("long_term"), Decimal::from(72));
        assert!(reorder_thresholds("lots").is_err());
    }
}
