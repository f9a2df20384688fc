//! Aggregated demand and reorder models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Forward-looking reorder horizons
///
/// Each horizon covers a lead time plus a safety margin, both expressed in
/// days of demand at the current average rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReorderHorizon {
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl ReorderHorizon {
    pub const ALL: [ReorderHorizon; 3] = [
        ReorderHorizon::ShortTerm,
        ReorderHorizon::MediumTerm,
        ReorderHorizon::LongTerm,
    ];

    pub fn lead_days(&self) -> Decimal {
        match self {
            ReorderHorizon::ShortTerm => Decimal::from(3),
            ReorderHorizon::MediumTerm => Decimal::from(12),
            ReorderHorizon::LongTerm => Decimal::from(21),
        }
    }

    /// Half of the 5 / 15 / 30 day buffer
    pub fn safety_days(&self) -> Decimal {
        match self {
            ReorderHorizon::ShortTerm => Decimal::new(25, 1),
            ReorderHorizon::MediumTerm => Decimal::new(75, 1),
            ReorderHorizon::LongTerm => Decimal::from(15),
        }
    }

    /// Total days of demand the reorder quantity must cover
    pub fn cover_days(&self) -> Decimal {
        self.lead_days() + self.safety_days()
    }
}

impl std::fmt::Display for ReorderHorizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReorderHorizon::ShortTerm => write!(f, "Short Term"),
            ReorderHorizon::MediumTerm => write!(f, "Medium Term"),
            ReorderHorizon::LongTerm => write!(f, "Long Term"),
        }
    }
}

/// Projected days until stock runs out
///
/// Serializes as a bare number, or `null` when stock is not being drawn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DaysToStockout {
    Days(Decimal),
    NotApplicable,
}

impl DaysToStockout {
    pub fn days(&self) -> Option<Decimal> {
        match self {
            DaysToStockout::Days(days) => Some(*days),
            DaysToStockout::NotApplicable => None,
        }
    }
}

impl std::fmt::Display for DaysToStockout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DaysToStockout::Days(days) => write!(f, "{}", days),
            DaysToStockout::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// Demand and reorder snapshot for one (product, product line, store, color)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregateRow {
    pub product_id: String,
    pub product_line_code: String,
    pub store: String,
    pub color: String,
    pub total_quantity: Decimal,
    pub max_inventory: Decimal,
    pub average_daily_demand: Decimal,
    pub days_to_stockout: DaysToStockout,
    pub short_term_reorder: Decimal,
    pub medium_term_reorder: Decimal,
    pub long_term_reorder: Decimal,
}
