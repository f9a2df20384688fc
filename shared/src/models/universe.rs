//! Completed universe and joined ledger records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DimensionTuple, TransactionFact};
use crate::types::NormalizedDate;

/// One stockable (product, store) combination
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UniverseRow {
    pub dimension: DimensionTuple,
    pub store: String,
}

/// A universe row paired with at most one matching fact
///
/// Rows with no matching fact carry no measures and an unknown date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JoinedRecord {
    pub universe: UniverseRow,
    pub date: NormalizedDate,
    pub total_quantity: Option<Decimal>,
    pub total_inventory: Option<Decimal>,
}

impl JoinedRecord {
    /// Record for a combination with no ledger history
    pub fn empty(universe: UniverseRow) -> Self {
        Self {
            universe,
            date: NormalizedDate::Unknown,
            total_quantity: None,
            total_inventory: None,
        }
    }

    pub fn matched(universe: UniverseRow, fact: &TransactionFact) -> Self {
        Self {
            universe,
            date: fact.date,
            total_quantity: fact.total_quantity,
            total_inventory: fact.total_inventory,
        }
    }

    pub fn has_measures(&self) -> bool {
        self.total_quantity.is_some() || self.total_inventory.is_some()
    }

    pub fn category(&self) -> &str {
        &self.universe.dimension.category
    }

    pub fn product_id(&self) -> &str {
        &self.universe.dimension.product_id
    }

    pub fn store(&self) -> &str {
        &self.universe.store
    }

    pub fn color(&self) -> &str {
        &self.universe.dimension.color
    }

    /// Quantity with a missing value read as zero
    pub fn quantity_or_zero(&self) -> Decimal {
        self.total_quantity.unwrap_or(Decimal::ZERO)
    }

    /// Inventory with a missing value read as zero
    pub fn inventory_or_zero(&self) -> Decimal {
        self.total_inventory.unwrap_or(Decimal::ZERO)
    }
}
