//! Stock ledger transaction models

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use crate::calendar::{is_missing_marker, normalize_date};
use crate::error::{CalendarError, PipelineError, PipelineResult};
use crate::types::NormalizedDate;

/// A ledger row as exported, before calendar normalization
///
/// Every cell arrives as text. Numeric cells may be empty or carry a tabular
/// null token, both of which read as `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawTransaction {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub date: Option<String>,
    #[serde(rename = "DLP")]
    pub product_id: String,
    #[serde(rename = "DLPC")]
    pub product_line_code: String,
    pub name: String,
    pub code: String,
    pub color: String,
    pub category: String,
    pub store: String,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub total_quantity: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub total_inventory: Option<Decimal>,
}

impl RawTransaction {
    /// Convert the source calendar date and split out the dimension tuple
    pub fn normalize(self) -> Result<TransactionFact, CalendarError> {
        let date = normalize_date(self.date.as_deref())?;
        Ok(TransactionFact {
            dimension: DimensionTuple {
                product_id: self.product_id,
                product_line_code: self.product_line_code,
                name: self.name,
                code: self.code,
                color: self.color,
                category: self.category,
            },
            store: self.store,
            date,
            total_quantity: self.total_quantity,
            total_inventory: self.total_inventory,
        })
    }
}

/// Normalize a whole export, failing on the first bad date
///
/// `row` in the error is the zero-based position in `raw`.
pub fn normalize_transactions(raw: Vec<RawTransaction>) -> PipelineResult<Vec<TransactionFact>> {
    raw.into_iter()
        .enumerate()
        .map(|(row, record)| {
            record
                .normalize()
                .map_err(|source| PipelineError::InvalidRow { row, source })
        })
        .collect()
}

/// Product identity independent of store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DimensionTuple {
    pub product_id: String,
    pub product_line_code: String,
    pub name: String,
    pub code: String,
    pub color: String,
    pub category: String,
}

/// One recorded stock movement or inventory snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionFact {
    pub dimension: DimensionTuple,
    pub store: String,
    pub date: NormalizedDate,
    /// Signed movement quantity
    pub total_quantity: Option<Decimal>,
    /// Stock on hand at the time of the record
    pub total_inventory: Option<Decimal>,
}

fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !is_missing_marker(v)))
}

/// Lenient decimal reader: blanks and null tokens become `None`
fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(text) = deserialize_optional_text(deserializer)? else {
        return Ok(None);
    };
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map(Some)
        .map_err(|_| serde::de::Error::custom(format!("expected a number, got '{}'", text)))
}
