//! Error types for loading and precomputing the stock ledger

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while normalizing calendar values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Malformed date '{0}': expected year/month/day")]
    Malformed(String),

    #[error("Date '{value}' is outside the Jalali calendar: {reason}")]
    OutOfRange { value: String, reason: &'static str },
}

/// Errors raised while building a stock snapshot
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error("Invalid ledger row {row}: {source}")]
    InvalidRow { row: usize, source: CalendarError },

    #[error("Ledger row {row}: {field} {value} exceeds the supported magnitude")]
    MeasureOutOfRange {
        row: usize,
        field: &'static str,
        value: Decimal,
    },

    /// The ledger carries no dated movement, so demand has no time span
    #[error("Dataset has no dated transactions; average daily demand is undefined")]
    NoDatedFacts,
}

pub type PipelineResult<T> = Result<T, PipelineError>;
