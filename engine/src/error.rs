//! Error handling for the Stock Sense engine
//!
//! Every load-time failure is fatal to the run and is reported once.

use serde::Serialize;
use shared::{CalendarError, PipelineError};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Ingestion errors
    #[error("Failed to open ledger '{path}': {source}")]
    LedgerUnavailable {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV parse error at line {line}: {source}")]
    Csv { line: u64, source: csv::Error },

    #[error("Malformed date at line {line}: {source}")]
    MalformedDate { line: u64, source: CalendarError },

    // Pipeline errors
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error report written in place of a dashboard report
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u64>,
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::LedgerUnavailable { .. } => "LEDGER_UNAVAILABLE",
            AppError::Csv { .. } => "CSV_PARSE_ERROR",
            AppError::MalformedDate { .. } => "MALFORMED_DATE",
            AppError::Pipeline(PipelineError::NoDatedFacts) => "NO_DATED_FACTS",
            AppError::Pipeline(PipelineError::MeasureOutOfRange { .. }) => "MEASURE_OUT_OF_RANGE",
            AppError::Pipeline(_) => "PIPELINE_ERROR",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    pub fn line(&self) -> Option<u64> {
        match self {
            AppError::Csv { line, .. } | AppError::MalformedDate { line, .. } => Some(*line),
            _ => None,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.to_string(),
                line: self.line(),
            },
        }
    }
}

/// Result type alias for engine operations
pub type AppResult<T> = Result<T, AppError>;
