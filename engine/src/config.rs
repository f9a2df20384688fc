//! Configuration management for the Stock Sense engine
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides such as STOCK_SENSE__QUERY__STORE

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::{SelectableField, Selection, Window};

use crate::error::{AppError, AppResult};

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Ledger source
    pub data: DataConfig,

    /// Dashboard selection to evaluate
    pub query: QueryConfig,

    /// Report output
    pub output: OutputConfig,

    /// Log output
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Path to the stock ledger CSV export
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QueryConfig {
    /// Category label, or "All categories"
    pub category: String,

    /// Product (DLP) label, or "All products"
    pub product: String,

    /// Store label, or "All stores"
    pub store: String,

    /// Color label, or "All colors"
    pub color: String,

    /// Trailing window length in days: 1, 7 or 30
    pub window_days: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// Pretty-print the JSON report
    pub pretty: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Emit logs as JSON lines instead of human-readable text
    pub json: bool,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("STOCK_SENSE_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("data.path", "data/stock_sense.csv")?
            .set_default("query.category", SelectableField::Category.all_label())?
            .set_default("query.product", SelectableField::Product.all_label())?
            .set_default("query.store", SelectableField::Store.all_label())?
            .set_default("query.color", SelectableField::Color.all_label())?
            .set_default("query.window_days", Window::default().days())?
            .set_default("output.pretty", true)?
            .set_default("logging.json", false)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (STOCK_SENSE__SECTION__KEY)
            .add_source(
                Environment::with_prefix("STOCK_SENSE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl QueryConfig {
    pub fn selection(&self) -> Selection {
        Selection::from_labels(&self.category, &self.product, &self.store, &self.color)
    }

    pub fn window(&self) -> AppResult<Window> {
        Window::from_days(self.window_days).ok_or_else(|| {
            AppError::Configuration(format!(
                "query.window_days must be 1, 7 or 30, got {}",
                self.window_days
            ))
        })
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            category: SelectableField::Category.all_label().to_string(),
            product: SelectableField::Product.all_label().to_string(),
            store: SelectableField::Store.all_label().to_string(),
            color: SelectableField::Color.all_label().to_string(),
            window_days: Window::default().days(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::FieldFilter;

    #[test]
    fn test_default_query_selects_everything() {
        let query = QueryConfig::default();
        assert_eq!(query.selection(), Selection::default());
        assert_eq!(query.window().unwrap(), Window::LastMonth);
    }

    #[test]
    fn test_query_labels_become_filters() {
        let query = QueryConfig {
            store: "North".to_string(),
            window_days: 7,
            ..Default::default()
        };
        assert_eq!(query.selection().store, FieldFilter::only("North"));
        assert_eq!(query.window().unwrap(), Window::LastWeek);
    }

    #[test]
    fn test_unsupported_window_is_rejected() {
        let query = QueryConfig {
            window_days: 14,
            ..Default::default()
        };
        assert!(matches!(query.window(), Err(AppError::Configuration(_))));
    }
}
