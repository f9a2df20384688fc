//! Stock Sense - Inventory Analytics Runner
//!
//! Loads the configured stock ledger, builds the snapshot and writes the
//! dashboard report for the configured selection to stdout as JSON.

use stock_sense_engine::services::{loader, DashboardService, ReportingService};
use stock_sense_engine::{AppResult, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    init_tracing(config.logging.json);

    tracing::info!("Starting Stock Sense");
    tracing::info!("Environment: {}", config.environment);

    match run(&config) {
        Ok(report) => {
            println!("{}", report);
            Ok(())
        }
        Err(err) => {
            tracing::error!("Error: {:?}", err);
            println!("{}", serde_json::to_string_pretty(&err.to_response())?);
            Err(err.into())
        }
    }
}

/// Initialize tracing; logs go to stderr so stdout carries only the report
fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "stock_sense=debug,stock_sense_engine=debug".into());

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run(config: &Config) -> AppResult<String> {
    let selection = config.query.selection();
    let window = config.query.window()?;

    let facts = loader::load_ledger_file(&config.data.path)?;
    let dashboard = DashboardService::new(facts)?;
    let report = ReportingService::new(dashboard).report(&selection, window);

    if report.rows.is_empty() {
        tracing::warn!("No stock records match the configured selection");
    }
    report.to_json(config.output.pretty)
}
