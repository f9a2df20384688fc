//! Services for the Stock Sense engine

pub mod dashboard;
pub mod loader;
pub mod reporting;

pub use dashboard::DashboardService;
pub use reporting::{ReportingService, StockReport};
