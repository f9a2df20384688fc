//! Stock Sense engine
//!
//! Loads a stock ledger export, precomputes the joined snapshot once and
//! evaluates dashboard selections against it.

pub mod config;
pub mod error;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
