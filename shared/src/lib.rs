//! Shared types and pipeline for the Stock Sense inventory analytics engine
//!
//! This crate contains the domain models and the pure data pipeline shared
//! between the engine runner and the dashboard (via WASM).

pub mod calendar;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod types;

pub use calendar::*;
pub use error::*;
pub use models::*;
pub use pipeline::*;
pub use types::*;
