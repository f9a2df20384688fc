//! The stock ledger pipeline
//!
//! Data flows strictly downstream:
//!
//! 1. [`dimensions`] completes the (product, store) universe
//! 2. [`join`] right-joins facts onto that universe
//! 3. [`selection`] and [`window`] narrow the joined records per query
//! 4. [`reorder`] aggregates demand and reorder thresholds
//!
//! [`snapshot`] runs steps 1-2 once and answers queries with steps 3-4.

pub mod dimensions;
pub mod join;
pub mod reorder;
pub mod selection;
pub mod snapshot;
pub mod window;

pub use dimensions::*;
pub use join::*;
pub use reorder::*;
pub use selection::*;
pub use snapshot::*;
pub use window::*;
