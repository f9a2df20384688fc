//! Domain models for the Stock Sense pipeline

mod aggregate;
mod dashboard;
mod fact;
mod selection;
mod universe;

pub use aggregate::*;
pub use dashboard::*;
pub use fact::*;
pub use selection::*;
pub use universe::*;
