//! List-level (aggregate) checks
//!
//! - [`registry::CheckRegistry`]: ordered, named, pure checks over the result set
//! - [`standard`]: the built-in availability, duplicate, skill, size and unique checks

pub mod registry;
pub mod standard;

pub use registry::{AggregateCheck, CheckOutcome, CheckRegistry, CheckReport};
pub use standard::CheckLimits;
