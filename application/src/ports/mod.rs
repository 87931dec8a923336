//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod catalog_gateway;
pub mod progress;
pub mod roster_store;
