//! Catalog records and match classification
//!
//! - [`unit::CatalogUnit`]: a unit record as sent by the catalog
//! - [`matching::CatalogMatch`]: a query resolved to found / ambiguous / not available / failed
//! - [`request::CatalogRequest`]: one search against the catalog

pub mod matching;
pub mod request;
pub mod unit;

pub use matching::{CatalogMatch, MatchOutcome};
pub use request::CatalogRequest;
pub use unit::{CatalogSearchResponse, CatalogUnit, UnitRole};
