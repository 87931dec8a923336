//! Catalog Gateway port
//!
//! Defines the interface for searching the remote unit catalog.

use async_trait::async_trait;
use roster_domain::{CatalogRequest, CatalogUnit};
use thiserror::Error;

/// Errors that can occur during catalog lookups
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Catalog returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Invalid catalog response: {0}")]
    InvalidResponse(String),

    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    #[error("Timeout")]
    Timeout,
}

/// Gateway for catalog searches
///
/// One call is one search request against the catalog. Implementations
/// return candidates in the provider's order and never retry.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Search units by name within an era and faction set
    async fn search_units(
        &self,
        request: &CatalogRequest,
    ) -> Result<Vec<CatalogUnit>, CatalogError>;
}
