//! Resolve Unit use case
//!
//! One catalog search per call, narrowed to exact name matches.

use crate::ports::catalog_gateway::CatalogGateway;
use roster_domain::{CatalogMatch, CatalogRequest, UnitQuery};
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves roster queries against the catalog
pub struct CatalogClient<G: CatalogGateway + ?Sized> {
    gateway: Arc<G>,
}

impl<G: CatalogGateway + ?Sized> Clone for CatalogClient<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

impl<G: CatalogGateway + ?Sized> CatalogClient<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Resolve `query` within `era` for the given faction(s).
    ///
    /// Lookup failures become a `Failed` match for this query; nothing is
    /// retried and no error escapes.
    pub async fn resolve(
        &self,
        query: &UnitQuery,
        era: &str,
        specific_faction: &str,
        general_faction: Option<&str>,
    ) -> CatalogMatch {
        if !query.has_name() {
            debug!("Entry '{}' has no unit name, skipping lookup", query);
            return CatalogMatch::classify(query.clone(), Vec::new());
        }

        let request = CatalogRequest::new(query.name.trim(), era, specific_faction)
            .with_optional_faction(general_faction);

        match self.gateway.search_units(&request).await {
            Ok(candidates) => {
                debug!("Catalog returned {} candidates for {}", candidates.len(), request);
                CatalogMatch::classify(query.clone(), candidates)
            }
            Err(e) => {
                warn!("Catalog lookup for {} failed: {}", request, e);
                CatalogMatch::failed(query.clone(), e.to_string())
            }
        }
    }
}
