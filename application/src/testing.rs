//! Scripted catalog gateway shared by the use case tests

use crate::ports::catalog_gateway::{CatalogError, CatalogGateway};
use async_trait::async_trait;
use roster_domain::{CatalogRequest, CatalogUnit};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

type Reply = Result<Vec<CatalogUnit>, String>;

/// Answers searches from a script keyed by (name, faction list).
///
/// Unscripted searches return no candidates.
#[derive(Default)]
pub struct ScriptedCatalog {
    replies: HashMap<(String, String), Reply>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<CatalogRequest>>,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(name: &str, factions: &[&str]) -> (String, String) {
        (name.trim().to_lowercase(), factions.join("+"))
    }

    pub fn with_units(mut self, name: &str, factions: &[&str], units: Vec<CatalogUnit>) -> Self {
        self.replies.insert(Self::key(name, factions), Ok(units));
        self
    }

    pub fn with_unit(self, name: &str, factions: &[&str], id: u64) -> Self {
        self.with_units(name, factions, vec![CatalogUnit::new(name).with_id(id)])
    }

    pub fn with_failure(mut self, name: &str, factions: &[&str], message: &str) -> Self {
        self.replies
            .insert(Self::key(name, factions), Err(message.to_string()));
        self
    }

    /// Delay every search for `name`
    pub fn with_delay(mut self, name: &str, millis: u64) -> Self {
        self.delays
            .insert(name.trim().to_lowercase(), Duration::from_millis(millis));
        self
    }

    pub fn calls(&self) -> Vec<CatalogRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, name: &str) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter(|c| c.name.eq_ignore_ascii_case(name))
            .map(|c| c.factions)
            .collect()
    }
}

#[async_trait]
impl CatalogGateway for ScriptedCatalog {
    async fn search_units(
        &self,
        request: &CatalogRequest,
    ) -> Result<Vec<CatalogUnit>, CatalogError> {
        self.calls.lock().unwrap().push(request.clone());

        if let Some(delay) = self.delays.get(&request.name.trim().to_lowercase()) {
            tokio::time::sleep(*delay).await;
        }

        let factions: Vec<&str> = request.factions.iter().map(String::as_str).collect();
        match self.replies.get(&Self::key(&request.name, &factions)) {
            Some(Ok(units)) => Ok(units.clone()),
            Some(Err(message)) => Err(CatalogError::ConnectionError(message.clone())),
            None => Ok(Vec::new()),
        }
    }
}
