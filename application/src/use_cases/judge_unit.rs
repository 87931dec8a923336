//! Judge Unit use case
//!
//! Drives one entry through the [`JudgementStage`] machine, issuing the
//! catalog lookup each pending stage asks for.

use super::resolve_unit::CatalogClient;
use crate::ports::catalog_gateway::CatalogGateway;
use roster_domain::{
    CatalogMatch, JudgementResult, JudgementStage, LookupScope, PopulationCodes, UnitQuery,
    ValidatedParams,
};
use tracing::{debug, trace};

/// Applies the eligibility rules to single roster entries
pub struct EligibilityJudge<G: CatalogGateway + ?Sized> {
    client: CatalogClient<G>,
    populations: PopulationCodes,
}

impl<G: CatalogGateway + ?Sized> EligibilityJudge<G> {
    pub fn new(client: CatalogClient<G>) -> Self {
        Self {
            client,
            populations: PopulationCodes::default(),
        }
    }

    pub fn with_populations(mut self, populations: PopulationCodes) -> Self {
        self.populations = populations;
        self
    }

    pub fn populations(&self) -> &PopulationCodes {
        &self.populations
    }

    /// Judge one entry. Lookups within the entry run strictly in sequence.
    pub async fn judge(&self, query: &UnitQuery, params: &ValidatedParams) -> JudgementResult {
        let mut stage = JudgementStage::Primary;

        while let Some(scope) = stage.pending_lookup() {
            let lookup = self.lookup(scope, query, params).await;
            trace!(
                "{}: {} lookup found={} error={:?}",
                query,
                stage.name(),
                lookup.found(),
                lookup.error()
            );
            stage = stage.advance(query, lookup);
        }

        match stage {
            JudgementStage::Settled(result) => {
                debug!("{} settled: {}", query, result.status());
                result
            }
            other => unreachable!("judgement stopped in stage {}", other.name()),
        }
    }

    async fn lookup(
        &self,
        scope: LookupScope,
        query: &UnitQuery,
        params: &ValidatedParams,
    ) -> CatalogMatch {
        match scope {
            LookupScope::Requested => {
                self.client
                    .resolve(
                        query,
                        &params.era,
                        &params.specific_faction,
                        params.general_faction.as_deref(),
                    )
                    .await
            }
            LookupScope::Extinct => {
                self.client
                    .resolve(query, &params.era, &self.populations.extinct, None)
                    .await
            }
            LookupScope::Unique => {
                self.client
                    .resolve(query, &params.era, &self.populations.unique, None)
                    .await
            }
        }
    }
}
