//! Run Validation use case
//!
//! Orchestrates a full roster validation: parameter check, decode, then every
//! entry's judgement chain concurrently, collected in roster order.

use super::judge_unit::EligibilityJudge;
use super::resolve_unit::CatalogClient;
use crate::ports::catalog_gateway::CatalogGateway;
use crate::ports::progress::{NoProgress, ValidationProgress};
use futures::future::join_all;
use roster_domain::{JudgementResult, PopulationCodes, RosterParams};
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for validating an encoded roster
pub struct RunValidationUseCase<G: CatalogGateway + ?Sized> {
    judge: EligibilityJudge<G>,
}

impl<G: CatalogGateway + ?Sized> RunValidationUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            judge: EligibilityJudge::new(CatalogClient::new(gateway)),
        }
    }

    pub fn with_populations(mut self, populations: PopulationCodes) -> Self {
        self.judge = self.judge.with_populations(populations);
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, params: &RosterParams) -> Vec<JudgementResult> {
        self.execute_with_progress(params, &NoProgress).await
    }

    /// Execute the use case with progress callbacks.
    ///
    /// Unusable parameters yield the single sentinel result. Otherwise the
    /// result has one entry per decoded roster line, in roster order.
    pub async fn execute_with_progress(
        &self,
        params: &RosterParams,
        progress: &dyn ValidationProgress,
    ) -> Vec<JudgementResult> {
        let validated = match params.validate() {
            Ok(validated) => validated,
            Err(e) => {
                warn!("Invalid parameters for validation: {}", e);
                return vec![JudgementResult::invalid_parameters()];
            }
        };

        info!(
            "Validating {} entries (era {}, factions {}{})",
            validated.queries.len(),
            validated.era,
            validated.specific_faction,
            validated
                .general_faction
                .as_deref()
                .map(|g| format!("+{}", g))
                .unwrap_or_default()
        );
        progress.on_run_start(validated.queries.len());

        let validated = &validated;
        let chains = validated
            .queries
            .iter()
            .enumerate()
            .map(|(index, query)| async move {
                let result = self.judge.judge(query, validated).await;
                progress.on_entry_settled(index, &result);
                result
            });

        // join_all keeps input order regardless of completion order
        let results = join_all(chains).await;

        let valid = results.iter().filter(|r| r.is_valid()).count();
        info!("Validation finished: {}/{} entries valid", valid, results.len());
        progress.on_run_complete(results.len());

        results
    }
}
