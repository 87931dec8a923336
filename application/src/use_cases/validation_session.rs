//! Validation session
//!
//! Tracks which validation batch is current. Every batch takes a run id;
//! only the batch holding the latest id may publish its results, so a slow
//! earlier batch can never overwrite a newer one.

use roster_domain::JudgementResult;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

/// Identifies one validation batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RunTicket(u64);

#[derive(Debug, Default)]
struct Published {
    run_id: u64,
    results: Option<Arc<Vec<JudgementResult>>>,
}

/// Holds the last published result set of a sequence of validation runs
#[derive(Debug, Default)]
pub struct ValidationSession {
    latest_run: AtomicU64,
    published: Mutex<Published>,
}

impl ValidationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new batch; any earlier batch becomes stale
    pub fn begin(&self) -> RunTicket {
        RunTicket(self.latest_run.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_latest(&self, ticket: RunTicket) -> bool {
        self.latest_run.load(Ordering::SeqCst) == ticket.0
    }

    /// Publish the results of a batch. Returns `false` (and drops the
    /// results) when a newer batch has been started since.
    pub fn publish(&self, ticket: RunTicket, results: Vec<JudgementResult>) -> bool {
        let mut published = self
            .published
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if !self.is_latest(ticket) || ticket.0 <= published.run_id {
            debug!("Discarding stale results of run {}", ticket.0);
            return false;
        }

        published.run_id = ticket.0;
        published.results = Some(Arc::new(results));
        true
    }

    /// Last published results; `None` while the first batch is in flight
    pub fn results(&self) -> Option<Arc<Vec<JudgementResult>>> {
        self.published
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .results
            .clone()
    }

    /// Run a batch as a task and publish its results if still current.
    ///
    /// A batch that fails (panics) is logged and leaves the previously
    /// published results in place. Returns the results this call published.
    pub async fn run<F>(&self, batch: F) -> Option<Arc<Vec<JudgementResult>>>
    where
        F: Future<Output = Vec<JudgementResult>> + Send + 'static,
    {
        let ticket = self.begin();
        match tokio::spawn(batch).await {
            Ok(results) => {
                if self.publish(ticket, results) {
                    self.results()
                } else {
                    None
                }
            }
            Err(e) => {
                warn!("Validation run {} failed: {}", ticket.0, e);
                None
            }
        }
    }
}
