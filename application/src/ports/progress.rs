//! Progress notification port
//!
//! Defines the interface for reporting progress while a validation batch is
//! in flight.

use roster_domain::JudgementResult;

/// Callback for progress updates during a validation run
///
/// Implementations live in the presentation layer.
pub trait ValidationProgress: Send + Sync {
    /// Called once the roster is decoded, before any lookup
    fn on_run_start(&self, total_entries: usize);

    /// Called when one entry's judgement settles (in completion order)
    fn on_entry_settled(&self, index: usize, result: &JudgementResult);

    /// Called after the whole batch has settled
    fn on_run_complete(&self, settled: usize);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ValidationProgress for NoProgress {
    fn on_run_start(&self, _total_entries: usize) {}
    fn on_entry_settled(&self, _index: usize, _result: &JudgementResult) {}
    fn on_run_complete(&self, _settled: usize) {}
}
