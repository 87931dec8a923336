//! Output formatter trait

use roster_domain::{CheckReport, JudgementResult, Roster};
use serde::Serialize;

/// A finished validation: per-entry results plus list-level checks
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport<'a> {
    pub valid: bool,
    pub results: &'a [JudgementResult],
    pub checks: &'a [CheckReport],
}

impl<'a> ValidationReport<'a> {
    /// Valid when every entry and every check passes
    pub fn new(results: &'a [JudgementResult], checks: &'a [CheckReport]) -> Self {
        let valid = results.iter().all(JudgementResult::is_valid)
            && checks.iter().all(|check| check.outcome.valid);
        Self {
            valid,
            results,
            checks,
        }
    }
}

/// Trait for formatting validation reports and rosters
pub trait OutputFormatter {
    /// Format a validation report for the terminal
    fn format_report(&self, report: &ValidationReport<'_>) -> String;

    /// Format a validation report as JSON
    fn format_report_json(&self, report: &ValidationReport<'_>) -> String;

    /// Format a roster with its point values
    fn format_roster(&self, roster: &Roster) -> String;
}
