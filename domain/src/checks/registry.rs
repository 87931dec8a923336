//! Aggregate check registry
//!
//! Checks are pure functions over the complete result set. They run in
//! registration order, independently of each other, and are recomputed from
//! scratch whenever the result set changes.

use crate::judgement::JudgementResult;
use serde::Serialize;

/// Pass/fail outcome of one list-level check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckOutcome {
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

type CheckFn = dyn Fn(&[JudgementResult]) -> CheckOutcome + Send + Sync;

/// A named list-level rule
pub struct AggregateCheck {
    name: String,
    check: Box<CheckFn>,
}

impl AggregateCheck {
    pub fn new<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&[JudgementResult]) -> CheckOutcome + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            check: Box::new(check),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn run(&self, results: &[JudgementResult]) -> CheckOutcome {
        (self.check)(results)
    }
}

impl std::fmt::Debug for AggregateCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AggregateCheck")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Outcome of one check, labelled with the check's name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub name: String,
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

/// Ordered set of aggregate checks
///
/// # Example
///
/// ```
/// use roster_domain::checks::{CheckOutcome, CheckRegistry};
///
/// let registry = CheckRegistry::new()
///     .register("Not Empty", |results| {
///         if results.is_empty() {
///             CheckOutcome::fail("No units in list")
///         } else {
///             CheckOutcome::pass()
///         }
///     });
///
/// let reports = registry.evaluate(&[]);
/// assert_eq!(reports[0].name, "Not Empty");
/// assert!(!reports[0].outcome.valid);
/// ```
#[derive(Debug, Default)]
pub struct CheckRegistry {
    checks: Vec<AggregateCheck>,
}

impl CheckRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a check; evaluation follows registration order
    pub fn register<F>(mut self, name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&[JudgementResult]) -> CheckOutcome + Send + Sync + 'static,
    {
        self.checks.push(AggregateCheck::new(name, check));
        self
    }

    pub fn names(&self) -> Vec<&str> {
        self.checks.iter().map(AggregateCheck::name).collect()
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every check against the complete result set
    pub fn evaluate(&self, results: &[JudgementResult]) -> Vec<CheckReport> {
        self.checks
            .iter()
            .map(|check| CheckReport {
                name: check.name().to_string(),
                outcome: check.run(results),
            })
            .collect()
    }

    /// Whether every check passes
    pub fn all_pass(&self, results: &[JudgementResult]) -> bool {
        self.checks.iter().all(|check| check.run(results).valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_in_registration_order() {
        let registry = CheckRegistry::new()
            .register("First", |_| CheckOutcome::pass())
            .register("Second", |_| CheckOutcome::fail("nope"))
            .register("Third", |_| CheckOutcome::pass());

        let reports = registry.evaluate(&[]);
        let names: Vec<_> = reports.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
        assert!(!reports[1].outcome.valid);
        assert_eq!(reports[1].outcome.message.as_deref(), Some("nope"));
        assert!(!registry.all_pass(&[]));
    }

    #[test]
    fn test_empty_registry() {
        let registry = CheckRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.evaluate(&[]).is_empty());
        assert!(registry.all_pass(&[]));
    }

    #[test]
    fn test_report_serializes_flat() {
        let report = CheckReport {
            name: "Duplicate Units".to_string(),
            outcome: CheckOutcome::fail("Duplicate unit: Atlas AS7-D (x2)"),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["name"], "Duplicate Units");
        assert_eq!(json["valid"], false);
        assert_eq!(json["message"], "Duplicate unit: Atlas AS7-D (x2)");
    }
}
