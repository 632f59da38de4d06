// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Verification result types.

use crate::message::Field;
use serde::Serialize;

use super::builtin::Finding;
use super::rule::Severity;

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Name of the violated rule.
    pub rule: String,
    /// Severity of the rule at evaluation time.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// The message field that triggered the rule.
    pub field: Field,
}

impl Violation {
    /// Create a violation from a predicate's finding.
    pub fn new(rule: impl Into<String>, severity: Severity, finding: Finding) -> Self {
        Self {
            rule: rule.into(),
            severity,
            message: finding.message,
            field: finding.field,
        }
    }

    /// Whether this violation blocks the check.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Aggregate verdict of a verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Warn,
    Error,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Pass => write!(f, "pass"),
            Outcome::Warn => write!(f, "warn"),
            Outcome::Error => write!(f, "error"),
        }
    }
}

/// Result of evaluating a rule set against one message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationResult {
    violations: Vec<Violation>,
}

impl VerificationResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation, after any already recorded.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// All violations, in rule evaluation order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// The highest severity among the violations.
    pub fn outcome(&self) -> Outcome {
        match self.violations.iter().map(|v| v.severity).max() {
            Some(Severity::Error) => Outcome::Error,
            Some(Severity::Warn) => Outcome::Warn,
            Some(Severity::Off) | None => Outcome::Pass,
        }
    }

    /// Check if the message passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.outcome() != Outcome::Error
    }

    /// Violations with error severity.
    pub fn errors(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.severity == Severity::Error)
    }

    /// Violations with warning severity.
    pub fn warnings(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.severity == Severity::Warn)
    }

    /// Get the total number of violations.
    pub fn issue_count(&self) -> usize {
        self.violations.len()
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        let errors = self.errors().count();
        let warnings = self.warnings().count();

        match self.outcome() {
            Outcome::Pass => "Valid".to_string(),
            Outcome::Warn => format!("Valid ({} warnings)", warnings),
            Outcome::Error => format!("Invalid ({} errors, {} warnings)", errors, warnings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(rule: &str, severity: Severity) -> Violation {
        Violation::new(
            rule,
            severity,
            Finding {
                field: Field::Subject,
                message: "Test message".to_string(),
            },
        )
    }

    #[test]
    fn test_empty_result_passes() {
        let result = VerificationResult::new();
        assert_eq!(result.outcome(), Outcome::Pass);
        assert!(result.is_valid());
        assert_eq!(result.issue_count(), 0);
    }

    #[test]
    fn test_outcome_is_severity_maximum() {
        let mut warn_first = VerificationResult::new();
        warn_first.push(violation("a", Severity::Warn));
        warn_first.push(violation("b", Severity::Error));

        let mut error_first = VerificationResult::new();
        error_first.push(violation("b", Severity::Error));
        error_first.push(violation("a", Severity::Warn));

        assert_eq!(warn_first.outcome(), Outcome::Error);
        assert_eq!(error_first.outcome(), Outcome::Error);
        assert!(!warn_first.is_valid());
    }

    #[test]
    fn test_warnings_only() {
        let mut result = VerificationResult::new();
        result.push(violation("a", Severity::Warn));

        assert_eq!(result.outcome(), Outcome::Warn);
        assert!(result.is_valid());
        assert_eq!(result.warnings().count(), 1);
        assert_eq!(result.errors().count(), 0);
    }

    #[test]
    fn test_summary() {
        let mut result = VerificationResult::new();
        assert!(result.summary().contains("Valid"));

        result.push(violation("warn", Severity::Warn));
        assert!(result.summary().contains("1 warnings"));

        result.push(violation("err", Severity::Error));
        assert!(result.summary().contains("Invalid"));
    }

    #[test]
    fn test_preserves_order() {
        let mut result = VerificationResult::new();
        result.push(violation("second", Severity::Error));
        result.push(violation("first", Severity::Warn));

        let names: Vec<_> = result.violations().iter().map(|v| v.rule.as_str()).collect();
        assert_eq!(names, vec!["second", "first"]);
    }
}
