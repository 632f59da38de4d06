// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::error::Result;
use crate::message::ParsedMessage;

use super::rule::RuleSet;
use super::validator::{VerificationResult, Violation};

/// Evaluate every enabled rule of `rules` against `message`.
///
/// Rules run in the set's insertion order, which is also the order of the
/// returned violations. Disabled rules are skipped without running their
/// predicate.
pub fn evaluate(message: &ParsedMessage, rules: &RuleSet) -> VerificationResult {
    let mut result = VerificationResult::new();

    for rule in rules.iter() {
        if !rule.is_enabled() {
            tracing::trace!(rule = rule.name(), "rule disabled, skipping");
            continue;
        }

        let check = rule.definition().check;
        if let Some(finding) = check(message, rule.applicability(), rule.params()) {
            tracing::debug!(rule = rule.name(), severity = %rule.severity(), "rule violated");
            result.push(Violation::new(rule.name(), rule.severity(), finding));
        }
    }

    result
}

/// Rule engine for validating commit messages.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: RuleSet,
}

impl RuleEngine {
    /// Create a new rule engine over a resolved rule set.
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// The rules this engine evaluates.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validate a commit message.
    pub fn validate(&self, message: &ParsedMessage) -> VerificationResult {
        evaluate(message, &self.rules)
    }

    /// Validate a message given as a parser's JSON output.
    pub fn validate_json(&self, input: &str) -> Result<VerificationResult> {
        let message = ParsedMessage::from_json(input)?;
        Ok(self.validate(&message))
    }
}
