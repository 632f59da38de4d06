// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule and rule set definitions.

use crate::error::ConfigError;
use indexmap::IndexMap;
use serde::Serialize;

use super::case::CaseMode;
use super::registry::{self, RuleDefinition};

/// How strongly a rule is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The rule is never evaluated.
    Off,
    /// A violation is reported but does not fail the check.
    Warn,
    /// A violation fails the check.
    Error,
}

impl Severity {
    /// Map a configuration level (0, 1, 2) to a severity.
    pub fn from_level(level: u64) -> Option<Self> {
        match level {
            0 => Some(Severity::Off),
            1 => Some(Severity::Warn),
            2 => Some(Severity::Error),
            _ => None,
        }
    }

    /// The configuration level of this severity.
    pub fn level(&self) -> u8 {
        match self {
            Severity::Off => 0,
            Severity::Warn => 1,
            Severity::Error => 2,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Off => write!(f, "off"),
            Severity::Warn => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Whether a rule's condition must hold or must not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    #[default]
    Always,
    Never,
}

impl Applicability {
    /// Get the string representation used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Applicability::Always => "always",
            Applicability::Never => "never",
        }
    }

    /// Whether the observed state of a condition is a violation.
    pub fn is_violated(&self, holds: bool) -> bool {
        match self {
            Applicability::Always => !holds,
            Applicability::Never => holds,
        }
    }
}

impl std::str::FromStr for Applicability {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(Applicability::Always),
            "never" => Ok(Applicability::Never),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Applicability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The shape of value a rule accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    None,
    Values,
    Length,
    Cases,
    Text,
}

impl ParamKind {
    /// Human-readable description, used in configuration errors.
    pub fn describe(&self) -> &'static str {
        match self {
            ParamKind::None => "no value",
            ParamKind::Values => "a list of strings",
            ParamKind::Length => "a non-negative integer",
            ParamKind::Cases => "a case name or a list of case names",
            ParamKind::Text => "a string",
        }
    }
}

/// A rule's typed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RuleParams {
    None,
    Values(Vec<String>),
    Length(usize),
    Cases(Vec<CaseMode>),
    Text(String),
}

impl RuleParams {
    /// The shape of this value.
    pub fn kind(&self) -> ParamKind {
        match self {
            RuleParams::None => ParamKind::None,
            RuleParams::Values(_) => ParamKind::Values,
            RuleParams::Length(_) => ParamKind::Length,
            RuleParams::Cases(_) => ParamKind::Cases,
            RuleParams::Text(_) => ParamKind::Text,
        }
    }

    /// Allowed values, empty unless this is a value list.
    pub fn values(&self) -> &[String] {
        match self {
            RuleParams::Values(values) => values,
            _ => &[],
        }
    }

    /// Length limit, if this is one.
    pub fn length(&self) -> Option<usize> {
        match self {
            RuleParams::Length(length) => Some(*length),
            _ => None,
        }
    }

    /// Case modes, empty unless this is a case list.
    pub fn cases(&self) -> &[CaseMode] {
        match self {
            RuleParams::Cases(cases) => cases,
            _ => &[],
        }
    }

    /// Text value, if this is one.
    pub fn text(&self) -> Option<&str> {
        match self {
            RuleParams::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// A configured rule, bound to its registered predicate.
///
/// Fields are only set through [`Rule::new`] and friends, so an enabled rule
/// always carries a value of the shape its predicate expects.
#[derive(Debug, Clone)]
pub struct Rule {
    severity: Severity,
    applicability: Applicability,
    params: RuleParams,
    definition: &'static RuleDefinition,
}

impl Rule {
    /// Create a rule by name.
    ///
    /// Fails if the rule is not registered or `params` has the wrong shape.
    /// Missing params fall back to the rule's default; a rule with no default
    /// may only be created without params when it is [`Severity::Off`].
    pub fn new(
        name: &str,
        severity: Severity,
        applicability: Applicability,
        params: RuleParams,
    ) -> Result<Self, ConfigError> {
        let definition = registry::lookup(name).ok_or_else(|| ConfigError::UnknownRule {
            rule: name.to_string(),
        })?;
        Self::from_definition(definition, severity, applicability, params)
    }

    pub(crate) fn from_definition(
        definition: &'static RuleDefinition,
        severity: Severity,
        applicability: Applicability,
        params: RuleParams,
    ) -> Result<Self, ConfigError> {
        let params = match params {
            RuleParams::None => (definition.default_params)(),
            other => other,
        };

        if params.kind() != definition.param {
            if params.kind() != ParamKind::None {
                return Err(ConfigError::InvalidParameter {
                    rule: definition.name.to_string(),
                    expected: definition.param.describe().to_string(),
                    found: format!("{:?}", params),
                });
            }
            if severity != Severity::Off {
                return Err(ConfigError::MissingParameter {
                    rule: definition.name.to_string(),
                    expected: definition.param.describe().to_string(),
                });
            }
        }

        Ok(Self {
            severity,
            applicability,
            params,
            definition,
        })
    }

    /// The rule's registered name.
    pub fn name(&self) -> &'static str {
        self.definition.name
    }

    /// The registry entry this rule is bound to.
    pub fn definition(&self) -> &'static RuleDefinition {
        self.definition
    }

    /// How strongly the rule is enforced.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Whether the rule's condition must hold or must not hold.
    pub fn applicability(&self) -> Applicability {
        self.applicability
    }

    /// Rule-specific value.
    pub fn params(&self) -> &RuleParams {
        &self.params
    }

    /// Whether the rule takes part in evaluation.
    pub fn is_enabled(&self) -> bool {
        self.severity != Severity::Off
    }

    /// Return the same rule with a different severity.
    ///
    /// Enabling a rule that has no value fails like it would on load.
    pub fn with_severity(self, severity: Severity) -> Result<Self, ConfigError> {
        Self::from_definition(self.definition, severity, self.applicability, self.params)
    }
}

/// Ordered collection of rules, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: IndexMap<&'static str, Rule>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule, replacing any rule with the same name in place.
    pub fn insert(&mut self, rule: Rule) {
        self.rules.insert(rule.name(), rule);
    }

    /// Builder form of [`RuleSet::insert`].
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.insert(rule);
        self
    }

    /// Apply `overrides` on top of this set.
    ///
    /// A rule named in both sets is replaced wholesale and keeps its base
    /// position; rules only in `overrides` are appended in their order.
    pub fn merge(mut self, overrides: RuleSet) -> RuleSet {
        for (_, rule) in overrides.rules {
            self.insert(rule);
        }
        self
    }

    /// Get a rule by name.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    /// Iterate over rules in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }

    /// Number of rules, including disabled ones.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        let mut set = RuleSet::new();
        for rule in iter {
            set.insert(rule);
        }
        set
    }
}
