// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Turning configuration into a validated rule set.
//!
//! Every entry is checked here: unknown names, out-of-range severities and
//! values of the wrong shape are rejected before a single message is linted.

use crate::error::ConfigError;
use crate::rules::{
    registry, Applicability, CaseMode, ParamKind, Rule, RuleDefinition, RuleParams, RuleSet,
    Severity,
};
use indexmap::IndexMap;
use serde_json::Value;

use super::presets;
use super::schema::{LintConfig, RuleEntry};

/// Merge the configurations named in `extends`, in order, then the local rules.
pub fn resolve(config: &LintConfig) -> Result<RuleSet, ConfigError> {
    let mut rules = RuleSet::new();

    for name in &config.extends {
        let preset = presets::lookup(name)
            .ok_or_else(|| ConfigError::UnknownPreset { name: name.clone() })?;
        tracing::debug!("Extending configuration: {}", name);
        rules = rules.merge(resolve(&preset)?);
    }

    let local = parse_rules(&config.rules)?;
    tracing::debug!("Applying {} local rule(s)", local.len());

    Ok(rules.merge(local))
}

/// Parse a table of rule entries.
pub fn parse_rules(entries: &IndexMap<String, RuleEntry>) -> Result<RuleSet, ConfigError> {
    entries
        .iter()
        .map(|(name, entry)| parse_rule_entry(name, entry))
        .collect()
}

/// Parse one `[severity, condition, value]` entry.
pub fn parse_rule_entry(name: &str, entry: &[Value]) -> Result<Rule, ConfigError> {
    let definition = registry::lookup(name).ok_or_else(|| ConfigError::UnknownRule {
        rule: name.to_string(),
    })?;

    if entry.len() > 3 {
        return Err(ConfigError::InvalidParameter {
            rule: name.to_string(),
            expected: "[severity, condition, value]".to_string(),
            found: format!("{} elements", entry.len()),
        });
    }

    let severity = match entry.first() {
        Some(value) => value
            .as_u64()
            .and_then(Severity::from_level)
            .ok_or_else(|| ConfigError::InvalidSeverity {
                rule: name.to_string(),
                value: value.to_string(),
            })?,
        None => {
            return Err(ConfigError::InvalidSeverity {
                rule: name.to_string(),
                value: "nothing".to_string(),
            })
        }
    };

    let applicability = match entry.get(1) {
        None => Applicability::default(),
        Some(value) => value
            .as_str()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| ConfigError::InvalidApplicability {
                rule: name.to_string(),
                value: value.to_string(),
            })?,
    };

    let params = match entry.get(2) {
        None => RuleParams::None,
        Some(value) => parse_params(definition, value)?,
    };

    Rule::from_definition(definition, severity, applicability, params)
}

fn parse_params(definition: &RuleDefinition, value: &Value) -> Result<RuleParams, ConfigError> {
    let invalid = || ConfigError::InvalidParameter {
        rule: definition.name.to_string(),
        expected: definition.param.describe().to_string(),
        found: value.to_string(),
    };

    match definition.param {
        ParamKind::None => Err(invalid()),
        ParamKind::Values => string_list(value)
            .map(RuleParams::Values)
            .ok_or_else(invalid),
        ParamKind::Length => value
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .map(RuleParams::Length)
            .ok_or_else(invalid),
        ParamKind::Text => value
            .as_str()
            .map(|s| RuleParams::Text(s.to_string()))
            .ok_or_else(invalid),
        ParamKind::Cases => {
            let names = match value {
                Value::String(name) => vec![name.clone()],
                other => string_list(other).ok_or_else(invalid)?,
            };
            names
                .iter()
                .map(|name| name.parse::<CaseMode>().map_err(|_| invalid()))
                .collect::<Result<Vec<_>, _>>()
                .map(RuleParams::Cases)
        }
    }
}

fn string_list(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

/// Write a rule set back out as configuration, with no `extends`.
pub fn to_config(rules: &RuleSet) -> LintConfig {
    LintConfig {
        extends: Vec::new(),
        rules: rules
            .iter()
            .map(|rule| (rule.name().to_string(), to_entry(rule)))
            .collect(),
    }
}

fn to_entry(rule: &Rule) -> RuleEntry {
    let mut entry = vec![
        Value::from(rule.severity().level()),
        Value::from(rule.applicability().as_str()),
    ];

    if rule.params() != &RuleParams::None {
        if let Ok(value) = serde_json::to_value(rule.params()) {
            entry.push(value);
        }
    }

    entry
}
