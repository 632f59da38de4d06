// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rendering of results and rule sets for the terminal.

use crate::config::to_config;
use crate::error::{Result, ResultExt};
use crate::rules::{registry, Outcome, RuleSet, VerificationResult, Violation};
use console::{style, Style};

use super::args::OutputFormat;

/// Format one violation for terminal output.
pub fn format_violation(violation: &Violation) -> String {
    let (prefix, code_style) = if violation.is_error() {
        (style("✗").red().bold(), Style::new().red())
    } else {
        (style("⚠").yellow().bold(), Style::new().yellow())
    };

    format!(
        "{} {} {} {}",
        prefix,
        code_style.apply_to(&violation.rule),
        violation.message,
        style(format!("[{}]", violation.field)).dim()
    )
}

/// Render a verification result.
pub fn render_result(result: &VerificationResult, format: Option<OutputFormat>) -> String {
    match format {
        Some(OutputFormat::Json) => render_result_json(result),
        _ => render_result_text(result),
    }
}

fn render_result_text(result: &VerificationResult) -> String {
    let mut lines: Vec<String> = result
        .violations()
        .iter()
        .map(|v| format!("  {}", format_violation(v)))
        .collect();

    let status = match result.outcome() {
        Outcome::Pass => style("✓").green().bold(),
        Outcome::Warn => style("⚠").yellow().bold(),
        Outcome::Error => style("✗").red().bold(),
    };
    lines.push(format!("{} {}", status, result.summary()));

    lines.join("\n")
}

fn render_result_json(result: &VerificationResult) -> String {
    let json = serde_json::json!({
        "valid": result.is_valid(),
        "outcome": result.outcome(),
        "errors": result.errors().count(),
        "warnings": result.warnings().count(),
        "violations": result.violations(),
    });

    serde_json::to_string_pretty(&json).unwrap_or_default()
}

/// Render a resolved rule set as loadable configuration.
pub fn render_rule_set(rules: &RuleSet, format: Option<OutputFormat>) -> Result<String> {
    let config = to_config(rules);

    match format {
        Some(OutputFormat::Json) => {
            serde_json::to_string_pretty(&config).context("Failed to render configuration")
        }
        _ => toml::to_string(&config).context("Failed to render configuration"),
    }
}

/// Render the list of registered rules.
pub fn render_rule_list(format: Option<OutputFormat>) -> String {
    if format == Some(OutputFormat::Json) {
        let rules: Vec<_> = registry::all()
            .iter()
            .map(|rule| {
                serde_json::json!({
                    "name": rule.name,
                    "value": rule.param.describe(),
                    "default": (rule.default_params)(),
                    "description": rule.description,
                })
            })
            .collect();
        return serde_json::to_string_pretty(&rules).unwrap_or_default();
    }

    let mut lines = vec![
        format!("{:<24} {:<36} Description", "Name", "Value"),
        "-".repeat(100),
    ];
    lines.extend(registry::all().iter().map(|rule| {
        format!(
            "{:<24} {:<36} {}",
            rule.name,
            rule.param.describe(),
            rule.description
        )
    }));

    lines.join("\n")
}
