// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in configurations that can be named in `extends`.

use indexmap::IndexMap;
use serde_json::{json, Value};

use super::schema::{LintConfig, RuleEntry};

/// Identifier of the conventional commits base configuration.
pub const CONVENTIONAL: &str = "@commitlint/config-conventional";

/// Identifier of this project's rules: conventional plus local overrides.
pub const PROJECT: &str = "project";

/// Every identifier `extends` accepts.
pub const NAMES: &[&str] = &[CONVENTIONAL, "conventional", PROJECT];

/// Commit types allowed by the conventional preset.
pub const CONVENTIONAL_TYPES: &[&str] = &[
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test",
];

/// Get a built-in configuration by identifier.
pub fn lookup(name: &str) -> Option<LintConfig> {
    match name {
        CONVENTIONAL | "conventional" => Some(conventional()),
        PROJECT => Some(project()),
        _ => None,
    }
}

fn entries(rules: Vec<(&str, Value)>) -> IndexMap<String, RuleEntry> {
    rules
        .into_iter()
        .map(|(name, entry)| {
            let entry = match entry {
                Value::Array(items) => items,
                other => vec![other],
            };
            (name.to_string(), entry)
        })
        .collect()
}

/// The conventional commits base rules.
fn conventional() -> LintConfig {
    LintConfig {
        extends: Vec::new(),
        rules: entries(vec![
            ("body-max-line-length", json!([2, "always", 100])),
            ("footer-max-line-length", json!([2, "always", 100])),
            ("header-max-length", json!([2, "always", 100])),
            ("header-trim", json!([2, "always"])),
            (
                "subject-case",
                json!([2, "never", ["sentence-case", "start-case", "pascal-case", "upper-case"]]),
            ),
            ("subject-empty", json!([2, "never"])),
            ("subject-full-stop", json!([2, "never", "."])),
            ("type-case", json!([2, "always", "lower-case"])),
            ("type-empty", json!([2, "never"])),
            ("type-enum", json!([2, "always", CONVENTIONAL_TYPES])),
        ]),
    }
}

/// The conventional rules with the project's overrides applied.
///
/// Same rules as [`example_config`](super::default::example_config).
fn project() -> LintConfig {
    LintConfig {
        extends: vec![CONVENTIONAL.to_string()],
        rules: entries(vec![
            ("type-empty", json!([2, "never"])),
            (
                "type-enum",
                json!([
                    2,
                    "always",
                    [
                        "feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci",
                        "chore", "revert"
                    ]
                ]),
            ),
            ("subject-empty", json!([2, "never"])),
            ("subject-case", json!([2, "always", ["sentence-case"]])),
            ("header-max-length", json!([2, "always", 72])),
            ("scope-empty", json!([0])),
            ("body-max-line-length", json!([0])),
            ("footer-max-line-length", json!([0])),
        ]),
    }
}
