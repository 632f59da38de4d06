// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::presets::PROJECT;
use super::schema::LintConfig;

/// Get the configuration used when no file is found: the project rules.
pub fn default_config() -> LintConfig {
    LintConfig {
        extends: vec![PROJECT.to_string()],
        ..LintConfig::default()
    }
}

/// A configuration that only extends the conventional preset.
pub fn minimal_config() -> &'static str {
    r#"# commitlint configuration
# SPDX-License-Identifier: MIT

extends = ["@commitlint/config-conventional"]
"#
}

/// Generate an example configuration file.
///
/// Each rule is `[severity, condition, value]`:
/// severity 0 disables the rule, 1 warns, 2 fails the check.
pub fn example_config() -> &'static str {
    r#"# commitlint configuration
# SPDX-License-Identifier: MIT

# Base rules for `<type>(<scope>): <subject>` headers.
extends = ["@commitlint/config-conventional"]

[rules]
# Every commit needs a type.
type-empty = [2, "never"]

# Only these types are accepted.
type-enum = [2, "always", [
    "feat",
    "fix",
    "docs",
    "style",
    "refactor",
    "perf",
    "test",
    "build",
    "ci",
    "chore",
    "revert",
]]

# Every commit needs a subject.
subject-empty = [2, "never"]

# fix: Handle null token
subject-case = [2, "always", ["sentence-case"]]

header-max-length = [2, "always", 72]

# Scopes are optional.
scope-empty = [0]

# Bodies and footers may hold long lists, notes and references.
body-max-line-length = [0]
footer-max-line-length = [0]
"#
}
