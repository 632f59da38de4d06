// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Rule entries are kept as raw values here and only given a type when the
//! configuration is resolved into a [`RuleSet`].

use crate::error::ConfigError;
use crate::rules::RuleSet;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A rule entry as written in a configuration file:
/// `[severity, condition, value]`, where the last two are optional.
pub type RuleEntry = Vec<serde_json::Value>;

/// The main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LintConfig {
    /// Configurations to merge first, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<String>,

    /// Rule entries, applied after everything in `extends`.
    #[serde(default)]
    pub rules: IndexMap<String, RuleEntry>,
}

impl LintConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Merge `extends` and `rules` into a validated rule set.
    pub fn resolve(&self) -> Result<RuleSet, ConfigError> {
        super::resolve::resolve(self)
    }
}
