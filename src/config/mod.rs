// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for commitlint.
//!
//! This module handles finding and parsing configuration files, resolving
//! `extends` against the built-in presets, and merging everything into a
//! [`RuleSet`](crate::rules::RuleSet).

pub mod default;
mod loader;
pub mod presets;
mod resolve;
mod schema;

pub use default::default_config;
pub use loader::{
    find_config_file, find_config_file_from, load_config, load_config_from, parse_config,
    ConfigFormat,
};
pub use resolve::{parse_rule_entry, parse_rules, resolve, to_config};
pub use schema::*;
