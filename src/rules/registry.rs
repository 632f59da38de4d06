// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Static table of every rule the engine knows.
//!
//! Configuration is resolved against this table when it is loaded, so a
//! rule set only ever contains names that have a predicate.

use crate::message::ParsedMessage;

use super::builtin::{self, Finding};
use super::rule::{Applicability, ParamKind, RuleParams};

/// Signature shared by all rule predicates.
pub type Predicate = fn(&ParsedMessage, Applicability, &RuleParams) -> Option<Finding>;

/// A registered rule.
pub struct RuleDefinition {
    /// Name used in configuration files.
    pub name: &'static str,
    /// One-line description for `list-rules`.
    pub description: &'static str,
    /// The value shape the rule accepts.
    pub param: ParamKind,
    /// Value used when the configuration gives none.
    pub default_params: fn() -> RuleParams,
    /// The predicate itself.
    pub check: Predicate,
}

impl std::fmt::Debug for RuleDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleDefinition")
            .field("name", &self.name)
            .field("param", &self.param)
            .finish_non_exhaustive()
    }
}

fn no_params() -> RuleParams {
    RuleParams::None
}

fn line_length() -> RuleParams {
    RuleParams::Length(100)
}

fn zero_length() -> RuleParams {
    RuleParams::Length(0)
}

fn full_stop() -> RuleParams {
    RuleParams::Text(".".to_string())
}

static RULES: &[RuleDefinition] = &[
    RuleDefinition {
        name: "type-empty",
        description: "Type is empty",
        param: ParamKind::None,
        default_params: no_params,
        check: builtin::type_empty,
    },
    RuleDefinition {
        name: "type-enum",
        description: "Type is one of the given values",
        param: ParamKind::Values,
        default_params: no_params,
        check: builtin::type_enum,
    },
    RuleDefinition {
        name: "type-case",
        description: "Type is in one of the given cases",
        param: ParamKind::Cases,
        default_params: no_params,
        check: builtin::type_case,
    },
    RuleDefinition {
        name: "scope-empty",
        description: "Scope is empty (an absent scope always passes)",
        param: ParamKind::None,
        default_params: no_params,
        check: builtin::scope_empty,
    },
    RuleDefinition {
        name: "scope-enum",
        description: "Every comma-separated scope is one of the given values",
        param: ParamKind::Values,
        default_params: no_params,
        check: builtin::scope_enum,
    },
    RuleDefinition {
        name: "scope-case",
        description: "Scope is in one of the given cases",
        param: ParamKind::Cases,
        default_params: no_params,
        check: builtin::scope_case,
    },
    RuleDefinition {
        name: "subject-empty",
        description: "Subject is empty",
        param: ParamKind::None,
        default_params: no_params,
        check: builtin::subject_empty,
    },
    RuleDefinition {
        name: "subject-case",
        description: "Subject is in one of the given cases",
        param: ParamKind::Cases,
        default_params: no_params,
        check: builtin::subject_case,
    },
    RuleDefinition {
        name: "subject-full-stop",
        description: "Subject ends with the given text",
        param: ParamKind::Text,
        default_params: full_stop,
        check: builtin::subject_full_stop,
    },
    RuleDefinition {
        name: "header-max-length",
        description: "Header has at most the given number of characters",
        param: ParamKind::Length,
        default_params: no_params,
        check: builtin::header_max_length,
    },
    RuleDefinition {
        name: "header-min-length",
        description: "Header has at least the given number of characters",
        param: ParamKind::Length,
        default_params: zero_length,
        check: builtin::header_min_length,
    },
    RuleDefinition {
        name: "header-trim",
        description: "Header has no leading or trailing whitespace",
        param: ParamKind::None,
        default_params: no_params,
        check: builtin::header_trim,
    },
    RuleDefinition {
        name: "body-empty",
        description: "Body is empty",
        param: ParamKind::None,
        default_params: no_params,
        check: builtin::body_empty,
    },
    RuleDefinition {
        name: "body-max-line-length",
        description: "Body lines have at most the given number of characters",
        param: ParamKind::Length,
        default_params: line_length,
        check: builtin::body_max_line_length,
    },
    RuleDefinition {
        name: "footer-empty",
        description: "Footer is empty",
        param: ParamKind::None,
        default_params: no_params,
        check: builtin::footer_empty,
    },
    RuleDefinition {
        name: "footer-max-line-length",
        description: "Footer lines have at most the given number of characters",
        param: ParamKind::Length,
        default_params: line_length,
        check: builtin::footer_max_line_length,
    },
];

/// Find a rule definition by name.
pub fn lookup(name: &str) -> Option<&'static RuleDefinition> {
    RULES.iter().find(|rule| rule.name == name)
}

/// All registered rules, in registration order.
pub fn all() -> &'static [RuleDefinition] {
    RULES
}
