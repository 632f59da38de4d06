// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in rule predicates.
//!
//! Each predicate tests one condition on the message and reports a
//! [`Finding`] when the observed state contradicts the rule's
//! [`Applicability`]. Predicates never fail; a field that is absent is
//! treated as passing unless the rule is about emptiness.

use crate::message::{Field, ParsedMessage};

use super::case::CaseMode;
use super::rule::{Applicability, RuleParams};

/// What a failing predicate reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// The field that triggered the rule.
    pub field: Field,
    /// Human-readable message.
    pub message: String,
}

impl Finding {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Report `field` when `holds` contradicts `when`.
fn verdict(
    field: Field,
    when: Applicability,
    holds: bool,
    always: impl FnOnce() -> String,
    never: impl FnOnce() -> String,
) -> Option<Finding> {
    if !when.is_violated(holds) {
        return None;
    }

    let message = match when {
        Applicability::Always => always(),
        Applicability::Never => never(),
    };
    Some(Finding::new(field, message))
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn join_cases(cases: &[CaseMode]) -> String {
    cases
        .iter()
        .map(CaseMode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn check_case(
    field: Field,
    value: Option<&str>,
    when: Applicability,
    cases: &[CaseMode],
) -> Option<Finding> {
    let text = present(value)?;
    if cases.is_empty() {
        return None;
    }

    let holds = cases.iter().any(|case| case.matches(text));
    verdict(
        field,
        when,
        holds,
        || format!("{} must be {}", field, join_cases(cases)),
        || format!("{} must not be {}", field, join_cases(cases)),
    )
}

fn check_empty(field: Field, value: Option<&str>, when: Applicability) -> Option<Finding> {
    verdict(
        field,
        when,
        present(value).is_none(),
        || format!("{} must be empty", field),
        || format!("{} may not be empty", field),
    )
}

fn check_line_length(
    field: Field,
    value: Option<&str>,
    when: Applicability,
    max: Option<usize>,
) -> Option<Finding> {
    let text = value?;
    let max = max?;

    let holds = text.lines().all(|line| char_len(line) <= max);
    verdict(
        field,
        when,
        holds,
        || format!("{}'s lines must not be longer than {} characters", field, max),
        || format!("{}'s lines must be longer than {} characters", field, max),
    )
}

/// `type-empty`: the type is empty or absent.
pub fn type_empty(
    message: &ParsedMessage,
    when: Applicability,
    _params: &RuleParams,
) -> Option<Finding> {
    check_empty(Field::Type, message.field(Field::Type), when)
}

/// `type-enum`: the type is one of the allowed values (exact match).
pub fn type_enum(
    message: &ParsedMessage,
    when: Applicability,
    params: &RuleParams,
) -> Option<Finding> {
    let commit_type = present(message.field(Field::Type))?;
    let allowed = params.values();

    let holds = allowed.iter().any(|t| t == commit_type);
    verdict(
        Field::Type,
        when,
        holds,
        || format!("type must be one of [{}]", allowed.join(", ")),
        || format!("type must not be one of [{}]", allowed.join(", ")),
    )
}

/// `type-case`: the type follows one of the given cases.
pub fn type_case(
    message: &ParsedMessage,
    when: Applicability,
    params: &RuleParams,
) -> Option<Finding> {
    check_case(Field::Type, message.field(Field::Type), when, params.cases())
}

/// `scope-empty`: the scope is empty.
///
/// A message without a scope never violates this rule in either direction.
pub fn scope_empty(
    message: &ParsedMessage,
    when: Applicability,
    _params: &RuleParams,
) -> Option<Finding> {
    let scope = message.field(Field::Scope)?;
    check_empty(Field::Scope, Some(scope), when)
}

/// `scope-enum`: every comma-separated scope is one of the allowed values.
pub fn scope_enum(
    message: &ParsedMessage,
    when: Applicability,
    params: &RuleParams,
) -> Option<Finding> {
    let scope = present(message.field(Field::Scope))?;
    let allowed = params.values();

    let holds = scope
        .split(',')
        .map(str::trim)
        .all(|s| allowed.iter().any(|a| a == s));
    verdict(
        Field::Scope,
        when,
        holds,
        || format!("scope must be one of [{}]", allowed.join(", ")),
        || format!("scope must not be one of [{}]", allowed.join(", ")),
    )
}

/// `scope-case`: the scope follows one of the given cases.
pub fn scope_case(
    message: &ParsedMessage,
    when: Applicability,
    params: &RuleParams,
) -> Option<Finding> {
    check_case(Field::Scope, message.field(Field::Scope), when, params.cases())
}

/// `subject-empty`: the subject is empty.
pub fn subject_empty(
    message: &ParsedMessage,
    when: Applicability,
    _params: &RuleParams,
) -> Option<Finding> {
    check_empty(Field::Subject, message.field(Field::Subject), when)
}

/// `subject-case`: the subject follows one of the given cases.
pub fn subject_case(
    message: &ParsedMessage,
    when: Applicability,
    params: &RuleParams,
) -> Option<Finding> {
    check_case(Field::Subject, message.field(Field::Subject), when, params.cases())
}

/// `subject-full-stop`: the subject ends with the given text.
pub fn subject_full_stop(
    message: &ParsedMessage,
    when: Applicability,
    params: &RuleParams,
) -> Option<Finding> {
    let subject = present(message.field(Field::Subject))?;
    let stop = params.text()?;

    verdict(
        Field::Subject,
        when,
        subject.ends_with(stop),
        || format!("subject must end with '{}'", stop),
        || format!("subject may not end with '{}'", stop),
    )
}

/// `header-max-length`: the header has at most `n` characters.
///
/// Length is counted in Unicode scalar values, not bytes.
pub fn header_max_length(
    message: &ParsedMessage,
    when: Applicability,
    params: &RuleParams,
) -> Option<Finding> {
    let max = params.length()?;
    let len = char_len(&message.header);

    verdict(
        Field::Header,
        when,
        len <= max,
        || {
            format!(
                "header must not be longer than {} characters, current length is {}",
                max, len
            )
        },
        || format!("header must be longer than {} characters", max),
    )
}

/// `header-min-length`: the header has at least `n` characters.
pub fn header_min_length(
    message: &ParsedMessage,
    when: Applicability,
    params: &RuleParams,
) -> Option<Finding> {
    let min = params.length()?;
    let len = char_len(&message.header);

    verdict(
        Field::Header,
        when,
        len >= min,
        || {
            format!(
                "header must not be shorter than {} characters, current length is {}",
                min, len
            )
        },
        || format!("header must be shorter than {} characters", min),
    )
}

/// `header-trim`: the header has no surrounding whitespace.
pub fn header_trim(
    message: &ParsedMessage,
    when: Applicability,
    _params: &RuleParams,
) -> Option<Finding> {
    let header = &message.header;

    verdict(
        Field::Header,
        when,
        header.trim() == header,
        || "header must not be surrounded by whitespace".to_string(),
        || "header must be surrounded by whitespace".to_string(),
    )
}

/// `body-empty`: the body is empty or absent.
pub fn body_empty(
    message: &ParsedMessage,
    when: Applicability,
    _params: &RuleParams,
) -> Option<Finding> {
    check_empty(Field::Body, message.field(Field::Body), when)
}

/// `body-max-line-length`: no body line is longer than `n` characters.
pub fn body_max_line_length(
    message: &ParsedMessage,
    when: Applicability,
    params: &RuleParams,
) -> Option<Finding> {
    check_line_length(Field::Body, message.field(Field::Body), when, params.length())
}

/// `footer-empty`: the footer is empty or absent.
pub fn footer_empty(
    message: &ParsedMessage,
    when: Applicability,
    _params: &RuleParams,
) -> Option<Finding> {
    check_empty(Field::Footer, message.field(Field::Footer), when)
}

/// `footer-max-line-length`: no footer line is longer than `n` characters.
pub fn footer_max_line_length(
    message: &ParsedMessage,
    when: Applicability,
    params: &RuleParams,
) -> Option<Finding> {
    check_line_length(Field::Footer, message.field(Field::Footer), when, params.length())
}
