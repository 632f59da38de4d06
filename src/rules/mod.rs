// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! A [`RuleSet`] is resolved once from configuration and then evaluated
//! against any number of [`ParsedMessage`](crate::message::ParsedMessage)s
//! with [`evaluate`]. Evaluation is pure: it neither prints nor mutates its
//! inputs, so a rule set can be shared freely between threads.

mod builtin;
mod case;
mod engine;
pub mod registry;
mod rule;
mod validator;

pub use builtin::Finding;
pub use case::CaseMode;
pub use engine::{evaluate, RuleEngine};
pub use registry::RuleDefinition;
pub use rule::{Applicability, ParamKind, Rule, RuleParams, RuleSet, Severity};
pub use validator::{Outcome, VerificationResult, Violation};
