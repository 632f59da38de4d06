// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commitlint - Rule engine for conventional commit messages
//!
//! Evaluates a pre-parsed commit message against a configurable, ordered set
//! of rules and reports every violation together with an overall outcome.
//!
//! # Features
//!
//! - **Rule Engine**: pure evaluation of a [`RuleSet`] against a [`ParsedMessage`]
//! - **Declarative Configuration**: TOML or JSON files with `extends` and `rules`
//! - **Conventional Preset**: the conventional commits base rules built in
//! - **Fail-fast Validation**: unknown rules and malformed values are rejected on load
//!
//! # Example
//!
//! ```
//! use commitlint::config::default_config;
//! use commitlint::message::ParsedMessage;
//! use commitlint::rules::{evaluate, Outcome};
//!
//! let rules = default_config().resolve().unwrap();
//! let message = ParsedMessage::new("fix: Handle null token", "Handle null token")
//!     .with_type("fix");
//!
//! let result = evaluate(&message, &rules);
//! assert_eq!(result.outcome(), Outcome::Pass);
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod message;
pub mod rules;

// Re-exports for convenience
pub use config::LintConfig;
pub use error::{ConfigError, LintError, Result};
pub use message::ParsedMessage;
pub use rules::{evaluate, RuleSet, VerificationResult};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commitlint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
