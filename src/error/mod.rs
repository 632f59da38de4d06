// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commitlint.
//!
//! Configuration problems are reported as [`ConfigError`] and always surface
//! while the rule set is being built, before any message is evaluated.
//! Rule violations are not errors: they are data carried by
//! [`VerificationResult`](crate::rules::VerificationResult).

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commitlint operations.
#[derive(Error, Debug)]
pub enum LintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Malformed pre-parsed message
    #[error("Invalid message input: {message}")]
    Input { message: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // The checked message did not pass
    #[error("Commit message check failed: {errors} error(s), {warnings} warning(s)")]
    Failed { errors: usize, warnings: usize },

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Unknown rule: '{rule}'")]
    UnknownRule { rule: String },

    #[error("Invalid severity for rule '{rule}': {value} (expected 0, 1 or 2)")]
    InvalidSeverity { rule: String, value: String },

    #[error("Invalid condition for rule '{rule}': {value} (expected 'always' or 'never')")]
    InvalidApplicability { rule: String, value: String },

    #[error("Invalid value for rule '{rule}': expected {expected}, found {found}")]
    InvalidParameter {
        rule: String,
        expected: String,
        found: String,
    },

    #[error("Rule '{rule}' is enabled but has no value (expected {expected})")]
    MissingParameter { rule: String, expected: String },

    #[error("Unknown configuration to extend: '{name}'")]
    UnknownPreset { name: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Result type alias for commitlint operations.
pub type Result<T> = std::result::Result<T, LintError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LintError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/config"),
        };
        assert!(err.to_string().contains("/path/to/config"));
    }

    #[test]
    fn test_unknown_rule_names_the_rule() {
        let err = ConfigError::UnknownRule {
            rule: "subject-rhymes".to_string(),
        };
        assert!(err.to_string().contains("subject-rhymes"));
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = ConfigError::InvalidParameter {
            rule: "header-max-length".to_string(),
            expected: "a non-negative integer".to_string(),
            found: "\"72\"".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("header-max-length"));
        assert!(text.contains("non-negative integer"));
    }

    #[test]
    fn test_lint_error_from_config_error() {
        let config_err = ConfigError::UnknownPreset {
            name: "@acme/config".to_string(),
        };
        let err: LintError = config_err.into();
        assert!(err.to_string().contains("@acme/config"));
    }

    #[test]
    fn test_result_ext_context() {
        let io: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        let err = io.context("reading input").unwrap_err();
        assert_eq!(err.to_string(), "reading input: boom");
    }
}
