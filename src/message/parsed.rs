// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure.

use crate::error::{LintError, Result};
use serde::{Deserialize, Serialize};

/// A commit message already split into its conventional parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedMessage {
    /// Commit type (feat, fix, etc.).
    #[serde(rename = "type")]
    pub commit_type: Option<String>,
    /// Optional scope.
    pub scope: Option<String>,
    /// Subject line, without type and scope.
    pub subject: String,
    /// The full first line.
    pub header: String,
    /// Optional body.
    pub body: Option<String>,
    /// Optional footer (references, breaking changes, etc.).
    pub footer: Option<String>,
}

impl ParsedMessage {
    /// Create a message from its header and subject.
    pub fn new(header: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            subject: subject.into(),
            ..Self::default()
        }
    }

    /// Set the type.
    pub fn with_type(mut self, commit_type: impl Into<String>) -> Self {
        self.commit_type = Some(commit_type.into());
        self
    }

    /// Set the scope.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Set the body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the footer.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Read a message from the JSON document produced by a parser.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| LintError::Input {
            message: e.to_string(),
        })
    }

    /// Text of the given field, if present.
    pub fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Type => self.commit_type.as_deref(),
            Field::Scope => self.scope.as_deref(),
            Field::Subject => Some(self.subject.as_str()),
            Field::Header => Some(self.header.as_str()),
            Field::Body => self.body.as_deref(),
            Field::Footer => self.footer.as_deref(),
        }
    }
}

/// The part of a message a rule looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Type,
    Scope,
    Subject,
    Header,
    Body,
    Footer,
}

impl Field {
    /// Get the string representation of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Type => "type",
            Field::Scope => "scope",
            Field::Subject => "subject",
            Field::Header => "header",
            Field::Body => "body",
            Field::Footer => "footer",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
