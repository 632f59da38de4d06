// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Letter-case detection for the `*-case` rules.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    /// Quoted spans are ignored when checking case.
    static ref QUOTED_REGEX: Regex = Regex::new(r#"`.*?`|".*?"|'.*?'"#).unwrap();
}

/// A casing convention a piece of text can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseMode {
    LowerCase,
    UpperCase,
    CamelCase,
    KebabCase,
    PascalCase,
    SentenceCase,
    SnakeCase,
    StartCase,
}

impl CaseMode {
    /// Get the string representation of the case mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseMode::LowerCase => "lower-case",
            CaseMode::UpperCase => "upper-case",
            CaseMode::CamelCase => "camel-case",
            CaseMode::KebabCase => "kebab-case",
            CaseMode::PascalCase => "pascal-case",
            CaseMode::SentenceCase => "sentence-case",
            CaseMode::SnakeCase => "snake-case",
            CaseMode::StartCase => "start-case",
        }
    }

    /// Check whether `text` follows this case.
    ///
    /// Empty text and text starting with a digit match every case.
    pub fn matches(&self, text: &str) -> bool {
        if *self == CaseMode::SentenceCase && text.trim() != text {
            return false;
        }

        let stripped = QUOTED_REGEX.replace_all(text, "");
        let input = stripped.trim();

        if input.is_empty() || input.starts_with(|c: char| c.is_ascii_digit()) {
            return true;
        }

        match self {
            CaseMode::LowerCase => input == input.to_lowercase(),
            CaseMode::UpperCase => input == input.to_uppercase(),
            CaseMode::SentenceCase => is_sentence_case(input),
            CaseMode::CamelCase => input == to_camel_case(input),
            CaseMode::PascalCase => input == upper_first(&to_camel_case(input)),
            CaseMode::KebabCase => input == join_lower(input, "-"),
            CaseMode::SnakeCase => input == join_lower(input, "_"),
            CaseMode::StartCase => {
                input
                    == split_words(input)
                        .iter()
                        .map(|w| upper_first(w))
                        .collect::<Vec<_>>()
                        .join(" ")
            }
        }
    }
}

impl std::str::FromStr for CaseMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lower-case" | "lowercase" | "lowerCase" => Ok(CaseMode::LowerCase),
            "upper-case" | "uppercase" => Ok(CaseMode::UpperCase),
            "camel-case" => Ok(CaseMode::CamelCase),
            "kebab-case" => Ok(CaseMode::KebabCase),
            "pascal-case" => Ok(CaseMode::PascalCase),
            "sentence-case" | "sentencecase" => Ok(CaseMode::SentenceCase),
            "snake-case" => Ok(CaseMode::SnakeCase),
            "start-case" => Ok(CaseMode::StartCase),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for CaseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Starts with an uppercase (or uncased) character and is not shouting.
fn is_sentence_case(input: &str) -> bool {
    if input.starts_with(char::is_lowercase) {
        return false;
    }

    let cased = input
        .chars()
        .filter(|c| c.is_lowercase() || c.is_uppercase())
        .count();
    let all_caps = !input.chars().any(char::is_lowercase);

    !(cased > 1 && all_caps)
}

/// Split text into words on separators and case boundaries.
fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn capitalize(word: &str) -> String {
    upper_first(&word.to_lowercase())
}

fn to_camel_case(input: &str) -> String {
    split_words(input)
        .iter()
        .enumerate()
        .map(|(i, w)| if i == 0 { w.to_lowercase() } else { capitalize(w) })
        .collect()
}

fn join_lower(input: &str, separator: &str) -> String {
    split_words(input)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}
