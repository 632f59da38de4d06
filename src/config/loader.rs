// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{ConfigError, LintError, Result};
use std::path::{Path, PathBuf};

use super::default::default_config;
use super::schema::LintConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &[
    "commitlint.toml",
    ".commitlint.toml",
    ".commitlintrc.json",
    ".commitlintrc",
];

/// Format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Guess the format from a file name.
    ///
    /// `.json` files and the bare `.commitlintrc` are JSON, anything else TOML.
    pub fn from_path(path: &Path) -> Self {
        let is_json = path.extension().is_some_and(|ext| ext == "json")
            || path.file_name().is_some_and(|name| name == ".commitlintrc");

        if is_json {
            ConfigFormat::Json
        } else {
            ConfigFormat::Toml
        }
    }
}

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir).or_else(user_config_file)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        // Try parent directory
        if !current.pop() {
            return None;
        }
    }
}

/// The per-user configuration file, if there is one.
fn user_config_file() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("commitlint").join("config.toml");
    path.is_file().then_some(path)
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<LintConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(default_config())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<LintConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(LintError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        LintError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content, ConfigFormat::from_path(path))
}

/// Parse configuration from a string.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<LintConfig> {
    let parsed = match format {
        ConfigFormat::Toml => {
            toml::from_str(content).map_err(|e| format!("Failed to parse TOML: {}", e))
        }
        ConfigFormat::Json => {
            serde_json::from_str(content).map_err(|e| format!("Failed to parse JSON: {}", e))
        }
    };

    parsed.map_err(|message| LintError::Config(ConfigError::ParseError { message }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("commitlint.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("a/.commitlintrc")), ConfigFormat::Json);
        assert_eq!(
            ConfigFormat::from_path(Path::new(".commitlintrc.json")),
            ConfigFormat::Json
        );
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("", ConfigFormat::Toml).unwrap();
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = parse_config("rules = [", ConfigFormat::Toml).unwrap_err();
        assert!(matches!(err, LintError::Config(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_parse_rule_that_is_not_a_list() {
        let err = parse_config("[rules]\ntype-empty = 2\n", ConfigFormat::Toml).unwrap_err();
        assert!(matches!(err, LintError::Config(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_find_config_in_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(".commitlintrc.json"), "{}").unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join(".commitlintrc.json"));
    }

    #[test]
    fn test_find_config_prefers_toml() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".commitlintrc"), "{}").unwrap();
        fs::write(dir.path().join("commitlint.toml"), "").unwrap();

        let found = find_config_file_from(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("commitlint.toml"));
    }

    #[test]
    fn test_load_config_from_missing_file() {
        let err = load_config_from(Path::new("/nonexistent/commitlint.toml")).unwrap_err();
        assert!(matches!(err, LintError::Config(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_load_json_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".commitlintrc");
        fs::write(&path, r#"{"rules": {"type-empty": [2, "never"]}}"#).unwrap();

        let config = load_config_from(&path).unwrap();
        assert!(config.rules.contains_key("type-empty"));
    }
}
