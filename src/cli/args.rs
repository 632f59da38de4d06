// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// commitlint - Rule engine for conventional commit messages
///
/// Checks a pre-parsed commit message against a configurable rule set.
#[derive(Parser, Debug)]
#[command(name = "commitlint")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Lint pre-parsed conventional commit messages", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to check if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "COMMITLINT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Check a parsed commit message (default command)
    Check(CheckArgs),

    /// Print the resolved rule set
    PrintConfig,

    /// List every rule the engine knows
    ListRules,

    /// Initialize a configuration file
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// JSON file holding the parsed message, or `-` for stdin
    #[arg(default_value = "-")]
    pub input: String,

    /// Strict mode: treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Configuration preset
    #[arg(long)]
    pub preset: Option<ConfigPreset>,
}

/// Configuration presets for init.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigPreset {
    /// Only extend the conventional rules
    Minimal,
    /// Conventional rules with project overrides (recommended)
    Standard,
}

impl Cli {
    /// Get the effective command, defaulting to Check if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Check(CheckArgs::default()))
    }
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            input: "-".to_string(),
            strict: false,
        }
    }
}
