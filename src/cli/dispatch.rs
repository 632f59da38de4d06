// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::config::{self, LintConfig};
use crate::error::{ConfigError, LintError, Result, ResultExt};
use crate::rules::{RuleEngine, RuleSet};
use std::io::Read;
use std::path::Path;

use super::args::{CheckArgs, Cli, Commands, ConfigPreset, InitArgs};
use super::report;

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.effective_command() {
        Commands::Check(args) => run_check(&cli, args),
        Commands::PrintConfig => run_print_config(&cli),
        Commands::ListRules => run_list_rules(&cli),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Load configuration and resolve it into a rule set.
fn load_rules(cli: &Cli) -> Result<RuleSet> {
    let config = if let Some(config_path) = &cli.config {
        LintConfig::load_from(config_path)?
    } else {
        LintConfig::load()?
    };

    let rules = config.resolve()?;
    tracing::debug!("Resolved {} rule(s)", rules.len());
    Ok(rules)
}

/// Read the message document from a file or stdin.
fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(input).context(format!("Failed to read {}", input))
    }
}

/// Run the check command.
fn run_check(cli: &Cli, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let engine = RuleEngine::new(load_rules(cli)?);
    let enabled = engine.rules().iter().filter(|rule| rule.is_enabled()).count();
    tracing::debug!("{} rule(s) enabled", enabled);

    let result = engine.validate_json(&read_input(&args.input)?)?;

    println!("{}", report::render_result(&result, cli.format));

    let errors = result.errors().count();
    let warnings = result.warnings().count();

    if errors > 0 || (args.strict && warnings > 0) {
        Err(LintError::Failed { errors, warnings })
    } else {
        Ok(())
    }
}

/// Run the print-config command.
fn run_print_config(cli: &Cli) -> Result<()> {
    let rules = load_rules(cli)?;
    println!("{}", report::render_rule_set(&rules, cli.format)?);
    Ok(())
}

/// Run the list-rules command.
fn run_list_rules(cli: &Cli) -> Result<()> {
    println!("{}", report::render_rule_list(cli.format));
    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("commitlint {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = Path::new("commitlint.toml");

    if config_path.exists() && !args.force {
        return Err(LintError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    let config_content = match args.preset {
        Some(ConfigPreset::Minimal) => config::default::minimal_config(),
        Some(ConfigPreset::Standard) | None => config::default::example_config(),
    };

    std::fs::write(config_path, config_content).context("Failed to write configuration")?;

    println!("✓ Created commitlint.toml");

    Ok(())
}
