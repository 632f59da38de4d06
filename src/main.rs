// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commitlint - Rule engine for conventional commit messages.

use clap::Parser;
use commitlint::cli::{run, Cli};
use commitlint::LintError;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        // The report is already on stdout.
        Err(e @ LintError::Failed { .. }) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Install the tracing subscriber.
///
/// `--debug` enables this crate's debug events; otherwise `RUST_LOG` applies.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("commitlint=debug,warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    tracing::debug!(version = %commitlint::version::version_string(), "Debug logging enabled");
}
