// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for commitlint.
//!
//! This module handles command-line argument parsing, command dispatch and
//! turning verification results into output and exit status.

pub mod args;
mod dispatch;
pub mod report;

pub use args::{Cli, Commands};
pub use dispatch::run;
