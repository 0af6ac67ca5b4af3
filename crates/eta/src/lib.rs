//! # eta
//!
//! **CLI Binary**
//!
//! This is the entry point for the `eta` command-line application.
//! It orchestrates the other crates to perform the requested actions.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Install logging
//! * Load settings
//! * Dispatch commands to appropriate handlers
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

mod commands;
mod config;
mod error_hints;
mod logging;
mod progress;

use anyhow::Result;
use clap::Parser;
use eta_config::Cli;

/// Entry point used by the `eta` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);
    commands::dispatch(cli)
}

/// Render an error with actionable hints for the terminal.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}
