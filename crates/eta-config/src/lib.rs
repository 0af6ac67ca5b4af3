//! # eta-config
//!
//! **Tier 4 (Configuration)**
//!
//! This crate defines the CLI arguments for `eta`.
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * Default values and enums
//!
//! ## What does NOT belong here
//! * Business logic
//! * Settings tables (use eta-settings)

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// `eta`: heuristic time and iteration estimates for coding-agent tasks.
#[derive(Parser, Debug)]
#[command(name = "eta", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Settings file (TOML). Defaults to `eta.toml` in the working directory, if present.
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Verbose logging on stderr (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable progress spinners.
    #[arg(long, global = true)]
    pub no_progress: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Estimate time and iterations for a task.
    Estimate(EstimateArgs),

    /// Pre-mortem: flag risky keywords and sensitive code areas.
    Risk(RiskArgs),

    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct EstimateArgs {
    /// Task description.
    #[arg(long)]
    pub task: String,

    /// Codebase path to analyse.
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Override: number of files in scope.
    #[arg(long, value_name = "N")]
    pub files: Option<u32>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct RiskArgs {
    /// Task description.
    #[arg(long)]
    pub task: String,

    /// Codebase path to analyse.
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Powershell,
    Zsh,
}
