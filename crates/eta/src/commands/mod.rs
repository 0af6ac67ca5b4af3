pub(crate) mod completions;
pub(crate) mod estimate;
pub(crate) mod risk;

use anyhow::Result;
use eta_config::{Cli, Commands};

use crate::config;

pub(crate) fn dispatch(cli: Cli) -> Result<()> {
    let global = cli.global;
    match cli.command {
        Commands::Completions(args) => completions::handle(args),
        Commands::Estimate(args) => {
            let settings = config::load_settings(global.config.as_deref())?;
            estimate::handle(args, &settings, !global.no_progress)
        }
        Commands::Risk(args) => {
            let settings = config::load_settings(global.config.as_deref())?;
            risk::handle(args, &settings, !global.no_progress)
        }
    }
}
