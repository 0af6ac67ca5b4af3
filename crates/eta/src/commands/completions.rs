use std::io::Write;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell as Generator;
use eta_config::{Cli, CompletionsArgs, Shell};

pub(crate) fn handle(args: CompletionsArgs) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_completions(args.shell, &mut stdout);
    stdout.flush()?;
    Ok(())
}

/// Write the completion script for `shell` covering every `eta` subcommand.
fn write_completions(shell: Shell, out: &mut impl Write) {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    clap_complete::generate(generator_for(shell), &mut cmd, bin, out);
}

fn generator_for(shell: Shell) -> Generator {
    match shell {
        Shell::Bash => Generator::Bash,
        Shell::Elvish => Generator::Elvish,
        Shell::Fish => Generator::Fish,
        Shell::Powershell => Generator::PowerShell,
        Shell::Zsh => Generator::Zsh,
    }
}
