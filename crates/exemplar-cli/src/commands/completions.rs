//! `exemplar completions` — print a completion script to stdout.
//!
//! Users redirect the output into their shell's completion directory, e.g.
//! `exemplar completions zsh > ~/.zfunc/_exemplar`.

use clap::CommandFactory;
use clap_complete::{Generator, generate, shells};

use crate::cli::{Cli, CompletionsArgs, Shell};
use crate::error::CliResult;

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();

    match args.shell {
        Shell::Bash => emit(shells::Bash, &mut cmd, &bin),
        Shell::Zsh => emit(shells::Zsh, &mut cmd, &bin),
        Shell::Fish => emit(shells::Fish, &mut cmd, &bin),
        Shell::PowerShell => emit(shells::PowerShell, &mut cmd, &bin),
        Shell::Elvish => emit(shells::Elvish, &mut cmd, &bin),
    }

    Ok(())
}

fn emit(shell: impl Generator, cmd: &mut clap::Command, bin: &str) {
    generate(shell, cmd, bin, &mut std::io::stdout());
}
