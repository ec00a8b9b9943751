//! Shell completions command implementation.
//!
//! Completions cover the whole command tree, including the part-type
//! argument positions, so tab completion works for the common
//! `paddock part add <name> <type>` flow.

use crate::cli::{Cli, Shell};
use crate::error::Result;
use clap::CommandFactory;
use clap_complete::{generate, Generator};
use std::io;

fn write_completions(shell_gen: impl Generator) {
    let mut cmd = Cli::command();
    generate(shell_gen, &mut cmd, "paddock", &mut io::stdout());
}

/// Generate shell completions for the specified shell.
pub fn execute(shell: &Shell) -> Result<()> {
    use clap_complete::shells;

    match shell {
        Shell::Bash => write_completions(shells::Bash),
        Shell::Zsh => write_completions(shells::Zsh),
        Shell::Fish => write_completions(shells::Fish),
        Shell::PowerShell => write_completions(shells::PowerShell),
        Shell::Elvish => write_completions(shells::Elvish),
    }

    Ok(())
}
