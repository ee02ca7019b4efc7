//! # Completions Command Implementation
//!
//! Prints a shell completion script for `commit-seeder` to stdout, generated
//! with `clap_complete`.
//!
//! ```bash
//! commit-seeder completions bash > ~/.local/share/bash-completion/completions/commit-seeder
//! commit-seeder completions zsh > ~/.zfunc/_commit-seeder
//! ```

use anyhow::Result;
use clap::{Args, CommandFactory, ValueEnum};
use clap_complete::{generate, Shell};
use std::io;

use crate::cli::Cli;

/// Shell types for completion generation
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompletionShell {
    /// Bourne Again Shell
    Bash,
    /// Z Shell
    Zsh,
    /// Fish Shell
    Fish,
    /// PowerShell
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish Shell
    Elvish,
}

impl From<CompletionShell> for Shell {
    fn from(shell: CompletionShell) -> Self {
        match shell {
            CompletionShell::Bash => Shell::Bash,
            CompletionShell::Zsh => Shell::Zsh,
            CompletionShell::Fish => Shell::Fish,
            CompletionShell::PowerShell => Shell::PowerShell,
            CompletionShell::Elvish => Shell::Elvish,
        }
    }
}

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: CompletionShell,
}

/// Execute the `completions` command.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let shell: Shell = args.shell.into();
    generate(shell, &mut cmd, "commit-seeder", &mut io::stdout());
    Ok(())
}
