//! Shell completion generation
//!
//! Writes a completion script for the requested shell to stdout, for the
//! user to redirect wherever their shell expects it:
//!
//! ```bash
//! lintstrap completions bash > ~/.local/share/bash-completion/completions/lintstrap
//! ```

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

use crate::cli::Cli;

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the `completions` command.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "lintstrap", &mut io::stdout());
    Ok(())
}
