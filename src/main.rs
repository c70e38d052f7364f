//! # Lintstrap CLI
//!
//! Binary entry point for the `lintstrap` command-line tool. Parses
//! arguments with `clap` and dispatches to the matching command; all core
//! logic lives in the library crate so the binary stays a thin wrapper.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
