//! # Commit Seeder CLI
//!
//! This is the binary entry point for the `commit-seeder` command-line tool.
//! It parses arguments with `clap`, sets up logging and dispatches to the
//! command implementations; the work itself lives in the library crate.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
