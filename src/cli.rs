//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Commit Seeder - Fill a git repository with a generated commit history
#[derive(Parser, Debug)]
#[command(name = "commit-seeder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute; without one, `run` executes with its defaults
    #[command(subcommand)]
    command: Option<Commands>,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate files and commit them until the target is reached
    Run(commands::run::RunArgs),

    /// Show the phases a run would execute, without changing anything
    Plan(commands::plan::PlanArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        match self.command {
            Some(Commands::Run(args)) => commands::run::execute(args, &self.color),
            Some(Commands::Plan(args)) => commands::plan::execute(args),
            Some(Commands::Completions(args)) => commands::completions::execute(args),
            None => commands::run::execute(commands::run::RunArgs::default(), &self.color),
        }
    }
}

/// Route `log` records to stderr. `RUST_LOG` takes precedence over the flag.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A logger may already be installed when running under tests
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
