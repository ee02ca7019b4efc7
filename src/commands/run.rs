//! Run command implementation
//!
//! This is also what a bare `commit-seeder` invocation executes, with every
//! argument at its default. The run command seeds the working tree:
//! 1. Load `.commit-seeder.yaml` (if any) and apply command-line overrides
//! 2. Check that the working directory is a git work tree
//! 3. Confirm with the user when attached to a terminal
//! 4. Execute the content phases, then refinements up to the target
//! 5. Report how many commits were made

use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Instant;

use commit_seeder::{config, git};
use commit_seeder::output::{emoji, ConsoleReporter, OutputConfig};
use commit_seeder::phases::orchestrator::{execute_run, CommitOrchestrator, RunObserver, Silent};
use commit_seeder::repository::{DryRun, SystemGit, VersionControl};

/// Arguments for the run command
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Working directory to seed (defaults to current directory)
    #[arg(short, long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, value_name = "PATH", env = "COMMIT_SEEDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Total number of commits to make
    #[arg(short, long, value_name = "N")]
    pub target: Option<u32>,

    /// Seed for refinement message selection
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Show the commits that would be made without writing or committing
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the run command
pub fn execute(args: RunArgs, color: &str) -> Result<()> {
    let start_time = Instant::now();
    let output = OutputConfig::from_env_and_flag(color);

    let work_dir = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    if !work_dir.is_dir() {
        anyhow::bail!("Working directory not found: {}", work_dir.display());
    }

    let mut seeder_config = config::load(args.config.as_deref(), &work_dir)?;
    if let Some(target) = args.target {
        seeder_config.target = target;
    }
    if let Some(seed) = args.seed {
        seeder_config.seed = Some(seed);
    }

    let vcs: Box<dyn VersionControl> = if args.dry_run {
        Box::new(DryRun)
    } else {
        Box::new(SystemGit::open(&work_dir)?)
    };

    if !args.quiet {
        println!("{} Commit Seeder", emoji(&output, "🌱", "==>"));
        println!();
        if args.dry_run {
            println!(
                "{} DRY RUN MODE - No files will be written and nothing will be committed",
                emoji(&output, "🔎", "[DRY RUN]")
            );
            println!();
        }
    }

    if !args.dry_run && !args.yes && std::io::stdin().is_terminal() {
        let proceed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Create {} commits in {}?",
                seeder_config.target,
                work_dir.display()
            ))
            .default(false)
            .interact()?;
        if !proceed {
            println!("Aborted.");
            return Ok(());
        }
    }

    if !args.quiet {
        println!(
            "Starting generation of {} commits...\n",
            seeder_config.target
        );
    }

    let observer: Box<dyn RunObserver> = if args.quiet {
        Box::new(Silent)
    } else {
        Box::new(ConsoleReporter::new(output.clone()))
    };
    let mut orchestrator =
        CommitOrchestrator::new(vcs, work_dir.clone(), seeder_config.target).with_observer(observer);
    if args.dry_run {
        orchestrator = orchestrator.without_writes();
    }

    let mut rng = match seeder_config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let summary = execute_run(
        &mut orchestrator,
        &seeder_config.plan(),
        &seeder_config.refinement_settings(),
        &mut rng,
    )?;

    if summary.reached_target() {
        if !args.quiet {
            println!();
            println!(
                "{} Successfully generated {} commits in {:.2}s",
                emoji(&output, "✅", "[OK]"),
                summary.commits_made,
                start_time.elapsed().as_secs_f64()
            );
            println!("   {} files generated", summary.files_generated);
            if !args.dry_run {
                if let Ok(Some(branch)) = git::current_branch(&work_dir) {
                    println!();
                    println!("Ready to push with:");
                    println!("  git push origin {}", branch);
                }
            }
        }
    } else {
        eprintln!(
            "{} Stopped at {}/{} commits: commits kept failing or had nothing to record",
            emoji(&output, "⚠️ ", "[WARN]"),
            summary.commits_made,
            summary.target
        );
    }

    Ok(())
}
