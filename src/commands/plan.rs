//! Plan command implementation
//!
//! Prints the phases a `run` would execute with the current configuration:
//! each phase's directory, how many of its files fit under the target, and the
//! running commit total, followed by the number of refinement commits needed
//! to reach the target. Nothing is written and git is not consulted.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use commit_seeder::config;
use commit_seeder::phases::RunPlan;

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Working directory whose configuration should be used
    #[arg(short, long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, value_name = "PATH", env = "COMMIT_SEEDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the commit target
    #[arg(short, long, value_name = "N")]
    pub target: Option<u32>,
}

/// Render the plan as the lines `plan` prints.
pub fn render(plan: &RunPlan) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("Target: {} commits", plan.target));
    lines.push(String::new());

    let mut running = 0;
    for (position, (phase, used)) in plan
        .phases
        .iter()
        .zip(plan.effective_counts())
        .enumerate()
    {
        running += used;
        let truncated = if used < phase.count {
            format!(" (of {})", phase.count)
        } else {
            String::new()
        };
        lines.push(format!(
            "Phase {:>2}: {:<30} {:<22} {:>4}{:<9} total {:>5}",
            position + 1,
            phase.kind.banner(),
            phase.kind.directory(),
            used,
            truncated,
            running
        ));
    }

    let refinements = plan.refinement_commits();
    lines.push(format!(
        "Phase {:>2}: {:<30} {:<22} {:>4}{:<9} total {:>5}",
        plan.phases.len() + 1,
        commit_seeder::phases::REFINEMENT_BANNER,
        "-",
        refinements,
        "",
        running + refinements
    ));

    lines
}

/// Execute the plan command
pub fn execute(args: PlanArgs) -> Result<()> {
    let work_dir = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let mut seeder_config = config::load(args.config.as_deref(), &work_dir)?;
    if let Some(target) = args.target {
        seeder_config.target = target;
    }

    for line in render(&seeder_config.plan()) {
        println!("{}", line.trim_end());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use commit_seeder::phases::{ContentKind, ContentPhase};

    #[test]
    fn test_render_default_plan() {
        let lines = render(&RunPlan::new(500));
        assert_eq!(lines[0], "Target: 500 commits");
        // Header, blank line, ten content phases and refinements
        assert_eq!(lines.len(), 13);
        assert!(lines[2].contains("Creating utility functions"));
        assert!(lines[2].contains("utils"));
        assert!(lines[2].trim_end().ends_with("total    50"));
        assert!(lines[12].contains("Adding refinements and improvements"));
        assert!(lines[12].trim_end().ends_with("total   500"));
    }

    #[test]
    fn test_render_marks_truncated_phase() {
        let plan = RunPlan {
            phases: vec![ContentPhase {
                kind: ContentKind::Models,
                count: 30,
            }],
            target: 12,
        };
        let lines = render(&plan);
        assert!(lines[2].contains("12 (of 30)"));
        assert!(lines[3].trim_end().ends_with("total    12"));
    }

    #[test]
    fn test_execute_with_missing_config_fails() {
        let args = PlanArgs {
            dir: None,
            config: Some(PathBuf::from("/nonexistent/.commit-seeder.yaml")),
            target: None,
        };
        assert!(execute(args).is_err());
    }
}
