//! # Commit Seeder Library
//!
//! This library generates boilerplate project files and records one
//! conventional commit per file in a git working tree, then pads the history
//! with small refinement commits until an exact commit count is reached. It
//! backs the `commit-seeder` command-line tool.
//!
//! ## Quick Example
//!
//! ```
//! use commit_seeder::phases::{ContentKind, RunPlan};
//!
//! let artifact = ContentKind::Utilities.render(7);
//! assert_eq!(artifact.path.to_str(), Some("utils/util_007.js"));
//! assert_eq!(artifact.message.to_string(), "feat(utils): add util_007 utility function");
//!
//! let plan = RunPlan::new(500);
//! assert_eq!(plan.refinement_commits(), 20);
//! ```
//!
//! ## Core Concepts
//!
//! - **Phases (`phases`)**: The ten content kinds, their templates and file
//!   layout, and the refinement phase that pads the history.
//! - **Orchestrator (`phases::orchestrator`)**: Owns the commit counter and
//!   drives a [`phases::RunPlan`] to completion.
//! - **Version control (`repository`, `git`)**: The narrow adapter the
//!   orchestrator commits through, with a system-git and a dry-run
//!   implementation.
//! - **Configuration (`config`)**: The optional `.commit-seeder.yaml` file.

pub mod config;
pub mod defaults;
pub mod error;
pub mod git;
pub mod message;
pub mod output;
pub mod phases;
pub mod repository;

#[cfg(test)]
mod phases_proptest;
