//! # Version Control Adapters
//!
//! The orchestrator never talks to git directly. It goes through the narrow
//! [`VersionControl`] trait, which has exactly two operations: stage every
//! change, and record a commit. Committing returns a structured
//! [`CommitOutcome`] instead of an error so that "nothing to commit" and a
//! genuine failure can be told apart without parsing command output.
//!
//! Two implementations ship with the crate:
//!
//! - **`SystemGit`**: drives the system `git` binary inside a working
//!   directory.
//! - **`DryRun`**: touches nothing and reports every commit as created, which
//!   lets a run print the history it would produce.
//!
//! Tests substitute their own implementations to count calls or simulate
//! failures.

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};

/// What happened when a commit was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A new commit was recorded.
    Created,
    /// The index matched HEAD, so no commit was recorded.
    NoOp,
    /// The commit command failed; carries the reason reported by the tool.
    Failed(String),
}

/// Trait for version-control operations - allows mocking in tests
pub trait VersionControl {
    /// Stage all working-tree changes, including deletions.
    fn stage_all(&self) -> Result<()>;

    /// Record a commit of the staged changes with `message`.
    fn commit(&self, message: &str) -> CommitOutcome;
}

/// The default implementation of `VersionControl`, which shells out to the
/// system `git` command inside `work_dir`.
pub struct SystemGit {
    work_dir: PathBuf,
}

impl SystemGit {
    pub fn new(work_dir: PathBuf) -> Self {
        Self { work_dir }
    }

    /// Creates the adapter after checking that `work_dir` is inside a git
    /// work tree.
    pub fn open(work_dir: &Path) -> Result<Self> {
        if !crate::git::is_work_tree(work_dir)? {
            return Err(Error::NotARepository {
                path: work_dir.to_path_buf(),
            });
        }
        Ok(Self::new(work_dir.to_path_buf()))
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }
}

impl VersionControl for SystemGit {
    fn stage_all(&self) -> Result<()> {
        crate::git::stage_all(&self.work_dir)
    }

    fn commit(&self, message: &str) -> CommitOutcome {
        match crate::git::has_staged_changes(&self.work_dir) {
            Ok(false) => {
                debug!("Index matches HEAD, skipping commit: {}", message);
                return CommitOutcome::NoOp;
            }
            Ok(true) => {}
            Err(e) => return CommitOutcome::Failed(e.to_string()),
        }

        match crate::git::commit(&self.work_dir, message) {
            Ok(()) => CommitOutcome::Created,
            Err(e) => CommitOutcome::Failed(e.to_string()),
        }
    }
}

/// A `VersionControl` that records nothing and reports every commit as
/// created.
#[derive(Debug, Default)]
pub struct DryRun;

impl VersionControl for DryRun {
    fn stage_all(&self) -> Result<()> {
        Ok(())
    }

    fn commit(&self, message: &str) -> CommitOutcome {
        debug!("Dry run, not committing: {}", message);
        CommitOutcome::Created
    }
}
