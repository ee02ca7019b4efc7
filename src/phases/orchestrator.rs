//! Orchestrator for a complete seeding run
//!
//! [`CommitOrchestrator`] owns the commit counter and the version-control
//! adapter. [`execute_run`] drives it through every phase of a [`RunPlan`]:
//! the content phases in order, then refinements until the target is reached.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::{debug, error, info, warn};
use rand::Rng;

use super::refinement;
use super::{ContentKind, RunPlan, REFINEMENT_BANNER};
use crate::error::{Error, Result};
use crate::message::CommitMessage;
use crate::repository::{CommitOutcome, VersionControl};

/// Receives progress notifications while a run is executing.
pub trait RunObserver {
    /// A phase is about to start. `number` counts from 1.
    fn phase_started(&mut self, _number: usize, _banner: &str) {}

    /// A commit was recorded; `count` is the new value of the counter.
    fn committed(&mut self, _count: u32, _target: u32, _message: &CommitMessage) {}
}

/// An observer that ignores every notification.
#[derive(Debug, Default)]
pub struct Silent;

impl RunObserver for Silent {}

/// Settings for the open-ended refinement phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefinementSettings {
    /// Log file, relative to the working tree, that refinements append to
    pub log_file: PathBuf,
    /// Consecutive refinements without a new commit before the run gives up
    pub max_stalled: u32,
}

/// What a finished run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub commits_made: u32,
    pub target: u32,
    /// Content files rendered (and written, unless writes are disabled)
    pub files_generated: u32,
    /// Refinement steps attempted, successful or not
    pub refinement_steps: u32,
}

impl RunSummary {
    pub fn reached_target(&self) -> bool {
        self.commits_made == self.target
    }
}

/// Owns the commit counter and turns generated content into commits.
pub struct CommitOrchestrator {
    vcs: Box<dyn VersionControl>,
    work_dir: PathBuf,
    target: u32,
    commits_made: u32,
    files_generated: u32,
    write_files: bool,
    observer: Box<dyn RunObserver>,
}

impl CommitOrchestrator {
    pub fn new(vcs: Box<dyn VersionControl>, work_dir: PathBuf, target: u32) -> Self {
        Self {
            vcs,
            work_dir,
            target,
            commits_made: 0,
            files_generated: 0,
            write_files: true,
            observer: Box::new(Silent),
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn RunObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Render and commit without touching the working tree.
    pub fn without_writes(mut self) -> Self {
        self.write_files = false;
        self
    }

    pub fn commits_made(&self) -> u32 {
        self.commits_made
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn files_generated(&self) -> u32 {
        self.files_generated
    }

    pub fn is_complete(&self) -> bool {
        self.commits_made >= self.target
    }

    /// Stage everything and commit it with `message`.
    ///
    /// Returns `true` only when a new commit was recorded. Once the target is
    /// reached this is a no-op that returns `false`. Staging and commit
    /// failures are logged and reported as `false`; they never stop a run.
    pub fn attempt_commit(&mut self, message: &CommitMessage) -> bool {
        if self.is_complete() {
            return false;
        }

        let rendered = message.to_string();

        if let Err(e) = self.vcs.stage_all() {
            error!("Failed to stage changes for '{}': {}", rendered, e);
            return false;
        }

        match self.vcs.commit(&rendered) {
            CommitOutcome::Created => {
                self.commits_made += 1;
                self.observer
                    .committed(self.commits_made, self.target, message);
                true
            }
            CommitOutcome::NoOp => {
                debug!("Nothing to commit for '{}'", rendered);
                false
            }
            CommitOutcome::Failed(reason) => {
                error!("Commit '{}' failed: {}", rendered, reason);
                false
            }
        }
    }

    /// Write the `kind` file for `index` and commit it.
    ///
    /// Directory and write failures are fatal.
    pub fn generate(&mut self, kind: ContentKind, index: u32) -> Result<bool> {
        let artifact = kind.render(index);

        if self.write_files {
            let full_path = self.work_dir.join(&artifact.path);
            write_file(&full_path, &artifact.content)?;
        }
        self.files_generated += 1;

        Ok(self.attempt_commit(&artifact.message))
    }

    /// Append a refinement marker to `log_file` and commit it under a random
    /// refinement message.
    pub fn refine<R: Rng + ?Sized>(
        &mut self,
        log_file: &Path,
        index: u32,
        rng: &mut R,
    ) -> Result<bool> {
        let message = refinement::choose_message(rng);

        if self.write_files {
            refinement::append_marker(&self.work_dir.join(log_file), index, Local::now())?;
        }

        Ok(self.attempt_commit(&message))
    }

    fn summary(&self, refinement_steps: u32) -> RunSummary {
        RunSummary {
            commits_made: self.commits_made,
            target: self.target,
            files_generated: self.files_generated,
            refinement_steps,
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::Filesystem {
            path: parent.to_path_buf(),
            message: format!("Failed to create directory: {}", e),
        })?;
    }

    fs::write(path, content).map_err(|e| Error::Filesystem {
        path: path.to_path_buf(),
        message: format!("Failed to write file: {}", e),
    })
}

/// Execute every phase of `plan` against `orchestrator`.
///
/// Content phases run over `1..=count` in plan order and stop as soon as the
/// target is reached. Refinements then run with indices starting at 1 until
/// the counter equals the target, or until `settings.max_stalled` refinements
/// in a row fail to produce a commit.
pub fn execute_run<R: Rng + ?Sized>(
    orchestrator: &mut CommitOrchestrator,
    plan: &RunPlan,
    settings: &RefinementSettings,
    rng: &mut R,
) -> Result<RunSummary> {
    for (position, phase) in plan.phases.iter().enumerate() {
        if orchestrator.is_complete() {
            break;
        }

        info!("Starting phase {} ({} files)", phase.kind, phase.count);
        orchestrator
            .observer
            .phase_started(position + 1, phase.kind.banner());

        for index in 1..=phase.count {
            if orchestrator.is_complete() {
                break;
            }
            orchestrator.generate(phase.kind, index)?;
        }
    }

    let mut refinement_steps = 0;
    if !orchestrator.is_complete() {
        info!(
            "Starting refinements ({} commits to go)",
            orchestrator.target - orchestrator.commits_made
        );
        orchestrator
            .observer
            .phase_started(plan.phases.len() + 1, REFINEMENT_BANNER);

        let mut stalled = 0;
        while !orchestrator.is_complete() {
            refinement_steps += 1;
            if orchestrator.refine(&settings.log_file, refinement_steps, rng)? {
                stalled = 0;
            } else {
                stalled += 1;
                if stalled >= settings.max_stalled {
                    warn!(
                        "Giving up after {} refinements in a row without a commit",
                        stalled
                    );
                    break;
                }
            }
        }
    }

    Ok(orchestrator.summary(refinement_steps))
}
