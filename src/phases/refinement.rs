//! Refinement commits.
//!
//! Once every content phase has run, the seeder pads the history up to the
//! target with small edits: each refinement appends one HTML comment line to a
//! shared log file and commits it under a randomly chosen message. No new
//! paths are ever created beyond the log file itself.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Local};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::message::{CommitMessage, CommitType};

/// Commit types a refinement may use.
pub const TYPES: [CommitType; 6] = [
    CommitType::Fix,
    CommitType::Refactor,
    CommitType::Docs,
    CommitType::Style,
    CommitType::Perf,
    CommitType::Chore,
];

/// Scopes a refinement may use.
pub const SCOPES: [&str; 6] = ["api", "frontend", "utils", "config", "tests", "docs"];

/// Subjects a refinement may use.
pub const SUBJECTS: [&str; 10] = [
    "improve code quality",
    "enhance error handling",
    "optimize performance",
    "update documentation",
    "refactor implementation",
    "fix edge case",
    "improve type safety",
    "enhance validation",
    "optimize bundle size",
    "improve accessibility",
];

/// Pick a refinement message from the fixed candidate sets.
pub fn choose_message<R: Rng + ?Sized>(rng: &mut R) -> CommitMessage {
    // The arrays are non-empty, so `choose` always yields a value
    let kind = *TYPES.choose(rng).unwrap_or(&CommitType::Chore);
    let scope = *SCOPES.choose(rng).unwrap_or(&"docs");
    let subject = *SUBJECTS.choose(rng).unwrap_or(&"improve code quality");
    CommitMessage::new(kind, scope, subject)
}

/// The marker appended for refinement `index`, including its leading newline.
pub fn marker_line(index: u32, at: DateTime<Local>) -> String {
    format!(
        "\n<!-- Improvement {} - {} -->",
        index,
        at.format("%Y-%m-%dT%H:%M:%S%.6f")
    )
}

/// Append the marker for refinement `index` to `log_path`, creating the file
/// and its parent directories if needed.
pub fn append_marker(log_path: &Path, index: u32, at: DateTime<Local>) -> Result<()> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::Filesystem {
            path: parent.to_path_buf(),
            message: format!("Failed to create directory: {}", e),
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|e| Error::Filesystem {
            path: log_path.to_path_buf(),
            message: format!("Failed to open for append: {}", e),
        })?;

    file.write_all(marker_line(index, at).as_bytes())
        .map_err(|e| Error::Filesystem {
            path: log_path.to_path_buf(),
            message: format!("Failed to append marker: {}", e),
        })
}
