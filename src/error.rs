//! # Error Handling
//!
//! This module defines the centralized error type for `commit-seeder`. It uses
//! the `thiserror` library to describe every failure that is allowed to stop a
//! run.
//!
//! Failed or empty commits are deliberately *not* errors: the orchestrator
//! records them as a [`crate::repository::CommitOutcome`] and keeps going.
//! Everything represented here is fatal and propagates to the binary, which
//! reports it and exits with status 1:
//!
//! - Configuration parsing and validation errors.
//! - Git command execution failures outside of committing.
//! - Running outside of a git work tree.
//! - Filesystem failures while writing generated files.
//! - Wrapped I/O and YAML errors.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for commit-seeder operations
#[derive(Error, Debug)]
pub enum Error {
    /// The `.commit-seeder.yaml` file could not be parsed.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// The configuration parsed but holds a value the run cannot use.
    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    /// A git command could not be spawned or exited unsuccessfully.
    #[error("Git command failed in {dir}: {command} - {stderr}")]
    GitCommand {
        command: String,
        dir: String,
        stderr: String,
    },

    /// The working directory is not inside a git work tree.
    #[error("Not a git repository: {}\n  hint: run 'git init' first", path.display())]
    NotARepository { path: PathBuf },

    /// Creating a directory or writing a generated file failed.
    #[error("Filesystem operation error on '{}': {message}", path.display())]
    Filesystem { path: PathBuf, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
