//! Default values for commit-seeder configuration.
//!
//! This module provides centralized default values used by the config parser
//! and the CLI, so both agree on what an unconfigured run does.

use std::path::{Path, PathBuf};

/// Commits a run makes when no target is configured.
pub const DEFAULT_TARGET: u32 = 500;

/// File name looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = ".commit-seeder.yaml";

/// Log file refinement commits append to.
pub const DEFAULT_LOG_FILE: &str = "README.md";

/// Consecutive refinements without a commit before a run gives up.
pub const DEFAULT_MAX_STALLED_REFINEMENTS: u32 = 25;

/// Returns the config file path a run in `work_dir` would pick up.
pub fn default_config_path(work_dir: &Path) -> PathBuf {
    work_dir.join(CONFIG_FILE_NAME)
}
