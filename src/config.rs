//! # Configuration File
//!
//! This module defines the optional `.commit-seeder.yaml` file and the logic
//! for loading it. Every field is optional; an absent file, an empty file and
//! a file of comments all produce the default run (500 commits, default phase
//! sizes, refinements appended to `README.md`).
//!
//! ```yaml
//! target: 300
//! seed: 42
//! log_file: CHANGES.md
//! max_stalled_refinements: 10
//! phases:
//!   documentation: 20
//!   hooks: 0
//! ```
//!
//! Unknown keys are rejected so that a misspelled phase name does not
//! silently fall back to its default size.

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::defaults::{
    default_config_path, DEFAULT_LOG_FILE, DEFAULT_MAX_STALLED_REFINEMENTS, DEFAULT_TARGET,
};
use crate::error::{Error, Result};
use crate::phases::orchestrator::RefinementSettings;
use crate::phases::{ContentKind, ContentPhase, RunPlan};

fn default_target() -> u32 {
    DEFAULT_TARGET
}

fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

fn default_max_stalled() -> u32 {
    DEFAULT_MAX_STALLED_REFINEMENTS
}

/// Per-phase overrides of how many files to generate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhaseCounts {
    pub utilities: Option<u32>,
    pub documentation: Option<u32>,
    pub tests: Option<u32>,
    pub components: Option<u32>,
    pub api_routes: Option<u32>,
    pub configuration: Option<u32>,
    pub middleware: Option<u32>,
    pub models: Option<u32>,
    pub helpers: Option<u32>,
    pub hooks: Option<u32>,
}

impl PhaseCounts {
    /// The configured count for `kind`, if any.
    pub fn count_for(&self, kind: ContentKind) -> Option<u32> {
        match kind {
            ContentKind::Utilities => self.utilities,
            ContentKind::Documentation => self.documentation,
            ContentKind::Tests => self.tests,
            ContentKind::Components => self.components,
            ContentKind::ApiRoutes => self.api_routes,
            ContentKind::Configuration => self.configuration,
            ContentKind::Middleware => self.middleware,
            ContentKind::Models => self.models,
            ContentKind::Helpers => self.helpers,
            ContentKind::Hooks => self.hooks,
        }
    }
}

/// The contents of `.commit-seeder.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeederConfig {
    /// Total number of commits the run makes
    #[serde(default = "default_target")]
    pub target: u32,
    /// Seed for refinement message selection; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// File, relative to the working tree, that refinements append to
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    #[serde(default = "default_max_stalled")]
    pub max_stalled_refinements: u32,
    #[serde(default)]
    pub phases: PhaseCounts,
}

impl Default for SeederConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            seed: None,
            log_file: default_log_file(),
            max_stalled_refinements: default_max_stalled(),
            phases: PhaseCounts::default(),
        }
    }
}

impl SeederConfig {
    /// Check values that parse but cannot be used.
    pub fn validate(&self) -> Result<()> {
        if self.log_file.as_os_str().is_empty() {
            return Err(Error::ConfigValidation {
                field: "log_file".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        let escapes = self.log_file.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes {
            return Err(Error::ConfigValidation {
                field: "log_file".to_string(),
                message: format!(
                    "'{}' must be a relative path inside the working tree",
                    self.log_file.display()
                ),
            });
        }

        if self.max_stalled_refinements == 0 {
            return Err(Error::ConfigValidation {
                field: "max_stalled_refinements".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// The run plan described by this configuration.
    pub fn plan(&self) -> RunPlan {
        RunPlan {
            phases: ContentKind::ALL
                .iter()
                .map(|&kind| ContentPhase {
                    kind,
                    count: self
                        .phases
                        .count_for(kind)
                        .unwrap_or_else(|| kind.default_count()),
                })
                .collect(),
            target: self.target,
        }
    }

    pub fn refinement_settings(&self) -> RefinementSettings {
        RefinementSettings {
            log_file: self.log_file.clone(),
            max_stalled: self.max_stalled_refinements,
        }
    }
}

/// Parse and validate configuration YAML.
pub fn parse(yaml: &str) -> Result<SeederConfig> {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml).map_err(|e| Error::ConfigParse {
        message: e.to_string(),
        hint: None,
    })?;

    // Empty documents and comment-only files mean "all defaults"
    if value.is_null() {
        return Ok(SeederConfig::default());
    }

    let config: SeederConfig = serde_yaml::from_value(value).map_err(|e| {
        let message = e.to_string();
        let hint = message.contains("unknown field").then(|| {
            let keys: Vec<_> = ContentKind::ALL.iter().map(|k| k.key()).collect();
            format!("valid phase names are: {}", keys.join(", "))
        });
        Error::ConfigParse { message, hint }
    })?;

    config.validate()?;
    Ok(config)
}

/// Load configuration from a file.
pub fn from_file(path: &Path) -> Result<SeederConfig> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Resolve the configuration for a run in `work_dir`.
///
/// An explicit path must exist. Without one, `.commit-seeder.yaml` in the
/// working directory is used when present, and defaults otherwise.
pub fn load(explicit: Option<&Path>, work_dir: &Path) -> Result<SeederConfig> {
    match explicit {
        Some(path) => from_file(path),
        None => {
            let path = default_config_path(work_dir);
            if path.is_file() {
                from_file(&path)
            } else {
                Ok(SeederConfig::default())
            }
        }
    }
}
