//! Shared test utilities for integration and E2E tests.
//!
//! Add `mod common;` to a test file, then `use common::prelude::*;`.
//!
//! ```rust,ignore
//! let fixture = TestFixture::new().with_git_repo();
//! fixture.command().args(["run", "--yes", "--target", "3"]).assert().success();
//! assert_eq!(fixture.commit_count(), 3);
//! ```

use assert_fs::prelude::*;
use std::path::Path;
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    #[allow(unused_imports)]
    pub use super::git_available;
    pub use super::TestFixture;
}

/// Common configuration YAML snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Two hooks, then refinements up to five commits.
    pub const HOOKS_THEN_REFINEMENTS: &str = r#"
target: 5
seed: 7
phases:
  utilities: 0
  documentation: 0
  tests: 0
  components: 0
  api_routes: 0
  configuration: 0
  middleware: 0
  models: 0
  helpers: 0
  hooks: 2
"#;

    /// A small target with a custom refinement log.
    pub const SMALL_TARGET: &str = r#"
target: 4
log_file: CHANGES.md
"#;

    /// Unknown phase name.
    pub const UNKNOWN_PHASE: &str = r#"
phases:
  widgets: 3
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "target: [unclosed";
}

/// Check whether a usable `git` binary is on the PATH.
///
/// Tests that record real commits return early when it is not.
#[allow(dead_code)]
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// A temporary working directory, optionally initialized as a git repository.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Initialize a git repository with a local identity.
    #[allow(dead_code)]
    pub fn with_git_repo(self) -> Self {
        self.git(&["init", "--quiet"]);
        self.git(&["config", "user.name", "Seeder Test"]);
        self.git(&["config", "user.email", "seeder@example.com"]);
        self.git(&["config", "commit.gpgsign", "false"]);
        self
    }

    /// Add a `.commit-seeder.yaml` configuration file with the given content.
    #[allow(dead_code)]
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child(".commit-seeder.yaml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Add a file with the given path and content.
    #[allow(dead_code)]
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("commit-seeder");
        cmd.current_dir(self.path())
            .env_remove("COMMIT_SEEDER_CONFIG")
            .env_remove("RUST_LOG")
            .arg("--color")
            .arg("never");
        cmd
    }

    /// Run git in the fixture directory and return its stdout.
    #[allow(dead_code)]
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("Failed to run git");
        assert!(output.status.success(), "git {:?} failed", args);
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Number of commits reachable from HEAD.
    #[allow(dead_code)]
    pub fn commit_count(&self) -> u32 {
        self.git(&["rev-list", "--count", "HEAD"])
            .trim()
            .parse()
            .expect("rev-list did not print a number")
    }

    /// Commit subjects, oldest first.
    #[allow(dead_code)]
    pub fn commit_subjects(&self) -> Vec<String> {
        self.git(&["log", "--reverse", "--format=%s"])
            .lines()
            .map(|l| l.to_string())
            .collect()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_config() {
        let fixture = TestFixture::new().with_config("target: 3\n");
        assert!(fixture.path().join(".commit-seeder.yaml").exists());
    }

    #[test]
    fn test_configs_are_valid_yaml() {
        for config in [
            configs::HOOKS_THEN_REFINEMENTS,
            configs::SMALL_TARGET,
            configs::UNKNOWN_PHASE,
        ] {
            serde_yaml::from_str::<serde_yaml::Value>(config).expect("Config should be valid YAML");
        }
    }
}
