//! Thin wrappers around the system `git` binary.
//!
//! The system command picks up the user's identity, hooks and signing setup
//! from their own git configuration, so nothing here has to know about them.

use std::path::Path;
use std::process::{Command, Output};

use crate::error::{Error, Result};

fn run_git(dir: &Path, args: &[&str]) -> Result<Output> {
    Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| Error::GitCommand {
            command: args.join(" "),
            dir: dir.display().to_string(),
            stderr: e.to_string(),
        })
}

fn command_error(dir: &Path, args: &[&str], output: &Output) -> Error {
    let stderr = String::from_utf8_lossy(&output.stderr);
    // `git commit` reports some failures on stdout only
    let stderr = if stderr.trim().is_empty() {
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    } else {
        stderr.trim().to_string()
    };

    Error::GitCommand {
        command: args.join(" "),
        dir: dir.display().to_string(),
        stderr,
    }
}

/// Check whether `dir` is inside a git work tree
pub fn is_work_tree(dir: &Path) -> Result<bool> {
    let output = run_git(dir, &["rev-parse", "--is-inside-work-tree"])?;
    Ok(output.status.success() && String::from_utf8_lossy(&output.stdout).trim() == "true")
}

/// Stage every change in the work tree, including deletions (`git add -A`)
pub fn stage_all(dir: &Path) -> Result<()> {
    let args = ["add", "-A"];
    let output = run_git(dir, &args)?;
    if !output.status.success() {
        return Err(command_error(dir, &args, &output));
    }
    Ok(())
}

/// Check whether the index differs from HEAD
///
/// Uses the exit status of `git diff --cached --quiet`: 0 means nothing is
/// staged, 1 means there are staged changes. Works on an unborn branch too.
pub fn has_staged_changes(dir: &Path) -> Result<bool> {
    let args = ["diff", "--cached", "--quiet"];
    let output = run_git(dir, &args)?;
    match output.status.code() {
        Some(0) => Ok(false),
        Some(1) => Ok(true),
        _ => Err(command_error(dir, &args, &output)),
    }
}

/// Record a commit of the current index with the given message
pub fn commit(dir: &Path, message: &str) -> Result<()> {
    let args = ["commit", "-m", message];
    let output = run_git(dir, &args)?;
    if !output.status.success() {
        return Err(command_error(dir, &args, &output));
    }
    Ok(())
}

/// Count the commits reachable from HEAD, 0 on an unborn branch
pub fn commit_count(dir: &Path) -> Result<u32> {
    let args = ["rev-list", "--count", "HEAD"];
    let output = run_git(dir, &args)?;
    if !output.status.success() {
        // No HEAD yet
        return Ok(0);
    }
    String::from_utf8_lossy(&output.stdout)
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| Error::GitCommand {
            command: args.join(" "),
            dir: dir.display().to_string(),
            stderr: e.to_string(),
        })
}

/// Short name of the branch HEAD points to, `None` when HEAD is detached
pub fn current_branch(dir: &Path) -> Result<Option<String>> {
    let args = ["symbolic-ref", "--quiet", "--short", "HEAD"];
    let output = run_git(dir, &args)?;
    match output.status.code() {
        Some(0) => Ok(Some(
            String::from_utf8_lossy(&output.stdout).trim().to_string(),
        )),
        Some(1) => Ok(None),
        _ => Err(command_error(dir, &args, &output)),
    }
}
