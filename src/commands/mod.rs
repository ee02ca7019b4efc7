//! # CLI Command Implementations
//!
//! Each subcommand of `commit-seeder` lives in its own file with an `Args`
//! struct derived with `clap` and an `execute` function that calls into the
//! `commit_seeder` library.

pub mod completions;
pub mod plan;
pub mod run;
