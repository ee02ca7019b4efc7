//! # Console Output
//!
//! Progress reporting for seeding runs, plus the color and emoji decisions it
//! depends on.
//!
//! ## Respecting User Preferences
//!
//! The module respects the following environment variables and flags:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals

use std::env;

use console::style;

use crate::message::CommitMessage;
use crate::phases::orchestrator::RunObserver;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `--color=always` forces colors on (overriding `NO_COLOR`),
    /// `--color=never` forces them off, anything else detects support.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // The presence of the variable (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Returns the emoji when colors are enabled, the plain text otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}

/// The progress line printed for each recorded commit.
pub fn progress_line(count: u32, target: u32, message: &CommitMessage) -> String {
    format!("[{}/{}] {}", count, target, message)
}

/// The banner printed when phase `number` starts.
pub fn phase_banner(number: usize, banner: &str) -> String {
    format!("Phase {}: {}...", number, banner)
}

/// Prints phase banners and per-commit progress to stdout.
pub struct ConsoleReporter {
    config: OutputConfig,
    phases_seen: usize,
}

impl ConsoleReporter {
    pub fn new(config: OutputConfig) -> Self {
        Self {
            config,
            phases_seen: 0,
        }
    }
}

impl RunObserver for ConsoleReporter {
    fn phase_started(&mut self, number: usize, banner: &str) {
        if self.phases_seen > 0 {
            println!();
        }
        self.phases_seen += 1;

        let line = phase_banner(number, banner);
        if self.config.use_color {
            println!("{}", style(line).bold());
        } else {
            println!("{}", line);
        }
    }

    fn committed(&mut self, count: u32, target: u32, message: &CommitMessage) {
        if self.config.use_color {
            println!(
                "{} {}",
                style(format!("[{}/{}]", count, target)).dim(),
                message
            );
        } else {
            println!("{}", progress_line(count, target, message));
        }
    }
}
