//! Progress output for user-facing status updates.
//!
//! Every processed file gets one line on stderr: `<original> -> <new>` on
//! success or `<original> failed` on failure. Colors are used when stderr is
//! a terminal and `NO_COLOR` is unset.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Progress reporter for user-facing output
pub struct Progress {
    writer: Box<dyn Write>,
    /// When true, all output is suppressed
    silent: bool,
    /// When true, output is colorized
    colors_enabled: bool,
}

/// Check if we should use colors in output
fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    io::stderr().is_terminal()
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    /// Create a new progress reporter writing to stderr
    pub fn new() -> Self {
        let colors_enabled = should_use_colors();
        Self {
            writer: Box::new(io::stderr()),
            silent: false,
            colors_enabled,
        }
    }

    /// Create a progress reporter with a custom writer (for testing)
    #[cfg(test)]
    pub fn with_writer(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            silent: false,
            colors_enabled: false,
        }
    }

    /// Create a silent progress reporter
    pub fn silent() -> Self {
        Self {
            writer: Box::new(io::sink()),
            silent: true,
            colors_enabled: false,
        }
    }

    /// Announce the directory about to be processed
    pub fn directory_start(&mut self, dir: &Path) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", dir.display().to_string().bold());
        } else {
            let _ = writeln!(self.writer, "{}", dir.display());
        }
    }

    /// Report a successful (or planned) rename
    pub fn rename_progress(&mut self, current: usize, total: usize, from: &str, to: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let counter = format!("[{}/{}]", current, total);
            let _ = writeln!(
                self.writer,
                "{} {} {} {}",
                counter.cyan(),
                from.dimmed(),
                "→".cyan(),
                to
            );
        } else {
            let _ = writeln!(self.writer, "[{}/{}] {} -> {}", current, total, from, to);
        }
    }

    /// Report a rename that did not happen
    pub fn rename_failed(&mut self, current: usize, total: usize, from: &str, reason: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let counter = format!("[{}/{}]", current, total);
            let _ = writeln!(
                self.writer,
                "{} {} {} {}",
                counter.cyan(),
                from,
                "failed".red().bold(),
                format!("({})", reason).dimmed()
            );
        } else {
            let _ = writeln!(
                self.writer,
                "[{}/{}] {} failed ({})",
                current, total, from, reason
            );
        }
    }

    /// Report a pass that renamed nothing
    pub fn nothing_to_rename(&mut self, dir: &Path) {
        if self.silent {
            return;
        }
        let msg = format!(
            "Nothing to rename in {}: all files are already renamed.",
            dir.display()
        );
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", msg.dimmed());
        } else {
            let _ = writeln!(self.writer, "{}", msg);
        }
    }

    /// Report an error during operation (non-fatal)
    pub fn warn(&mut self, message: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "!".yellow().bold(), message.yellow());
        } else {
            let _ = writeln!(self.writer, "Warning: {}", message);
        }
    }

    /// Report history file written
    pub fn history_written(&mut self, path: &Path) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{}",
                format!("History saved to: {}", path.display()).dimmed()
            );
        } else {
            let _ = writeln!(self.writer, "History saved to: {}", path.display());
        }
    }

    /// Report starting a revert operation
    pub fn revert_start(&mut self, total: usize, from_timestamp: &str) {
        if self.silent {
            return;
        }
        let msg = format!("Reverting {} files from history ({})", total, from_timestamp);
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", msg.bold());
        } else {
            let _ = writeln!(self.writer, "{}", msg);
        }
    }
}
