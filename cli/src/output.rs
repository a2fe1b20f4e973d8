//! Terminal rendering of operation results.
//!
//! Markers and colors are only emitted when the target stream is a terminal
//! and `NO_COLOR` is unset, so piped output stays machine-readable.

use std::io::IsTerminal;

use colored::Colorize;

use crate::dispatch::OperationResult;

const SUCCESS_MARKER: &str = "✔";
const ERROR_MARKER: &str = "✖ error:";
const PLAIN_ERROR_PREFIX: &str = "error:";

/// Decoration policy for one output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    decorated: bool,
}

impl Style {
    pub const PLAIN: Self = Self { decorated: false };
    pub const DECORATED: Self = Self { decorated: true };

    pub fn stdout() -> Self {
        Self::detect(std::io::stdout().is_terminal())
    }

    pub fn stderr() -> Self {
        Self::detect(std::io::stderr().is_terminal())
    }

    fn detect(is_terminal: bool) -> Self {
        Self {
            decorated: is_terminal && !colors_disabled(),
        }
    }

    pub fn success_line(&self, message: &str) -> String {
        if self.decorated {
            format!("{} {message}", SUCCESS_MARKER.green().bold())
        } else {
            message.to_string()
        }
    }

    pub fn error_line(&self, message: &str) -> String {
        if self.decorated {
            format!("{} {message}", ERROR_MARKER.red().bold())
        } else {
            format!("{PLAIN_ERROR_PREFIX} {message}")
        }
    }

    pub fn hint_line(&self, message: &str) -> String {
        if self.decorated {
            message.dimmed().to_string()
        } else {
            message.to_string()
        }
    }
}

fn colors_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// Writes a result to stdout (success) or stderr (failure).
pub fn print_result(result: &OperationResult) {
    match result {
        OperationResult::Success { message } => println!("{}", Style::stdout().success_line(message)),
        OperationResult::Failure { message, .. } => print_error(message),
    }
}

pub fn print_error(message: &str) {
    eprintln!("{}", Style::stderr().error_line(message));
}

pub fn print_hint(message: &str) {
    eprintln!("{}", Style::stderr().hint_line(message));
}
