//! Error taxonomy shared by the parser, the handlers and the output layer.

use std::fmt;

use thiserror::Error;

/// Every failure category the toolbox can report.
///
/// Parse-time kinds are produced by [`parse_args`](crate::parse_args);
/// the remaining kinds are produced by operation handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownCommand,
    MissingOrUnknownSubcommand,
    UnknownFlag,
    MissingFlagValue,
    MissingRequiredFlag,
    InvalidChoice,
    DecodeError,
    ParseError,
    ExternalToolError,
    ResolutionError,
    MissingDependency,
}

/// Process exit status for a successful invocation.
pub const EXIT_SUCCESS: i32 = 0;
/// Process exit status when an operation fails.
pub const EXIT_FAILURE: i32 = 1;
/// Process exit status when the command line is rejected.
pub const EXIT_USAGE: i32 = 2;

impl ErrorKind {
    /// Whether the error was raised while reading the command line.
    pub fn is_parse_error(self) -> bool {
        matches!(
            self,
            Self::UnknownCommand
                | Self::MissingOrUnknownSubcommand
                | Self::UnknownFlag
                | Self::MissingFlagValue
                | Self::MissingRequiredFlag
                | Self::InvalidChoice
        )
    }

    /// Exit status reported for this kind of failure.
    pub fn exit_code(self) -> i32 {
        if self.is_parse_error() {
            EXIT_USAGE
        } else {
            EXIT_FAILURE
        }
    }

    /// Stable identifier used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnknownCommand => "unknown_command",
            Self::MissingOrUnknownSubcommand => "missing_or_unknown_subcommand",
            Self::UnknownFlag => "unknown_flag",
            Self::MissingFlagValue => "missing_flag_value",
            Self::MissingRequiredFlag => "missing_required_flag",
            Self::InvalidChoice => "invalid_choice",
            Self::DecodeError => "decode_error",
            Self::ParseError => "parse_error",
            Self::ExternalToolError => "external_tool_error",
            Self::ResolutionError => "resolution_error",
            Self::MissingDependency => "missing_dependency",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command-line rejection produced by the argument parser.
///
/// The `Display` impl is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The first token is not a known command.
    #[error("unknown command '{command}'")]
    UnknownCommand { command: String },

    /// The command needs a subcommand and none (or an unknown one) was given.
    #[error("{}", missing_or_unknown_subcommand(.command, .found.as_deref(), .available))]
    MissingOrUnknownSubcommand {
        command: String,
        found: Option<String>,
        available: Vec<String>,
    },

    /// A token in flag position does not name a declared flag.
    #[error("unknown flag '{flag}' for '{scope}'")]
    UnknownFlag { scope: String, flag: String },

    /// A flag is the last token and has no value.
    #[error("flag '--{flag}' expects a value")]
    MissingFlagValue { flag: String },

    /// A required flag is absent.
    #[error("missing required flag '--{flag}' for '{scope}'")]
    MissingRequiredFlag { scope: String, flag: String },

    /// A choice-restricted flag received a value outside its set.
    #[error("invalid value '{value}' for '--{flag}' (choose from {})", .allowed.join(", "))]
    InvalidChoice {
        flag: String,
        value: String,
        allowed: Vec<String>,
    },
}

fn missing_or_unknown_subcommand(command: &str, found: Option<&str>, available: &[String]) -> String {
    let choices = available.join(", ");
    match found {
        Some(name) => format!("unknown subcommand '{name}' for '{command}' (choose from {choices})"),
        None => format!("'{command}' requires a subcommand (choose from {choices})"),
    }
}

impl ParseError {
    /// Returns the taxonomy entry for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownCommand { .. } => ErrorKind::UnknownCommand,
            Self::MissingOrUnknownSubcommand { .. } => ErrorKind::MissingOrUnknownSubcommand,
            Self::UnknownFlag { .. } => ErrorKind::UnknownFlag,
            Self::MissingFlagValue { .. } => ErrorKind::MissingFlagValue,
            Self::MissingRequiredFlag { .. } => ErrorKind::MissingRequiredFlag,
            Self::InvalidChoice { .. } => ErrorKind::InvalidChoice,
        }
    }
}
