//! Schema validation.
//!
//! Duplicate or malformed names in a schema are programming errors. They are
//! caught by running [`validate_schema`] in tests rather than on every
//! invocation.
//!
//! # Examples
//!
//! ```
//! use toolbox_core::*;
//!
//! let schema = ToolboxSchema::new("toolbox")
//!     .with_command(CommandSchema::new("uuid"));
//! assert!(validate_schema(&schema).is_empty());
//!
//! // Invalid: flag name carries its dashes
//! let bad = ToolboxSchema::new("toolbox").with_command(
//!     CommandSchema::new("hash").with_flag(FlagSchema::required("--text", ValueType::String)),
//! );
//! assert!(!validate_schema(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{CommandSchema, FlagSchema, SubcommandSchema, ToolboxSchema};

/// Schema validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Program name is empty or whitespace-only.
    #[error("program name cannot be empty")]
    EmptyProgramName,
    /// Command name is empty or whitespace-only.
    #[error("command name cannot be empty")]
    EmptyCommandName,
    /// Two top-level commands share a name.
    #[error("duplicate command: {0}")]
    DuplicateCommand(String),
    /// Two subcommands under the same command share a name.
    #[error("duplicate subcommand in {0}: {1}")]
    DuplicateSubcommand(String, String),
    /// Flag name is empty, starts with a dash, or contains whitespace or `=`.
    #[error("invalid flag name: {0:?}")]
    InvalidFlagName(String),
    /// Two flags in the same scope share a name.
    #[error("duplicate flag in {0}: {1}")]
    DuplicateFlag(String, String),
    /// A choice flag declares no allowed values.
    #[error("choice flag has no allowed values: {0}")]
    EmptyChoice(String),
}

/// Validates a full toolbox schema.
///
/// Returns every defect found, in declaration order.
///
/// # Examples
///
/// ```
/// use toolbox_core::*;
///
/// let schema = ToolboxSchema::new("toolbox")
///     .with_command(CommandSchema::new("uuid"))
///     .with_command(CommandSchema::new("uuid"));
///
/// let errors = validate_schema(&schema);
/// assert_eq!(errors, vec![ValidationError::DuplicateCommand("uuid".into())]);
/// ```
pub fn validate_schema(schema: &ToolboxSchema) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if schema.program.trim().is_empty() {
        errors.push(ValidationError::EmptyProgramName);
    }

    let mut seen_commands: HashSet<&str> = HashSet::new();
    for command in &schema.commands {
        let name = command.command.trim();
        if name.is_empty() {
            errors.push(ValidationError::EmptyCommandName);
            continue;
        }
        if !seen_commands.insert(name) {
            errors.push(ValidationError::DuplicateCommand(name.to_string()));
        }
        errors.extend(validate_command(command));
    }

    errors
}

fn validate_command(command: &CommandSchema) -> Vec<ValidationError> {
    let mut errors = validate_flags(&command.command, &command.flags);
    errors.extend(validate_subcommands(&command.command, &command.subcommands));
    errors
}

fn validate_subcommands(parent: &str, subcommands: &[SubcommandSchema]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for sub in subcommands {
        let name = sub.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::EmptyCommandName);
            continue;
        }
        if !seen.insert(name) {
            errors.push(ValidationError::DuplicateSubcommand(
                parent.to_string(),
                name.to_string(),
            ));
        }
        errors.extend(validate_flags(&format!("{parent} {name}"), &sub.flags));
    }

    errors
}

fn validate_flags(scope: &str, flags: &[FlagSchema]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for flag in flags {
        let name = flag.name.as_str();
        if name.is_empty()
            || name.starts_with('-')
            || name.contains('=')
            || name.chars().any(char::is_whitespace)
        {
            errors.push(ValidationError::InvalidFlagName(name.to_string()));
            continue;
        }
        if !seen.insert(name) {
            errors.push(ValidationError::DuplicateFlag(
                scope.to_string(),
                name.to_string(),
            ));
        }
        if flag.value_type.choices().is_some_and(|c| c.is_empty()) {
            errors.push(ValidationError::EmptyChoice(name.to_string()));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use crate::ValueType;

    use super::*;

    #[test]
    fn test_validate_schema_rejects_duplicate_subcommands() {
        let schema = ToolboxSchema::new("toolbox").with_command(
            CommandSchema::new("decode")
                .with_subcommand(SubcommandSchema::new("base64"))
                .with_subcommand(SubcommandSchema::new("base64")),
        );

        assert_eq!(
            validate_schema(&schema),
            vec![ValidationError::DuplicateSubcommand(
                "decode".to_string(),
                "base64".to_string()
            )]
        );
    }

    #[test]
    fn test_validate_schema_rejects_duplicate_flags() {
        let schema = ToolboxSchema::new("toolbox").with_command(
            CommandSchema::new("encode").with_subcommand(
                SubcommandSchema::new("base64")
                    .with_flag(FlagSchema::required("text", ValueType::String))
                    .with_flag(FlagSchema::optional("text", ValueType::String)),
            ),
        );

        assert_eq!(
            validate_schema(&schema),
            vec![ValidationError::DuplicateFlag(
                "encode base64".to_string(),
                "text".to_string()
            )]
        );
    }

    #[test]
    fn test_validate_schema_allows_same_flag_in_sibling_scopes() {
        let schema = ToolboxSchema::new("toolbox").with_command(
            CommandSchema::new("beautify")
                .with_subcommand(
                    SubcommandSchema::new("json")
                        .with_flag(FlagSchema::required("input", ValueType::String)),
                )
                .with_subcommand(
                    SubcommandSchema::new("yaml")
                        .with_flag(FlagSchema::required("input", ValueType::String)),
                ),
        );

        assert!(validate_schema(&schema).is_empty());
    }

    #[test]
    fn test_validate_schema_rejects_bad_flag_names_and_empty_choices() {
        let schema = ToolboxSchema::new("toolbox").with_command(
            CommandSchema::new("hash")
                .with_flag(FlagSchema::required("te xt", ValueType::String))
                .with_flag(FlagSchema::required("algo", ValueType::Choice(Vec::new()))),
        );

        assert_eq!(
            validate_schema(&schema),
            vec![
                ValidationError::InvalidFlagName("te xt".to_string()),
                ValidationError::EmptyChoice("algo".to_string()),
            ]
        );
    }

    #[test]
    fn test_validate_schema_rejects_empty_names() {
        let schema = ToolboxSchema::new(" ").with_command(CommandSchema::new(""));

        assert_eq!(
            validate_schema(&schema),
            vec![
                ValidationError::EmptyProgramName,
                ValidationError::EmptyCommandName
            ]
        );
    }
}
