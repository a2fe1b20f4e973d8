//! Schema-driven argument parsing.
//!
//! [`parse_args`] turns the process arguments (without the program name)
//! into an [`Invocation`]. The grammar is deliberately small:
//!
//! ```text
//! <command> [<subcommand>] (--<flag> <value>)*
//! ```
//!
//! Every flag takes exactly one value in the following token. There is no
//! `--flag=value` form, no short flags and no boolean flags. When a flag is
//! repeated, the last occurrence wins.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{CommandSchema, FlagSchema, ParseError, ToolboxSchema};

/// Tokens that request the usage summary instead of a command.
const HELP_TOKENS: [&str; 3] = ["help", "--help", "-h"];
/// Tokens that request the program version.
const VERSION_TOKENS: [&str; 2] = ["--version", "-V"];

/// A validated command line, ready for dispatch.
///
/// Produced only by [`parse_args`], so every required flag of the resolved
/// (command, subcommand) pair is present and every choice-restricted value
/// is a member of its set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    command: String,
    subcommand: Option<String>,
    fields: BTreeMap<String, String>,
}

impl ParsedRequest {
    /// The resolved top-level command.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The resolved subcommand, for commands that declare subcommands.
    pub fn subcommand(&self) -> Option<&str> {
        self.subcommand.as_deref()
    }

    /// Supplied flag values keyed by bare flag name.
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// Looks up one flag value.
    pub fn get(&self, flag: &str) -> Option<&str> {
        self.fields.get(flag).map(String::as_str)
    }

    /// Space-joined command path, e.g. `decode jwt`.
    pub fn path(&self) -> String {
        match &self.subcommand {
            Some(sub) => format!("{} {sub}", self.command),
            None => self.command.clone(),
        }
    }
}

/// The command (and optionally subcommand) a help request is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpTopic {
    pub command: String,
    pub subcommand: Option<String>,
}

impl HelpTopic {
    pub fn command(name: &str) -> Self {
        Self {
            command: name.to_string(),
            subcommand: None,
        }
    }

    pub fn subcommand(command: &str, subcommand: &str) -> Self {
        Self {
            command: command.to_string(),
            subcommand: Some(subcommand.to_string()),
        }
    }
}

/// Outcome of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Show usage: the summary when `None`, help for one command or
    /// subcommand otherwise.
    Usage(Option<HelpTopic>),
    /// Show the program version.
    Version,
    /// Run the validated request.
    Run(ParsedRequest),
}

/// Parses command-line tokens against a schema.
///
/// # Errors
///
/// Returns a [`ParseError`] when the command or subcommand is unknown, a
/// flag is unknown or lacks its value, a required flag is missing, or a
/// value falls outside its allowed choices.
///
/// # Examples
///
/// ```
/// use toolbox_core::*;
///
/// let schema = toolbox_schema();
///
/// let invocation = parse_args(schema, ["hash", "--algo", "sha256", "--text", "hello"]).unwrap();
/// let Invocation::Run(request) = invocation else { panic!("expected a request") };
/// assert_eq!(request.command(), "hash");
/// assert_eq!(request.get("algo"), Some("sha256"));
///
/// let empty: [&str; 0] = [];
/// assert_eq!(parse_args(schema, empty).unwrap(), Invocation::Usage(None));
///
/// let err = parse_args(schema, ["hash", "--algo", "blowfish", "--text", "x"]).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidChoice);
/// ```
pub fn parse_args<I, S>(schema: &ToolboxSchema, args: I) -> Result<Invocation, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    debug!(tokens = ?tokens, "Parsing command line");

    let Some(first) = tokens.first() else {
        return Ok(Invocation::Usage(None));
    };

    if HELP_TOKENS.contains(&first.as_str()) {
        return Ok(Invocation::Usage(help_topic(schema, &tokens[1..])));
    }
    if VERSION_TOKENS.contains(&first.as_str()) {
        return Ok(Invocation::Version);
    }

    let command = schema
        .find_command(first)
        .ok_or_else(|| ParseError::UnknownCommand {
            command: first.clone(),
        })?;

    let (subcommand, flags, rest) = resolve_scope(command, &tokens[1..])?;
    let scope = match subcommand {
        Some(sub) => format!("{} {sub}", command.command),
        None => command.command.clone(),
    };

    let fields = match collect_flags(&scope, flags, rest)? {
        Some(fields) => fields,
        None => {
            let topic = HelpTopic {
                command: command.command.clone(),
                subcommand: subcommand.map(str::to_string),
            };
            return Ok(Invocation::Usage(Some(topic)));
        }
    };

    check_required(&scope, flags, &fields)?;
    check_choices(flags, &fields)?;

    let request = ParsedRequest {
        command: command.command.clone(),
        subcommand: subcommand.map(str::to_string),
        fields,
    };
    debug!(path = %request.path(), fields = request.fields.len(), "Parsed request");
    Ok(Invocation::Run(request))
}

/// Resolves `help [command [subcommand]]`. Unknown names widen the topic
/// instead of failing.
fn help_topic(schema: &ToolboxSchema, tokens: &[String]) -> Option<HelpTopic> {
    let command = schema.find_command(tokens.first()?)?;
    let subcommand = tokens
        .get(1)
        .and_then(|name| command.find_subcommand(name))
        .map(|sub| sub.name.clone());
    Some(HelpTopic {
        command: command.command.clone(),
        subcommand,
    })
}

/// Resolves the subcommand (if the command has any) and returns the flag
/// scope along with the tokens that remain to be read as flags.
fn resolve_scope<'a, 't>(
    command: &'a CommandSchema,
    tokens: &'t [String],
) -> Result<(Option<&'a str>, &'a [FlagSchema], &'t [String]), ParseError> {
    if !command.requires_subcommand() {
        return Ok((None, &command.flags, tokens));
    }

    let missing = |found: Option<&String>| ParseError::MissingOrUnknownSubcommand {
        command: command.command.clone(),
        found: found.cloned(),
        available: command
            .subcommand_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    };

    let Some(name) = tokens.first() else {
        return Err(missing(None));
    };
    if name.starts_with("--") {
        if name == "--help" {
            return Ok((None, &[], tokens));
        }
        return Err(missing(None));
    }
    let sub = command
        .find_subcommand(name)
        .ok_or_else(|| missing(Some(name)))?;
    Ok((Some(sub.name.as_str()), &sub.flags, &tokens[1..]))
}

/// Reads `--flag value` pairs. Returns `Ok(None)` when `--help` is found in
/// flag position.
fn collect_flags(
    scope: &str,
    flags: &[FlagSchema],
    tokens: &[String],
) -> Result<Option<BTreeMap<String, String>>, ParseError> {
    let mut fields = BTreeMap::new();
    let mut iter = tokens.iter();

    while let Some(token) = iter.next() {
        if token == "--help" {
            return Ok(None);
        }
        let flag = flags
            .iter()
            .find(|f| f.matches(token))
            .ok_or_else(|| ParseError::UnknownFlag {
                scope: scope.to_string(),
                flag: token.clone(),
            })?;
        let value = iter.next().ok_or_else(|| ParseError::MissingFlagValue {
            flag: flag.name.clone(),
        })?;
        if let Some(previous) = fields.insert(flag.name.clone(), value.clone()) {
            debug!(flag = %flag.name, previous = %previous, "Flag repeated, keeping last value");
        }
    }

    Ok(Some(fields))
}

fn check_required(
    scope: &str,
    flags: &[FlagSchema],
    fields: &BTreeMap<String, String>,
) -> Result<(), ParseError> {
    match flags
        .iter()
        .find(|f| f.required && !fields.contains_key(&f.name))
    {
        Some(flag) => Err(ParseError::MissingRequiredFlag {
            scope: scope.to_string(),
            flag: flag.name.clone(),
        }),
        None => Ok(()),
    }
}

fn check_choices(flags: &[FlagSchema], fields: &BTreeMap<String, String>) -> Result<(), ParseError> {
    for flag in flags {
        let (Some(value), Some(allowed)) = (fields.get(&flag.name), flag.value_type.choices())
        else {
            continue;
        };
        if !flag.value_type.allows(value) {
            return Err(ParseError::InvalidChoice {
                flag: flag.name.clone(),
                value: value.clone(),
                allowed: allowed.to_vec(),
            });
        }
    }
    Ok(())
}
