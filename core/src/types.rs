//! Schema type definitions for the toolbox command surface.
//!
//! These types describe every command the toolbox accepts: top-level
//! commands, their optional second-level subcommands, and the `--flag value`
//! pairs each (command, subcommand) pair declares. The parser consumes them
//! read-only; nothing mutates a schema once it is built.

/// Value type for flags.
///
/// Every flag takes exactly one string value. A [`Choice`](ValueType::Choice)
/// flag additionally restricts that value to a fixed set.
///
/// # Examples
///
/// ```
/// use toolbox_core::ValueType;
///
/// let vt = ValueType::default();
/// assert_eq!(vt, ValueType::String);
///
/// let choices = ValueType::Choice(vec!["md5".into(), "sha1".into()]);
/// assert!(choices.allows("md5"));
/// assert!(!choices.allows("blowfish"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValueType {
    /// Free-form string value (the default).
    #[default]
    String,
    /// One of specific choices (e.g., `--algo md5|sha1|sha256|sha512`).
    Choice(Vec<String>),
}

impl ValueType {
    /// Builds a choice set from string slices.
    pub fn choice(values: &[&str]) -> Self {
        Self::Choice(values.iter().map(|v| v.to_string()).collect())
    }

    /// Returns `true` when `value` is acceptable for this type.
    pub fn allows(&self, value: &str) -> bool {
        match self {
            Self::String => true,
            Self::Choice(choices) => choices.iter().any(|c| c == value),
        }
    }

    /// Returns the allowed values for a choice type.
    pub fn choices(&self) -> Option<&[String]> {
        match self {
            Self::String => None,
            Self::Choice(choices) => Some(choices),
        }
    }
}

/// Schema for a `--name value` flag.
///
/// Flags are stored by their bare name (`algo`, not `--algo`). Use
/// [`required`](FlagSchema::required) or [`optional`](FlagSchema::optional)
/// to create one, then chain
/// [`with_description`](FlagSchema::with_description).
///
/// # Examples
///
/// ```
/// use toolbox_core::{FlagSchema, ValueType};
///
/// let algo = FlagSchema::required("algo", ValueType::choice(&["md5", "sha256"]))
///     .with_description("Hash algorithm");
/// assert!(algo.required);
/// assert_eq!(algo.token(), "--algo");
/// assert!(algo.matches("--algo"));
/// assert!(!algo.matches("algo"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSchema {
    /// Bare flag name (e.g., "text")
    pub name: String,
    /// Type of value this flag accepts
    pub value_type: ValueType,
    /// Whether the flag must be present
    pub required: bool,
    /// Description shown in help output
    pub description: Option<String>,
}

impl FlagSchema {
    /// Creates a flag that must be supplied.
    pub fn required(name: &str, value_type: ValueType) -> Self {
        Self {
            name: name.to_string(),
            value_type,
            required: true,
            description: None,
        }
    }

    /// Creates a flag that may be omitted.
    ///
    /// # Examples
    ///
    /// ```
    /// use toolbox_core::{FlagSchema, ValueType};
    ///
    /// let flag = FlagSchema::optional("label", ValueType::String);
    /// assert!(!flag.required);
    /// ```
    pub fn optional(name: &str, value_type: ValueType) -> Self {
        Self {
            required: false,
            ..Self::required(name, value_type)
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Returns the command-line spelling of the flag (`--name`).
    pub fn token(&self) -> String {
        format!("--{}", self.name)
    }

    /// Checks if a raw command-line token names this flag.
    pub fn matches(&self, token: &str) -> bool {
        token
            .strip_prefix("--")
            .is_some_and(|name| name == self.name)
    }
}

/// Schema for a subcommand (e.g., `base64` under `encode`).
///
/// # Examples
///
/// ```
/// use toolbox_core::{FlagSchema, SubcommandSchema, ValueType};
///
/// let sub = SubcommandSchema::new("base64")
///     .with_description("Encode text as base64")
///     .with_flag(FlagSchema::required("text", ValueType::String));
///
/// assert_eq!(sub.name, "base64");
/// assert!(sub.find_flag("text").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubcommandSchema {
    /// Name of the subcommand
    pub name: String,
    /// Short description
    pub description: Option<String>,
    /// Example invocation, without the program name
    pub example: Option<String>,
    /// Flags accepted by this subcommand
    pub flags: Vec<FlagSchema>,
}

impl SubcommandSchema {
    /// Creates a new subcommand schema with the given name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Adds an example invocation.
    pub fn with_example(mut self, example: &str) -> Self {
        self.example = Some(example.to_string());
        self
    }

    /// Adds a flag to this subcommand.
    pub fn with_flag(mut self, flag: FlagSchema) -> Self {
        self.flags.push(flag);
        self
    }

    /// Finds a flag by bare name.
    pub fn find_flag(&self, name: &str) -> Option<&FlagSchema> {
        self.flags.iter().find(|f| f.name == name)
    }
}

/// Schema for one top-level command.
///
/// A command either takes its flags directly (`hash --algo ...`) or requires
/// a subcommand first (`encode base64 --text ...`). When `subcommands` is
/// non-empty, the command's own `flags` are unused and selecting a
/// subcommand is mandatory.
///
/// # Examples
///
/// ```
/// use toolbox_core::*;
///
/// let hash = CommandSchema::new("hash")
///     .with_flag(FlagSchema::required("text", ValueType::String));
/// assert!(!hash.requires_subcommand());
/// assert_eq!(hash.flags_for(None).map(|f| f.len()), Some(1));
///
/// let encode = CommandSchema::new("encode")
///     .with_subcommand(SubcommandSchema::new("base64"));
/// assert!(encode.requires_subcommand());
/// assert_eq!(encode.subcommand_names(), vec!["base64"]);
/// assert!(encode.flags_for(Some("hex")).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSchema {
    /// The command name (e.g., "hash", "encode")
    pub command: String,
    /// Short description of the command
    pub description: Option<String>,
    /// Example invocation, without the program name
    pub example: Option<String>,
    /// Flags for commands that take no subcommand
    pub flags: Vec<FlagSchema>,
    /// Subcommands; selecting one is mandatory when non-empty
    pub subcommands: Vec<SubcommandSchema>,
}

impl CommandSchema {
    /// Creates a new command schema with the given name.
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
            ..Default::default()
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Adds an example invocation.
    pub fn with_example(mut self, example: &str) -> Self {
        self.example = Some(example.to_string());
        self
    }

    /// Adds a flag taken directly by the command.
    pub fn with_flag(mut self, flag: FlagSchema) -> Self {
        self.flags.push(flag);
        self
    }

    /// Adds a subcommand.
    pub fn with_subcommand(mut self, sub: SubcommandSchema) -> Self {
        self.subcommands.push(sub);
        self
    }

    /// Whether a subcommand must follow the command name.
    pub fn requires_subcommand(&self) -> bool {
        !self.subcommands.is_empty()
    }

    /// Finds a subcommand by name.
    pub fn find_subcommand(&self, name: &str) -> Option<&SubcommandSchema> {
        self.subcommands.iter().find(|s| s.name == name)
    }

    /// Finds a command-level flag by bare name.
    pub fn find_flag(&self, name: &str) -> Option<&FlagSchema> {
        self.flags.iter().find(|f| f.name == name)
    }

    /// Gets all subcommand names in declaration order.
    pub fn subcommand_names(&self) -> Vec<&str> {
        self.subcommands.iter().map(|s| s.name.as_str()).collect()
    }

    /// Gets the flag set for a resolved (command, subcommand) pair.
    ///
    /// Returns `None` when `subcommand` is not declared, or when it is given
    /// for a command that has no subcommands (and vice versa).
    pub fn flags_for(&self, subcommand: Option<&str>) -> Option<&[FlagSchema]> {
        match (subcommand, self.requires_subcommand()) {
            (None, false) => Some(&self.flags),
            (Some(name), true) => self.find_subcommand(name).map(|s| s.flags.as_slice()),
            _ => None,
        }
    }
}

/// The complete, ordered set of commands accepted by a program.
///
/// # Examples
///
/// ```
/// use toolbox_core::*;
///
/// let schema = ToolboxSchema::new("toolbox")
///     .with_command(CommandSchema::new("uuid"))
///     .with_command(CommandSchema::new("hash"));
///
/// assert_eq!(schema.command_names(), vec!["uuid", "hash"]);
/// assert!(schema.find_command("hash").is_some());
/// assert!(schema.find_command("md5sum").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolboxSchema {
    /// Program name used in usage output
    pub program: String,
    /// Optional program description
    pub description: Option<String>,
    /// Top-level commands in display order
    pub commands: Vec<CommandSchema>,
}

impl ToolboxSchema {
    /// Creates an empty schema for the named program.
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            ..Default::default()
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Adds a top-level command.
    pub fn with_command(mut self, command: CommandSchema) -> Self {
        self.commands.push(command);
        self
    }

    /// Finds a top-level command by name.
    pub fn find_command(&self, name: &str) -> Option<&CommandSchema> {
        self.commands.iter().find(|c| c.command == name)
    }

    /// Gets all command names in declaration order.
    pub fn command_names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.command.as_str()).collect()
    }

    /// Gets the flag set for a (command, subcommand) pair.
    pub fn flags_for(&self, command: &str, subcommand: Option<&str>) -> Option<&[FlagSchema]> {
        self.find_command(command)?.flags_for(subcommand)
    }
}
