//! Command schema, argument parsing and typed requests for the toolbox CLI.
//!
//! This crate defines everything between the raw process arguments and an
//! operation handler:
//!
//! - [`ToolboxSchema`]: the ordered set of top-level commands.
//! - [`CommandSchema`]: a command with either its own flags or a mandatory
//!   set of [`SubcommandSchema`]s.
//! - [`FlagSchema`]: a `--name value` flag, optionally restricted to a
//!   [`ValueType::Choice`] set.
//! - [`parse_args`]: turns tokens into an [`Invocation`], validating them
//!   against a schema.
//! - [`Request`]: the closed set of operations, each with a typed parameter
//!   struct.
//!
//! Validation ([`validate_schema`]) catches duplicate or malformed names in
//! a schema. [`toolbox_schema`] is the schema the `toolbox` binary uses.
//!
//! # Example
//!
//! ```
//! use toolbox_core::*;
//!
//! let schema = ToolboxSchema::new("mycli").with_command(
//!     CommandSchema::new("greet")
//!         .with_flag(FlagSchema::required("name", ValueType::String))
//!         .with_flag(FlagSchema::optional("tone", ValueType::choice(&["warm", "dry"]))),
//! );
//! assert!(validate_schema(&schema).is_empty());
//!
//! let Invocation::Run(request) = parse_args(&schema, ["greet", "--name", "Ada"]).unwrap() else {
//!     unreachable!()
//! };
//! assert_eq!(request.get("name"), Some("Ada"));
//! assert_eq!(request.get("tone"), None);
//! ```

mod builtin;
mod error;
mod parse;
mod request;
mod types;
mod validate;

pub use builtin::{PROGRAM_NAME, toolbox_schema};
pub use error::{EXIT_FAILURE, EXIT_SUCCESS, EXIT_USAGE, ErrorKind, ParseError};
pub use parse::{HelpTopic, Invocation, ParsedRequest, parse_args};
pub use request::*;
pub use types::*;
pub use validate::{ValidationError, validate_schema};
