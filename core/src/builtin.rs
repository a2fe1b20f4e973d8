//! The toolbox's own command schema.

use std::sync::OnceLock;

use crate::request::HashAlgorithm;
use crate::{CommandSchema, FlagSchema, SubcommandSchema, ToolboxSchema, ValueType};

/// Program name shown in usage output.
pub const PROGRAM_NAME: &str = "toolbox";

static SCHEMA: OnceLock<ToolboxSchema> = OnceLock::new();

/// Returns the process-wide toolbox schema, building it on first use.
pub fn toolbox_schema() -> &'static ToolboxSchema {
    SCHEMA.get_or_init(build_schema)
}

fn text_flag(name: &str, description: &str) -> FlagSchema {
    FlagSchema::required(name, ValueType::String).with_description(description)
}

fn build_schema() -> ToolboxSchema {
    let algorithms: Vec<&str> = HashAlgorithm::ALL.iter().map(|a| a.as_str()).collect();

    ToolboxSchema::new(PROGRAM_NAME)
        .with_description("Developer command-line utilities")
        .with_command(
            CommandSchema::new("uuid")
                .with_description("Generate a UUID v4")
                .with_example("uuid"),
        )
        .with_command(
            CommandSchema::new("hash")
                .with_description("Hash text (MD5, SHA1, SHA256, SHA512)")
                .with_example("hash --algo sha256 --text 'hello'")
                .with_flag(
                    FlagSchema::required("algo", ValueType::choice(&algorithms))
                        .with_description("Hash algorithm"),
                )
                .with_flag(text_flag("text", "Text to hash")),
        )
        .with_command(
            CommandSchema::new("encode")
                .with_description("Encode text")
                .with_subcommand(
                    SubcommandSchema::new("base64")
                        .with_description("Encode text as base64")
                        .with_example("encode base64 --text 'secret123'")
                        .with_flag(text_flag("text", "Text to encode")),
                ),
        )
        .with_command(
            CommandSchema::new("decode")
                .with_description("Decode data")
                .with_subcommand(
                    SubcommandSchema::new("base64")
                        .with_description("Decode base64 text")
                        .with_example("decode base64 --text 'c2VjcmV0MTIz'")
                        .with_flag(text_flag("text", "Base64 text to decode")),
                )
                .with_subcommand(
                    SubcommandSchema::new("jwt")
                        .with_description("Decode a JWT header and payload (signature not verified)")
                        .with_example("decode jwt --token 'eyJhbGciOi...'")
                        .with_flag(text_flag("token", "JWT to decode")),
                ),
        )
        .with_command(
            CommandSchema::new("beautify")
                .with_description("Pretty-print JSON or YAML")
                .with_subcommand(
                    SubcommandSchema::new("json")
                        .with_description("Pretty-print JSON")
                        .with_example(r#"beautify json --input '{"name":"GPT","age":2}'"#)
                        .with_flag(text_flag("input", "Raw JSON input")),
                )
                .with_subcommand(
                    SubcommandSchema::new("yaml")
                        .with_description("Pretty-print YAML")
                        .with_example("beautify yaml --input 'name: GPT'")
                        .with_flag(text_flag("input", "Raw YAML input")),
                ),
        )
        .with_command(
            CommandSchema::new("ping")
                .with_description("Ping a host")
                .with_example("ping --host example.com")
                .with_flag(text_flag("host", "Host to ping")),
        )
        .with_command(
            CommandSchema::new("dns")
                .with_description("DNS lookup (A, AAAA, MX, TXT, ...)")
                .with_example("dns --host example.com --record A")
                .with_flag(text_flag("host", "Domain name"))
                .with_flag(text_flag("record", "Record type (A, MX, TXT, ...)")),
        )
}
