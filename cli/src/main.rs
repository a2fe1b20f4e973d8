mod dispatch;
mod output;
mod usage;

use toolbox_core::{
    EXIT_SUCCESS, HelpTopic, Invocation, ParseError, ToolboxSchema, parse_args, toolbox_schema,
};
use toolbox_ops::capabilities;
use tracing::debug;

use crate::dispatch::dispatch;
use crate::output::{print_error, print_hint, print_result};
use crate::usage::{render_command_help, render_subcommand_help, render_usage};

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");
const LOG_ENV: &str = "TOOLBOX_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let schema = toolbox_schema();

    let code = match parse_args(schema, &args) {
        Ok(invocation) => run(schema, invocation),
        Err(err) => report_parse_error(schema, &err),
    };
    std::process::exit(code);
}

fn run(schema: &ToolboxSchema, invocation: Invocation) -> i32 {
    match invocation {
        Invocation::Usage(None) => {
            print!("{}", render_usage(schema));
            EXIT_SUCCESS
        }
        Invocation::Usage(Some(topic)) => {
            print!("{}", render_help(schema, &topic));
            EXIT_SUCCESS
        }
        Invocation::Version => {
            println!("{} {PACKAGE_VERSION}", schema.program);
            EXIT_SUCCESS
        }
        Invocation::Run(request) => {
            let capabilities = capabilities();
            debug!(capabilities = ?capabilities, "Capabilities detected");
            let result = dispatch(&request, capabilities);
            print_result(&result);
            result.exit_code()
        }
    }
}

/// Help text for `topic`, falling back to the summary for unknown names.
fn render_help(schema: &ToolboxSchema, topic: &HelpTopic) -> String {
    let Some(command) = schema.find_command(&topic.command) else {
        return render_usage(schema);
    };
    match topic
        .subcommand
        .as_deref()
        .and_then(|name| command.find_subcommand(name))
    {
        Some(sub) => render_subcommand_help(&schema.program, command, sub),
        None => render_command_help(&schema.program, command),
    }
}

fn report_parse_error(schema: &ToolboxSchema, err: &ParseError) -> i32 {
    debug!(kind = %err.kind(), "Rejected command line");
    print_error(&err.to_string());

    match err {
        // An unknown command is answered with the summary, not a failure.
        ParseError::UnknownCommand { .. } => {
            print!("{}", render_usage(schema));
            EXIT_SUCCESS
        }
        _ => {
            match help_topic(err) {
                Some(command) => print_hint(&format!(
                    "Run '{} help {command}' for usage.",
                    schema.program
                )),
                None => print_hint(&format!("Run '{} help' for usage.", schema.program)),
            }
            err.kind().exit_code()
        }
    }
}

/// The command whose help is most relevant to `err`.
fn help_topic(err: &ParseError) -> Option<String> {
    match err {
        ParseError::MissingOrUnknownSubcommand { command, .. } => Some(command.clone()),
        ParseError::UnknownFlag { scope, .. } | ParseError::MissingRequiredFlag { scope, .. } => {
            scope.split_whitespace().next().map(str::to_string)
        }
        _ => None,
    }
}
