//! Usage and per-command help text, rendered from the schema.

use toolbox_core::{CommandSchema, FlagSchema, SubcommandSchema, ToolboxSchema};

/// One line of a two-column listing.
struct Entry {
    label: String,
    description: String,
}

fn push_entries(out: &mut String, entries: &[Entry]) {
    let width = entries.iter().map(|e| e.label.len()).max().unwrap_or(0);
    for entry in entries {
        if entry.description.is_empty() {
            out.push_str(&format!("  {}\n", entry.label));
        } else {
            out.push_str(&format!(
                "  {:<width$}  {}\n",
                entry.label, entry.description
            ));
        }
    }
}

/// Renders the top-level usage summary: every command/subcommand pair with
/// its description, followed by example invocations.
pub fn render_usage(schema: &ToolboxSchema) -> String {
    let program = &schema.program;
    let mut out = String::new();

    if let Some(ref desc) = schema.description {
        out.push_str(&format!("{desc}\n\n"));
    }
    out.push_str(&format!(
        "Usage: {program} <command> [subcommand] [--flag value]...\n\n"
    ));

    let mut entries = Vec::new();
    let mut examples = Vec::new();
    for command in &schema.commands {
        if command.requires_subcommand() {
            for sub in &command.subcommands {
                entries.push(Entry {
                    label: format!("{} {}", command.command, sub.name),
                    description: sub.description.clone().unwrap_or_default(),
                });
                examples.extend(sub.example.iter().cloned());
            }
        } else {
            entries.push(Entry {
                label: command.command.clone(),
                description: command.description.clone().unwrap_or_default(),
            });
            examples.extend(command.example.iter().cloned());
        }
    }
    entries.push(Entry {
        label: "help [command]".to_string(),
        description: "Show usage, or help for one command".to_string(),
    });

    out.push_str("Commands:\n");
    push_entries(&mut out, &entries);

    if !examples.is_empty() {
        out.push_str("\nExamples:\n");
        for example in &examples {
            out.push_str(&format!("  {program} {example}\n"));
        }
    }

    out
}

/// Renders help for a single command: its subcommands and their flags.
pub fn render_command_help(program: &str, command: &CommandSchema) -> String {
    let mut out = String::new();
    let name = &command.command;

    if let Some(ref desc) = command.description {
        out.push_str(&format!("{desc}\n\n"));
    }

    if command.requires_subcommand() {
        out.push_str(&format!(
            "Usage: {program} {name} <{}> [--flag value]...\n",
            command.subcommand_names().join("|")
        ));
        for sub in &command.subcommands {
            out.push_str(&format!("\n{program} {name} {}", sub.name));
            if let Some(ref desc) = sub.description {
                out.push_str(&format!("  {desc}"));
            }
            out.push('\n');
            push_flags(&mut out, &sub.flags);
            if let Some(ref example) = sub.example {
                out.push_str(&format!("  Example: {program} {example}\n"));
            }
        }
    } else {
        push_leaf_help(
            &mut out,
            &format!("{program} {name}"),
            &command.flags,
            command.example.as_deref().map(|e| format!("{program} {e}")),
        );
    }

    out
}

/// Renders help for one subcommand of `command`.
pub fn render_subcommand_help(
    program: &str,
    command: &CommandSchema,
    sub: &SubcommandSchema,
) -> String {
    let mut out = String::new();
    if let Some(ref desc) = sub.description {
        out.push_str(&format!("{desc}\n\n"));
    }
    push_leaf_help(
        &mut out,
        &format!("{program} {} {}", command.command, sub.name),
        &sub.flags,
        sub.example.as_deref().map(|e| format!("{program} {e}")),
    );
    out
}

/// Synopsis, flag table and example for a command path that takes flags
/// directly.
fn push_leaf_help(out: &mut String, path: &str, flags: &[FlagSchema], example: Option<String>) {
    out.push_str(&format!("Usage: {path}"));
    for flag in flags {
        out.push_str(&format!(" {}", flag_synopsis(flag)));
    }
    out.push('\n');
    if !flags.is_empty() {
        out.push_str("\nFlags:\n");
        push_flags(out, flags);
    }
    if let Some(example) = example {
        out.push_str(&format!("\nExample: {example}\n"));
    }
}

fn flag_placeholder(flag: &FlagSchema) -> String {
    match flag.value_type.choices() {
        Some(choices) => format!("<{}>", choices.join("|")),
        None => format!("<{}>", flag.name),
    }
}

fn flag_synopsis(flag: &FlagSchema) -> String {
    let synopsis = format!("{} {}", flag.token(), flag_placeholder(flag));
    if flag.required {
        synopsis
    } else {
        format!("[{synopsis}]")
    }
}

fn push_flags(out: &mut String, flags: &[FlagSchema]) {
    let entries: Vec<Entry> = flags
        .iter()
        .map(|flag| {
            let mut description = flag.description.clone().unwrap_or_default();
            if flag.required {
                if description.is_empty() {
                    description.push_str("(required)");
                } else {
                    description.push_str(" (required)");
                }
            }
            Entry {
                label: format!("{} {}", flag.token(), flag_placeholder(flag)),
                description,
            }
        })
        .collect();
    push_entries(out, &entries);
}
