use std::io::{self, Write};

/// One documented command-line entry point.
pub struct CommandHelp {
    pub group: &'static str,
    pub option: Option<&'static str>,
    pub usage: &'static str,
    pub description: &'static str,
}

const fn entry(
    group: &'static str,
    option: Option<&'static str>,
    usage: &'static str,
    description: &'static str,
) -> CommandHelp {
    CommandHelp {
        group,
        option,
        usage,
        description,
    }
}

pub const COMMANDS: &[CommandHelp] = &[
    entry("help", None, "help", "Show available commands"),
    entry("version", None, "version", "Show build metadata"),
    entry("acc", Some("-l"), "acc -l", "List accounts, newest first"),
    entry("acc", Some("--s"), "acc --s <index>", "Select the account at <index>"),
    entry("acc", Some("--c"), "acc --c <name> <email>", "Create an account"),
    entry("acc", Some("-i"), "acc -i", "Show the selected account"),
    entry("eps", Some("-l"), "eps -l", "List expenses of the active month"),
    entry(
        "eps",
        Some("-add"),
        "eps -add <name> <value> <day> [description]",
        "Record an expense on <day> of the active month",
    ),
    entry(
        "eps",
        Some("-swt"),
        "eps -swt <year> <month> | present",
        "Switch the active month",
    ),
];

/// Distinct top-level command groups, in help order.
pub fn groups() -> Vec<&'static str> {
    let mut groups: Vec<&'static str> = Vec::new();
    for command in COMMANDS {
        if !groups.contains(&command.group) {
            groups.push(command.group);
        }
    }
    groups
}

/// Options accepted by `group`.
pub fn options(group: &str) -> Vec<&'static str> {
    COMMANDS
        .iter()
        .filter(|command| command.group == group)
        .filter_map(|command| command.option)
        .collect()
}

pub fn print_overview(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Available commands:")?;
    let width = COMMANDS
        .iter()
        .map(|command| command.usage.len())
        .max()
        .unwrap_or_default();
    for command in COMMANDS {
        writeln!(out, "  {:<width$}  {}", command.usage, command.description)?;
    }
    Ok(())
}
