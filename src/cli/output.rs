use std::{
    env, fmt,
    io::{self, IsTerminal, Write},
};

use colored::Colorize;
use once_cell::sync::Lazy;

static COLOR_ENABLED: Lazy<bool> =
    Lazy::new(|| io::stdout().is_terminal() && env::var_os("NO_COLOR").is_none());

/// Message categories used by the CLI output helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageKind {
    fn label(self) -> &'static str {
        match self {
            MessageKind::Info => "INFO",
            MessageKind::Success => "SUCCESS",
            MessageKind::Warning => "WARNING",
            MessageKind::Error => "ERROR",
        }
    }
}

/// Renders `LABEL: text`, colouring the label when `color` is set.
pub fn format_message(kind: MessageKind, text: impl fmt::Display, color: bool) -> String {
    let label = kind.label();
    if !color {
        return format!("{label}: {text}");
    }
    let styled = match kind {
        MessageKind::Info => label.cyan(),
        MessageKind::Success => label.green(),
        MessageKind::Warning => label.yellow(),
        MessageKind::Error => label.red(),
    }
    .bold();
    format!("{styled}: {text}")
}

fn emit(out: &mut dyn Write, kind: MessageKind, text: impl fmt::Display) -> io::Result<()> {
    writeln!(out, "{}", format_message(kind, text, *COLOR_ENABLED))
}

pub fn info(out: &mut dyn Write, text: impl fmt::Display) -> io::Result<()> {
    emit(out, MessageKind::Info, text)
}

pub fn success(out: &mut dyn Write, text: impl fmt::Display) -> io::Result<()> {
    emit(out, MessageKind::Success, text)
}

pub fn error(out: &mut dyn Write, text: impl fmt::Display) -> io::Result<()> {
    emit(out, MessageKind::Error, text)
}
