//! Thin command-line front end over [`WorkingContextManager`].
//!
//! Each invocation opens the data directory, runs one command and drops the manager,
//! which writes the checkpoint for the next run.

pub mod commands;
pub mod help;
pub mod output;

use std::{
    env,
    io::{self, Write},
};

use thiserror::Error;
use tracing::debug;

use crate::{
    config::{ConfigError, ConfigManager, DataPaths},
    core::{Clock, SystemClock, WorkingContextManager},
    errors::FinanceError,
    utils::build_info,
};

pub use commands::Command;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] FinanceError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Unrecognized command `{input}`; run `help` to list commands")]
    UnknownCommand {
        input: String,
        suggestion: Option<&'static str>,
    },
    #[error("Output error: {0}")]
    Io(#[from] io::Error),
}

/// Entry point used by the `finance_core_cli` binary.
pub fn run_cli() -> Result<(), CliError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args, DataPaths::from_env(), Box::new(SystemClock), &mut out)
}

/// Parses `args` and executes the command against the data under `paths`.
pub fn run(
    args: &[String],
    paths: DataPaths,
    clock: Box<dyn Clock>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let command = match Command::parse(args) {
        Ok(command) => command,
        Err(err) => {
            if let CliError::UnknownCommand {
                suggestion: Some(best),
                ..
            } = &err
            {
                output::info(out, format!("Suggestion: `{best}`?"))?;
            }
            return Err(err);
        }
    };
    debug!(?command, "dispatching command");

    match command {
        Command::Help => help::print_overview(out)?,
        Command::Version => print_version(out)?,
        command => {
            let config = ConfigManager::for_paths(&paths).load()?;
            let mut manager = WorkingContextManager::init(paths, clock)?;
            commands::execute(command, &mut manager, &config, out)?;
        }
    }
    Ok(())
}

/// Prints `err` as an error message on stderr.
pub fn report_error(err: &CliError) {
    let stderr = io::stderr();
    let mut handle = stderr.lock();
    // Nothing sensible remains if stderr itself is gone.
    let _ = output::error(&mut handle, err);
}

pub(crate) fn print_version(out: &mut dyn Write) -> io::Result<()> {
    let meta = build_info::current();
    writeln!(out, "Finance Core {}", meta.version)?;
    for (label, value) in meta.rows() {
        writeln!(out, "  {label:<12} {value}")?;
    }
    Ok(())
}
