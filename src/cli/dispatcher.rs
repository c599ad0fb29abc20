//! Routes the command line to an action handler and reports fatal errors.

use crate::{cli::handlers, constants::RUN_ACTION};
use anyhow::{Result, anyhow};
use colored::*;
use std::io::{self, Write};

/// An action and the exact number of arguments it takes.
struct CommandDefinition {
    name: &'static str,
    arity: usize,
    handler: fn(Vec<String>) -> Result<()>,
}

/// The single source of truth for CLI actions.
static COMMAND_REGISTRY: &[CommandDefinition] = &[CommandDefinition {
    name: RUN_ACTION,
    arity: 1,
    handler: handlers::run::handle,
}];

fn find_command(name: &str) -> Option<&'static CommandDefinition> {
    COMMAND_REGISTRY.iter().find(|cmd| cmd.name == name)
}

/// Builds the usage error shown for every malformed invocation.
pub fn usage_error(program: &str) -> anyhow::Error {
    anyhow!(t!("cli.usage"), program = program)
}

/// Routes `teleport <action> [args...]` to its handler.
///
/// Unknown actions and wrong argument counts are usage errors.
pub fn dispatch(program: &str, all_args: Vec<String>) -> Result<()> {
    log::debug!("Dispatching args: {:?}", all_args);

    let mut args = all_args.into_iter();
    let command = args
        .next()
        .and_then(|name| find_command(&name))
        .ok_or_else(|| usage_error(program))?;

    let params: Vec<String> = args.collect();
    if params.len() != command.arity {
        return Err(usage_error(program));
    }

    (command.handler)(params)
}

/// Writes a fatal error the way every startup failure is shown: one line,
/// red when colors are enabled. The binary sends it to stdout.
pub fn report_fatal<W: Write>(error: &anyhow::Error, output: &mut W) -> io::Result<()> {
    writeln!(output, "{}", error.to_string().red())?;
    output.flush()
}
