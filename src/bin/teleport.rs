// src/bin/teleport.rs

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use std::{env, io};
use teleport::cli::{Cli, dispatcher};

/// Sets up logging, parses arguments, dispatches to the action handler and
/// turns any error into a message and exit status 1.
fn main() {
    env_logger::init();

    let program = env::args().next().unwrap_or_else(|| "teleport".to_string());

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version are not failures.
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            log::debug!("Argument parsing failed: {}", e);
            fail(&dispatcher::usage_error(&program));
        }
    };

    if let Err(e) = run_cli(&program, cli) {
        fail(&e);
    }
}

fn run_cli(program: &str, cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);
    dispatcher::dispatch(program, cli.args)
}

/// Centralized fatal error reporting. Fatal messages go to stdout, like the
/// rest of the emulator's output; only logging uses stderr.
fn fail(error: &anyhow::Error) -> ! {
    if let Err(e) = dispatcher::report_fatal(error, &mut io::stdout()) {
        log::error!("Could not report fatal error: {}", e);
    }
    std::process::exit(1);
}
