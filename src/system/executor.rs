// src/system/executor.rs

//! Running accepted lines through the host shell.

use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Command as StdCommand, Stdio};
use thiserror::Error;

/// Failures running a command line on the host.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The line was blank.
    #[error("No command specified to run.")]
    EmptyCommand,
    /// The host shell could not be started.
    #[error("Command '{0}' could not be executed: {1}")]
    Spawn(String, io::Error),
    /// Copying the command's stdout to the session failed.
    #[error("Output of command '{0}' could not be relayed: {1}")]
    Stream(String, io::Error),
    /// The child could not be reaped.
    #[error("Failed waiting for command '{0}': {1}")]
    Wait(String, io::Error),
}

/// Runs an accepted input line and relays its standard output.
///
/// The session only ever hands over lines that passed validation. Implementors
/// must drain the command's output completely before returning.
pub trait CommandExecutor {
    /// Runs `command_line` and writes its stdout to `output` as it arrives.
    fn execute(&mut self, command_line: &str, output: &mut dyn Write) -> Result<(), ExecutionError>;
}

/// Executes lines through the host's shell (`sh -c` or `cmd /C`).
///
/// Stdout is piped back line by line, stderr goes straight to the terminal and
/// stdin is closed so the child cannot read the session's input.
#[derive(Debug, Clone)]
pub struct HostShellExecutor {
    program: PathBuf,
    flag: &'static str,
}

impl Default for HostShellExecutor {
    fn default() -> Self {
        if cfg!(target_os = "windows") {
            Self::new("cmd")
        } else {
            Self::new("sh")
        }
    }
}

impl HostShellExecutor {
    /// Uses `program` as the host shell. The flag is chosen from its name.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        let program = program.into();
        let is_cmd = program
            .file_stem()
            .is_some_and(|stem| stem.eq_ignore_ascii_case("cmd"));
        Self {
            program,
            flag: if is_cmd { "/C" } else { "-c" },
        }
    }
}

impl CommandExecutor for HostShellExecutor {
    fn execute(&mut self, command_line: &str, output: &mut dyn Write) -> Result<(), ExecutionError> {
        let trimmed_command = command_line.trim();
        if trimmed_command.is_empty() {
            return Err(ExecutionError::EmptyCommand);
        }

        let mut child = StdCommand::new(&self.program)
            .arg(self.flag)
            .arg(command_line)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| ExecutionError::Spawn(trimmed_command.to_string(), e))?;

        // Relay bytes verbatim, one line at a time, until the pipe closes.
        let relayed = match child.stdout.take() {
            Some(stdout) => relay_lines(BufReader::new(stdout), output),
            None => Ok(()),
        };

        // Always reap the child, even if relaying failed midway.
        let status = child
            .wait()
            .map_err(|e| ExecutionError::Wait(trimmed_command.to_string(), e))?;
        relayed.map_err(|e| ExecutionError::Stream(trimmed_command.to_string(), e))?;

        if !status.success() {
            log::warn!("Command '{}' exited with {:?}", trimmed_command, status.code());
        }
        Ok(())
    }
}

fn relay_lines<R: BufRead>(mut reader: R, output: &mut dyn Write) -> io::Result<()> {
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        output.write_all(&line)?;
        output.flush()?;
    }
    Ok(())
}
