// src/core/session.rs

//! # Shell Session
//!
//! The interactive read-eval loop. Each input line is validated against the
//! era's command whitelist and the [`CapabilityPolicy`], then either rejected
//! with a diagnostic or handed to a [`CommandExecutor`].
//!
//! ```text
//! AwaitingInput -> Validating -> Rejected  -> AwaitingInput
//!                             -> Executing -> AwaitingInput
//! AwaitingInput -> Closed   (end of input or `exit`)
//! ```

use crate::{
    constants::{ECHO_SHELL_LITERAL, EXIT_LITERAL},
    core::capability::CapabilityPolicy,
    models::{Era, Settings, WhitelistMatching},
    system::executor::CommandExecutor,
};
use std::io::{self, BufRead, Read, Write};
use thiserror::Error;

/// Failures that end a session early.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[error("Session I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// What the session decided to do with one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineVerdict {
    /// Close the session.
    Exit,
    /// Answer `echo $SHELL` directly.
    EchoShell,
    /// The line is longer than the configured maximum.
    TooLong,
    /// No whitelisted command matches the line.
    Unavailable,
    /// Options that did not exist yet, in the order they appeared.
    UnsupportedOptions(Vec<String>),
    /// Run the line as typed.
    Execute,
}

/// Returns true if `line` names a command from `era`'s whitelist.
///
/// In `Prefix` mode this is a raw prefix test, so `lsfoo` is accepted as `ls`.
/// That looseness is historical behavior and may be a defect; `Exact` mode
/// compares the first token instead. All whitelist decisions go through here.
pub fn is_whitelisted(era: &Era, line: &str, matching: WhitelistMatching) -> bool {
    match matching {
        WhitelistMatching::Prefix => era.commands.iter().any(|cmd| line.starts_with(cmd)),
        WhitelistMatching::Exact => line
            .split_whitespace()
            .next()
            .is_some_and(|first| era.commands.contains(&first)),
    }
}

/// Result of reading one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineRead {
    /// No bytes left.
    Eof,
    /// The whole line fits the limit.
    Complete,
    /// The line exceeded the limit; its remainder was discarded.
    Truncated,
}

/// Reads one line into `buffer`, never holding more than `limit` bytes plus a
/// `\r\n` terminator. Longer lines are consumed up to their newline and
/// reported as [`LineRead::Truncated`].
fn read_bounded_line<R: BufRead>(input: &mut R, limit: usize, buffer: &mut Vec<u8>) -> io::Result<LineRead> {
    buffer.clear();
    let cap = u64::try_from(limit.saturating_add(2)).unwrap_or(u64::MAX);
    if input.by_ref().take(cap).read_until(b'\n', buffer)? == 0 {
        return Ok(LineRead::Eof);
    }
    if buffer.ends_with(b"\n") || buffer.len() <= limit {
        return Ok(LineRead::Complete);
    }

    loop {
        let available = input.fill_buf()?;
        if available.is_empty() {
            break;
        }
        match available.iter().position(|&b| b == b'\n') {
            Some(newline) => {
                input.consume(newline + 1);
                break;
            }
            None => {
                let len = available.len();
                input.consume(len);
            }
        }
    }
    buffer.clear();
    Ok(LineRead::Truncated)
}

/// An interactive session bound to one era and one shell for its whole life.
#[derive(Debug)]
pub struct ShellSession<'a, E: CommandExecutor> {
    era: &'a Era,
    shell: String,
    policy: &'a CapabilityPolicy,
    settings: Settings,
    executor: E,
}

impl<'a, E: CommandExecutor> ShellSession<'a, E> {
    /// Creates a session. Era and shell are fixed from here on.
    pub fn new(
        era: &'a Era,
        shell: impl Into<String>,
        policy: &'a CapabilityPolicy,
        settings: Settings,
        executor: E,
    ) -> Self {
        Self {
            era,
            shell: shell.into(),
            policy,
            settings,
            executor,
        }
    }

    /// The era this session enforces.
    pub fn era(&self) -> &Era {
        self.era
    }

    /// The shell reported by `echo $SHELL`.
    pub fn shell(&self) -> &str {
        &self.shell
    }

    /// Gives back the executor, e.g. to inspect a test double.
    pub fn into_executor(self) -> E {
        self.executor
    }

    /// Classifies a single line (without its line terminator). Pure.
    pub fn evaluate(&self, line: &str) -> LineVerdict {
        if line == EXIT_LITERAL {
            return LineVerdict::Exit;
        }
        if line == ECHO_SHELL_LITERAL {
            return LineVerdict::EchoShell;
        }
        if line.len() > self.settings.max_line_length {
            return LineVerdict::TooLong;
        }
        if !is_whitelisted(self.era, line, self.settings.whitelist_matching) {
            return LineVerdict::Unavailable;
        }

        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            return LineVerdict::Unavailable;
        };
        let unsupported: Vec<String> = tokens
            .filter(|token| token.starts_with('-'))
            .filter(|option| !self.policy.is_option_supported(command, option, self.era.year))
            .map(str::to_string)
            .collect();

        if unsupported.is_empty() {
            LineVerdict::Execute
        } else {
            LineVerdict::UnsupportedOptions(unsupported)
        }
    }

    /// Runs the loop until `exit` or end of input.
    ///
    /// Writes a `$ ` prompt before every read. Rejections are reported on
    /// `output` and never reach the executor. A command that cannot be spawned
    /// is logged and otherwise ignored. Lines are read as bytes, at most
    /// `max_line_length` plus a line terminator at a time; invalid UTF-8 is
    /// replaced rather than ending the session.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<(), SessionError> {
        let mut buffer = Vec::new();
        loop {
            write!(output, "{}", t!("session.prompt"))?;
            output.flush()?;

            let complete = match read_bounded_line(&mut input, self.settings.max_line_length, &mut buffer)? {
                LineRead::Eof => {
                    log::debug!("End of input, closing session");
                    return Ok(());
                }
                LineRead::Complete => true,
                LineRead::Truncated => false,
            };
            if !complete {
                writeln!(
                    output,
                    t!("session.error.line_too_long"),
                    limit = self.settings.max_line_length
                )?;
                continue;
            }

            let decoded = String::from_utf8_lossy(&buffer);
            let line = decoded.trim_end_matches(['\n', '\r']);

            let verdict = self.evaluate(line);
            log::debug!("'{}' -> {:?}", line, verdict);

            match verdict {
                LineVerdict::Exit => return Ok(()),
                LineVerdict::EchoShell => {
                    writeln!(output, t!("session.echo_shell"), shell = self.shell)?;
                }
                LineVerdict::TooLong => {
                    writeln!(
                        output,
                        t!("session.error.line_too_long"),
                        limit = self.settings.max_line_length
                    )?;
                }
                LineVerdict::Unavailable => {
                    writeln!(output, t!("session.error.unavailable"), year = self.era.year)?;
                }
                LineVerdict::UnsupportedOptions(options) => {
                    for option in &options {
                        writeln!(
                            output,
                            t!("session.error.option_unsupported"),
                            option = option,
                            year = self.era.year
                        )?;
                    }
                }
                LineVerdict::Execute => {
                    if let Err(e) = self.executor.execute(line, &mut output) {
                        log::warn!("{}", e);
                    }
                    output.flush()?;
                }
            }
        }
    }
}
