//! # teleport
//!
//! A historical shell emulator. A small descriptor file names a year and a
//! shell; `teleport` picks the closest documented era of Unix history and runs
//! an interactive session in which only the commands and options of that era
//! are accepted. Accepted commands run on the host and their real output is
//! echoed back.

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

/// Argument parsing, dispatch and the `run` handler.
pub mod cli;
/// Shared names and literals.
pub mod constants;
/// Era selection, option rules, descriptor parsing, settings and the session loop.
pub mod core;
/// Plain data types.
pub mod models;
/// The boundary with the host operating system.
pub mod system;
