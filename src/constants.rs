// src/constants.rs

//! Fixed names and literals shared across the crate.

/// The only CLI action currently understood (`teleport run <file>`).
pub const RUN_ACTION: &str = "run";

/// Descriptor key for the requested year.
pub const DESCRIPTOR_TIME_KEY: &str = "Time:";

/// Descriptor key for the informational command name.
pub const DESCRIPTOR_COMMAND_KEY: &str = "Command:";

/// Descriptor key for the requested shell.
pub const DESCRIPTOR_SHELL_KEY: &str = "Shell:";

/// Shell used when the descriptor names none, or names one the era lacks.
pub const DEFAULT_SHELL: &str = "sh";

/// Input that closes the session.
pub const EXIT_LITERAL: &str = "exit";

/// Input answered directly with the session's shell path.
pub const ECHO_SHELL_LITERAL: &str = "echo $SHELL";

/// Default cap on a single input line, in bytes.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 255;

/// Environment variable that overrides the configuration file location.
pub const CONFIG_PATH_ENV: &str = "TELEPORT_CONFIG";

/// Directory under the system config dir holding teleport's settings.
pub const CONFIG_DIR_NAME: &str = "teleport";

/// The name of the settings file inside the config directory.
pub const CONFIG_FILENAME: &str = "config.toml";
