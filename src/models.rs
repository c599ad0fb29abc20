// src/models.rs

//! Plain data types shared by the core and the CLI layer.

use crate::constants::{DEFAULT_MAX_LINE_LENGTH, DEFAULT_SHELL};
use serde::{Deserialize, Serialize};

/// A documented point in Unix history: the commands and shells that existed then.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Era {
    /// The year this era represents. Unique within a catalog.
    pub year: i32,
    /// Whitelisted command names, in declaration order.
    pub commands: &'static [&'static str],
    /// Shells available in this era, in declaration order.
    pub shells: &'static [&'static str],
}

impl Era {
    /// Returns true if `shell` is one of this era's shells.
    pub fn supports_shell(&self, shell: &str) -> bool {
        self.shells.contains(&shell)
    }
}

/// The request read from a descriptor file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeleportRequest {
    /// Target year. `0` when the descriptor has no usable `Time:` line.
    pub year: i32,
    /// Informational command name. Never enforced.
    pub command: Option<String>,
    /// Requested shell name.
    pub shell: String,
}

impl Default for TeleportRequest {
    fn default() -> Self {
        Self {
            year: 0,
            command: None,
            shell: DEFAULT_SHELL.to_string(),
        }
    }
}

/// How an input line is matched against an era's command whitelist.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WhitelistMatching {
    /// The raw line must start with a whitelisted name, so `lsfoo` passes as `ls`.
    /// Kept as the default for compatibility with the historical behavior.
    #[default]
    Prefix,
    /// The first whitespace-separated token must equal a whitelisted name.
    Exact,
}

/// User settings loaded from `config.toml`. Every field has a default.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Longest accepted input line, in bytes.
    pub max_line_length: usize,
    /// Whitelist matching mode.
    pub whitelist_matching: WhitelistMatching,
    /// Host shell used to run accepted lines. `None` picks the platform default.
    pub host_shell: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            whitelist_matching: WhitelistMatching::Prefix,
            host_shell: None,
        }
    }
}
