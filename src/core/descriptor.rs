// src/core/descriptor.rs

//! Parsing of `.teleport` descriptor files.
//!
//! ```text
//! Time: 1985
//! Command: ls
//! Shell: zsh
//! ```
//!
//! Lines are independent and may appear in any order. Unknown lines and lines
//! whose value does not parse are ignored; a later valid line for the same key
//! replaces an earlier one.

use crate::{
    constants::{DESCRIPTOR_COMMAND_KEY, DESCRIPTOR_SHELL_KEY, DESCRIPTOR_TIME_KEY},
    models::TeleportRequest,
};
use lazy_static::lazy_static;
use regex::Regex;
use std::{fs, path::Path};
use thiserror::Error;

lazy_static! {
    // A leading, optionally signed integer. Anything after it is ignored.
    static ref YEAR_RE: Regex = Regex::new(r"^[+-]?[0-9]+").expect("year pattern is valid");
}

/// Failures while loading a descriptor file.
#[derive(Error, Debug)]
pub enum DescriptorError {
    /// The file could not be read.
    #[error("Could not read descriptor '{path}': {source}")]
    Io {
        /// The descriptor path as given.
        path: String,
        /// The underlying read error.
        #[source]
        source: std::io::Error,
    },
}

/// Reads and parses the descriptor at `path`. Bytes that are not valid UTF-8
/// are replaced, so an odd comment line cannot make the file unreadable.
pub fn load(path: &Path) -> Result<TeleportRequest, DescriptorError> {
    let bytes = fs::read(path).map_err(|e| DescriptorError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let request = parse(&String::from_utf8_lossy(&bytes));
    log::debug!("Descriptor '{}' parsed: {:?}", path.display(), request);
    Ok(request)
}

/// Parses descriptor text. Never fails; missing fields keep their defaults.
pub fn parse(content: &str) -> TeleportRequest {
    let mut request = TeleportRequest::default();

    for line in content.lines() {
        if let Some(value) = field_value(line, DESCRIPTOR_TIME_KEY) {
            if let Some(year) = parse_year(value) {
                request.year = year;
            }
        } else if let Some(value) = field_value(line, DESCRIPTOR_COMMAND_KEY) {
            if let Some(word) = first_word(value) {
                request.command = Some(word.to_string());
            }
        } else if let Some(value) = field_value(line, DESCRIPTOR_SHELL_KEY) {
            if let Some(word) = first_word(value) {
                request.shell = word.to_string();
            }
        }
    }

    request
}

/// Returns the text after `key` if the line starts with it, left-trimmed.
fn field_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    line.strip_prefix(key).map(str::trim_start)
}

fn parse_year(value: &str) -> Option<i32> {
    YEAR_RE.find(value).and_then(|m| m.as_str().parse().ok())
}

fn first_word(value: &str) -> Option<&str> {
    value.split_whitespace().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_all_fields() {
        let request = parse("Time: 1985\nCommand: ls\nShell: zsh\n");
        assert_eq!(request.year, 1985);
        assert_eq!(request.command.as_deref(), Some("ls"));
        assert_eq!(request.shell, "zsh");
    }

    #[test]
    fn test_parse_defaults_when_fields_missing() {
        let request = parse("just a comment\n\n");
        assert_eq!(request, TeleportRequest::default());
        assert_eq!(request.year, 0);
        assert_eq!(request.shell, "sh");
    }

    #[test]
    fn test_parse_is_order_independent_and_last_wins() {
        let request = parse("Shell: bash\nTime: 1971\nShell: zsh\nTime: 2023\n");
        assert_eq!(request.year, 2023);
        assert_eq!(request.shell, "zsh");
    }

    #[test]
    fn test_parse_year_leniency() {
        assert_eq!(parse("Time:1990").year, 1990);
        assert_eq!(parse("Time:    1973 AD").year, 1973);
        assert_eq!(parse("Time: 1985abc").year, 1985);
        assert_eq!(parse("Time: -5").year, -5);
        assert_eq!(parse("Time: +2023").year, 2023);
    }

    #[test]
    fn test_parse_ignores_unparseable_values() {
        let request = parse("Time: 1989\nTime: soon\nShell:\n");
        assert_eq!(request.year, 1989);
        assert_eq!(request.shell, "sh");
        // Out of range for i32.
        assert_eq!(parse("Time: 99999999999").year, 0);
    }

    #[test]
    fn test_parse_keys_must_start_the_line() {
        let request = parse("  Time: 1990\n# Shell: zsh\ntime: 1990\n");
        assert_eq!(request.year, 0);
        assert_eq!(request.shell, "sh");
    }

    #[test]
    fn test_parse_takes_first_word() {
        let request = parse("Shell: zsh --login\nCommand: cat -n file\n");
        assert_eq!(request.shell, "zsh");
        assert_eq!(request.command.as_deref(), Some("cat"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Time: 1980\r\nShell: sh\r\n").unwrap();
        file.flush().unwrap();

        let request = load(file.path()).unwrap();
        assert_eq!(request.year, 1980);
        assert_eq!(request.shell, "sh");
    }

    #[test]
    fn test_load_tolerates_non_utf8_bytes() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"# caf\xe9 au lait\nTime: 1990\nShell: bash\n").unwrap();
        file.flush().unwrap();

        let request = load(file.path()).unwrap();
        assert_eq!(request.year, 1990);
        assert_eq!(request.shell, "bash");
    }

    #[test]
    fn test_load_missing_file() {
        let result = load(Path::new("definitely_missing_descriptor.teleport"));
        assert!(matches!(result, Err(DescriptorError::Io { .. })));
    }
}
