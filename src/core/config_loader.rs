// src/core/config_loader.rs

//! # Config Loader
//!
//! Loads the optional `config.toml`. A missing file means defaults; a file
//! that exists but cannot be read or parsed is an error, so typos do not go
//! unnoticed.
//!
//! ```toml
//! max_line_length = 255
//! whitelist_matching = "prefix"   # or "exact"
//! host_shell = "/bin/sh"
//! ```

use crate::{
    core::paths::{self, PathError},
    models::Settings,
};
use std::{fs, io::ErrorKind, path::Path};
use thiserror::Error;

/// Problems with the settings file. All of them are fatal.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A path in the settings could not be expanded.
    #[error(transparent)]
    Path(#[from] PathError),
    /// The file exists but could not be read.
    #[error("Could not read config file '{path}': {source}")]
    Io {
        /// The config file path.
        path: String,
        /// The underlying read error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or has unknown keys or bad values.
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        /// The config file path.
        path: String,
        /// The TOML error.
        #[source]
        source: toml::de::Error,
    },
    /// `max_line_length = 0` would reject every line.
    #[error("'max_line_length' must be greater than zero.")]
    ZeroLineLength,
}

/// Loads settings from `path`, falling back to defaults if it does not exist.
pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config file at '{}', using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(e) => {
            return Err(ConfigError::Io {
                path: path.display().to_string(),
                source: e,
            });
        }
    };

    let mut settings: Settings = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;

    if settings.max_line_length == 0 {
        return Err(ConfigError::ZeroLineLength);
    }
    if let Some(shell) = settings.host_shell.take() {
        settings.host_shell = Some(paths::expand_path(&shell)?.display().to_string());
    }

    log::debug!("Settings loaded from '{}': {:?}", path.display(), settings);
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WhitelistMatching;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.max_line_length, 255);
        assert_eq!(settings.whitelist_matching, WhitelistMatching::Prefix);
    }

    #[test]
    fn test_full_config() {
        let file = write_config(
            "max_line_length = 80\nwhitelist_matching = \"exact\"\nhost_shell = \"/bin/bash\"\n",
        );
        let settings = load_settings_from(file.path()).unwrap();
        assert_eq!(settings.max_line_length, 80);
        assert_eq!(settings.whitelist_matching, WhitelistMatching::Exact);
        assert_eq!(settings.host_shell.as_deref(), Some("/bin/bash"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let file = write_config("whitelist_matching = \"prefix\"\n");
        let settings = load_settings_from(file.path()).unwrap();
        assert_eq!(settings.max_line_length, 255);
        assert_eq!(settings.host_shell, None);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let file = write_config("whitelist_matching = \"fuzzy\"\n");
        assert!(matches!(
            load_settings_from(file.path()),
            Err(ConfigError::Parse { .. })
        ));

        let file = write_config("unknown_key = true\n");
        assert!(matches!(
            load_settings_from(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_zero_line_length_is_rejected() {
        let file = write_config("max_line_length = 0\n");
        assert!(matches!(
            load_settings_from(file.path()),
            Err(ConfigError::ZeroLineLength)
        ));
    }
}
