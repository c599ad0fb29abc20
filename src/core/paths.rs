// src/core/paths.rs

//! Locating `config.toml` and expanding `~` and `$VAR` in user paths.

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILENAME, CONFIG_PATH_ENV};
use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Failures locating or expanding paths.
#[derive(Error, Debug)]
pub enum PathError {
    /// The platform has no config directory (e.g. `HOME` is unset).
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
    /// `~` or an environment variable could not be expanded.
    #[error("Could not expand path '{path}': {reason}")]
    Expansion {
        /// The path as written.
        path: String,
        /// Why expansion failed.
        reason: String,
    },
}

/// Returns the path of the settings file.
///
/// `TELEPORT_CONFIG` wins when set. Otherwise the file lives in the system
/// config directory (`~/.config/teleport/config.toml` on Linux). The file is
/// not required to exist.
pub fn get_config_path() -> Result<PathBuf, PathError> {
    config_path_from(env::var(CONFIG_PATH_ENV).ok())
}

/// Same as [`get_config_path`], with the override passed in explicitly.
pub fn config_path_from(override_path: Option<String>) -> Result<PathBuf, PathError> {
    match override_path.filter(|p| !p.trim().is_empty()) {
        Some(path) => expand_path(&path),
        None => Ok(dirs::config_dir()
            .ok_or(PathError::ConfigDirNotFound)?
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILENAME)),
    }
}

/// Expands `~` and environment variables (`$VAR`, `${VAR}`) in a path.
pub fn expand_path(path: &str) -> Result<PathBuf, PathError> {
    let expanded = shellexpand::full(path).map_err(|e| PathError::Expansion {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    Ok(PathBuf::from(expanded.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_is_used_verbatim_when_plain() {
        let path = config_path_from(Some("/tmp/teleport.toml".to_string())).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/teleport.toml"));
    }

    #[test]
    fn test_blank_override_falls_back_to_config_dir() {
        if let Some(dir) = dirs::config_dir() {
            let path = config_path_from(Some("  ".to_string())).unwrap();
            assert_eq!(path, dir.join("teleport").join("config.toml"));
        }
    }

    #[test]
    fn test_expand_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_path("~/x.toml").unwrap(), home.join("x.toml"));
        }
    }

    #[test]
    fn test_expand_unknown_variable_fails() {
        let result = expand_path("$TELEPORT_SURELY_UNDEFINED_VAR_42/config.toml");
        assert!(matches!(result, Err(PathError::Expansion { .. })));
    }
}
