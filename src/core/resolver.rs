// src/core/resolver.rs

//! Startup resolution: descriptor year to era, requested shell to session shell.

use crate::{
    constants::DEFAULT_SHELL,
    core::era_catalog::{CatalogError, EraCatalog},
    models::{Era, TeleportRequest},
};
use thiserror::Error;

/// Fatal problems found while resolving a descriptor.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StartupError {
    /// The year is below the catalog minimum.
    #[error("Year {year} is before the earliest known era ({earliest}).")]
    InvalidYear {
        /// The requested year.
        year: i32,
        /// The catalog's minimum year.
        earliest: i32,
    },
    /// The catalog had no era to offer.
    #[error("No era could be found in the catalog.")]
    EraNotFound,
}

/// The era and shell a session will run with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The era closest to the requested year.
    pub era: &'static Era,
    /// The shell the session reports, after any downgrade.
    pub shell: String,
    /// The requested shell, if it was replaced by the default.
    pub downgraded_from: Option<String>,
}

/// Turns a descriptor request into a session [`Resolution`].
///
/// The year is checked against the catalog minimum before any lookup. An
/// unsupported shell is not an error: it is replaced by `sh` and reported
/// through `downgraded_from`.
pub fn resolve(request: &TeleportRequest, catalog: &EraCatalog) -> Result<Resolution, StartupError> {
    let earliest = catalog.earliest_year().ok_or(StartupError::EraNotFound)?;
    if request.year < earliest {
        return Err(StartupError::InvalidYear {
            year: request.year,
            earliest,
        });
    }

    let era = catalog.closest_era(request.year).map_err(|e| match e {
        CatalogError::BeforeEarliest { year, earliest } => StartupError::InvalidYear { year, earliest },
        CatalogError::Empty => StartupError::EraNotFound,
    })?;

    if let Some(command) = &request.command {
        log::info!("Descriptor names command '{}' (informational only)", command);
    }

    let (shell, downgraded_from) = if era.supports_shell(&request.shell) {
        (request.shell.clone(), None)
    } else {
        log::debug!(
            "Shell '{}' is not available in {}; using '{}'",
            request.shell,
            era.year,
            DEFAULT_SHELL
        );
        (DEFAULT_SHELL.to_string(), Some(request.shell.clone()))
    };

    Ok(Resolution {
        era,
        shell,
        downgraded_from,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::descriptor;

    fn resolve_text(text: &str) -> Result<Resolution, StartupError> {
        resolve(&descriptor::parse(text), &EraCatalog::builtin())
    }

    #[test]
    fn test_default_shell_for_earliest_year() {
        let resolution = resolve_text("Time: 1971\n").unwrap();
        assert_eq!(resolution.era.year, 1971);
        assert_eq!(resolution.shell, "sh");
        assert_eq!(resolution.downgraded_from, None);
    }

    #[test]
    fn test_zsh_kept_in_1989() {
        let resolution = resolve_text("Time: 1985\nShell: zsh\n").unwrap();
        assert_eq!(resolution.era.year, 1989);
        assert_eq!(resolution.shell, "zsh");
    }

    #[test]
    fn test_unsupported_shell_is_downgraded() {
        let resolution = resolve_text("Shell: fish\nTime: 2023\n").unwrap();
        assert_eq!(resolution.era.year, 2023);
        assert_eq!(resolution.shell, "sh");
        assert_eq!(resolution.downgraded_from.as_deref(), Some("fish"));

        // bash exists in 1989 but not in 1973.
        let resolution = resolve_text("Time: 1980\nShell: bash\n").unwrap();
        assert_eq!(resolution.era.year, 1973);
        assert_eq!(resolution.shell, "sh");
    }

    #[test]
    fn test_invalid_years() {
        assert_eq!(
            resolve_text("Time: 1965\n"),
            Err(StartupError::InvalidYear {
                year: 1965,
                earliest: 1971
            })
        );
        // A missing Time: line defaults to year 0.
        assert!(matches!(
            resolve_text("Shell: sh\n"),
            Err(StartupError::InvalidYear { year: 0, .. })
        ));
    }

    #[test]
    fn test_empty_catalog_is_era_not_found() {
        let request = descriptor::parse("Time: 2000\n");
        assert_eq!(
            resolve(&request, &EraCatalog::new(&[])),
            Err(StartupError::EraNotFound)
        );
    }
}
