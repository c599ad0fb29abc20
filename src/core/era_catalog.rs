// src/core/era_catalog.rs

//! The built-in table of eras and closest-year lookup.

use crate::models::Era;
use thiserror::Error;

/// The built-in eras, in declaration order. Declaration order breaks distance ties.
static BUILTIN_ERAS: &[Era] = &[
    Era {
        year: 1971,
        commands: &["ls", "echo", "pwd"],
        shells: &["sh"],
    },
    Era {
        year: 1973,
        commands: &["ls", "echo", "pwd", "cat"],
        shells: &["sh"],
    },
    Era {
        year: 1989,
        commands: &["ls", "echo", "pwd", "cat", "grep"],
        shells: &["sh", "bash", "zsh"],
    },
    Era {
        year: 1990,
        commands: &["ls", "echo", "pwd", "cat", "grep", "mkdir", "rm", "touch"],
        shells: &["sh", "bash", "zsh"],
    },
    Era {
        year: 2023,
        commands: &[
            "ls", "echo", "pwd", "cat", "grep", "mkdir", "rm", "touch", "curl", "wget", "nano",
            "top",
        ],
        shells: &["sh", "bash", "zsh"],
    },
];

/// Why a catalog lookup produced no era.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// The requested year is older than every era.
    #[error("Year {year} precedes the earliest known era ({earliest}).")]
    BeforeEarliest {
        /// The requested year.
        year: i32,
        /// The catalog's minimum year.
        earliest: i32,
    },
    /// There are no eras at all.
    #[error("The era catalog is empty.")]
    Empty,
}

/// A read-only, ordered table of eras.
#[derive(Debug, Clone, Copy)]
pub struct EraCatalog {
    eras: &'static [Era],
}

impl Default for EraCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl EraCatalog {
    /// The catalog shipped with teleport.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_ERAS)
    }

    /// Wraps an arbitrary static table. Years are expected to be distinct.
    pub fn new(eras: &'static [Era]) -> Self {
        Self { eras }
    }

    /// All eras in declaration order.
    pub fn eras(&self) -> &'static [Era] {
        self.eras
    }

    /// The smallest year in the catalog, or `None` if it is empty.
    pub fn earliest_year(&self) -> Option<i32> {
        self.eras.iter().map(|era| era.year).min()
    }

    /// Exact lookup by year.
    pub fn find(&self, year: i32) -> Option<&'static Era> {
        self.eras.iter().find(|era| era.year == year)
    }

    /// Returns the era nearest to `year`.
    ///
    /// Eras are scanned in declaration order and the current best is only
    /// replaced on a strictly smaller distance, so ties go to the era declared
    /// first. Years before the earliest era are rejected.
    pub fn closest_era(&self, year: i32) -> Result<&'static Era, CatalogError> {
        let earliest = self.earliest_year().ok_or(CatalogError::Empty)?;
        if year < earliest {
            return Err(CatalogError::BeforeEarliest { year, earliest });
        }

        let mut best: Option<&'static Era> = None;
        for era in self.eras {
            let distance = era.year.abs_diff(year);
            match best {
                Some(current) if current.year.abs_diff(year) <= distance => {}
                _ => best = Some(era),
            }
        }

        let era = best.ok_or(CatalogError::Empty)?;
        log::debug!("Closest era to {} is {}", year, era.year);
        Ok(era)
    }
}
