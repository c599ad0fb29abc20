// src/core/mod.rs

/// Per-command option availability by year.
pub mod capability;
/// Loading of the optional `config.toml`.
pub mod config_loader;
/// Parsing of descriptor files.
pub mod descriptor;
/// The static table of historical eras.
pub mod era_catalog;
/// Config file location and path expansion.
pub mod paths;
/// Turns a descriptor request into an era and a shell.
pub mod resolver;
/// The interactive `$ ` loop.
pub mod session;
