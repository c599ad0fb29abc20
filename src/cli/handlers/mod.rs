// src/cli/handlers/mod.rs

//! One module per CLI action.

/// `teleport run <descriptor-file>`.
pub mod run;
