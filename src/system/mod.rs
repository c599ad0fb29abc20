//! # System Interaction Layer
//!
//! The boundary between the emulator core and the host operating system.
//!
//! - **`executor`**: the [`executor::CommandExecutor`] seam and its host-shell
//!   implementation, which spawns accepted lines and streams their stdout back.

/// Host command execution.
pub mod executor;
