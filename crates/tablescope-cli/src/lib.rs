//! Tablescope CLI library.
//!
//! This module exposes internal types for testing purposes.
//! The main entry point is the `tablescope` binary.

pub mod cli;
pub mod commands;
pub mod config;
#[cfg(feature = "database-source")]
pub mod database;
pub mod logging;
pub mod output;
pub mod source;

// Re-export commonly used types
pub use cli::Args;
