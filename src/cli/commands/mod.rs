//! Subcommand implementations.

/// Config display command handler.
pub mod config;

/// Translation pipeline handler.
pub mod translate;

/// Usage report command handler.
pub mod usage;
