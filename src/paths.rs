//! XDG-style path utilities for the configuration directory.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Returns the configuration directory for deepl-tmx.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/deepl-tmx` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/deepl-tmx` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join("deepl-tmx")),
        _ => Ok(home_dir()?.join(".config").join("deepl-tmx")),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
