//! Config display command handler.

use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::ui::Style;

/// Prints the resolved configuration with the auth key masked.
pub fn print_config() -> Result<()> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;
    let resolved = resolve_config(&ResolveOptions::default(), &file_config)?;

    println!("{}", Style::header("Configuration"));
    println!(
        "  {}  {}",
        Style::label("config file "),
        Style::secondary(manager.config_path().display())
    );
    println!(
        "  {}  {}",
        Style::label("auth key    "),
        Style::value(resolved.masked_auth_key())
    );
    println!(
        "  {}  {}",
        Style::label("server url  "),
        Style::value(&resolved.server_url)
    );
    println!(
        "  {}  {} -> {}",
        Style::label("languages   "),
        Style::code(&resolved.languages.source),
        Style::code(&resolved.languages.target)
    );
    println!(
        "  {}  {}",
        Style::label("output dir  "),
        Style::value(resolved.output_dir.display())
    );

    Ok(())
}
