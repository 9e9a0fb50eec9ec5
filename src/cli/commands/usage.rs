//! Usage report command handler.

use anyhow::Result;

use super::translate::load_resolved_config;
use crate::translation::{DeepLClient, usage_report};
use crate::ui::Spinner;

/// Prints the current month's DeepL character usage to stdout.
pub async fn print_usage() -> Result<()> {
    let config = load_resolved_config(None)?;
    let client = DeepLClient::new(config.server_url, config.auth_key, config.languages);

    let spinner = Spinner::new("Fetching usage...");
    let report = usage_report(&client).await?;
    spinner.stop();

    println!("{report}");
    Ok(())
}
