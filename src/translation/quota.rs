//! Pre-flight quota check and usage reporting.

use anyhow::Result;

use super::backend::TranslationBackend;

/// Advertised monthly character limit of the free plan.
pub const MONTHLY_LIMIT: u64 = 500_000;

/// Internal ceiling, 100 characters under the plan limit to absorb
/// differences between local and server-side character counting.
pub const CHARACTER_CEILING: u64 = MONTHLY_LIMIT - 100;

/// Returns `true` when translating `char_count` more characters stays under
/// the ceiling.
pub const fn is_within_quota(char_count: u64, consumed: u64) -> bool {
    char_count.saturating_add(consumed) < CHARACTER_CEILING
}

/// Fetches current usage and checks `char_count` against the ceiling.
pub async fn check_deepl_usage<B>(char_count: u64, backend: &B) -> Result<bool>
where
    B: TranslationBackend + ?Sized,
{
    let usage = backend.usage().await?;
    Ok(is_within_quota(char_count, usage.character_count))
}

pub fn format_usage_report(character_count: u64) -> String {
    format!("Current DeepL usage for this month: {character_count} (monthly limit: {MONTHLY_LIMIT})")
}

/// Fetches usage and formats the report line.
pub async fn usage_report<B>(backend: &B) -> Result<String>
where
    B: TranslationBackend + ?Sized,
{
    let usage = backend.usage().await?;
    Ok(format_usage_report(usage.character_count))
}
