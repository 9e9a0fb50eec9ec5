//! Language code validation and supported languages.

use anyhow::Result;

use crate::ui::Style;

/// Source language codes accepted by DeepL.
pub const SOURCE_LANGUAGES: &[(&str, &str)] = &[
    ("BG", "Bulgarian"),
    ("CS", "Czech"),
    ("DA", "Danish"),
    ("DE", "German"),
    ("EL", "Greek"),
    ("EN", "English"),
    ("ES", "Spanish"),
    ("ET", "Estonian"),
    ("FI", "Finnish"),
    ("FR", "French"),
    ("HU", "Hungarian"),
    ("ID", "Indonesian"),
    ("IT", "Italian"),
    ("JA", "Japanese"),
    ("KO", "Korean"),
    ("LT", "Lithuanian"),
    ("LV", "Latvian"),
    ("NB", "Norwegian (Bokmål)"),
    ("NL", "Dutch"),
    ("PL", "Polish"),
    ("PT", "Portuguese"),
    ("RO", "Romanian"),
    ("RU", "Russian"),
    ("SK", "Slovak"),
    ("SL", "Slovenian"),
    ("SV", "Swedish"),
    ("TR", "Turkish"),
    ("UK", "Ukrainian"),
    ("ZH", "Chinese"),
];

/// Target language codes accepted by DeepL.
pub const TARGET_LANGUAGES: &[(&str, &str)] = &[
    ("BG", "Bulgarian"),
    ("CS", "Czech"),
    ("DA", "Danish"),
    ("DE", "German"),
    ("EL", "Greek"),
    ("EN-GB", "English (British)"),
    ("EN-US", "English (American)"),
    ("ES", "Spanish"),
    ("ET", "Estonian"),
    ("FI", "Finnish"),
    ("FR", "French"),
    ("HU", "Hungarian"),
    ("ID", "Indonesian"),
    ("IT", "Italian"),
    ("JA", "Japanese"),
    ("KO", "Korean"),
    ("LT", "Lithuanian"),
    ("LV", "Latvian"),
    ("NB", "Norwegian (Bokmål)"),
    ("NL", "Dutch"),
    ("PL", "Polish"),
    ("PT-BR", "Portuguese (Brazilian)"),
    ("PT-PT", "Portuguese (European)"),
    ("RO", "Romanian"),
    ("RU", "Russian"),
    ("SK", "Slovak"),
    ("SL", "Slovenian"),
    ("SV", "Swedish"),
    ("TR", "Turkish"),
    ("UK", "Ukrainian"),
    ("ZH", "Chinese (simplified)"),
];

/// Source and target language of a translation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self {
            source: "JA".to_string(),
            target: "EN-US".to_string(),
        }
    }
}

impl LanguagePair {
    /// Base language codes in the lowercase form the glossary API expects
    /// (`EN-US` becomes `en`).
    pub fn glossary_codes(&self) -> (String, String) {
        (base_code(&self.source), base_code(&self.target))
    }
}

fn base_code(code: &str) -> String {
    code.split('-').next().unwrap_or(code).to_lowercase()
}

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Source languages"));
    for (code, name) in SOURCE_LANGUAGES {
        println!("  {:6} {}", Style::code(code), Style::secondary(name));
    }
    println!();
    println!("{}", Style::header("Target languages"));
    for (code, name) in TARGET_LANGUAGES {
        println!("  {:6} {}", Style::code(code), Style::secondary(name));
    }
}

/// Validates that both codes of the pair are supported in their role.
///
/// # Errors
///
/// Returns an error naming the first unsupported code.
pub fn validate_language_pair(pair: &LanguagePair) -> Result<()> {
    if !SOURCE_LANGUAGES.iter().any(|(code, _)| *code == pair.source) {
        anyhow::bail!(
            "Invalid source language code: '{}'\n\n\
             Run 'deepl-tmx languages' to see all supported codes.",
            pair.source
        );
    }
    if !TARGET_LANGUAGES.iter().any(|(code, _)| *code == pair.target) {
        anyhow::bail!(
            "Invalid target language code: '{}'\n\n\
             Run 'deepl-tmx languages' to see all supported codes.",
            pair.target
        );
    }
    Ok(())
}
