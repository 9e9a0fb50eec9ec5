mod backend;
mod client;
mod driver;
mod language;
mod quota;

pub use backend::{GlossaryHandle, TranslationBackend, Usage};
pub use client::{DeepLClient, FREE_SERVER_URL, PRO_SERVER_URL, default_server_url};
pub use driver::{create_deepl_glossary, translate_segments};
pub use language::{
    LanguagePair, SOURCE_LANGUAGES, TARGET_LANGUAGES, print_languages, validate_language_pair,
};
pub use quota::{
    CHARACTER_CEILING, MONTHLY_LIMIT, check_deepl_usage, format_usage_report, is_within_quota,
    usage_report,
};
