use anyhow::Result;
use async_trait::async_trait;

use crate::glossary::GlossaryEntries;

/// A glossary that has been uploaded to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryHandle {
    pub id: String,
    pub name: String,
    pub entry_count: usize,
}

/// Character usage for the current billing period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    pub character_count: u64,
}

/// Machine-translation service used by the translation driver.
///
/// The language pair is fixed when the backend is constructed.
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Translates a single string, optionally against an uploaded glossary.
    async fn translate(&self, text: &str, glossary: Option<&GlossaryHandle>) -> Result<String>;

    /// Uploads glossary entries under the given display name.
    async fn create_glossary(&self, name: &str, entries: &GlossaryEntries)
    -> Result<GlossaryHandle>;

    /// Removes a previously uploaded glossary.
    async fn delete_glossary(&self, glossary: &GlossaryHandle) -> Result<()>;

    /// Reports usage for the current period.
    async fn usage(&self) -> Result<Usage>;
}
