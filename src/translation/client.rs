use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

use super::backend::{GlossaryHandle, TranslationBackend, Usage};
use super::language::LanguagePair;
use crate::glossary::{GlossaryEntries, entries_to_tsv};

pub const FREE_SERVER_URL: &str = "https://api-free.deepl.com";
pub const PRO_SERVER_URL: &str = "https://api.deepl.com";

/// Picks the API host from the key: free-plan keys end in `:fx`.
pub fn default_server_url(auth_key: &str) -> &'static str {
    if auth_key.ends_with(":fx") {
        FREE_SERVER_URL
    } else {
        PRO_SERVER_URL
    }
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: [&'a str; 1],
    source_lang: &'a str,
    target_lang: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    glossary_id: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<TranslatedText>,
}

#[derive(Debug, Deserialize)]
struct TranslatedText {
    text: String,
}

#[derive(Debug, Serialize)]
struct CreateGlossaryRequest<'a> {
    name: &'a str,
    source_lang: &'a str,
    target_lang: &'a str,
    entries: String,
    entries_format: &'static str,
}

#[derive(Debug, Deserialize)]
struct GlossaryResponse {
    glossary_id: String,
    name: String,
    #[serde(default)]
    entry_count: usize,
}

#[derive(Debug, Deserialize)]
struct UsageResponse {
    #[serde(default)]
    character_count: u64,
}

/// Client for the DeepL REST API (v2).
pub struct DeepLClient {
    client: Client,
    server_url: String,
    auth_key: String,
    languages: LanguagePair,
}

impl DeepLClient {
    pub fn new(server_url: String, auth_key: String, languages: LanguagePair) -> Self {
        Self {
            client: Client::new(),
            server_url,
            auth_key,
            languages,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v2/{path}", self.server_url.trim_end_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request.header("Authorization", format!("DeepL-Auth-Key {}", self.auth_key))
    }

    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Response> {
        let response = self
            .authorize(request)
            .send()
            .await
            .with_context(|| format!("Failed to connect to DeepL API: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("DeepL request failed with status {status}: {body}");
        }

        Ok(response)
    }
}

#[async_trait]
impl TranslationBackend for DeepLClient {
    async fn translate(&self, text: &str, glossary: Option<&GlossaryHandle>) -> Result<String> {
        let url = self.url("translate");
        let body = TranslateRequest {
            text: [text],
            source_lang: &self.languages.source,
            target_lang: &self.languages.target,
            glossary_id: glossary.map(|g| g.id.as_str()),
        };

        let response: TranslateResponse = self
            .send(self.client.post(&url).json(&body), &url)
            .await?
            .json()
            .await
            .context("Failed to parse translation response")?;

        parse_translation(response)
    }

    async fn create_glossary(
        &self,
        name: &str,
        entries: &GlossaryEntries,
    ) -> Result<GlossaryHandle> {
        let url = self.url("glossaries");
        let (source_lang, target_lang) = self.languages.glossary_codes();
        let body = CreateGlossaryRequest {
            name,
            source_lang: &source_lang,
            target_lang: &target_lang,
            entries: entries_to_tsv(entries),
            entries_format: "tsv",
        };

        let response: GlossaryResponse = self
            .send(self.client.post(&url).json(&body), &url)
            .await?
            .json()
            .await
            .context("Failed to parse glossary response")?;

        Ok(GlossaryHandle {
            id: response.glossary_id,
            name: response.name,
            entry_count: response.entry_count,
        })
    }

    async fn delete_glossary(&self, glossary: &GlossaryHandle) -> Result<()> {
        let url = self.url(&format!("glossaries/{}", glossary.id));
        self.send(self.client.delete(&url), &url).await?;
        Ok(())
    }

    async fn usage(&self) -> Result<Usage> {
        let url = self.url("usage");
        let response: UsageResponse = self
            .send(self.client.get(&url), &url)
            .await?
            .json()
            .await
            .context("Failed to parse usage response")?;

        Ok(Usage {
            character_count: response.character_count,
        })
    }
}

fn parse_translation(response: TranslateResponse) -> Result<String> {
    response
        .translations
        .into_iter()
        .next()
        .map(|t| t.text)
        .ok_or_else(|| anyhow::anyhow!("DeepL returned no translation"))
}
