#![allow(clippy::unwrap_used)]
//! End-to-end pipeline tests against an in-memory backend.

use anyhow::Result;
use async_trait::async_trait;
use docx_rs::{Docx, Paragraph, Run};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

use deepl_tmx::cli::commands::translate::{PipelineOutcome, run_pipeline};
use deepl_tmx::config::ResolvedConfig;
use deepl_tmx::glossary::GlossaryEntries;
use deepl_tmx::input::validate_user_input;
use deepl_tmx::translation::{GlossaryHandle, LanguagePair, TranslationBackend, Usage};

/// Returns a fixed translation for every call and records what it saw.
struct FixedBackend {
    translation: String,
    consumed: u64,
    fail_translate: bool,
    translated: Mutex<Vec<String>>,
    glossaries: Mutex<Vec<(String, GlossaryEntries)>>,
    deleted: Mutex<Vec<String>>,
}

impl FixedBackend {
    fn new(translation: &str) -> Self {
        Self {
            translation: translation.to_string(),
            consumed: 0,
            fail_translate: false,
            translated: Mutex::new(Vec::new()),
            glossaries: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TranslationBackend for FixedBackend {
    async fn translate(&self, text: &str, _glossary: Option<&GlossaryHandle>) -> Result<String> {
        self.translated.lock().unwrap().push(text.to_string());
        if self.fail_translate {
            anyhow::bail!("connection reset");
        }
        Ok(self.translation.clone())
    }

    async fn create_glossary(&self, name: &str, entries: &GlossaryEntries) -> Result<GlossaryHandle> {
        self.glossaries
            .lock()
            .unwrap()
            .push((name.to_string(), entries.clone()));
        Ok(GlossaryHandle {
            id: "glossary-1".to_string(),
            name: name.to_string(),
            entry_count: entries.len(),
        })
    }

    async fn delete_glossary(&self, glossary: &GlossaryHandle) -> Result<()> {
        self.deleted.lock().unwrap().push(glossary.id.clone());
        Ok(())
    }

    async fn usage(&self) -> Result<Usage> {
        Ok(Usage {
            character_count: self.consumed,
        })
    }
}

fn write_docx(dir: &Path, paragraphs: &[&str]) -> String {
    let path = dir.join("small-PCT-JP.docx");
    let mut docx = Docx::new();
    for text in paragraphs {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
    }
    docx.build().pack(File::create(&path).unwrap()).unwrap();
    path.to_str().unwrap().to_string()
}

fn config(output_dir: PathBuf) -> ResolvedConfig {
    ResolvedConfig {
        auth_key: "test".to_string(),
        server_url: "http://localhost".to_string(),
        languages: LanguagePair::default(),
        output_dir,
    }
}

#[tokio::test]
async fn test_identical_segments_keep_order_and_translation() {
    let dir = TempDir::new().unwrap();
    let paragraphs = vec!["情報処理装置"; 10];
    let source = write_docx(dir.path(), &paragraphs);
    let input = validate_user_input(&["tmx", source.as_str()]).unwrap();
    let output = dir.path().join("output").join("small-PCT-JP.tmx");
    let backend = FixedBackend::new("Information processing apparatus");

    let outcome = run_pipeline(&backend, &input, &config(dir.path().join("output")), &output)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        PipelineOutcome::Written {
            path: output.clone(),
            segments: 10
        }
    );
    assert_eq!(backend.translated.lock().unwrap().len(), 10);

    let tmx = fs::read_to_string(&output).unwrap();
    assert_eq!(tmx.matches("<tu>").count(), 10);
    assert_eq!(
        tmx.matches("<seg>Information processing apparatus</seg>").count(),
        10
    );
    assert!(tmx.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE tmx SYSTEM \"tmx11.dtd\">\n<tmx version=\"1.1\">\n"));
}

#[tokio::test]
async fn test_sentences_are_split_before_translation() {
    let dir = TempDir::new().unwrap();
    let source = write_docx(dir.path(), &["[0034]", "一つ目の文。二つ目の文。"]);
    let input = validate_user_input(&["tmx", source.as_str()]).unwrap();
    let output = dir.path().join("pairs.tmx");
    let backend = FixedBackend::new("EN");

    run_pipeline(&backend, &input, &config(dir.path().to_path_buf()), &output)
        .await
        .unwrap();

    assert_eq!(
        *backend.translated.lock().unwrap(),
        vec!["[0034]", "一つ目の文。", "二つ目の文。"]
    );
    let tmx = fs::read_to_string(&output).unwrap();
    let first = tmx.find("<seg>[0034]</seg>").unwrap();
    let second = tmx.find("<seg>一つ目の文。</seg>").unwrap();
    let third = tmx.find("<seg>二つ目の文。</seg>").unwrap();
    assert!(first < second && second < third);
}

#[tokio::test]
async fn test_quota_exceeded_translates_nothing() {
    let dir = TempDir::new().unwrap();
    let source = write_docx(dir.path(), &["明細書"]);
    let input = validate_user_input(&["tmx", source.as_str()]).unwrap();
    let output = dir.path().join("output").join("small-PCT-JP.tmx");
    let mut backend = FixedBackend::new("Description");
    backend.consumed = 499_897;

    let outcome = run_pipeline(&backend, &input, &config(dir.path().join("output")), &output)
        .await
        .unwrap();

    assert_eq!(outcome, PipelineOutcome::QuotaExceeded { char_count: 3 });
    assert!(backend.translated.lock().unwrap().is_empty());
    assert!(!output.exists());
}

#[tokio::test]
async fn test_glossary_is_uploaded_under_file_name_and_deleted() {
    let dir = TempDir::new().unwrap();
    let source = write_docx(dir.path(), &["表示部"]);
    let glossary_path = dir.path().join("patent-terms.txt");
    fs::write(&glossary_path, "表示部\tdisplay unit\n撮像部\timaging unit\n").unwrap();
    let input = validate_user_input(&[
        "docx",
        source.as_str(),
        glossary_path.to_str().unwrap(),
    ])
    .unwrap();
    let output = dir.path().join("small-PCT-JP.docx");
    let backend = FixedBackend::new("display unit");

    run_pipeline(&backend, &input, &config(dir.path().to_path_buf()), &output)
        .await
        .unwrap();

    let glossaries = backend.glossaries.lock().unwrap();
    assert_eq!(glossaries.len(), 1);
    assert_eq!(glossaries[0].0, "patent-terms");
    assert_eq!(glossaries[0].1.len(), 2);
    assert_eq!(*backend.deleted.lock().unwrap(), vec!["glossary-1"]);
    assert!(output.exists());
}

#[tokio::test]
async fn test_empty_glossary_is_fatal_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let source = write_docx(dir.path(), &["表示部"]);
    let glossary_path = dir.path().join("glossary.txt");
    fs::write(&glossary_path, "no tabs in this file\n").unwrap();
    let input = validate_user_input(&[
        "tmx",
        source.as_str(),
        glossary_path.to_str().unwrap(),
    ])
    .unwrap();
    let output = dir.path().join("out.tmx");
    let backend = FixedBackend::new("display unit");

    let err = run_pipeline(&backend, &input, &config(dir.path().to_path_buf()), &output)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("did not contain any parsable entries"));
    assert!(backend.glossaries.lock().unwrap().is_empty());
    assert!(backend.translated.lock().unwrap().is_empty());
    assert!(!output.exists());
}

#[tokio::test]
async fn test_backend_failure_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let source = write_docx(dir.path(), &["一。", "二。"]);
    let input = validate_user_input(&["tmx", source.as_str()]).unwrap();
    let output = dir.path().join("out.tmx");
    let mut backend = FixedBackend::new("unused");
    backend.fail_translate = true;

    let err = run_pipeline(&backend, &input, &config(dir.path().to_path_buf()), &output)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("connection reset"));
    assert_eq!(backend.translated.lock().unwrap().len(), 1);
    assert!(!output.exists());
}
