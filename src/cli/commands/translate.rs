use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::glossary::{extract_glossary_entries, glossary_name};
use crate::input::{ValidatedInput, check_user_input};
use crate::segment::{Segment, get_source_segments, source_char_count};
use crate::translation::{
    DeepLClient, TranslationBackend, check_deepl_usage, create_deepl_glossary, translate_segments,
    usage_report,
};
use crate::ui::{SegmentProgress, Spinner, Style};
use crate::writer::{output_path, write_output};
use crate::{info, status, warning};

pub struct TranslateOptions {
    pub inputs: Vec<String>,
    pub output_dir: Option<PathBuf>,
    pub dry_run: bool,
}

/// What a pipeline run ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Segments were translated and written to `path`.
    Written { path: PathBuf, segments: usize },
    /// The pre-flight check found the monthly quota would be exceeded.
    QuotaExceeded { char_count: usize },
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let Some(input) = check_user_input(&options.inputs) else {
        return Ok(());
    };

    if options.dry_run {
        let segments = get_source_segments(&input.translation_file)?;
        print_segments(&segments);
        return Ok(());
    }

    let config = load_resolved_config(options.output_dir)?;
    let client = DeepLClient::new(
        config.server_url.clone(),
        config.auth_key.clone(),
        config.languages.clone(),
    );
    let path = output_path(&config.output_dir, &input.translation_file, input.format);

    run_pipeline(&client, &input, &config, &path).await?;

    let spinner = Spinner::new("Fetching usage...");
    let report = usage_report(&client).await?;
    spinner.stop();
    println!("{report}");

    Ok(())
}

/// Extracts, checks quota, translates and writes one document.
///
/// Nothing is written unless every segment was translated.
pub async fn run_pipeline<B>(
    backend: &B,
    input: &ValidatedInput,
    config: &ResolvedConfig,
    path: &Path,
) -> Result<PipelineOutcome>
where
    B: TranslationBackend + ?Sized,
{
    let mut segments = get_source_segments(&input.translation_file)?;
    let char_count = source_char_count(&segments);
    status!(
        "Extracted {} segments ({} characters) from {}",
        segments.len(),
        char_count,
        input.translation_file
    );

    let spinner = Spinner::new("Checking DeepL usage...");
    let within_quota = check_deepl_usage(char_count as u64, backend).await?;
    spinner.stop();

    if !within_quota {
        warning!(
            "{} Translating {char_count} characters would exceed the monthly DeepL limit.",
            Style::warning("Quota:")
        );
        return Ok(PipelineOutcome::QuotaExceeded { char_count });
    }

    let glossary = match &input.glossary_file {
        Some(glossary_file) => {
            let entries = extract_glossary_entries(glossary_file)?;
            let name = glossary_name(glossary_file);
            let spinner = Spinner::new("Uploading glossary...");
            let glossary = create_deepl_glossary(backend, &name, &entries).await?;
            spinner.stop();
            info!(
                "Uploaded glossary '{}' ({} entries)",
                glossary.name,
                glossary.entry_count
            );
            Some(glossary)
        }
        None => None,
    };

    let progress = SegmentProgress::new(segments.len());
    translate_segments(backend, &mut segments, glossary, || progress.advance()).await?;
    drop(progress);

    write_output(path, input.format, &segments, &config.languages)?;
    status!(
        "{} Wrote {} segments to {}",
        Style::success("Done."),
        segments.len(),
        Style::value(path.display())
    );

    Ok(PipelineOutcome::Written {
        path: path.to_path_buf(),
        segments: segments.len(),
    })
}

fn print_segments(segments: &[Segment]) {
    for segment in segments {
        println!("{}", segment.source_text);
    }
    status!(
        "{} segments, {} characters",
        segments.len(),
        source_char_count(segments)
    );
}

pub fn load_resolved_config(output_dir: Option<PathBuf>) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;
    resolve_config(&ResolveOptions { output_dir }, &file_config)
}
