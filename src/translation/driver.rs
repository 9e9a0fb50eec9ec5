//! Sends segments to the backend one at a time, in document order.

use anyhow::{Context, Result};

use super::backend::{GlossaryHandle, TranslationBackend};
use crate::glossary::GlossaryEntries;
use crate::segment::Segment;

/// Uploads glossary entries, naming the remote glossary after the file.
pub async fn create_deepl_glossary<B>(
    backend: &B,
    name: &str,
    entries: &GlossaryEntries,
) -> Result<GlossaryHandle>
where
    B: TranslationBackend + ?Sized,
{
    backend
        .create_glossary(name, entries)
        .await
        .context("An error occurred when uploading your glossary to DeepL.")
}

/// Fills in `target_text` for every segment.
///
/// Empty segments get an empty translation without a backend call. A given
/// glossary is owned by this call and deleted from the backend on every exit
/// path, including a failed translation. `on_progress` runs once per segment.
pub async fn translate_segments<B, F>(
    backend: &B,
    segments: &mut [Segment],
    glossary: Option<GlossaryHandle>,
    mut on_progress: F,
) -> Result<()>
where
    B: TranslationBackend + ?Sized,
    F: FnMut(),
{
    let result = translate_each(backend, segments, glossary.as_ref(), &mut on_progress).await;

    let Some(glossary) = glossary else {
        return result;
    };

    let released = backend
        .delete_glossary(&glossary)
        .await
        .with_context(|| format!("Failed to delete glossary '{}' from DeepL", glossary.name));

    match (result, released) {
        (Ok(()), released) => released,
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(release_err)) => {
            crate::warning!("Warning: {release_err:#}");
            Err(err)
        }
    }
}

async fn translate_each<B, F>(
    backend: &B,
    segments: &mut [Segment],
    glossary: Option<&GlossaryHandle>,
    on_progress: &mut F,
) -> Result<()>
where
    B: TranslationBackend + ?Sized,
    F: FnMut(),
{
    for segment in segments.iter_mut() {
        segment.target_text = if segment.source_text.is_empty() {
            String::new()
        } else {
            backend.translate(&segment.source_text, glossary).await?
        };
        on_progress();
    }
    Ok(())
}
