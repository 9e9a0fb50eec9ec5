//! Sentence segments and paragraph splitting.

use anyhow::Result;

use crate::input::DocumentReader;

/// Japanese full stop used as the sentence terminator.
pub const SENTENCE_TERMINATOR: char = '。';

/// One unit of source text paired with its translation.
///
/// `target_text` stays empty until the translation driver fills it in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    pub source_text: String,
    pub target_text: String,
}

impl Segment {
    pub fn new(source_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            target_text: String::new(),
        }
    }

    pub fn with_target(source_text: impl Into<String>, target_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            target_text: target_text.into(),
        }
    }
}

/// Reads a document and splits it into untranslated segments.
pub fn get_source_segments(path: &str) -> Result<Vec<Segment>> {
    let paragraphs = DocumentReader::read_paragraphs(path)?;
    Ok(segments_from_paragraphs(&paragraphs))
}

pub fn segments_from_paragraphs<S: AsRef<str>>(paragraphs: &[S]) -> Vec<Segment> {
    paragraphs
        .iter()
        .flat_map(|paragraph| split_paragraph(paragraph.as_ref()))
        .map(Segment::new)
        .collect()
}

/// Splits a paragraph holding two or more terminators into sentences.
///
/// Paragraphs with fewer than two terminators are returned verbatim, empty
/// ones included. Split pieces get their terminator back; the empty piece
/// after a trailing terminator is dropped.
pub fn split_paragraph(paragraph: &str) -> Vec<String> {
    if paragraph.matches(SENTENCE_TERMINATOR).count() < 2 {
        return vec![paragraph.to_string()];
    }

    paragraph
        .split(SENTENCE_TERMINATOR)
        .filter(|sentence| !sentence.is_empty())
        .map(|sentence| format!("{sentence}{SENTENCE_TERMINATOR}"))
        .collect()
}

/// Number of characters (Unicode scalar values) across all source texts.
pub fn source_char_count(segments: &[Segment]) -> usize {
    segments
        .iter()
        .map(|segment| segment.source_text.chars().count())
        .sum()
}
