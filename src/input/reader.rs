use anyhow::{Context, Result, anyhow, bail};
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};
use std::fs;

const MAX_DOCUMENT_SIZE: usize = 50 * 1024 * 1024; // 50MB

/// Reads the body paragraphs of a `.docx` file in document order.
pub struct DocumentReader;

impl DocumentReader {
    pub fn read_paragraphs(path: &str) -> Result<Vec<String>> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

        let size = metadata.len() as usize;
        if size > MAX_DOCUMENT_SIZE {
            bail!(
                "Error: Document size ({:.1} MB) exceeds maximum allowed size (50 MB).\n\n\
                 Consider splitting the document into smaller parts.",
                size as f64 / 1024.0 / 1024.0
            );
        }

        let bytes = fs::read(path).with_context(|| format!("Failed to read file: {path}"))?;
        Self::paragraphs_from_bytes(&bytes).with_context(|| format!("Failed to parse document: {path}"))
    }

    pub fn paragraphs_from_bytes(bytes: &[u8]) -> Result<Vec<String>> {
        let docx = docx_rs::read_docx(bytes).map_err(|e| anyhow!("Malformed docx: {e}"))?;

        Ok(docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
                _ => None,
            })
            .collect())
    }
}

// Tables, fields and tracked changes are not part of the paragraph text.
fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_children_text(&paragraph.children, &mut text);
    text
}

fn push_children_text(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(hyperlink) => push_children_text(&hyperlink.children, text),
            _ => {}
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Hyperlink, HyperlinkType, Run};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraphs {
            let mut paragraph = Paragraph::new();
            if !text.is_empty() {
                paragraph = paragraph.add_run(Run::new().add_text(*text));
            }
            docx = docx.add_paragraph(paragraph);
        }
        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_paragraphs_in_document_order() {
        let bytes = build_docx(&["明細書", "", "技術分野"]);
        let paragraphs = DocumentReader::paragraphs_from_bytes(&bytes).unwrap();
        assert_eq!(paragraphs, vec!["明細書", "", "技術分野"]);
    }

    #[test]
    fn test_runs_are_concatenated() {
        let docx = Docx::new().add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("本技術は、"))
                .add_run(Run::new().add_text("情報処理装置に関する。")),
        );
        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();

        let paragraphs = DocumentReader::paragraphs_from_bytes(&cursor.into_inner()).unwrap();
        assert_eq!(paragraphs, vec!["本技術は、情報処理装置に関する。"]);
    }

    #[test]
    fn test_hyperlink_text_is_kept() {
        let docx = Docx::new().add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("詳細は"))
                .add_hyperlink(
                    Hyperlink::new("ref1", HyperlinkType::Anchor)
                        .add_run(Run::new().add_text("特許文献1")),
                )
                .add_run(Run::new().add_text("を参照。")),
        );
        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();

        let paragraphs = DocumentReader::paragraphs_from_bytes(&cursor.into_inner()).unwrap();
        assert_eq!(paragraphs, vec!["詳細は特許文献1を参照。"]);
    }

    #[test]
    fn test_read_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("source.docx");
        fs::write(&path, build_docx(&["背景技術"])).unwrap();

        let paragraphs = DocumentReader::read_paragraphs(path.to_str().unwrap()).unwrap();
        assert_eq!(paragraphs, vec!["背景技術"]);
    }

    #[test]
    fn test_read_nonexistent_file() {
        let result = DocumentReader::read_paragraphs("/nonexistent/path/to/file.docx");
        assert!(result.is_err());
    }

    #[test]
    fn test_read_malformed_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.docx");
        fs::write(&path, "not a zip archive").unwrap();

        let result = DocumentReader::read_paragraphs(path.to_str().unwrap());
        assert!(result.is_err());
    }
}
