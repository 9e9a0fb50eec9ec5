use anyhow::{Result, anyhow};
use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};
use std::io::Cursor;

use crate::segment::Segment;

/// Builds a document holding a two-column table: source text, then target text.
pub fn build_docx(segments: &[Segment]) -> Result<Vec<u8>> {
    let rows = segments
        .iter()
        .map(|segment| TableRow::new(vec![cell(&segment.source_text), cell(&segment.target_text)]))
        .collect();

    let mut buffer = Cursor::new(Vec::new());
    Docx::new()
        .add_table(Table::new(rows))
        .build()
        .pack(&mut buffer)
        .map_err(|e| anyhow!("Failed to build docx output: {e}"))?;

    Ok(buffer.into_inner())
}

fn cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
}
