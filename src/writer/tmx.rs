use std::fmt::Write;

use crate::segment::Segment;
use crate::translation::LanguagePair;

pub const CREATION_TOOL: &str = "DeepL-to-tmx";

/// Builds a TMX 1.1 document with one `<tu>` per segment, in order.
pub fn build_tmx(segments: &[Segment], languages: &LanguagePair) -> String {
    let mut tmx = String::new();
    tmx.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    tmx.push_str("<!DOCTYPE tmx SYSTEM \"tmx11.dtd\">\n");
    tmx.push_str("<tmx version=\"1.1\">\n");
    // Writing to a String cannot fail.
    let _ = writeln!(
        tmx,
        "  <header creationtool=\"{CREATION_TOOL}\" adminlang=\"EN-US\" datatype=\"plaintext\" segtype=\"sentence\" srclang=\"{}\"/>",
        languages.source
    );
    tmx.push_str("  <body>\n");

    for segment in segments {
        tmx.push_str("    <tu>\n");
        let _ = writeln!(
            tmx,
            "      <tuv lang=\"{}\"><seg>{}</seg></tuv>",
            languages.source,
            escape_xml(&segment.source_text)
        );
        let _ = writeln!(
            tmx,
            "      <tuv lang=\"{}\"><seg>{}</seg></tuv>",
            languages.target,
            escape_xml(&segment.target_text)
        );
        tmx.push_str("    </tu>\n");
    }

    tmx.push_str("  </body>\n");
    tmx.push_str("</tmx>\n");
    tmx
}

/// Escapes the characters that would break `<seg>` content.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
