//! Tab-delimited terminology glossary loading.

use anyhow::{Context, Result, bail};
use std::collections::BTreeMap;
use std::fs;

use crate::writer::file_stem;

/// Source term to target term. Keys are unique; the last line for a term wins.
pub type GlossaryEntries = BTreeMap<String, String>;

/// Reads and parses a glossary file.
///
/// An unreadable file or one without a single usable line is an error, so an
/// empty glossary is never uploaded.
pub fn extract_glossary_entries(path: &str) -> Result<GlossaryEntries> {
    let contents = fs::read_to_string(path).with_context(|| {
        format!("An error occurred when reading your glossary file: {path}")
    })?;

    let entries = parse_glossary_entries(&contents);
    if entries.is_empty() {
        bail!(
            "Your glossary file did not contain any parsable entries.\n\
             Please check that the entries in the file are correctly \
             formatted as a tab-delimited text file."
        );
    }

    Ok(entries)
}

/// Parses `source<TAB>target` lines, silently skipping anything else.
pub fn parse_glossary_entries(contents: &str) -> GlossaryEntries {
    let mut entries = GlossaryEntries::new();

    for line in contents.lines() {
        let fields: Vec<&str> = line.split('\t').collect();
        let [source, target] = fields.as_slice() else {
            continue;
        };

        let (source, target) = (source.trim(), target.trim());
        if source.is_empty() || target.is_empty() {
            continue;
        }

        entries.insert(source.to_string(), target.to_string());
    }

    entries
}

/// Display name for the uploaded glossary, taken from the file name.
pub fn glossary_name(path: &str) -> String {
    file_stem(path)
}

/// Serializes entries in the TSV layout the glossary endpoint accepts.
pub fn entries_to_tsv(entries: &GlossaryEntries) -> String {
    entries
        .iter()
        .map(|(source, target)| format!("{source}\t{target}\n"))
        .collect()
}
