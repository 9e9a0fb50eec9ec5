//! Serialization of translated segments to TMX or DOCX.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::fs::atomic_write;
use crate::segment::Segment;
use crate::translation::LanguagePair;

mod docx;
mod tmx;

pub use docx::build_docx;
pub use tmx::{CREATION_TOOL, build_tmx, escape_xml};

/// Output file format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Tmx,
    Docx,
}

impl OutputFormat {
    /// Parses the literal command-line value (`tmx` or `docx`).
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "tmx" => Some(Self::Tmx),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Tmx => "tmx",
            Self::Docx => "docx",
        }
    }
}

/// Base file name without directories or extension: `a/b/c.docx` gives `c`.
pub fn file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `<output_dir>/<source stem>.<format extension>`
pub fn output_path(output_dir: &Path, source_file: &str, format: OutputFormat) -> PathBuf {
    output_dir.join(format!("{}.{}", file_stem(source_file), format.extension()))
}

/// Serializes the segments and writes them to `path`, creating the parent
/// directory when needed.
pub fn write_output(
    path: &Path,
    format: OutputFormat,
    segments: &[Segment],
    languages: &LanguagePair,
) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create output directory: {}", parent.display())
        })?;
    }

    let contents = match format {
        OutputFormat::Tmx => build_tmx(segments, languages).into_bytes(),
        OutputFormat::Docx => build_docx(segments)?,
    };

    atomic_write(path, &contents)
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}
