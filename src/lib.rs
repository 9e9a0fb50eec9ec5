//! # deepl-tmx - DeepL to TMX
//!
//! `deepl-tmx` extracts Japanese sentences from a `.docx` file, translates
//! them one at a time with the DeepL API (optionally against a terminology
//! glossary) and writes the source/target pairs as a TMX file or as a
//! two-column DOCX table.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate into output/spec.tmx
//! deepl-tmx tmx ./spec.docx
//!
//! # Apply a tab-delimited glossary and write a DOCX table
//! deepl-tmx docx ./spec.docx ./terms.txt
//!
//! # Show the segments that would be sent, without calling DeepL
//! deepl-tmx --dry-run tmx ./spec.docx
//!
//! # Current month's character usage
//! deepl-tmx usage
//! ```
//!
//! ## Configuration
//!
//! The auth key is read from `AUTH_KEY` (process environment or a local
//! `.env` file). Optional settings live in `~/.config/deepl-tmx/config.toml`:
//!
//! ```toml
//! [deepl]
//! auth_key_env = "AUTH_KEY"
//! server_url = "https://api-free.deepl.com"
//! source_lang = "JA"
//! target_lang = "EN-US"
//!
//! [output]
//! dir = "output"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and resolution.
pub mod config;

/// File system utilities.
pub mod fs;

/// Terminology glossary parsing.
pub mod glossary;

/// Argument validation and `.docx` reading.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Sentence segmentation of document paragraphs.
pub mod segment;

/// DeepL backend, translation driver and quota checks.
pub mod translation;

/// Terminal UI components (spinner, progress bar, colors).
pub mod ui;

/// TMX and DOCX output.
pub mod writer;
