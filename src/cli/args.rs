use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "deepl-tmx")]
#[command(about = "Translate Japanese .docx files with DeepL into TMX or DOCX sentence pairs")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    /// <tmx|docx> <source.docx> [glossary.txt]
    #[arg(value_name = "ARGS", allow_hyphen_values = true)]
    pub inputs: Vec<String>,

    /// Directory for generated files
    #[arg(short = 'o', long)]
    pub output_dir: Option<PathBuf>,

    /// Print extracted segments and the character count without translating
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress status messages and progress output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show DeepL character usage for the current month
    Usage,
    /// List supported DeepL language codes
    Languages,
    /// Show the resolved configuration
    Config,
}
