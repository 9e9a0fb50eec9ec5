//! Validation of the positional command-line arguments.

use std::fmt;

use crate::writer::OutputFormat;

const EXPECTED_INPUT: &str = "Expected input: deepl-tmx <tmx|docx> translation.docx glossary.txt\n\
                              (glossary.txt is optional.)";

/// Arguments that passed validation, with the paths exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    pub format: OutputFormat,
    pub translation_file: String,
    pub glossary_file: Option<String>,
}

/// Why an argument list was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    ArgumentCount,
    Format,
    TranslationFile,
    GlossaryFile,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::ArgumentCount => "Incorrect number of arguments.",
            Self::Format => "First argument should be either tmx or docx.",
            Self::TranslationFile => "Second argument should be a docx file.",
            Self::GlossaryFile => "Third argument should be a txt file.",
        };
        f.write_str(message)
    }
}

impl std::error::Error for InputError {}

/// Checks the user-supplied arguments (program name excluded).
///
/// Accepts `<format> <file.docx>` or `<format> <file.docx> <glossary.txt>`.
/// Extensions are compared case-insensitively, the format literal is not.
pub fn validate_user_input<S: AsRef<str>>(args: &[S]) -> Result<ValidatedInput, InputError> {
    if !(2..=3).contains(&args.len()) {
        return Err(InputError::ArgumentCount);
    }

    let format = OutputFormat::from_arg(args[0].as_ref()).ok_or(InputError::Format)?;

    let translation_file = args[1].as_ref();
    if !has_extension(translation_file, ".docx") {
        return Err(InputError::TranslationFile);
    }

    let glossary_file = match args.get(2) {
        Some(glossary) if has_extension(glossary.as_ref(), ".txt") => {
            Some(glossary.as_ref().to_string())
        }
        Some(_) => return Err(InputError::GlossaryFile),
        None => None,
    };

    Ok(ValidatedInput {
        format,
        translation_file: translation_file.to_string(),
        glossary_file,
    })
}

/// Validates the arguments and prints the usage message on failure.
pub fn check_user_input<S: AsRef<str>>(args: &[S]) -> Option<ValidatedInput> {
    match validate_user_input(args) {
        Ok(input) => Some(input),
        Err(err) => {
            eprintln!("\n{} {err}", crate::ui::Style::error("Error:"));
            eprintln!("{EXPECTED_INPUT}\n");
            None
        }
    }
}

fn has_extension(path: &str, extension: &str) -> bool {
    path.to_lowercase().ends_with(extension)
}
