//! Command-line argument validation and source document reading.

mod reader;
mod validator;

pub use reader::DocumentReader;
pub use validator::{InputError, ValidatedInput, check_user_input, validate_user_input};
