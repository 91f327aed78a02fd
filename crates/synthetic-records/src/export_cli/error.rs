//! Error types for the export CLI.

use thiserror::Error;

use crate::error::{ExportError, GenerationError};

/// Errors surfaced by CLI parsing and the export run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Output path was not supplied.
    #[error("missing required flag: --output")]
    MissingOutputPath,
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognised.
        value: String,
    },
    /// A numeric value failed to parse.
    #[error("invalid number for {flag}: '{value}' ({message})")]
    InvalidNumber {
        /// Flag associated with the invalid number.
        flag: &'static str,
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// A numeric value exceeds the ceiling for its flag.
    #[error("value for {flag} is too large: '{value}' (maximum {max})")]
    TooLarge {
        /// Flag associated with the oversized value.
        flag: &'static str,
        /// Raw value supplied for the flag.
        value: String,
        /// Largest accepted value.
        max: String,
    },
    /// The output path does not end in a file name.
    #[error("output path has no file name: '{path}'")]
    InvalidOutputPath {
        /// Path as supplied to `--output`.
        path: String,
    },
    /// The output directory could not be opened.
    #[error("cannot open output directory '{path}': {message}")]
    OutputDirectory {
        /// Directory that failed to open.
        path: String,
        /// Description of the I/O error.
        message: String,
    },
    /// The request parameters were rejected.
    #[error(transparent)]
    Generation(#[from] GenerationError),
    /// Serialising or writing the CSV failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}
