//! Error types for the synthetic-records crate.
//!
//! Generation and export failures are kept apart so callers can map them to
//! distinct outcomes: a bad request versus a failed write.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while validating generation inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    /// The region string does not name a supported locale.
    #[error("unsupported region '{value}': expected one of en, ru, de")]
    UnsupportedRegion {
        /// The rejected region string.
        value: String,
    },

    /// The error budget is negative, NaN or infinite.
    #[error("error budget must be a finite, non-negative number, got {value}")]
    InvalidErrorBudget {
        /// The rejected budget.
        value: f64,
    },

    /// Pages are numbered from one.
    #[error("page must be at least 1, got {value}")]
    InvalidPage {
        /// The rejected page number.
        value: u32,
    },

    /// A page must contain at least one record.
    #[error("limit must be at least 1, got {value}")]
    InvalidLimit {
        /// The rejected limit.
        value: u32,
    },
}

/// Errors raised while serialising records to CSV.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The CSV writer rejected a row.
    #[error("failed to write CSV row: {0}")]
    Csv(#[from] csv::Error),

    /// Buffered CSV output could not be flushed to the sink.
    #[error("failed to flush CSV output: {message}")]
    Flush {
        /// Description of the flush failure.
        message: String,
    },

    /// The export file could not be written.
    #[error("failed to write export file at '{path}': {message}")]
    WriteError {
        /// Path to the export file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}
