//! CLI support for exporting a page of records to a CSV file.
//!
//! The binary delegates to these functions so parsing and export can be
//! exercised in tests without spawning a subprocess. Unlike the HTTP
//! handlers, the CLI rejects malformed numbers instead of defaulting them.

mod error;

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};

pub use error::CliError;

use crate::atomic_io::write_records_atomic;
use crate::noise::ErrorBudget;
use crate::page::{PageRequest, generate_page};
use crate::region::Region;

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_LIMIT: u32 = 20;
/// Largest `--limit` accepted, matching the service's default ceiling.
pub const MAX_LIMIT: u32 = 1000;
/// Largest `--errors` accepted, matching the service's default ceiling.
pub const MAX_ERRORS: f64 = 1000.0;

/// Parsed options for the export CLI.
#[derive(Debug, Clone)]
pub struct Options {
    output: Utf8PathBuf,
    region: Option<String>,
    seed: Option<i64>,
    errors: Option<f64>,
    page: Option<u32>,
    limit: Option<u32>,
}

impl Options {
    /// Path the CSV document is written to.
    ///
    /// # Example
    ///
    /// ```
    /// use synthetic_records::export_cli::{ParseOutcome, parse_args};
    ///
    /// let args = vec!["--output".to_string(), "data.csv".to_string()];
    /// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
    ///     panic!("expected options");
    /// };
    ///
    /// assert_eq!(options.output(), "data.csv");
    /// ```
    #[must_use]
    pub fn output(&self) -> &Utf8Path {
        &self.output
    }

    /// Builds the validated page request, applying defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Generation`] for an unknown region, a negative
    /// error budget, or a zero page or limit.
    pub fn page_request(&self) -> Result<PageRequest, CliError> {
        let region = match &self.region {
            Some(value) => value.parse::<Region>()?,
            None => Region::default(),
        };
        let errors = ErrorBudget::new(self.errors.unwrap_or_default())?;
        Ok(PageRequest::new(
            region,
            self.seed.unwrap_or_default(),
            errors,
            self.page.unwrap_or(DEFAULT_PAGE),
            self.limit.unwrap_or(DEFAULT_LIMIT),
        )?)
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Result of a completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Number of data rows written, excluding the header.
    pub rows: usize,
    /// Region the records were generated for.
    pub region: Region,
    /// Seed the locale was reset to.
    pub effective_seed: u64,
}

/// Parses CLI arguments into export options.
///
/// # Errors
///
/// Returns [`CliError`] when `--output` is missing, a flag lacks its value,
/// an argument is unknown, or a number cannot be parsed. `--limit` above
/// [`MAX_LIMIT`] and `--errors` above [`MAX_ERRORS`] are rejected with
/// [`CliError::TooLarge`].
///
/// # Example
///
/// ```
/// use synthetic_records::export_cli::{ParseOutcome, parse_args};
///
/// let args = vec![
///     "--output".to_string(),
///     "data.csv".to_string(),
///     "--region".to_string(),
///     "ru".to_string(),
///     "--errors".to_string(),
///     "1.5".to_string(),
/// ];
///
/// let outcome = parse_args(args.into_iter()).expect("parse args");
/// assert!(matches!(outcome, ParseOutcome::Options(_)));
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut output: Option<Utf8PathBuf> = None;
    let mut region: Option<String> = None;
    let mut seed: Option<i64> = None;
    let mut errors: Option<f64> = None;
    let mut page: Option<u32> = None;
    let mut limit: Option<u32> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--output" => {
                let value = next_value(&mut args, "--output")?;
                output = Some(Utf8PathBuf::from(value));
            }
            "--region" => region = Some(next_value(&mut args, "--region")?),
            "--seed" => {
                let value = next_value(&mut args, "--seed")?;
                seed = Some(parse_number(&value, "--seed")?);
            }
            "--errors" => {
                let value = next_value(&mut args, "--errors")?;
                let parsed = parse_number(&value, "--errors")?;
                errors = Some(at_most(parsed, MAX_ERRORS, "--errors", value)?);
            }
            "--page" => {
                let value = next_value(&mut args, "--page")?;
                page = Some(parse_number(&value, "--page")?);
            }
            "--limit" => {
                let value = next_value(&mut args, "--limit")?;
                let parsed = parse_number(&value, "--limit")?;
                limit = Some(at_most(parsed, MAX_LIMIT, "--limit", value)?);
            }
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    let resolved_output = output.ok_or(CliError::MissingOutputPath)?;
    Ok(ParseOutcome::Options(Options {
        output: resolved_output,
        region,
        seed,
        errors,
        page,
        limit,
    }))
}

/// Generates the requested page and writes it atomically as CSV.
///
/// # Errors
///
/// Returns [`CliError`] when the request is invalid, the output directory
/// cannot be opened, or the file cannot be written.
///
/// # Example
///
/// ```
/// use synthetic_records::export_cli::{ParseOutcome, apply_export, parse_args};
/// use std::time::{SystemTime, UNIX_EPOCH};
///
/// let suffix = SystemTime::now()
///     .duration_since(UNIX_EPOCH)
///     .map(|elapsed| elapsed.as_nanos())
///     .unwrap_or(0);
/// let dir = std::env::temp_dir().join(format!("records-export-{suffix}"));
/// std::fs::create_dir_all(&dir).expect("create temp dir");
/// let path = dir.join("data.csv");
///
/// let args = vec![
///     "--output".to_string(),
///     path.to_string_lossy().to_string(),
///     "--limit".to_string(),
///     "5".to_string(),
/// ];
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
///
/// let summary = apply_export(&options).expect("export");
/// assert_eq!(summary.rows, 5);
/// std::fs::remove_dir_all(&dir).expect("clean up");
/// ```
pub fn apply_export(options: &Options) -> Result<ExportSummary, CliError> {
    let request = options.page_request()?;
    let (dir, file_name) = open_output_dir(options.output())?;
    let records = generate_page(&request);
    write_records_atomic(&dir, file_name, &records)?;

    Ok(ExportSummary {
        rows: records.len(),
        region: request.region(),
        effective_seed: request.effective_seed(),
    })
}

/// Formats the success message emitted by the CLI.
///
/// # Example
///
/// ```
/// use camino::Utf8Path;
/// use synthetic_records::Region;
/// use synthetic_records::export_cli::{ExportSummary, success_message};
///
/// let summary = ExportSummary { rows: 20, region: Region::De, effective_seed: 43 };
/// let message = success_message(&summary, Utf8Path::new("data.csv"));
///
/// assert_eq!(message, "Wrote 20 de records (seed=43) to data.csv");
/// ```
#[must_use]
pub fn success_message(summary: &ExportSummary, output: &Utf8Path) -> String {
    format!(
        "Wrote {} {} records (seed={}) to {}",
        summary.rows, summary.region, summary.effective_seed, output
    )
}

fn open_output_dir(output: &Utf8Path) -> Result<(Dir, &Utf8Path), CliError> {
    let file_name = output
        .file_name()
        .map(Utf8Path::new)
        .ok_or_else(|| CliError::InvalidOutputPath {
            path: output.to_string(),
        })?;
    let parent = match output.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| {
        CliError::OutputDirectory {
            path: parent.to_string(),
            message: err.to_string(),
        }
    })?;
    Ok((dir, file_name))
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

fn parse_number<T>(value: &str, flag: &'static str) -> Result<T, CliError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| CliError::InvalidNumber {
        flag,
        value: value.to_owned(),
        message: err.to_string(),
    })
}

fn at_most<T>(parsed: T, max: T, flag: &'static str, raw: String) -> Result<T, CliError>
where
    T: PartialOrd + fmt::Display,
{
    if parsed > max {
        return Err(CliError::TooLarge {
            flag,
            value: raw,
            max: max.to_string(),
        });
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests;
