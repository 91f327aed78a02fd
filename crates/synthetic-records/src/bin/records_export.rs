//! Writes one page of synthetic records to a CSV file.
//!
//! This binary delegates to `synthetic_records::export_cli` for parsing and
//! export logic, keeping the CLI behaviour testable without spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use synthetic_records::export_cli::{
    CliError, ParseOutcome, apply_export, parse_args, success_message,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            print_usage(io::stdout().lock());
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let summary = apply_export(&options)?;
            let message = success_message(&summary, options.output());
            if let Err(err) = writeln!(io::stdout().lock(), "{message}") {
                drop(err);
            }
            Ok(())
        }
    }
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: records-export --output <path> [options]\n",
        "\n",
        "Options:\n",
        "  --output <path>      CSV file to write (replaced atomically)\n",
        "  --region <code>      One of en, ru, de (defaults to en)\n",
        "  --seed <n>           Base seed, may be negative (defaults to 0)\n",
        "  --errors <n>         Typo budget per field, e.g. 1.5 (defaults to 0)\n",
        "  --page <n>           One-based page number (defaults to 1)\n",
        "  --limit <n>          Records per page (defaults to 20)\n",
        "  -h, --help           Print this help output\n",
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}
