//! Print the OpenAPI document as JSON.

use std::io::{self, Write};
use std::process::ExitCode;

use backend::doc::ApiDoc;
use utoipa::OpenApi;

fn main() -> ExitCode {
    let written = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(io::Error::other)
        .and_then(|json| writeln!(io::stdout().lock(), "{json}"));
    match written {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            drop(writeln!(io::stderr().lock(), "openapi-dump: {err}"));
            ExitCode::FAILURE
        }
    }
}
