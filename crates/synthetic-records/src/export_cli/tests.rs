//! Unit tests for the CSV export CLI helpers.

use std::sync::atomic::{AtomicUsize, Ordering};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use rstest::{fixture, rstest};

use super::*;

struct OutputFixture {
    dir: Utf8PathBuf,
}

impl OutputFixture {
    fn path(&self) -> Utf8PathBuf {
        self.dir.join("data.csv")
    }

    fn read(&self) -> String {
        let dir = Dir::open_ambient_dir(&self.dir, ambient_authority()).expect("open output dir");
        dir.read_to_string("data.csv").expect("read export")
    }
}

impl Drop for OutputFixture {
    fn drop(&mut self) {
        if let Ok(root) = Dir::open_ambient_dir(".", ambient_authority()) {
            drop(root.remove_dir_all(&self.dir));
        }
    }
}

#[fixture]
fn output_fixture() -> OutputFixture {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = Utf8PathBuf::from("target")
        .join("records-cli-tests")
        .join(format!("export-{}-{counter}", std::process::id()));
    let root = Dir::open_ambient_dir(".", ambient_authority()).expect("open cwd");
    root.create_dir_all(&dir).expect("create output dir");
    OutputFixture { dir }
}

fn options_for(path: &Utf8Path, extra: &[&str]) -> Options {
    let mut args = vec!["--output".to_owned(), path.to_string()];
    args.extend(extra.iter().map(|arg| (*arg).to_owned()));
    let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse args") else {
        panic!("expected options");
    };
    options
}

#[test]
fn parse_args_returns_help_for_help_flag() {
    let args = vec!["--region".to_owned(), "en".to_owned(), "-h".to_owned()];

    let outcome = parse_args(args.into_iter()).expect("parse args");

    assert!(matches!(outcome, ParseOutcome::Help));
}

#[test]
fn parse_args_requires_output_path() {
    let args = vec!["--seed".to_owned(), "42".to_owned()];

    let err = parse_args(args.into_iter()).expect_err("expected error");

    assert!(matches!(err, CliError::MissingOutputPath));
}

#[rstest]
#[case("--output")]
#[case("--region")]
#[case("--seed")]
#[case("--errors")]
#[case("--page")]
#[case("--limit")]
fn parse_args_reports_missing_value(#[case] flag: &'static str) {
    let args = vec![flag.to_owned()];

    let err = parse_args(args.into_iter()).expect_err("expected error");

    assert!(matches!(err, CliError::MissingValue { flag: reported } if reported == flag));
}

#[test]
fn parse_args_reports_unknown_arguments() {
    let args = vec![
        "--output".to_owned(),
        "data.csv".to_owned(),
        "--format".to_owned(),
    ];

    let err = parse_args(args.into_iter()).expect_err("expected error");

    assert!(matches!(err, CliError::UnknownArgument { value } if value == "--format"));
}

#[rstest]
#[case("--seed", "forty-two")]
#[case("--errors", "lots")]
#[case("--page", "-1")]
#[case("--limit", "1.5")]
fn parse_args_reports_invalid_numbers(#[case] flag: &'static str, #[case] raw: &str) {
    let args = vec![
        "--output".to_owned(),
        "data.csv".to_owned(),
        flag.to_owned(),
        raw.to_owned(),
    ];

    let err = parse_args(args.into_iter()).expect_err("expected error");

    let CliError::InvalidNumber {
        flag: reported,
        value,
        ..
    } = err
    else {
        panic!("expected invalid number error");
    };
    assert_eq!(reported, flag);
    assert_eq!(value, raw);
}

#[rstest]
#[case("--limit", "4294967295", "1000")]
#[case("--limit", "1001", "1000")]
#[case("--errors", "1e18", "1000")]
#[case("--errors", "inf", "1000")]
fn parse_args_rejects_values_above_ceiling(
    #[case] flag: &'static str,
    #[case] raw: &str,
    #[case] expected_max: &str,
) {
    let args = vec![
        "--output".to_owned(),
        "data.csv".to_owned(),
        flag.to_owned(),
        raw.to_owned(),
    ];

    let err = parse_args(args.into_iter()).expect_err("expected error");

    let CliError::TooLarge {
        flag: reported,
        value,
        max,
    } = err
    else {
        panic!("expected too large error");
    };
    assert_eq!(reported, flag);
    assert_eq!(value, raw);
    assert_eq!(max, expected_max);
}

#[test]
fn parse_args_accepts_values_at_ceiling() {
    let options = options_for(
        Utf8Path::new("data.csv"),
        &["--limit", "1000", "--errors", "1000"],
    );

    let request = options.page_request().expect("valid request");

    assert_eq!(request.limit(), MAX_LIMIT);
    assert_eq!(request.errors(), ErrorBudget::new(MAX_ERRORS).expect("budget"));
}

#[test]
fn page_request_applies_defaults() {
    let options = options_for(Utf8Path::new("data.csv"), &[]);

    let request = options.page_request().expect("valid request");

    assert_eq!(request.region(), Region::En);
    assert_eq!(request.seed(), 0);
    assert_eq!(request.errors(), ErrorBudget::NONE);
    assert_eq!(request.page(), 1);
    assert_eq!(request.limit(), 20);
}

#[test]
fn page_request_parses_all_flags() {
    let options = options_for(
        Utf8Path::new("out/data.csv"),
        &[
            "--region", " RU ", "--seed", "-3", "--errors", "2.5", "--page", "4", "--limit",
            "7",
        ],
    );

    let request = options.page_request().expect("valid request");

    assert_eq!(options.output(), "out/data.csv");
    assert_eq!(request.region(), Region::Ru);
    assert_eq!(request.seed(), -3);
    assert_eq!(request.errors(), ErrorBudget::new(2.5).expect("budget"));
    assert_eq!(request.page(), 4);
    assert_eq!(request.limit(), 7);
}

#[rstest]
#[case(&["--region", "fr"])]
#[case(&["--errors", "-1"])]
#[case(&["--page", "0"])]
#[case(&["--limit", "0"])]
fn page_request_rejects_invalid_parameters(#[case] extra: &[&str]) {
    let options = options_for(Utf8Path::new("data.csv"), extra);

    let err = options.page_request().expect_err("expected error");

    assert!(matches!(err, CliError::Generation(_)));
}

#[rstest]
fn apply_export_writes_csv(output_fixture: OutputFixture) {
    let path = output_fixture.path();
    let options = options_for(&path, &["--region", "de", "--seed", "9", "--limit", "5"]);

    let summary = apply_export(&options).expect("export");

    assert_eq!(
        summary,
        ExportSummary {
            rows: 5,
            region: Region::De,
            effective_seed: 10,
        }
    );
    let text = output_fixture.read();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Number,ID,Full Name,Address,Phone Number"));
    assert_eq!(lines.count(), 5);
}

#[rstest]
fn apply_export_replaces_existing_file(output_fixture: OutputFixture) {
    let path = output_fixture.path();
    apply_export(&options_for(&path, &["--limit", "8"])).expect("first export");

    apply_export(&options_for(&path, &["--limit", "2"])).expect("second export");

    assert_eq!(output_fixture.read().lines().count(), 3);
}

#[rstest]
fn apply_export_is_reproducible_apart_from_ids(output_fixture: OutputFixture) {
    let path = output_fixture.path();
    let options = options_for(&path, &["--region", "ru", "--seed", "5", "--errors", "1.5"]);

    apply_export(&options).expect("first export");
    let first = output_fixture.read();
    apply_export(&options).expect("second export");
    let second = output_fixture.read();

    let without_ids = |text: &str| -> Vec<String> {
        text.lines()
            .map(|line| {
                let mut columns: Vec<&str> = line.splitn(3, ',').collect();
                columns.remove(1);
                columns.join(",")
            })
            .collect()
    };
    assert_eq!(without_ids(&first), without_ids(&second));
}

#[test]
fn apply_export_reports_missing_directory() {
    let options = options_for(Utf8Path::new("target/no-such-dir/nested/data.csv"), &[]);

    let err = apply_export(&options).expect_err("expected error");

    assert!(matches!(err, CliError::OutputDirectory { .. }));
}

#[rstest]
#[case("..")]
#[case("target/..")]
fn apply_export_rejects_output_without_file_name(#[case] output: &str) {
    let options = options_for(Utf8Path::new(output), &[]);

    let err = apply_export(&options).expect_err("expected error");

    assert!(matches!(err, CliError::InvalidOutputPath { path } if path == output));
}

#[test]
fn success_message_names_rows_region_and_path() {
    let summary = ExportSummary {
        rows: 3,
        region: Region::Ru,
        effective_seed: 8,
    };

    let message = success_message(&summary, Utf8Path::new("out.csv"));

    assert_eq!(message, "Wrote 3 ru records (seed=8) to out.csv");
}
