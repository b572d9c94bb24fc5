use std::fs;
use std::path::Path;

use rxstat_core::{Report, decode_log_file};

fn load_expected_report(dir: &str) -> Report {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let expected_path = root.join(dir).join("expected_report.json");

    let expected_json = fs::read_to_string(&expected_path).expect("read expected_report.json");
    serde_json::from_str(&expected_json).expect("parse expected report")
}

fn run_golden(dir: &str) {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let input = root.join(dir).join("input.log");
    let expected = load_expected_report(dir);

    let mut actual = decode_log_file(&input).expect("decode log");
    actual.generated_at = expected.generated_at.clone();
    actual.input.path = expected.input.path.clone();

    let actual_value = serde_json::to_value(actual).expect("serialize actual");
    let expected_value = serde_json::to_value(expected).expect("serialize expected");

    assert_eq!(actual_value, expected_value, "golden mismatch in {dir}");
}

#[test]
fn golden_rxstatus() {
    run_golden("tests/golden/rxstatus");
}

#[test]
fn golden_rxstatus_encodings_agree() {
    let report = load_expected_report("tests/golden/rxstatus");
    let ascii = &report.records[0].status;
    let binary = &report.records[1].status;
    assert_eq!(
        (ascii.error, ascii.rxstat, ascii.aux1stat, ascii.aux4stat),
        (binary.error, binary.rxstat, binary.aux1stat, binary.aux4stat)
    );
    assert_eq!(ascii.header.gps_seconds, binary.header.gps_seconds);
}

#[test]
fn golden_rxstatus_has_failures() {
    let report = load_expected_report("tests/golden/rxstatus");
    assert_eq!(report.summary.failed, 3);
    let lines: Vec<_> = report.failures.iter().map(|f| f.line).collect();
    assert_eq!(lines, vec![4, 5, 8]);
}

#[test]
fn golden_rxstatus_input_path_is_repo_relative() {
    let report = load_expected_report("tests/golden/rxstatus");
    assert_eq!(report.input.path, "tests/golden/rxstatus/input.log");
    assert_eq!(report.generated_at, rxstat_core::DEFAULT_GENERATED_AT);
}
