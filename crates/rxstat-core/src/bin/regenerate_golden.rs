//! Rewrite `tests/golden/<case>/expected_report.json` from each `input.log`.
//!
//! Usage: `regenerate_golden [case ...]`. Without arguments every case is
//! rewritten. Paths are resolved from the workspace root, so the tool can run
//! from any directory; reports store a repo-relative `input.path`.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use rxstat_core::{DEFAULT_GENERATED_AT, Report, decode_log_file};

const GOLDEN_DIR: &str = "tests/golden";
const INPUT_FILE: &str = "input.log";
const REPORT_FILE: &str = "expected_report.json";

fn main() -> ExitCode {
    let only: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = run(&only) {
        eprintln!("error: {err}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

fn run(only: &[String]) -> Result<(), String> {
    let root = workspace_root();
    let golden = root.join(GOLDEN_DIR);
    let mut cases = list_cases(&golden)?;
    if !only.is_empty() {
        cases.retain(|case| only.contains(case));
        if let Some(missing) = only.iter().find(|name| !cases.contains(name)) {
            return Err(format!("no golden case named '{missing}' in {GOLDEN_DIR}"));
        }
    }

    for case in &cases {
        let report = regenerate_case(&golden, case)?;
        eprintln!(
            "{case}: {} decoded, {} skipped, {} failed",
            report.summary.decoded, report.summary.skipped, report.summary.failed
        );
    }
    Ok(())
}

/// Case directories that hold an input log, sorted by name.
fn list_cases(golden: &Path) -> Result<Vec<String>, String> {
    let entries = fs::read_dir(golden)
        .map_err(|err| format!("failed to read {}: {err}", golden.display()))?;

    let mut cases = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| format!("failed to read entry: {err}"))?;
        let path = entry.path();
        if path.join(INPUT_FILE).is_file() {
            cases.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    cases.sort();
    Ok(cases)
}

fn regenerate_case(golden: &Path, case: &str) -> Result<Report, String> {
    let input = golden.join(case).join(INPUT_FILE);
    let output = golden.join(case).join(REPORT_FILE);

    let mut report = decode_log_file(&input)
        .map_err(|err| format!("decoding failed for {}: {err}", input.display()))?;
    report.input.path = format!("{GOLDEN_DIR}/{case}/{INPUT_FILE}");
    report.generated_at = DEFAULT_GENERATED_AT.to_string();

    let json = serde_json::to_string(&report)
        .map_err(|err| format!("JSON serialization failed: {err}"))?;
    fs::write(&output, json)
        .map_err(|err| format!("failed to write {}: {err}", output.display()))?;
    Ok(report)
}
