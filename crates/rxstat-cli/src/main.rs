use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glob::glob;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

mod logging;

#[derive(Parser, Debug)]
#[command(name = "rxstat")]
#[command(version)]
#[command(
    about = "Decoder for NovAtel RXSTATUS receiver status logs (binary and ASCII).",
    long_about = None,
    after_help = "Examples:\n  rxstat log decode receiver.log -o report.json\n  rxstat log parse receiver.log --stdout --pretty"
)]
struct Cli {
    /// Log level for diagnostics on stderr (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on receiver log files.
    Log {
        #[command(subcommand)]
        command: LogCommands,
    },
}

#[derive(Subcommand, Debug)]
enum LogCommands {
    /// Decode RXSTATUS messages from a log and generate a versioned JSON report.
    #[command(alias = "parse")]
    #[command(
        after_help = "Input lines are ASCII sentences (#RXSTATUSA,...;...*crc) or binary frames\nwritten as hex. Blank lines and lines starting with // are ignored.\n\nExamples:\n  rxstat log decode receiver.log -o report.json\n  rxstat log decode 'captures/*.log' --stdout"
    )]
    Decode {
        /// Path (or single-match glob pattern) of the log file
        input: PathBuf,

        /// Output report path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        report: Option<PathBuf>,

        /// Write JSON report to stdout
        #[arg(long, conflicts_with = "report")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,

        /// Exit with a non-zero code if any RXSTATUS message failed to decode
        #[arg(long)]
        strict: bool,

        /// List decode failures after decoding
        #[arg(long)]
        list_failures: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Log { command } => match command {
            LogCommands::Decode {
                input,
                report,
                stdout,
                pretty,
                compact,
                quiet,
                strict,
                list_failures,
            } => {
                let level = if quiet {
                    Some("error")
                } else {
                    cli.log_level.as_deref()
                };
                logging::init_logging(level);
                cmd_log_decode(
                    input,
                    report,
                    stdout,
                    pretty,
                    compact,
                    quiet,
                    strict,
                    list_failures,
                )
            }
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_log_decode(
    input: PathBuf,
    report: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    quiet: bool,
    strict: bool,
    list_failures: bool,
) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&input)?;
    validate_input_file(&resolved_input)?;
    let input_abs = fs::canonicalize(&resolved_input)
        .with_context(|| format!("Failed to resolve input path: {}", resolved_input.display()))?;

    let report = if stdout {
        None
    } else {
        Some(report.ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--report or --stdout".to_string()),
            )
        })?)
    };

    if let Some(report_path) = report.as_ref() {
        let report_dir = match report_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::canonicalize(parent).ok(),
            _ => fs::canonicalize(".").ok(),
        };
        if let (Some(report_dir), Some(file_name)) = (report_dir, report_path.file_name()) {
            if report_dir.join(file_name) == input_abs {
                return Err(CliError::new(
                    format!(
                        "report path must differ from input: {}",
                        report_path.display()
                    ),
                    Some("choose a different output path".to_string()),
                ));
            }
        }
    }

    let mut rep =
        rxstat_core::decode_log_file(&resolved_input).context("RXSTATUS log decoding failed")?;
    rep.generated_at = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .context("Failed to format report timestamp")?;
    let json = serialize_report(&rep, pretty, compact)?;

    match report {
        None => print!("{}", json),
        Some(report) => {
            if let Some(parent) = report.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }
            fs::write(&report, json)
                .with_context(|| format!("Failed to write report: {}", report.display()))?;
            if !quiet {
                eprintln!(
                    "OK: {} decoded, {} failed -> {}",
                    rep.summary.decoded,
                    rep.summary.failed,
                    report.display()
                );
            }
        }
    }

    if list_failures && !quiet {
        print_failures(&rep);
    }
    if strict && !rep.failures.is_empty() {
        return Err(CliError::new(
            "RXSTATUS decode failures detected",
            Some("use --list-failures to inspect".to_string()),
        ));
    }
    Ok(())
}

fn serialize_report(
    rep: &rxstat_core::Report,
    pretty: bool,
    compact: bool,
) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn print_failures(rep: &rxstat_core::Report) {
    eprintln!("Decode failures:");
    for failure in &rep.failures {
        eprintln!(
            "  line {} ({}): {}",
            failure.line, failure.encoding, failure.error
        );
    }
}

fn validate_input_file(input: &PathBuf) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass a receiver log file".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass a receiver log file".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &PathBuf) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.clone());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    if matches.len() > 1 {
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let more = if matches.len() > 3 { ", ..." } else { "" };
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches); matches: {}{}",
                pattern,
                matches.len(),
                listed,
                more
            ),
            Some("pass a single log file, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
