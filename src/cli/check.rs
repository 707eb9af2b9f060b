//! Check command implementation
//!
//! This module implements the scan run, which:
//! - Resolves the `--ignore=` categories, warning about unknown ones
//! - Validates that every named directory exists
//! - Collects content files and scans them line by line
//! - Prints the grouped report and summary
//! - Returns the process exit code

use crate::cli::args::Cli;
use crate::cli::common::{
    EXIT_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS, missing_dirs, stderr_choice, stdout_choice, usage,
};
use crate::engine::ExecutionEngine;
use crate::error::ScanError;
use crate::output::{HumanFormatter, RunSummary};
use crate::output::human::{fg, write_styled};
use crate::rules::{Category, IgnoreSet};
use std::io::{self, Write};
use std::path::PathBuf;
use termcolor::{Color, StandardStream, WriteColor};
use tracing::debug;

/// Error type specific to the check command
#[derive(Debug, thiserror::Error)]
pub(crate) enum CheckError {
    #[error("no directories given")]
    Usage,

    #[error("Directory not found: {}", join_paths(.0))]
    MissingDirectories(Vec<PathBuf>),

    #[error("{0}")]
    Scan(#[from] ScanError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Run the check command against the process's stdout and stderr
///
/// # Returns
///
/// Exit code:
/// - 0: No violations, or only warnings
/// - 1: At least one error-severity violation
/// - 2: Usage error, missing directory or unreadable file
pub fn run_check(cli: &Cli) -> i32 {
    let mut stdout = StandardStream::stdout(stdout_choice(cli.color));
    let mut stderr = StandardStream::stderr(stderr_choice(cli.color));
    run_check_with(cli, &mut stdout, &mut stderr)
}

/// Run the check command, writing the report to `out` and diagnostics to `err`
pub fn run_check_with(cli: &Cli, out: &mut dyn WriteColor, err: &mut dyn WriteColor) -> i32 {
    let result = run_check_inner(cli, out, err);
    let _ = out.flush();

    match result {
        Ok(passed) => {
            if passed {
                EXIT_SUCCESS
            } else {
                EXIT_VIOLATIONS
            }
        }
        Err(CheckError::Usage) => {
            let _ = writeln!(err, "{}", usage());
            EXIT_ERROR
        }
        Err(e) => {
            let _ = write_styled(err, &fg(Color::Red), "Error:");
            let _ = writeln!(err, " {}", e);
            EXIT_ERROR
        }
    }
}

/// Internal implementation of the check command
fn run_check_inner(
    cli: &Cli,
    out: &mut dyn WriteColor,
    err: &mut dyn WriteColor,
) -> Result<bool, CheckError> {
    // 1. Resolve ignore categories; unknown ones only warn
    let ignored = resolve_ignore(cli.ignore.as_deref(), err)?;

    // 2. Validate the named directories
    if cli.dirs.is_empty() {
        return Err(CheckError::Usage);
    }
    let missing = missing_dirs(&cli.dirs);
    if !missing.is_empty() {
        return Err(CheckError::MissingDirectories(
            missing.into_iter().map(PathBuf::from).collect(),
        ));
    }

    let formatter = HumanFormatter::new(&cli.dirs, &ignored, &cli.fix_command);
    formatter.write_header(out)?;

    // 3. Collect and scan
    let engine = ExecutionEngine::new(&ignored)?;
    debug!(
        rules = engine.scanner().active_rules().count(),
        roots = cli.dirs.len(),
        "starting scan"
    );
    let result = engine.execute_roots(&cli.dirs)?;

    // 4. Report
    formatter.write_report(out, &result)?;

    Ok(RunSummary::from_violations(result.files_checked, &result.violations).passed())
}

fn resolve_ignore(raw: Option<&str>, err: &mut dyn WriteColor) -> io::Result<IgnoreSet> {
    let Some(raw) = raw else {
        return Ok(IgnoreSet::new());
    };

    let resolved = IgnoreSet::resolve(raw);
    for token in &resolved.unknown {
        write_styled(
            err,
            &fg(Color::Yellow),
            &format!(
                "Warning: Unknown category \"{}\". Valid: {}",
                token,
                Category::valid_keys()
            ),
        )?;
        writeln!(err)?;
    }

    Ok(resolved.set)
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
