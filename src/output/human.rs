#![forbid(unsafe_code)]

//! Human-readable, colourised report
//!
//! Rendering goes through `termcolor::WriteColor`, so the same code writes to
//! a terminal or, in tests, to an in-memory `termcolor::Buffer`.

use crate::engine::ExecutionResult;
use crate::output::summary::{RunSummary, fix_suggestion, group_by_file};
use crate::rules::{IgnoreSet, Violation};
use std::io::{self, Write};
use std::path::PathBuf;
use termcolor::{Color, ColorSpec, WriteColor};

/// Formats a run for people
pub struct HumanFormatter<'a> {
    roots: &'a [PathBuf],
    ignored: &'a IgnoreSet,
    fix_command: &'a str,
}

impl<'a> HumanFormatter<'a> {
    pub fn new(roots: &'a [PathBuf], ignored: &'a IgnoreSet, fix_command: &'a str) -> Self {
        Self {
            roots,
            ignored,
            fix_command,
        }
    }

    /// Writes the banner and, if anything is ignored, the ignored rule names
    pub fn write_header(&self, out: &mut dyn WriteColor) -> io::Result<()> {
        writeln!(out)?;
        write_styled(out, &bold(), "=== Character Restriction Validation ===")?;
        writeln!(out)?;
        writeln!(out)?;

        if !self.ignored.is_empty() {
            let names: Vec<&str> = self.ignored.iter().map(|r| r.name()).collect();
            write_styled(
                out,
                &fg(Color::Yellow),
                &format!("Ignoring categories: {}", names.join(", ")),
            )?;
            writeln!(out)?;
            writeln!(out)?;
        }

        Ok(())
    }

    /// Writes the violations grouped by file, the summary and the fix hint
    pub fn write_report(
        &self,
        out: &mut dyn WriteColor,
        result: &ExecutionResult,
    ) -> io::Result<()> {
        let summary = RunSummary::from_violations(result.files_checked, &result.violations);

        if summary.total_violations == 0 {
            write_styled(
                out,
                &fg(Color::Green),
                "No character restriction violations found.",
            )?;
            writeln!(out)?;
            writeln!(
                out,
                "  Checked {} files in: {}",
                summary.files_checked,
                self.joined_roots(", ")
            )?;
            return Ok(());
        }

        write_styled(
            out,
            &bold(),
            &format!("Found {} violations ", summary.total_violations),
        )?;
        write!(out, "(")?;
        write_styled(out, &fg(Color::Red), &format!("{} errors", summary.errors))?;
        write!(out, ", ")?;
        write_styled(
            out,
            &fg(Color::Yellow),
            &format!("{} warnings", summary.warnings),
        )?;
        writeln!(out, ")")?;
        writeln!(out)?;

        for group in group_by_file(&result.violations) {
            write_styled(
                out,
                &bold(),
                &format!(
                    "{} ({} violations):",
                    group.file.display(),
                    group.violations.len()
                ),
            )?;
            writeln!(out)?;

            for violation in group.violations {
                write_violation(out, violation)?;
            }
        }

        write_styled(out, &bold(), "=== Summary ===")?;
        writeln!(out)?;
        writeln!(out, "  Files checked: {}", summary.files_checked)?;
        writeln!(
            out,
            "  Files with violations: {}",
            summary.files_with_violations
        )?;
        writeln!(out, "  Total violations: {}", summary.total_violations)?;
        writeln!(out, "  Errors: {}", summary.errors)?;
        writeln!(out, "  Warnings: {}", summary.warnings)?;
        writeln!(out)?;
        writeln!(
            out,
            "Run fix script to auto-correct: {}",
            fix_suggestion(self.fix_command, self.ignored, self.roots)
        )?;

        Ok(())
    }

    fn joined_roots(&self, separator: &str) -> String {
        self.roots
            .iter()
            .map(|root| root.display().to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

fn write_violation(out: &mut dyn WriteColor, v: &Violation) -> io::Result<()> {
    let severity = v.severity();
    let severity_color = if severity.is_error() {
        Color::Red
    } else {
        Color::Yellow
    };

    write!(out, "  ")?;
    write_styled(out, &fg(severity_color), severity.label())?;
    write!(out, " ")?;
    write_styled(out, &fg(Color::Cyan), &v.file.display().to_string())?;
    writeln!(out, ":{}:{}", v.line, v.column)?;

    write!(out, "    ")?;
    write_styled(out, &bold(), v.name())?;
    writeln!(out, " ({}) found: \"{}\"", v.unicode(), v.matched)?;
    writeln!(out, "    Replace with: {}", v.replacement())?;
    writeln!(out, "    Context: ...{}...", v.context)?;
    writeln!(out)
}

/// Writes `text` in `spec`, then resets the colour
pub fn write_styled(out: &mut dyn WriteColor, spec: &ColorSpec, text: &str) -> io::Result<()> {
    out.set_color(spec)?;
    write!(out, "{}", text)?;
    out.reset()
}

pub fn fg(color: Color) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color));
    spec
}

fn bold() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_bold(true);
    spec
}
