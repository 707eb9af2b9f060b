#![forbid(unsafe_code)]

//! Core domain types for charcheck
//!
//! This module defines the fundamental types shared by the rule table,
//! the scanner and the reporter.

use std::fmt;

/// Violation severity levels
///
/// Only `Error` fails a run; `Warning` is reported but advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Returns the lowercase name of the severity
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }

    /// Returns the short label printed in front of each violation
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
        }
    }

    /// Whether violations of this severity fail the run
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
