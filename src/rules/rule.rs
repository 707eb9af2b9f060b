#![forbid(unsafe_code)]

//! Violation records produced by the scanner

use crate::rules::Restriction;
use crate::types::Severity;
use std::path::PathBuf;

/// A single restricted character found in a file
///
/// Rule metadata (name, codepoint label, replacement, severity) is derived
/// from the restriction that produced the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Restriction that matched
    pub restriction: Restriction,

    /// File path where the violation was found
    pub file: PathBuf,

    /// Line number (1-indexed)
    pub line: u32,

    /// Column of the match start in codepoints (1-indexed)
    pub column: u32,

    /// The matched character(s)
    pub matched: String,

    /// Trimmed text surrounding the match
    pub context: String,
}

impl Violation {
    pub fn name(&self) -> &'static str {
        self.restriction.name()
    }

    pub fn unicode(&self) -> &'static str {
        self.restriction.unicode()
    }

    pub fn replacement(&self) -> &'static str {
        self.restriction.replacement()
    }

    pub fn severity(&self) -> Severity {
        self.restriction.severity()
    }
}
