#![forbid(unsafe_code)]

//! Compiled regex form of a restriction
//!
//! This module provides RegexRule, which pairs a restriction with its compiled
//! pattern and reports every match on a single line.

use crate::error::RuleError;
use crate::rules::{Restriction, Violation};
use regex::Regex;
use std::path::Path;

/// Characters of context kept on each side of a match
pub const CONTEXT_RADIUS: usize = 20;

/// A restriction with its pattern compiled
///
/// The `regex` crate matches on Unicode scalar values, so supplementary-plane
/// emoji are matched as whole codepoints.
pub struct RegexRule {
    restriction: Restriction,
    pattern: Regex,
}

impl std::fmt::Debug for RegexRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegexRule")
            .field("restriction", &self.restriction)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

impl RegexRule {
    /// Compiles the pattern of a restriction
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidRegex` if the pattern does not compile.
    pub fn compile(restriction: Restriction) -> Result<Self, RuleError> {
        let pattern =
            Regex::new(restriction.pattern()).map_err(|e| RuleError::InvalidRegex {
                rule: restriction.name(),
                message: e.to_string(),
            })?;

        Ok(Self {
            restriction,
            pattern,
        })
    }

    pub fn restriction(&self) -> Restriction {
        self.restriction
    }

    /// Reports every non-overlapping match in `line`, by ascending column
    ///
    /// Columns are counted incrementally from the previous match, so a line
    /// is walked once however many matches it holds.
    pub fn execute_line(&self, file: &Path, line_number: u32, line: &str) -> Vec<Violation> {
        let mut cursor = ColumnCursor::default();

        self.pattern
            .find_iter(line)
            .map(|m| Violation {
                restriction: self.restriction,
                file: file.to_path_buf(),
                line: line_number,
                column: cursor.advance(line, m.start()),
                matched: m.as_str().to_string(),
                context: context_window(line, m.start()),
            })
            .collect()
    }
}

/// Converts ascending byte offsets in one line to 1-indexed codepoint columns
#[derive(Debug, Default)]
struct ColumnCursor {
    byte: usize,
    chars: usize,
}

impl ColumnCursor {
    /// `byte_offset` must not precede the previous offset and must lie on a
    /// char boundary.
    fn advance(&mut self, line: &str, byte_offset: usize) -> u32 {
        self.chars += line[self.byte..byte_offset].chars().count();
        self.byte = byte_offset;
        (self.chars + 1) as u32
    }
}

/// Extracts the trimmed context around a match
///
/// Takes up to `CONTEXT_RADIUS` codepoints before the match start and up to
/// `CONTEXT_RADIUS` codepoints from the match start onward, clipped at the
/// line boundaries.
fn context_window(line: &str, byte_offset: usize) -> String {
    let before = &line[..byte_offset];
    let after = &line[byte_offset..];

    let start = before
        .char_indices()
        .rev()
        .nth(CONTEXT_RADIUS - 1)
        .map_or(0, |(i, _)| i);
    let end = after
        .char_indices()
        .nth(CONTEXT_RADIUS)
        .map_or(after.len(), |(i, _)| i);

    format!("{}{}", &before[start..], &after[..end])
        .trim()
        .to_string()
}
