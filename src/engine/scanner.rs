#![forbid(unsafe_code)]

//! Line scanner
//!
//! Applies every active restriction to each line of a file. Within a line,
//! violations are ordered by restriction declaration order first and by
//! ascending column second; two rules never interleave on the same line.

use crate::error::RuleError;
use crate::rules::{IgnoreSet, RegexRule, Restriction, Violation};
use std::path::Path;

/// Compiled set of the restrictions active for one run
#[derive(Debug)]
pub struct Scanner {
    rules: Vec<RegexRule>,
}

impl Scanner {
    /// Compiles every restriction not in `ignored`
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidRegex` if a restriction pattern fails to
    /// compile.
    pub fn new(ignored: &IgnoreSet) -> Result<Self, RuleError> {
        let rules = Restriction::all()
            .filter(|restriction| !ignored.contains(*restriction))
            .map(RegexRule::compile)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }

    /// Restrictions that will be checked, in declaration order
    pub fn active_rules(&self) -> impl Iterator<Item = Restriction> + '_ {
        self.rules.iter().map(RegexRule::restriction)
    }

    /// Scans a whole file's content
    ///
    /// Lines are split on `\n` only; a trailing `\r` stays on the line and
    /// never matches.
    pub fn scan_content(&self, file: &Path, content: &str) -> Vec<Violation> {
        content
            .split('\n')
            .enumerate()
            .flat_map(|(index, line)| self.scan_line(file, (index + 1) as u32, line))
            .collect()
    }

    /// Scans a single line
    pub fn scan_line(&self, file: &Path, line_number: u32, line: &str) -> Vec<Violation> {
        // Every rule pattern is non-ASCII
        if line.is_ascii() {
            return Vec::new();
        }

        self.rules
            .iter()
            .flat_map(|rule| rule.execute_line(file, line_number, line))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Category;

    fn scanner() -> Scanner {
        Scanner::new(&IgnoreSet::new()).unwrap()
    }

    fn summary(violations: &[Violation]) -> Vec<(u32, u32, Restriction)> {
        violations
            .iter()
            .map(|v| (v.line, v.column, v.restriction))
            .collect()
    }

    #[test]
    fn test_all_rules_active_by_default() {
        let active: Vec<Restriction> = scanner().active_rules().collect();
        assert_eq!(active, Restriction::ALL.to_vec());
    }

    #[test]
    fn test_ignored_rules_not_compiled() {
        let ignored = IgnoreSet::from_categories([Category::SmartQuotes, Category::Arrow]);
        let scanner = Scanner::new(&ignored).unwrap();
        let active: Vec<Restriction> = scanner.active_rules().collect();
        assert_eq!(active.len(), 5);
        assert!(!active.contains(&Restriction::LeftDoubleQuote));
        assert!(!active.contains(&Restriction::Arrow));
    }

    #[test]
    fn test_clean_content() {
        let violations = scanner().scan_content(Path::new("plain.txt"), "Hello world\n-- ok...\n");
        assert!(violations.is_empty());
    }

    #[test]
    fn test_single_em_dash() {
        let violations = scanner().scan_content(Path::new("note.md"), "Hello\u{2014}world");
        assert_eq!(violations.len(), 1);
        let v = &violations[0];
        assert_eq!(v.name(), "Em Dash");
        assert_eq!(v.unicode(), "U+2014");
        assert_eq!((v.line, v.column), (1, 6));
        assert_eq!(v.context, "Hello\u{2014}world");
    }

    #[test]
    fn test_line_numbers_and_crlf() {
        let content = "first\r\nsecond \u{2026}\r\nthird";
        let violations = scanner().scan_content(Path::new("a.md"), content);
        assert_eq!(summary(&violations), vec![(2, 8, Restriction::HorizontalEllipsis)]);
    }

    #[test]
    fn test_rule_order_beats_column_order() {
        // The arrow comes first on the line but is declared after the em dash
        let line = "\u{2192} then \u{2014}";
        let violations = scanner().scan_line(Path::new("a.md"), 1, line);
        assert_eq!(
            summary(&violations),
            vec![(1, 8, Restriction::EmDash), (1, 1, Restriction::Arrow)]
        );
    }

    #[test]
    fn test_adjacent_rules_increasing_columns() {
        let violations = scanner().scan_line(Path::new("a.md"), 1, "a\u{2014}b\u{2013}c");
        assert_eq!(
            summary(&violations),
            vec![(1, 2, Restriction::EmDash), (1, 4, Restriction::EnDash)]
        );
    }

    #[test]
    fn test_smart_quotes_each_reported() {
        let line = "\u{201C}quoted\u{201D} and \u{2018}single\u{2019}";
        let violations = scanner().scan_line(Path::new("a.md"), 1, line);
        let names: Vec<&str> = violations.iter().map(|v| v.name()).collect();
        assert_eq!(
            names,
            vec![
                "Left Double Quote",
                "Right Double Quote",
                "Left Single Quote",
                "Right Single Quote"
            ]
        );
    }

    #[test]
    fn test_supplementary_emoji_not_split() {
        let violations = scanner().scan_line(Path::new("a.md"), 1, "ok \u{1F680} go");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].restriction, Restriction::Emoji);
        assert_eq!(violations[0].column, 4);
        assert_eq!(violations[0].matched, "\u{1F680}");
    }

    #[test]
    fn test_ignore_removes_matches() {
        let scanner = Scanner::new(&IgnoreSet::resolve("em-dash").set).unwrap();
        let violations = scanner.scan_content(Path::new("a.md"), "Hello\u{2014}world");
        assert!(violations.is_empty());
    }

    #[test]
    fn test_non_restricted_unicode_is_clean() {
        let violations = scanner().scan_line(Path::new("a.md"), 1, "caf\u{e9} na\u{ef}ve \u{fffd}");
        assert!(violations.is_empty());
    }
}
