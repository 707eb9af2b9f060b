#![forbid(unsafe_code)]

//! Run summary, grouping and the fix-tool suggestion
//!
//! Everything here is derived from the violation list; nothing is stored
//! independently of it.

use crate::rules::{IgnoreSet, Violation};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Default name of the companion fix tool
pub const DEFAULT_FIX_COMMAND: &str = "fix-character-restrictions";

/// Totals for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub files_checked: usize,
    pub files_with_violations: usize,
    pub total_violations: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl RunSummary {
    /// Derives the totals from a run's violations
    pub fn from_violations(files_checked: usize, violations: &[Violation]) -> Self {
        let errors = violations
            .iter()
            .filter(|v| v.severity().is_error())
            .count();

        Self {
            files_checked,
            files_with_violations: group_by_file(violations).len(),
            total_violations: violations.len(),
            errors,
            warnings: violations.len() - errors,
        }
    }

    /// A run passes unless an error-severity violation was found
    ///
    /// Warnings alone never fail a run, even though they are reported.
    pub fn passed(&self) -> bool {
        self.errors == 0
    }
}

/// Violations of one file, in scan order
#[derive(Debug)]
pub struct FileGroup<'a> {
    pub file: &'a Path,
    pub violations: Vec<&'a Violation>,
}

/// Groups violations by file, preserving first-seen file order
pub fn group_by_file(violations: &[Violation]) -> Vec<FileGroup<'_>> {
    let mut groups: Vec<FileGroup<'_>> = Vec::new();
    let mut index: HashMap<&Path, usize> = HashMap::new();

    for violation in violations {
        let file = violation.file.as_path();
        match index.get(file) {
            Some(&i) => groups[i].violations.push(violation),
            None => {
                index.insert(file, groups.len());
                groups.push(FileGroup {
                    file,
                    violations: vec![violation],
                });
            }
        }
    }

    groups
}

/// Builds the ready-to-run fix command line
///
/// The `--ignore=` flag is re-derived from the ignore set and lists exactly
/// the categories with an ignored member, in category table order.
pub fn fix_suggestion(fix_command: &str, ignored: &IgnoreSet, roots: &[PathBuf]) -> String {
    let mut suggestion = fix_command.to_string();

    let categories = ignored.categories();
    if !categories.is_empty() {
        let keys: Vec<&str> = categories.iter().map(|c| c.key()).collect();
        suggestion.push_str(&format!(" --ignore={}", keys.join(",")));
    }

    for root in roots {
        suggestion.push(' ');
        suggestion.push_str(&root.display().to_string());
    }

    suggestion
}
