#![forbid(unsafe_code)]

//! Sequential execution of the scanner across collected files
//!
//! Files are read one at a time. A file that cannot be read aborts the whole
//! run; nothing is silently skipped.

use crate::engine::file_walker;
use crate::engine::scanner::Scanner;
use crate::error::ScanError;
use crate::rules::{IgnoreSet, Violation};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result of scanning every collected file
#[derive(Debug, Default)]
pub struct ExecutionResult {
    /// All violations, file by file in collection order
    pub violations: Vec<Violation>,
    /// Number of files checked
    pub files_checked: usize,
}

/// Execution engine that drives the scanner over files
pub struct ExecutionEngine {
    scanner: Scanner,
}

impl ExecutionEngine {
    /// Creates an engine checking every restriction not in `ignored`
    ///
    /// # Errors
    ///
    /// Returns `ScanError::Rule` if a restriction pattern fails to compile.
    pub fn new(ignored: &IgnoreSet) -> Result<Self, ScanError> {
        Ok(Self {
            scanner: Scanner::new(ignored)?,
        })
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// Collects files under `roots` and scans them
    ///
    /// # Errors
    ///
    /// Returns `ScanError::FileWalker` if traversal fails and
    /// `ScanError::Read` on the first file that cannot be read.
    pub fn execute_roots(&self, roots: &[PathBuf]) -> Result<ExecutionResult, ScanError> {
        let files = file_walker::collect_files(roots)?;
        debug!(files = files.len(), "collected content files");
        self.execute(&files)
    }

    /// Scans the given files in order
    ///
    /// # Errors
    ///
    /// Returns `ScanError::Read` on the first file that cannot be read.
    pub fn execute(&self, files: &[PathBuf]) -> Result<ExecutionResult, ScanError> {
        let mut result = ExecutionResult::default();

        for file in files {
            let violations = self.execute_file(file)?;
            debug!(
                file = %file.display(),
                violations = violations.len(),
                "scanned file"
            );
            result.violations.extend(violations);
            result.files_checked += 1;
        }

        Ok(result)
    }

    /// Reads and scans a single file
    ///
    /// Invalid UTF-8 is decoded lossily; only I/O failures are errors.
    pub fn execute_file(&self, file: &Path) -> Result<Vec<Violation>, ScanError> {
        let bytes = fs::read(file).map_err(|source| ScanError::Read {
            path: file.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);

        Ok(self.scanner.scan_content(file, &content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Restriction;
    use tempfile::TempDir;

    #[test]
    fn test_execute_counts_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.md"), "one \u{2014} two").unwrap();
        fs::write(temp_dir.path().join("b.md"), "clean").unwrap();

        let engine = ExecutionEngine::new(&IgnoreSet::new()).unwrap();
        let result = engine
            .execute_roots(&[temp_dir.path().to_path_buf()])
            .unwrap();

        assert_eq!(result.files_checked, 2);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].restriction, Restriction::EmDash);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let engine = ExecutionEngine::new(&IgnoreSet::new()).unwrap();

        let result = engine.execute(&[temp_dir.path().join("gone.md")]);
        assert!(matches!(result, Err(ScanError::Read { .. })));
    }

    #[test]
    fn test_invalid_utf8_decoded_lossily() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("latin1.txt");
        let mut bytes = b"caf\xe9 ".to_vec();
        bytes.extend_from_slice("\u{2022} item".as_bytes());
        fs::write(&file, bytes).unwrap();

        let engine = ExecutionEngine::new(&IgnoreSet::new()).unwrap();
        let violations = engine.execute_file(&file).unwrap();

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].restriction, Restriction::Bullet);
        assert_eq!(violations[0].column, 6);
    }
}
