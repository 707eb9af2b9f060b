//! Error types for charcheck
//!
//! This module defines the error types used throughout charcheck, following
//! a hierarchical structure with specific error variants for different
//! error categories.

use std::path::PathBuf;

/// Rule-related errors
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Invalid regex pattern
    #[error("Invalid regex pattern for {rule}: {message}")]
    InvalidRegex { rule: &'static str, message: String },
}

/// Top-level error type for a scan run
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Rule error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// File discovery error
    #[error("File walker error: {0}")]
    FileWalker(#[from] crate::engine::file_walker::FileWalkerError),

    /// A collected file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}
