#![forbid(unsafe_code)]

//! charcheck: plain-ASCII punctuation linting for content files
//!
//! charcheck walks content directories, flags typographic Unicode characters
//! (dashes, smart quotes, ellipsis, bullets, emoji and arrows) line by line,
//! and suggests ASCII replacements.

pub mod cli;
pub mod engine;
pub mod error;
pub mod output;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{RuleError, ScanError};

// Re-export core domain types for convenient access
pub use rules::{Category, IgnoreSet, Restriction, Violation};
pub use types::Severity;
