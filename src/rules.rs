#![forbid(unsafe_code)]

//! Restriction table, ignore categories and violation records

mod category;
mod regex_rule;
mod restriction;
mod rule;

// Re-export core types
pub use category::{Category, IgnoreSet, ResolvedIgnore};
pub use regex_rule::{CONTEXT_RADIUS, RegexRule};
pub use restriction::Restriction;
pub use rule::Violation;
