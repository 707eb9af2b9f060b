//! Report formatting and run summary

pub mod human;
pub mod summary;

pub use human::HumanFormatter;
pub use summary::{DEFAULT_FIX_COMMAND, FileGroup, RunSummary, fix_suggestion, group_by_file};
