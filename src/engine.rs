//! File discovery, line scanning and run execution

pub mod executor;
pub mod file_walker;
pub mod scanner;

pub use executor::{ExecutionEngine, ExecutionResult};
pub use file_walker::{FileWalker, FileWalkerError, collect_files};
pub use scanner::Scanner;
