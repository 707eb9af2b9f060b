//! Helpers shared by the CLI entry points
//!
//! Exit codes, the usage text and terminal colour selection.

use crate::cli::args::ColorChoice;
use crate::rules::Category;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// No violations, or only warnings
pub const EXIT_SUCCESS: i32 = 0;
/// At least one error-severity violation
pub const EXIT_VIOLATIONS: i32 = 1;
/// Usage error, missing directory or unreadable file
pub const EXIT_ERROR: i32 = 2;

/// Usage text printed when no directory is given
pub fn usage() -> String {
    format!(
        "Usage: charcheck [--ignore=categories] <directory> [directory...]\n\
         Example: charcheck _posts content _docs\n\
         Example: charcheck --ignore=emojis,em-dash _posts\n\
         Categories: {}",
        Category::valid_keys()
    )
}

/// Named directories that do not exist, in argument order
pub fn missing_dirs(dirs: &[PathBuf]) -> Vec<&Path> {
    dirs.iter()
        .map(PathBuf::as_path)
        .filter(|dir| !dir.exists())
        .collect()
}

/// Maps the `--color` flag onto termcolor for one output stream
///
/// termcolor's own `Auto` only consults `TERM` and `NO_COLOR`, so a
/// non-terminal stream is downgraded to `Never` here.
pub fn color_choice(choice: ColorChoice, is_terminal: bool) -> termcolor::ColorChoice {
    match choice {
        ColorChoice::Always => termcolor::ColorChoice::Always,
        ColorChoice::Never => termcolor::ColorChoice::Never,
        ColorChoice::Auto if is_terminal => termcolor::ColorChoice::Auto,
        ColorChoice::Auto => termcolor::ColorChoice::Never,
    }
}

pub fn stdout_choice(choice: ColorChoice) -> termcolor::ColorChoice {
    color_choice(choice, std::io::stdout().is_terminal())
}

pub fn stderr_choice(choice: ColorChoice) -> termcolor::ColorChoice {
    color_choice(choice, std::io::stderr().is_terminal())
}
