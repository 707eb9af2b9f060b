//! CLI argument parsing using clap

use crate::output::DEFAULT_FIX_COMMAND;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when writing to a terminal
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

/// charcheck main entry point
#[derive(Parser, Debug)]
#[command(name = "charcheck")]
#[command(about = "Find typographic Unicode punctuation, emoji and arrows in content files")]
#[command(
    after_help = "Categories: emojis, em-dash, en-dash, smart-quotes, ellipsis, bullet, arrow\n\nExamples:\n  charcheck _posts content _docs\n  charcheck --ignore=emojis,em-dash _posts"
)]
#[command(version)]
pub struct Cli {
    /// Comma-separated categories to ignore
    #[arg(long, value_name = "CATEGORIES", require_equals = true)]
    pub ignore: Option<String>,

    /// Directories to scan recursively
    #[arg(value_name = "DIR")]
    pub dirs: Vec<PathBuf>,

    /// Output coloring
    #[arg(long, value_enum, default_value = "auto", require_equals = true)]
    pub color: ColorChoice,

    /// Companion fix tool named in the suggested command
    #[arg(
        long,
        env = "CHARCHECK_FIX_COMMAND",
        default_value = DEFAULT_FIX_COMMAND,
        require_equals = true
    )]
    pub fix_command: String,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
