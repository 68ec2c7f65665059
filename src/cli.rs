//! CLI argument definitions for docstring-renderer.
//!
//! Kept out of `main.rs` so tests can call [`Cli::try_parse_from`] without
//! spawning a subprocess.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Locate a function, method or class in a Python file by keyword.
///
/// Prints the shortest top-level function, `Class.method` or class name
/// that contains the keyword.
///
/// Examples:
///   docstring-renderer --file-path src/app.py --keyword render
///   docstring-renderer --file-path src/app.py --list --format json
#[derive(Debug, Parser)]
#[command(name = "docstring-renderer", version, about)]
pub struct Cli {
    /// Path to the Python file to analyze
    #[arg(long = "file-path", value_name = "PATH")]
    pub file_path: PathBuf,

    /// Substring to look for among declared names (case-sensitive)
    #[arg(long, required_unless_present = "list")]
    pub keyword: Option<String>,

    /// Print every declared name instead of searching
    #[arg(long)]
    pub list: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Cli {
    /// Log filter directive for the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
