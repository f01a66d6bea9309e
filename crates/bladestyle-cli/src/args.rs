//! Command-line argument definitions for the blade style CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`].

use clap::Parser;

/// Check a blade style and print it in canonical form
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a file holding one style expression
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Where to write the result; standard output when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Print an indented listing of the parsed tree instead of the style
    #[arg(long)]
    pub describe: bool,
}
