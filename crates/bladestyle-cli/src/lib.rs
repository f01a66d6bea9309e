//! CLI logic for the blade style checker.
//!
//! Reads one style expression from a file, checks it, and writes either the
//! canonical text or an indented listing of the parsed tree.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use bladestyle::{BladeStyleError, StyleBuilder};

/// Run the blade style CLI application
///
/// # Errors
///
/// Returns `BladeStyleError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing and validation errors
/// - Output errors
pub fn run(args: &Args) -> Result<(), BladeStyleError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing style"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = StyleBuilder::new(app_config);
    let tree = builder.parse(&source)?;

    let mut text = match tree.root() {
        Some(root) if args.describe => builder.describe(&tree, root)?,
        Some(root) => builder.to_source(&tree, root)?,
        None => String::new(),
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }

    match &args.output {
        Some(path) => {
            fs::write(path, text)?;
            info!(output_file = path; "Style written");
        }
        None => io::stdout().write_all(text.as_bytes())?,
    }

    Ok(())
}
