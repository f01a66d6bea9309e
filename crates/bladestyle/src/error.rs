//! Error types for style processing.
//!
//! [`BladeStyleError`] wraps every failure the [`StyleBuilder`](crate::StyleBuilder)
//! can report.

use std::io;

use thiserror::Error;

use bladestyle_core::ModelError;
use bladestyle_parser::{EmitError, error::ParseError};

/// The main error type for style operations.
///
/// The `Parse` variant keeps the source text next to the located diagnostics
/// so callers can render them.
#[derive(Debug, Error)]
pub enum BladeStyleError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Invalid style: {0}")]
    Validation(#[from] ModelError),

    #[error("Cannot write style: {0}")]
    Emit(#[from] EmitError),

    #[error("Unknown style `{0}`")]
    UnknownStyle(String),
}

impl BladeStyleError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
