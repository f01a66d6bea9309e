//! Error and diagnostic system for the style parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans for rich error context
//! - Severity levels
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning message with optional error code, multiple source
//! locations, and help text. Multiple diagnostics are wrapped in [`ParseError`]
//! for returning from the parsing lifecycle.
//!
//! # Example
//!
//! ```
//! # use bladestyle_parser::error::{Diagnostic, ErrorCode};
//! # use bladestyle_parser::Span;
//!
//! let diag = Diagnostic::error("unknown style `AudioFlickr`")
//!     .with_code(ErrorCode::E200)
//!     .with_label(Span::new(9..20), "not in any registry")
//!     .with_help("check the spelling; names are case sensitive");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;
pub(crate) use parse_error::Result;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
