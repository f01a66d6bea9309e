//! The error returned by the parsing entry points.

use std::fmt;

use crate::error::{Diagnostic, ErrorCode};

/// A type alias for `Result<T, Diagnostic>`.
pub type Result<T> = std::result::Result<T, Diagnostic>;

/// Error type for the parsing lifecycle.
///
/// Wraps one or more diagnostics.
#[derive(Debug)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Get all diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if any diagnostic carries `code`.
    pub fn has_code(&self, code: ErrorCode) -> bool {
        self.diagnostics.iter().any(|d| d.code() == Some(code))
    }

    /// Returns `false` when the failure is that no style name could be
    /// resolved: the input was empty, or a name is in no registry.
    ///
    /// Editors use this to tell "not a style" apart from "a broken style".
    pub fn name_found(&self) -> bool {
        !(self.has_code(ErrorCode::E001) || self.has_code(ErrorCode::E200))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.diagnostics.first() {
            write!(f, "{}", first)?;
            if self.diagnostics.len() > 1 {
                write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

impl From<Vec<Diagnostic>> for ParseError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_multiple() {
        let err: ParseError = vec![
            Diagnostic::error("first error"),
            Diagnostic::error("second error"),
        ]
        .into();

        assert_eq!(err.to_string(), "error: first error (+1 more)");
    }

    #[test]
    fn test_name_found() {
        let unknown: ParseError = Diagnostic::error("unknown style `Foo`")
            .with_code(ErrorCode::E200)
            .into();
        assert!(!unknown.name_found());

        let empty: ParseError = Diagnostic::error("empty input").with_code(ErrorCode::E001).into();
        assert!(!empty.name_found());

        let syntax: ParseError = Diagnostic::error("unbalanced").with_code(ErrorCode::E101).into();
        assert!(syntax.name_found());
    }
}
