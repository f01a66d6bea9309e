//! Error codes for style diagnostics.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Lexer errors
//! - `E1xx` - Parser errors
//! - `E2xx` - Build errors (name resolution and argument binding)
//! - `E3xx` - Validation errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Lexer Errors (E0xx)
    // =========================================================================
    /// Empty input.
    ///
    /// The source was empty or contained only whitespace.
    E001,

    /// Unexpected character.
    ///
    /// A character was found that cannot start any token, such as `;` or `"`.
    E002,

    /// Invalid integer literal.
    ///
    /// A literal had no digits after its `0b` / `0x` prefix, was followed by
    /// letters, or does not fit a 32-bit signed integer.
    E003,

    // =========================================================================
    // Parser Errors (E1xx)
    // =========================================================================
    /// Unexpected token.
    ///
    /// The parser found a token it did not expect at this position, for
    /// example two commas in a row or a literal where a name is required.
    E100,

    /// Unbalanced brackets.
    ///
    /// A `<` was never closed, or a `>` appears without a matching `<`.
    E101,

    /// Nesting too deep.
    ///
    /// More than [`MAX_NESTING`](crate::MAX_NESTING) levels of `<` are open
    /// at once.
    E102,

    // =========================================================================
    // Build Errors (E2xx)
    // =========================================================================
    /// Unknown style name.
    ///
    /// The name is not defined in any registry family.
    E200,

    /// Wrong argument count.
    ///
    /// The number of arguments does not match the definition.
    E201,

    /// Argument type mismatch.
    ///
    /// An argument's category is not accepted by its parameter slot.
    E202,

    /// Argument value out of range.
    ///
    /// An integer does not fit the bit field or boolean it is bound to.
    E203,

    // =========================================================================
    // Validation Errors (E3xx)
    // =========================================================================
    /// Incomplete style.
    ///
    /// A parameter slot of the expression has no value.
    E300,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
            ErrorCode::E300 => "E300",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "empty input",
            ErrorCode::E002 => "unexpected character",
            ErrorCode::E003 => "invalid integer literal",
            ErrorCode::E100 => "unexpected token",
            ErrorCode::E101 => "unbalanced brackets",
            ErrorCode::E102 => "nesting too deep",
            ErrorCode::E200 => "unknown style name",
            ErrorCode::E201 => "wrong argument count",
            ErrorCode::E202 => "argument type mismatch",
            ErrorCode::E203 => "argument value out of range",
            ErrorCode::E300 => "incomplete style",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
