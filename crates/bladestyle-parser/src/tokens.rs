//! Tokens of the compacted style text.

use std::fmt;

use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'src> {
    /// Style, constant or enum name, possibly `::` qualified.
    Identifier(&'src str),
    /// Decimal, `0b` binary or `0x` hex literal.
    Integer(i32),

    Ampersand,    // &
    LeftAngle,    // <
    RightAngle,   // >
    LeftParen,    // (
    RightParen,   // )
    Comma,        // ,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(name) => write!(f, "`{name}`"),
            Token::Integer(value) => write!(f, "`{value}`"),
            Token::Ampersand => write!(f, "`&`"),
            Token::LeftAngle => write!(f, "`<`"),
            Token::RightAngle => write!(f, "`>`"),
            Token::LeftParen => write!(f, "`(`"),
            Token::RightParen => write!(f, "`)`"),
            Token::Comma => write!(f, "`,`"),
        }
    }
}

/// A token with position information for winnow integration.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedToken<'src> {
    pub token: Token<'src>,
    pub span: Span,
}

impl<'src> PositionedToken<'src> {
    pub fn new(token: Token<'src>, span: Span) -> Self {
        Self { token, span }
    }
}
