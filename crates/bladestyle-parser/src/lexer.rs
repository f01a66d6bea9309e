//! Lexical analyzer for style text.
//!
//! Whitespace carries no meaning anywhere in a style, not even inside a
//! number, so it is stripped first by [`Compacted`]. The remaining text is
//! tokenized with winnow and every token span is mapped back to the original
//! source for diagnostics.
//!
//! The public entry point is [`tokenize`], which performs error-recovering
//! lexical analysis and collects all diagnostics in a single pass.

use std::ops::Range;

use winnow::{
    Parser as _,
    ascii::digit1,
    combinator::{alt, cut_err, not, opt, peek, preceded, terminated},
    error::{ContextError, ErrMode},
    stream::{LocatingSlice, Location, Stream},
    token::{one_of, take_while},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
    tokens::{PositionedToken, Token},
};

/// Rich diagnostic information for lexer errors.
///
/// Attached to winnow errors via `.context()`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LexerDiagnostic {
    code: ErrorCode,
    message: &'static str,
    help: Option<&'static str>,
    /// The error span covers from `start` to the error position.
    start: usize,
}

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = std::result::Result<O, ErrMode<ContextError<LexerDiagnostic>>>;

/// Source text with every whitespace character removed.
///
/// Keeps, for each byte of the compacted text, the offset of the same byte in
/// the source.
#[derive(Debug)]
pub(crate) struct Compacted<'src> {
    source: &'src str,
    text: String,
    offsets: Vec<usize>,
}

impl<'src> Compacted<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        let mut text = String::with_capacity(source.len());
        let mut offsets = Vec::with_capacity(source.len());
        for (offset, c) in source.char_indices() {
            if c.is_whitespace() {
                continue;
            }
            text.push(c);
            offsets.extend(offset..offset + c.len_utf8());
        }
        Self {
            source,
            text,
            offsets,
        }
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The whole source, whitespace included.
    pub(crate) fn source_span(&self) -> Span {
        Span::new(0..self.source.len())
    }

    /// Map a range of the compacted text to the source text.
    pub(crate) fn map_range(&self, range: Range<usize>) -> Span {
        let start = self
            .offsets
            .get(range.start)
            .copied()
            .unwrap_or(self.source.len());
        let end = if range.end > range.start {
            self.offsets
                .get(range.end - 1)
                .map_or(self.source.len(), |offset| offset + 1)
        } else {
            start
        };
        Span::new(start..end)
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Parse a style, constant or `Type::VALUE` name.
fn identifier<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    take_while(1.., |c: char| is_identifier_char(c) || c == ':')
        .verify(|s: &str| {
            s.chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        })
        .map(Token::Identifier)
        .parse_next(input)
}

fn integer_value(negative: bool, radix: u32, digits: &str) -> Option<i32> {
    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}

/// Parse an optionally negative decimal, `0b` binary or `0x` hex literal.
///
/// Commits once a digit is seen, so `0b2`, `12ab` and out-of-range values are
/// reported as invalid literals rather than split into several tokens.
fn integer_literal<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    let start = input.current_token_start();
    let negative = opt('-').parse_next(input)?.is_some();
    peek(one_of(|c: char| c.is_ascii_digit())).parse_next(input)?;

    let binary = preceded(alt(("0b", "0B")), take_while(1.., ('0', '1'))).map(|d| (2, d));
    let hex = preceded(alt(("0x", "0X")), take_while(1.., |c: char| c.is_ascii_hexdigit())).map(|d| (16, d));
    let decimal = digit1.map(|d| (10, d));

    cut_err(
        terminated(
            alt((binary, hex, decimal)),
            peek(not(one_of(is_identifier_char))),
        )
        .verify_map(|(radix, digits): (u32, &str)| integer_value(negative, radix, digits)),
    )
    .context(LexerDiagnostic {
        code: ErrorCode::E003,
        message: "invalid integer literal",
        help: Some("use a decimal number, `0b` with binary digits or `0x` with hex digits, within 32 bits"),
        start,
    })
    .map(Token::Integer)
    .parse_next(input)
}

fn punctuation<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    alt((
        '&'.value(Token::Ampersand),
        '<'.value(Token::LeftAngle),
        '>'.value(Token::RightAngle),
        '('.value(Token::LeftParen),
        ')'.value(Token::RightParen),
        ','.value(Token::Comma),
    ))
    .parse_next(input)
}

/// Parse a single token, returning it with its compacted-text range.
fn ranged_token<'a>(input: &mut Input<'a>) -> IResult<(Token<'a>, Range<usize>)> {
    let start_pos = input.current_token_start();

    let token = alt((
        integer_literal, // Must come before identifier
        identifier,
        punctuation,
    ))
    .parse_next(input)?;

    let end_pos = input.current_token_start();
    Ok((token, start_pos..end_pos))
}

/// Lexer that accumulates tokens and diagnostics during tokenization.
struct Lexer<'a> {
    compacted: &'a Compacted<'a>,
    tokens: Vec<PositionedToken<'a>>,
    diagnostics: DiagnosticCollector,
}

impl<'a> Lexer<'a> {
    fn new(compacted: &'a Compacted<'a>) -> Self {
        Self {
            compacted,
            tokens: Vec::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    fn tokenize(&mut self) {
        let mut input = LocatingSlice::new(self.compacted.text());
        while !input.is_empty() {
            let checkpoint = input.checkpoint();
            let token_start = input.current_token_start();
            match ranged_token(&mut input) {
                Ok((token, range)) => {
                    let span = self.compacted.map_range(range);
                    self.tokens.push(PositionedToken::new(token, span));
                }
                Err(e) => {
                    input.reset(&checkpoint);
                    let diagnostic = self.convert_err_mode(e, token_start);
                    self.diagnostics.emit(diagnostic);

                    // Skip the offending word and keep going.
                    let skip = self.word_end(token_start) - token_start;
                    let _ = input.next_slice(skip);
                }
            }
        }
    }

    fn finish(self) -> Result<Vec<PositionedToken<'a>>, ParseError> {
        self.diagnostics.finish().map(|()| self.tokens)
    }

    /// Convert an ErrMode and error position to a Diagnostic.
    ///
    /// Falls back to E002 (unexpected character) if no diagnostic context is
    /// found.
    fn convert_err_mode(
        &self,
        err: ErrMode<ContextError<LexerDiagnostic>>,
        error_pos: usize,
    ) -> Diagnostic {
        let context_error = match err {
            ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx,
            _ => ContextError::new(),
        };

        if let Some(LexerDiagnostic {
            code,
            message,
            help,
            start,
        }) = context_error.context().next()
        {
            let end = self.word_end(*start);
            let span = self.compacted.map_range(*start..end);
            let mut diag = Diagnostic::error(*message)
                .with_code(*code)
                .with_label(span, code.description());
            if let Some(h) = help {
                diag = diag.with_help(*h);
            }
            return diag;
        }

        let unexpected = self.compacted.text()[error_pos..].chars().next();
        let width = unexpected.map_or(1, char::len_utf8);
        let span = self.compacted.map_range(error_pos..error_pos + width);
        let message = match unexpected {
            Some(c) => format!("unexpected character `{c}`"),
            None => "unexpected end of input".to_string(),
        };
        Diagnostic::error(message)
            .with_code(ErrorCode::E002)
            .with_label(span, ErrorCode::E002.description())
            .with_help("styles contain only names, integers, `<`, `>`, `,`, `&` and `()`")
    }

    /// End of the word starting at `pos`: one character, extended over an
    /// identifier-like run when it starts a number or a name.
    fn word_end(&self, pos: usize) -> usize {
        let rest = self.compacted.text().get(pos..).unwrap_or_default();
        let Some(first) = rest.chars().next() else {
            return pos;
        };
        let mut len = first.len_utf8();
        if first == '-' || is_identifier_char(first) {
            len += rest[len..]
                .chars()
                .take_while(|c| is_identifier_char(*c))
                .map(char::len_utf8)
                .sum::<usize>();
        }
        pos + len
    }
}

/// Tokenize compacted text, collecting every lexical error.
///
/// # Returns
///
/// - `Ok(tokens)` - All tokens successfully parsed, spans in source offsets
/// - `Err(ParseError)` - One or more errors occurred; contains all diagnostics
pub(crate) fn tokenize<'a>(compacted: &'a Compacted<'a>) -> Result<Vec<PositionedToken<'a>>, ParseError> {
    let mut lexer = Lexer::new(compacted);
    lexer.tokenize();
    lexer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &'static str) -> Vec<Token<'static>> {
        // Leak keeps the compacted text alive for the returned tokens.
        let compacted: &'static Compacted<'static> = Box::leak(Box::new(Compacted::new(source)));
        tokenize(compacted)
            .expect("input should tokenize")
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    fn first_error(source: &str) -> Diagnostic {
        let compacted = Compacted::new(source);
        let err = tokenize(&compacted).expect_err("input should fail to tokenize");
        err.diagnostics()[0].clone()
    }

    #[test]
    fn test_compaction_removes_all_whitespace() {
        let compacted = Compacted::new(" Rgb < 2 5\t5 ,\n0 >\u{00A0}");
        assert_eq!(compacted.text(), "Rgb<255,0>");
        assert!(!compacted.is_empty());
        assert!(Compacted::new(" \n\t ").is_empty());
    }

    #[test]
    fn test_map_range_points_into_source() {
        let source = "A < 1 2 >";
        let compacted = Compacted::new(source);
        // "12" in the compacted text is "1 2" in the source.
        let span = compacted.map_range(2..4);
        assert_eq!(&source[span.to_range()], "1 2");
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(tokens("Red"), [Token::Identifier("Red")]);
        assert_eq!(tokens("EFFECT_CLASH"), [Token::Identifier("EFFECT_CLASH")]);
        assert_eq!(
            tokens("SaberBase::LOCKUP_NORMAL"),
            [Token::Identifier("SaberBase::LOCKUP_NORMAL")]
        );
        assert_eq!(tokens("style_pov"), [Token::Identifier("style_pov")]);
    }

    #[test]
    fn test_integer_literals() {
        assert_eq!(tokens("300"), [Token::Integer(300)]);
        assert_eq!(tokens("-16384"), [Token::Integer(-16384)]);
        assert_eq!(tokens("0b0000000000000101"), [Token::Integer(5)]);
        assert_eq!(tokens("0xFF"), [Token::Integer(255)]);
        assert_eq!(tokens("0"), [Token::Integer(0)]);
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            tokens("&<>(),"),
            [
                Token::Ampersand,
                Token::LeftAngle,
                Token::RightAngle,
                Token::LeftParen,
                Token::RightParen,
                Token::Comma,
            ]
        );
    }

    #[test]
    fn test_full_expression() {
        assert_eq!(
            tokens("StylePtr<Rgb<255, 0, 0>>()"),
            [
                Token::Identifier("StylePtr"),
                Token::LeftAngle,
                Token::Identifier("Rgb"),
                Token::LeftAngle,
                Token::Integer(255),
                Token::Comma,
                Token::Integer(0),
                Token::Comma,
                Token::Integer(0),
                Token::RightAngle,
                Token::RightAngle,
                Token::LeftParen,
                Token::RightParen,
            ]
        );
    }

    #[test]
    fn test_invalid_literals() {
        assert_eq!(first_error("0b").code(), Some(ErrorCode::E003));
        assert_eq!(first_error("0b102").code(), Some(ErrorCode::E003));
        assert_eq!(first_error("12abc").code(), Some(ErrorCode::E003));
        assert_eq!(first_error("99999999999").code(), Some(ErrorCode::E003));
    }

    #[test]
    fn test_unexpected_character_span() {
        let source = "Red ; ";
        let diag = first_error(source);
        assert_eq!(diag.code(), Some(ErrorCode::E002));
        assert_eq!(diag.message(), "unexpected character `;`");
        let span = diag.primary_span().expect("labelled");
        assert_eq!(&source[span.to_range()], ";");
    }

    #[test]
    fn test_collects_multiple_errors() {
        let compacted = Compacted::new("A;B\"C");
        let err = tokenize(&compacted).expect_err("two bad characters");
        assert_eq!(err.diagnostics().len(), 2);
    }
}
