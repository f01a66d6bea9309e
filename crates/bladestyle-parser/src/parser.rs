//! Parser for style tokens.
//!
//! This module turns the token stream from the [`lexer`](super::lexer) into
//! the unresolved syntax tree of [`parser_types`](super::parser_types). The
//! entry point is [`parse_expression`].

use winnow::{
    Parser as _,
    combinator::{alt, opt, separated},
    error::{ContextError, ErrMode},
    stream::{Stream, TokenSlice},
    token::any,
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, Result},
    parser_types as types,
    span::{Span, Spanned},
    tokens::{PositionedToken, Token},
};

/// Deepest `<` nesting accepted.
pub const MAX_NESTING: usize = 128;

/// Context type for parser errors
#[derive(Debug, Clone, PartialEq, Eq)]
enum Context {
    /// Description of what is currently being parsed
    Label(&'static str),
    /// Remaining token count (`eof_offset()`) at error start position
    StartOffset(usize),
}

type Input<'src> = TokenSlice<'src, PositionedToken<'src>>;
type IResult<O> = std::result::Result<O, ErrMode<ContextError<Context>>>;

/// Run `f`, turning any failure into a cut error that remembers where the
/// failing construct started.
fn cut_err<'src, O, F>(input: &mut Input<'src>, f: F) -> IResult<O>
where
    F: FnOnce(&mut Input<'src>) -> IResult<O>,
{
    let start_remaining = input.eof_offset();

    match f(input) {
        Ok(o) => Ok(o),
        Err(ErrMode::Backtrack(mut e)) | Err(ErrMode::Cut(mut e)) => {
            e.push(Context::StartOffset(start_remaining));
            Err(ErrMode::Cut(e))
        }
        Err(e) => Err(e),
    }
}

/// Match one punctuation token, returning its span.
fn punct<'src>(
    expected: Token<'static>,
    label: &'static str,
) -> impl FnMut(&mut Input<'src>) -> IResult<Span> {
    move |input: &mut Input<'src>| {
        any.verify_map(move |token: &PositionedToken<'_>| {
            (token.token == expected).then_some(token.span)
        })
        .context(Context::Label(label))
        .parse_next(input)
    }
}

fn style_name<'src>(input: &mut Input<'src>) -> IResult<Spanned<&'src str>> {
    any.verify_map(|token: &PositionedToken<'src>| match token.token {
        Token::Identifier(name) => Some(Spanned::new(name, token.span)),
        _ => None,
    })
    .context(Context::Label("style name"))
    .parse_next(input)
}

fn integer<'src>(input: &mut Input<'src>) -> IResult<Spanned<i32>> {
    any.verify_map(|token: &PositionedToken<'_>| match token.token {
        Token::Integer(value) => Some(Spanned::new(value, token.span)),
        _ => None,
    })
    .context(Context::Label("integer"))
    .parse_next(input)
}

fn argument<'src>(input: &mut Input<'src>) -> IResult<types::Argument<'src>> {
    alt((
        integer.map(types::Argument::Integer),
        expression.map(types::Argument::Expr),
    ))
    .context(Context::Label("argument"))
    .parse_next(input)
}

/// `<` [argument (`,` argument)*] `>`
fn argument_list<'src>(input: &mut Input<'src>) -> IResult<Spanned<Vec<types::Argument<'src>>>> {
    let open = punct(Token::LeftAngle, "`<`").parse_next(input)?;
    cut_err(input, |input: &mut Input<'src>| {
        let args: Vec<_> =
            separated(0.., argument, punct(Token::Comma, "`,`")).parse_next(input)?;
        let close = punct(Token::RightAngle, "`,` or `>`").parse_next(input)?;
        Ok(Spanned::new(args, open.union(close)))
    })
}

/// `()`
fn call_suffix<'src>(input: &mut Input<'src>) -> IResult<Span> {
    let open = punct(Token::LeftParen, "`(`").parse_next(input)?;
    let close = cut_err(input, punct(Token::RightParen, "`)`"))?;
    Ok(open.union(close))
}

fn expression<'src>(input: &mut Input<'src>) -> IResult<Spanned<types::Expr<'src>>> {
    let ampersand = opt(punct(Token::Ampersand, "`&`")).parse_next(input)?;
    let name = match ampersand {
        Some(_) => cut_err(input, style_name)?,
        None => style_name.parse_next(input)?,
    };
    let args = opt(argument_list).parse_next(input)?;
    let call = opt(call_suffix).parse_next(input)?;

    let end = call
        .or_else(|| args.as_ref().map(Spanned::span))
        .unwrap_or(name.span());
    let span = ampersand.unwrap_or(name.span()).union(end);

    Ok(Spanned::new(
        types::Expr {
            reference: ampersand.is_some(),
            name,
            args,
            call,
        },
        span,
    ))
}

/// Check the bracket structure in one pass before any recursive parsing.
///
/// Reports the first `>` without a matching `<`, the first `<` nested more
/// than [`MAX_NESTING`] deep, or the innermost `<` left open.
fn check_brackets(tokens: &[PositionedToken<'_>]) -> Option<Diagnostic> {
    let mut open = Vec::new();
    for token in tokens {
        match token.token {
            Token::LeftAngle => {
                if open.len() == MAX_NESTING {
                    let outermost = open[0];
                    return Some(
                        Diagnostic::error("expression nested too deeply")
                            .with_code(ErrorCode::E102)
                            .with_label(token.span, format!("level {} opens here", MAX_NESTING + 1))
                            .with_secondary_label(outermost, "outermost level")
                            .with_help(format!("styles may nest at most {MAX_NESTING} levels")),
                    );
                }
                open.push(token.span);
            }
            Token::RightAngle => {
                if open.pop().is_none() {
                    return Some(
                        Diagnostic::error("unmatched `>`")
                            .with_code(ErrorCode::E101)
                            .with_label(token.span, "no `<` to close")
                            .with_help("remove the extra `>`"),
                    );
                }
            }
            _ => {}
        }
    }
    open.pop().map(|span| {
        Diagnostic::error("unclosed `<`")
            .with_code(ErrorCode::E101)
            .with_label(span, "this `<` is never closed")
            .with_help("add the missing `>`")
    })
}

fn convert_error(
    error: ErrMode<ContextError<Context>>,
    tokens: &[PositionedToken],
    current_remaining: usize,
) -> Diagnostic {
    let context = match error {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => e,
        _ => ContextError::new(),
    };

    let start_remaining = context.context().find_map(|ctx| match ctx {
        Context::StartOffset(n) => Some(*n),
        _ => None,
    });
    let end_offset = tokens.len() - current_remaining;
    let start_offset = start_remaining.map_or(end_offset, |r| tokens.len() - r);

    let expected: Vec<&str> = context
        .context()
        .filter_map(|ctx| match ctx {
            Context::Label(label) => Some(*label),
            _ => None,
        })
        .collect();
    let message = match expected.first() {
        Some(label) => format!("expected {label}"),
        None => "unexpected token".to_string(),
    };

    let (error_span, found) = match tokens.get(end_offset) {
        Some(token) => (token.span, format!("found {}", token.token)),
        None => {
            let span = tokens
                .get(start_offset..)
                .and_then(|rest| rest.first().zip(rest.last()))
                .or_else(|| tokens.first().zip(tokens.last()))
                .map(|(first, last)| first.span.union(last.span))
                .unwrap_or_default();
            (span, "found end of input".to_string())
        }
    };

    Diagnostic::error(message)
        .with_code(ErrorCode::E100)
        .with_label(error_span, found)
        .with_help("a style is `Name`, `Name<arg, ...>` or `Name<arg, ...>()`")
}

/// Parse exactly one expression from `tokens`.
///
/// Input left over after a complete expression is reported to `diagnostics`
/// as a warning and ignored, unless it contains angle brackets.
pub(crate) fn parse_expression<'src>(
    tokens: &'src [PositionedToken<'src>],
    diagnostics: &mut DiagnosticCollector,
) -> Result<Spanned<types::Expr<'src>>> {
    if let Some(diagnostic) = check_brackets(tokens) {
        return Err(diagnostic);
    }

    let mut token_slice = TokenSlice::new(tokens);

    let expr = match expression.parse_next(&mut token_slice) {
        Ok(expr) => expr,
        Err(e) => {
            let current_remaining = token_slice.eof_offset();
            return Err(convert_error(e, tokens, current_remaining));
        }
    };

    let consumed = tokens.len() - token_slice.eof_offset();
    let trailing = &tokens[consumed..];
    if let Some((first, last)) = trailing.first().zip(trailing.last()) {
        let span = first.span.union(last.span);
        let has_brackets = trailing
            .iter()
            .any(|t| matches!(t.token, Token::LeftAngle | Token::RightAngle));
        if has_brackets {
            return Err(Diagnostic::error("unexpected input after the expression")
                .with_code(ErrorCode::E100)
                .with_label(span, "second expression")
                .with_help("a style holds exactly one expression"));
        }
        diagnostics.emit(
            Diagnostic::warning("ignoring input after the expression")
                .with_label(span, "ignored")
                .with_help("a style holds exactly one expression"),
        );
    }

    Ok(expr)
}
