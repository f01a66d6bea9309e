//! Syntax tree produced by the parser, before names are resolved.

use crate::span::{Span, Spanned};

/// One style expression: `&`? name, optional `<...>` arguments, optional `()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr<'src> {
    /// Written with a leading `&`.
    pub reference: bool,
    pub name: Spanned<&'src str>,
    /// `None` when the name has no `<...>` at all, `Some(vec![])` for `Name<>`.
    pub args: Option<Spanned<Vec<Argument<'src>>>>,
    /// Span of a trailing `()`.
    pub call: Option<Span>,
}

impl Expr<'_> {
    /// Number of arguments written between the angle brackets.
    pub fn arg_count(&self) -> usize {
        self.args.as_ref().map_or(0, |args| args.inner().len())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Argument<'src> {
    Integer(Spanned<i32>),
    Expr(Spanned<Expr<'src>>),
}

impl Argument<'_> {
    pub fn span(&self) -> Span {
        match self {
            Argument::Integer(value) => value.span(),
            Argument::Expr(expr) => expr.span(),
        }
    }
}
