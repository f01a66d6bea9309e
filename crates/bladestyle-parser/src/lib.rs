//! # Blade Style Parser
//!
//! Reads blade style expressions into a [`StyleTree`] and writes them back.
//!
//! ## Usage
//!
//! ```
//! # use bladestyle_core::catalog;
//! # use bladestyle_parser::{parse, to_source, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = "StylePtr<Layers<Blue, AlphaL<White, SwingSpeed<600>>>>()";
//!
//!     let tree = parse(source, catalog::builtin_registry())?;
//!     let root = tree.root().expect("parse sets the root");
//!     assert_eq!(
//!         to_source(&tree, root).as_deref(),
//!         Ok("StylePtr<Layers<Blue,AlphaL<White,SwingSpeed<600>>>>()")
//!     );
//!     Ok(())
//! }
//! ```

mod build;
mod emitter;
pub mod error;
mod lexer;
mod parser;
#[cfg(test)]
mod parser_tests;
mod parser_types;
mod span;
mod tokens;

pub use emitter::{BitsFormat, EmitError, EmitOptions, describe, to_source, to_source_with};
pub use error::ParseError;
pub use parser::MAX_NESTING;
pub use span::Span;

use log::debug;

use bladestyle_core::{NodeId, Registry, StyleTree};

use build::Builder;
use error::{Diagnostic, DiagnosticCollector, ErrorCode};
use lexer::Compacted;

/// Parse `source` into a new tree whose root is the expression.
///
/// The pipeline is:
///
/// 1. **Compact** - Strip every whitespace character
/// 2. **Tokenize** - Split the text into names, literals and punctuation
/// 3. **Parse** - Check the bracket structure of the expression, nested at
///    most [`MAX_NESTING`] levels deep
/// 4. **Build** - Resolve names through `registry` and generate nodes
///
/// # Errors
///
/// Returns a [`ParseError`] with located diagnostics. Use
/// [`ParseError::name_found`] to tell unknown names and empty input apart from
/// malformed styles.
pub fn parse(source: &str, registry: &Registry) -> Result<StyleTree, ParseError> {
    let mut tree = StyleTree::new();
    let root = parse_into(source, registry, &mut tree)?;
    tree.set_root(root)
        .map_err(|err| Diagnostic::error(err.to_string()))?;
    Ok(tree)
}

/// Parse `source` into an existing tree, returning the new detached node.
///
/// On failure `tree` is left exactly as it was.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_into(
    source: &str,
    registry: &Registry,
    tree: &mut StyleTree,
) -> Result<NodeId, ParseError> {
    let compacted = Compacted::new(source);
    if compacted.is_empty() {
        return Err(Diagnostic::error("empty input")
            .with_code(ErrorCode::E001)
            .with_label(compacted.source_span(), ErrorCode::E001.description())
            .with_help("write a style expression such as `StylePtr<Red>()`")
            .into());
    }

    let tokens = lexer::tokenize(&compacted)?;
    debug!(tokens = tokens.len(); "Tokenized");

    let mut diagnostics = DiagnosticCollector::new();
    let expr = parser::parse_expression(&tokens, &mut diagnostics)?;
    diagnostics.finish()?;
    debug!(name = *expr.inner().name.inner(), args = expr.inner().arg_count(); "Parsed expression");

    let before = tree.len();
    let id = Builder::new(registry, tree).build(&expr)?;
    debug!(nodes = tree.len() - before; "Built style nodes");
    Ok(id)
}
