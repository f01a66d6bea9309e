//! Name resolution and node construction.
//!
//! Walks a parsed [`Expr`] bottom-up: every argument node is generated before
//! the node that takes it, and any failure removes what was built so far.

use log::{debug, trace};

use bladestyle_core::{
    Arg, GenerateError, ModelError, NodeId, Registry, StyleDef, StyleTree,
};

use crate::{
    error::{Diagnostic, ErrorCode, Result},
    parser_types::{Argument, Expr},
    span::Spanned,
};

/// Builds nodes for parsed expressions inside a tree.
pub(crate) struct Builder<'a> {
    registry: &'a Registry,
    tree: &'a mut StyleTree,
}

impl<'a> Builder<'a> {
    pub(crate) fn new(registry: &'a Registry, tree: &'a mut StyleTree) -> Self {
        Self { registry, tree }
    }

    /// Build `expr` and its arguments, returning the new detached node.
    pub(crate) fn build(&mut self, expr: &Spanned<Expr<'_>>) -> Result<NodeId> {
        let inner = expr.inner();
        let name = *inner.name.inner();

        let Some((family, generator)) = self.registry.resolve(name) else {
            return Err(Diagnostic::error(format!("unknown style `{name}`"))
                .with_code(ErrorCode::E200)
                .with_label(inner.name.span(), "not defined in any registry")
                .with_help("names are case sensitive"));
        };
        trace!(name = name, family = family.as_str(), reference = inner.reference; "Resolved style name");

        let arguments = inner.args.as_ref().map_or(&[][..], |args| args.inner().as_slice());
        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            match argument {
                Argument::Integer(value) => args.push(Arg::Int(*value.inner())),
                Argument::Expr(nested) => match self.build(nested) {
                    Ok(id) => args.push(Arg::Node(id)),
                    Err(diagnostic) => {
                        self.discard(&args);
                        return Err(diagnostic);
                    }
                },
            }
        }

        generator
            .generate(self.tree, None, args)
            .map_err(|err| generate_diagnostic(err, expr, arguments, generator.def()))
    }

    fn discard(&mut self, args: &[Arg]) {
        for arg in args {
            if let Arg::Node(id) = arg {
                if let Err(err) = self.tree.remove_subtree(*id) {
                    debug!(err:%; "Could not remove partially built argument");
                }
            }
        }
    }
}

/// `Name<P1, P2, ...>` as declared, for help text.
fn signature(def: &StyleDef) -> String {
    let params: Vec<&str> = def.params.iter().map(|p| p.name).collect();
    format!("{}<{}>", def.name, params.join(", "))
}

fn generate_diagnostic(
    err: GenerateError,
    expr: &Spanned<Expr<'_>>,
    arguments: &[Argument<'_>],
    def: &StyleDef,
) -> Diagnostic {
    let inner = expr.inner();
    let name_span = inner.name.span();
    let message = err.to_string();

    match err {
        GenerateError::ArgumentCount { found, .. } => {
            let span = inner.args.as_ref().map_or(name_span, Spanned::span);
            Diagnostic::error(message)
                .with_code(ErrorCode::E201)
                .with_label(span, format!("{found} arguments given"))
                .with_help(format!("declared as `{}`", signature(def)))
        }
        GenerateError::Argument { index, source, .. } => {
            let code = match source {
                ModelError::ValueOutOfRange { .. } => ErrorCode::E203,
                _ => ErrorCode::E202,
            };
            let span = arguments.get(index).map_or(name_span, Argument::span);
            let diagnostic = Diagnostic::error(message)
                .with_code(code)
                .with_label(span, source.to_string())
                .with_secondary_label(name_span, format!("argument of `{}`", def.name));
            match source {
                ModelError::TypeMismatch { expected, .. } => {
                    diagnostic.with_help(format!("this position accepts {expected}"))
                }
                ModelError::ValueOutOfRange { kind, .. } => {
                    diagnostic.with_help(format!("value must fit a {kind} parameter"))
                }
                _ => diagnostic,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use bladestyle_core::catalog;

    use super::*;
    use crate::{
        lexer::{Compacted, tokenize},
        error::DiagnosticCollector,
        parser::parse_expression,
    };

    fn build(tree: &mut StyleTree, source: &str) -> Result<NodeId> {
        let compacted = Compacted::new(source);
        let tokens = tokenize(&compacted).expect("input should tokenize");
        let expr = parse_expression(&tokens, &mut DiagnosticCollector::new())?;
        Builder::new(catalog::builtin_registry(), tree).build(&expr)
    }

    #[test]
    fn test_builds_nested_nodes() {
        let mut tree = StyleTree::new();
        let id = build(&mut tree, "StylePtr<AudioFlicker<Red,Blue>>()").expect("builds");
        assert_eq!(tree.get(id).map(|n| n.name()), Some("StylePtr"));
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.detached(), [id]);
    }

    #[test]
    fn test_unknown_name() {
        let mut tree = StyleTree::new();
        let err = build(&mut tree, "Rgb<AudioFlickr<Red,Blue>,0,0>").expect_err("unknown");
        assert_eq!(err.code(), Some(ErrorCode::E200));
        assert_eq!(err.message(), "unknown style `AudioFlickr`");
        assert!(tree.is_empty());
    }

    #[test]
    fn test_wrong_argument_count() {
        let mut tree = StyleTree::new();
        let err = build(&mut tree, "Rgb<255,0>").expect_err("too few");
        assert_eq!(err.code(), Some(ErrorCode::E201));
        assert_eq!(err.help(), Some("declared as `Rgb<R, G, B>`"));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_type_mismatch_cleans_up_siblings() {
        let mut tree = StyleTree::new();
        let source = "AudioFlicker<Red,TrFade<300>>";
        let err = build(&mut tree, source).expect_err("transition is not a colour");
        assert_eq!(err.code(), Some(ErrorCode::E202));
        let span = err.primary_span().expect("labelled");
        assert_eq!(&source[span.to_range()], "TrFade<300>");
        assert!(tree.is_empty());
    }

    #[test]
    fn test_value_out_of_range() {
        let mut tree = StyleTree::new();
        let err = build(
            &mut tree,
            "Sequence<Red,Black,100,16,0x1FFFF>",
        )
        .expect_err("bits overflow");
        assert_eq!(err.code(), Some(ErrorCode::E203));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_nested_failure_removes_built_arguments() {
        let mut tree = StyleTree::new();
        let err = build(&mut tree, "Layers<Red,AlphaL<White,Nope>>").expect_err("unknown");
        assert_eq!(err.code(), Some(ErrorCode::E200));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_integer_becomes_function() {
        let mut tree = StyleTree::new();
        let id = build(&mut tree, "TrWipeX<1000>").expect("builds");
        let child = tree.param_style(id, 0).expect("slot").expect("bound");
        assert_eq!(tree.get(child).map(|n| n.name()), Some("Int"));
        assert_eq!(tree.param_number(child, 0), Ok(1000));
    }
}
