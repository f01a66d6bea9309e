//! Canonical text output for style trees.
//!
//! [`to_source`] writes a node back in the form the parser reads, so that
//! parsing the output yields a structurally identical tree.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use bladestyle_core::{NodeId, Param, StyleNode, StyleTree, Syntax};

use crate::MAX_NESTING;

/// How bit field parameters are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitsFormat {
    /// `0b` followed by 16 binary digits.
    #[default]
    Binary,
    /// `0x` followed by 4 hex digits.
    Hex,
}

impl BitsFormat {
    fn write(self, out: &mut String, bits: u16) {
        match self {
            BitsFormat::Binary => out.push_str(&format!("0b{bits:016b}")),
            BitsFormat::Hex => out.push_str(&format!("0x{bits:04X}")),
        }
    }
}

impl fmt::Display for BitsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BitsFormat::Binary => "binary",
            BitsFormat::Hex => "hex",
        })
    }
}

/// Output settings for [`to_source_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
    pub bits_format: BitsFormat,
    /// Write `Int<n>` children that came from a bare literal as `n`.
    pub literal_shorthand: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            bits_format: BitsFormat::Binary,
            literal_shorthand: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    #[error("parameter `{param}` of `{node}` is not set")]
    Incomplete { node: &'static str, param: String },

    #[error("node handle {0:?} is stale")]
    StaleNode(NodeId),

    #[error("style nests deeper than {limit} levels")]
    TooDeep { limit: usize },
}

fn check_depth(depth: usize) -> Result<(), EmitError> {
    if depth > MAX_NESTING {
        return Err(EmitError::TooDeep { limit: MAX_NESTING });
    }
    Ok(())
}

/// Write `id` and everything it owns with default options.
///
/// # Errors
///
/// Returns [`EmitError::Incomplete`] if any node slot in the subtree is
/// empty, [`EmitError::StaleNode`] for a dead handle, or
/// [`EmitError::TooDeep`] if the output would not parse back.
pub fn to_source(tree: &StyleTree, id: NodeId) -> Result<String, EmitError> {
    to_source_with(tree, id, &EmitOptions::default())
}

/// Write `id` and everything it owns.
///
/// # Errors
///
/// See [`to_source`].
pub fn to_source_with(
    tree: &StyleTree,
    id: NodeId,
    options: &EmitOptions,
) -> Result<String, EmitError> {
    let mut out = String::new();
    Emitter { tree, options }.write_node(&mut out, id, 0)?;
    Ok(out)
}

struct Emitter<'a> {
    tree: &'a StyleTree,
    options: &'a EmitOptions,
}

impl Emitter<'_> {
    fn node(&self, id: NodeId) -> Result<&StyleNode, EmitError> {
        self.tree.get(id).ok_or(EmitError::StaleNode(id))
    }

    fn write_node(&self, out: &mut String, id: NodeId, depth: usize) -> Result<(), EmitError> {
        check_depth(depth)?;
        let node = self.node(id)?;
        match node.syntax() {
            Syntax::Reference => {
                out.push('&');
                out.push_str(node.name());
            }
            Syntax::Bare if node.params().is_empty() => out.push_str(node.name()),
            Syntax::Bare | Syntax::Template => self.write_template(out, node, depth)?,
            Syntax::Call => {
                self.write_template(out, node, depth)?;
                out.push_str("()");
            }
        }
        Ok(())
    }

    fn write_template(&self, out: &mut String, node: &StyleNode, depth: usize) -> Result<(), EmitError> {
        out.push_str(node.name());
        out.push('<');
        for (index, param) in node.params().iter().enumerate() {
            if index > 0 {
                out.push(',');
            }
            self.write_param(out, node, param, depth)?;
        }
        out.push('>');
        Ok(())
    }

    fn write_param(
        &self,
        out: &mut String,
        node: &StyleNode,
        param: &Param,
        depth: usize,
    ) -> Result<(), EmitError> {
        match param {
            Param::Number(p) => out.push_str(&p.value().to_string()),
            Param::Bits(p) => self.options.bits_format.write(out, p.value()),
            Param::Bool(p) => out.push(if p.value() { '1' } else { '0' }),
            Param::Style(_) | Param::LayerBase(_) => {
                let slot = param.as_style().and_then(|s| s.child().map(|c| (c, s.is_shorthand())));
                let Some((child, shorthand)) = slot else {
                    return Err(EmitError::Incomplete {
                        node: node.name(),
                        param: param.name().to_string(),
                    });
                };
                match self.shorthand_value(child, shorthand) {
                    Some(value) => out.push_str(&value.to_string()),
                    None => self.write_node(out, child, depth + 1)?,
                }
            }
        }
        Ok(())
    }

    /// The literal to write in place of an implicit `Int<n>` child.
    fn shorthand_value(&self, child: NodeId, shorthand: bool) -> Option<i32> {
        if !(shorthand && self.options.literal_shorthand) {
            return None;
        }
        match self.tree.get(child)?.param(0)? {
            Param::Number(n) => Some(n.value()),
            _ => None,
        }
    }
}

/// Indented listing of `id` and its subtree, one node or scalar per line.
///
/// Empty slots are shown rather than reported, so incomplete trees can be
/// inspected.
///
/// # Errors
///
/// Returns [`EmitError::StaleNode`] for a dead handle, or
/// [`EmitError::TooDeep`] past the nesting limit.
pub fn describe(tree: &StyleTree, id: NodeId) -> Result<String, EmitError> {
    let mut out = String::new();
    describe_node(tree, id, 0, &mut out)?;
    Ok(out)
}

fn describe_node(
    tree: &StyleTree,
    id: NodeId,
    depth: usize,
    out: &mut String,
) -> Result<(), EmitError> {
    check_depth(depth)?;
    let node = tree.get(id).ok_or(EmitError::StaleNode(id))?;
    out.push_str(&format!("{} ({})\n", node.name(), node.category()));

    let indent = "  ".repeat(depth + 1);
    for param in node.params() {
        out.push_str(&indent);
        out.push_str(param.name());
        out.push_str(": ");
        match param {
            Param::Number(p) => out.push_str(&format!("{}\n", p.value())),
            Param::Bits(p) => out.push_str(&format!("0b{:016b}\n", p.value())),
            Param::Bool(p) => out.push_str(&format!("{}\n", p.value())),
            Param::Style(_) | Param::LayerBase(_) => match param.child() {
                Some(child) => describe_node(tree, child, depth + 1, out)?,
                None => out.push_str(&format!("<empty {}>\n", param.category())),
            },
        }
    }
    Ok(())
}
