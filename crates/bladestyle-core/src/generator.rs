//! Static node definitions and the generators built from them.
//!
//! Every catalog entry is a [`StyleDef`]: canonical name, category, textual
//! syntax and an ordered list of [`ParamDef`]s. A [`Generator`] turns a
//! definition plus arguments into a node inside a [`StyleTree`].

use std::borrow::Cow;

use log::trace;

use crate::{
    error::{Arity, GenerateError},
    param::{BitsParam, BoolParam, LayerBaseParam, NumberParam, Param, StyleParam},
    style_type::{Category, StyleType},
    tree::{NodeId, StyleNode, StyleTree},
};

/// How a node is written out as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// `Name`, for plain classes and constants. Only valid without parameters.
    Bare,
    /// `Name<...>`, with `Name<>` when there are no parameters.
    Template,
    /// `Name<...>()`, for style pointer factories.
    Call,
    /// `&name`, for pre-built style objects.
    Reference,
}

/// Initial contents of a parameter slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamInit {
    Number(i32),
    Bits(u16),
    Bool(bool),
    Style,
    LayerBase,
}

/// Declaration of one parameter of a [`StyleDef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamDef {
    pub name: &'static str,
    pub ty: StyleType,
    pub init: ParamInit,
    /// Trailing scalar parameters may be omitted and keep their default.
    pub optional: bool,
}

impl ParamDef {
    /// A node slot accepting `ty`.
    pub const fn style(name: &'static str, ty: StyleType) -> Self {
        Self {
            name,
            ty,
            init: ParamInit::Style,
            optional: false,
        }
    }

    /// A layer-base slot accepting `ty`, optionally narrowed by the owner's
    /// position.
    pub const fn layer_base(name: &'static str, ty: StyleType) -> Self {
        Self {
            name,
            ty,
            init: ParamInit::LayerBase,
            optional: false,
        }
    }

    pub const fn number(name: &'static str, default: i32) -> Self {
        Self {
            name,
            ty: StyleType::NUMBER,
            init: ParamInit::Number(default),
            optional: false,
        }
    }

    pub const fn bits(name: &'static str, default: u16) -> Self {
        Self {
            name,
            ty: StyleType::BITS,
            init: ParamInit::Bits(default),
            optional: false,
        }
    }

    pub const fn boolean(name: &'static str, default: bool) -> Self {
        Self {
            name,
            ty: StyleType::BOOL,
            init: ParamInit::Bool(default),
            optional: false,
        }
    }

    /// Mark the parameter as repeating.
    pub const fn variadic(mut self) -> Self {
        self.ty = self.ty.variadic();
        self
    }

    /// Allow the argument to be omitted.
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Create a fresh parameter from this declaration.
    pub(crate) fn instantiate(&self, ordinal: Option<usize>) -> Param {
        let name: Cow<'static, str> = match ordinal {
            Some(n) => format!("{} {n}", self.name).into(),
            None => self.name.into(),
        };
        match self.init {
            ParamInit::Number(value) => Param::Number(NumberParam::new(name, value)),
            ParamInit::Bits(value) => Param::Bits(BitsParam::new(name, value)),
            ParamInit::Bool(value) => Param::Bool(BoolParam::new(name, value)),
            ParamInit::Style => Param::Style(StyleParam::new(name, self.ty)),
            ParamInit::LayerBase => Param::LayerBase(LayerBaseParam::new(name, self.ty)),
        }
    }
}

/// Static description of one catalog entry.
#[derive(Debug, PartialEq, Eq)]
pub struct StyleDef {
    /// Canonical name, as written in source text.
    pub name: &'static str,
    /// Human readable name for editors.
    pub display_name: &'static str,
    pub category: Category,
    pub syntax: Syntax,
    pub params: &'static [ParamDef],
}

impl StyleDef {
    pub const fn new(
        name: &'static str,
        display_name: &'static str,
        category: Category,
        syntax: Syntax,
        params: &'static [ParamDef],
    ) -> Self {
        Self {
            name,
            display_name,
            category,
            syntax,
            params,
        }
    }

    /// The trailing variadic parameter, if the definition has one.
    pub fn variadic_param(&self) -> Option<&ParamDef> {
        self.params.last().filter(|p| p.ty.is_variadic())
    }

    /// Number of parameters before the variadic family.
    pub fn fixed_len(&self) -> usize {
        match self.variadic_param() {
            Some(_) => self.params.len() - 1,
            None => self.params.len(),
        }
    }

    /// The accepted argument count.
    pub fn arity(&self) -> Arity {
        let fixed = &self.params[..self.fixed_len()];
        let required = fixed.iter().take_while(|p| !p.optional).count();
        match self.variadic_param() {
            Some(_) => Arity::AtLeast(required),
            None => Arity::Range {
                min: required,
                max: fixed.len(),
            },
        }
    }
}

/// An argument handed to a generator or to
/// [`StyleTree::set_param`](crate::StyleTree::set_param).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg {
    Int(i32),
    Node(NodeId),
}

/// Factory for nodes of one [`StyleDef`].
#[derive(Debug, Clone, Copy)]
pub struct Generator {
    def: &'static StyleDef,
}

impl Generator {
    pub const fn new(def: &'static StyleDef) -> Self {
        Self { def }
    }

    pub fn def(&self) -> &'static StyleDef {
        self.def
    }

    pub fn name(&self) -> &'static str {
        self.def.name
    }

    pub fn category(&self) -> Category {
        self.def.category
    }

    /// Create a node with default scalars, empty node slots and no variadic
    /// slots, as an editor does when a catalog entry is dropped in.
    pub fn instantiate(&self, tree: &mut StyleTree, parent: Option<NodeId>) -> NodeId {
        let params = self.def.params[..self.def.fixed_len()]
            .iter()
            .map(|p| p.instantiate(None))
            .collect();
        tree.insert(StyleNode::new(self.def, params, parent))
    }

    /// Build a node from `args`.
    ///
    /// Arguments are consumed: on failure every argument node, bound or not,
    /// is removed from the tree and no node is produced.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::ArgumentCount`] if the number of arguments
    /// does not match the definition, or [`GenerateError::Argument`] if an
    /// argument cannot be bound to its slot.
    pub fn generate(
        &self,
        tree: &mut StyleTree,
        parent: Option<NodeId>,
        args: Vec<Arg>,
    ) -> Result<NodeId, GenerateError> {
        let def = self.def;
        let arity = def.arity();
        let found = args.len();
        if !arity.allows(found) {
            discard(tree, args);
            return Err(GenerateError::ArgumentCount {
                name: def.name,
                expected: arity,
                found,
            });
        }

        let fixed = def.fixed_len();
        let mut params: Vec<Param> = def.params[..fixed]
            .iter()
            .map(|p| p.instantiate(None))
            .collect();
        if let Some(variadic) = def.variadic_param() {
            let repeats = found.saturating_sub(fixed);
            params.extend((1..=repeats).map(|n| variadic.instantiate(Some(n))));
        }

        let id = tree.insert(StyleNode::new(def, params, parent));
        let mut args = args.into_iter().enumerate();
        while let Some((index, arg)) = args.next() {
            if let Err(source) = tree.set_param(id, index, arg) {
                let rest: Vec<Arg> = std::iter::once(arg).chain(args.map(|(_, a)| a)).collect();
                discard(tree, rest);
                tree.free_subtree(id);
                return Err(GenerateError::Argument {
                    name: def.name,
                    index,
                    source,
                });
            }
        }

        trace!(name = def.name, params = found; "Generated node");
        Ok(id)
    }
}

/// Remove unowned argument nodes. Nodes already owned elsewhere are left alone.
fn discard(tree: &mut StyleTree, args: Vec<Arg>) {
    for arg in args {
        if let Arg::Node(id) = arg {
            if tree.is_alive(id) && tree.owner(id).is_none() {
                tree.free_subtree(id);
            }
        }
    }
}
