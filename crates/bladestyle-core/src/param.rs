//! Typed, named node inputs.
//!
//! A [`Param`] is either a scalar (number, bit field, boolean) or a slot
//! holding a nested node. Node slots store a [`NodeId`] into the owning
//! [`StyleTree`](crate::StyleTree); the tree is what actually owns the child.

use std::{borrow::Cow, fmt};

use crate::{style_type::StyleType, tree::NodeId};

/// Smallest value a [`NumberParam`] holds.
pub const NUMBER_MIN: i32 = -32768;

/// Largest value a [`NumberParam`] holds.
pub const NUMBER_MAX: i32 = 32768;

/// The storage kind of a parameter, independent of its name and tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    Number,
    Bits,
    Bool,
    Style,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParamKind::Number => "number",
            ParamKind::Bits => "bits",
            ParamKind::Bool => "bool",
            ParamKind::Style => "style",
        })
    }
}

/// Integer parameter clamped to [`NUMBER_MIN`]..=[`NUMBER_MAX`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberParam {
    name: Cow<'static, str>,
    value: i32,
}

impl NumberParam {
    /// Create a number parameter, clamping `value` into range.
    pub fn new(name: impl Into<Cow<'static, str>>, value: i32) -> Self {
        Self {
            name: name.into(),
            value: value.clamp(NUMBER_MIN, NUMBER_MAX),
        }
    }

    /// The current value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Store `value`, clamped into range.
    pub fn set(&mut self, value: i32) {
        self.value = value.clamp(NUMBER_MIN, NUMBER_MAX);
    }
}

/// 16-bit field parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitsParam {
    name: Cow<'static, str>,
    value: u16,
}

impl BitsParam {
    pub fn new(name: impl Into<Cow<'static, str>>, value: u16) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn value(&self) -> u16 {
        self.value
    }

    pub fn set(&mut self, value: u16) {
        self.value = value;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolParam {
    name: Cow<'static, str>,
    value: bool,
}

impl BoolParam {
    pub fn new(name: impl Into<Cow<'static, str>>, value: bool) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn set(&mut self, value: bool) {
        self.value = value;
    }
}

/// Slot holding a nested node of one of the accepted categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleParam {
    name: Cow<'static, str>,
    ty: StyleType,
    child: Option<NodeId>,
    shorthand: bool,
}

impl StyleParam {
    /// Create an empty slot accepting `ty`.
    pub fn new(name: impl Into<Cow<'static, str>>, ty: StyleType) -> Self {
        Self {
            name: name.into(),
            ty,
            child: None,
            shorthand: false,
        }
    }

    /// The bound child, if any.
    pub fn child(&self) -> Option<NodeId> {
        self.child
    }

    /// Returns `true` if the child was produced from a bare integer literal
    /// and should be written back as one.
    pub fn is_shorthand(&self) -> bool {
        self.shorthand
    }

    pub(crate) fn bind(&mut self, child: NodeId, shorthand: bool) -> Option<NodeId> {
        self.shorthand = shorthand;
        self.child.replace(child)
    }

    pub(crate) fn clear(&mut self) -> Option<NodeId> {
        self.shorthand = false;
        self.child.take()
    }
}

/// A [`StyleParam`] whose effective type can also depend on where the
/// owning node sits in its parent.
///
/// Trees built with
/// [`StyleTree::with_layer_base_narrowing`](crate::StyleTree::with_layer_base_narrowing)
/// apply the narrowing, computed by
/// [`StyleTree::effective_type`](crate::StyleTree::effective_type) from the
/// owner's parent link, so no reference to the grandparent is stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerBaseParam {
    slot: StyleParam,
}

impl LayerBaseParam {
    pub fn new(name: impl Into<Cow<'static, str>>, ty: StyleType) -> Self {
        Self {
            slot: StyleParam::new(name, ty),
        }
    }

    /// The underlying slot.
    pub fn slot(&self) -> &StyleParam {
        &self.slot
    }
}

/// A node parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Number(NumberParam),
    Bits(BitsParam),
    Bool(BoolParam),
    Style(StyleParam),
    LayerBase(LayerBaseParam),
}

impl Param {
    /// The display name.
    pub fn name(&self) -> &str {
        match self {
            Param::Number(p) => &p.name,
            Param::Bits(p) => &p.name,
            Param::Bool(p) => &p.name,
            Param::Style(p) => &p.name,
            Param::LayerBase(p) => &p.slot.name,
        }
    }

    pub(crate) fn rename(&mut self, name: String) {
        let slot = match self {
            Param::Number(p) => &mut p.name,
            Param::Bits(p) => &mut p.name,
            Param::Bool(p) => &mut p.name,
            Param::Style(p) => &mut p.name,
            Param::LayerBase(p) => &mut p.slot.name,
        };
        *slot = Cow::Owned(name);
    }

    /// The declared tag, modifiers included.
    pub fn style_type(&self) -> StyleType {
        match self {
            Param::Number(_) => StyleType::NUMBER,
            Param::Bits(_) => StyleType::BITS,
            Param::Bool(_) => StyleType::BOOL,
            Param::Style(p) => p.ty,
            Param::LayerBase(p) => p.slot.ty,
        }
    }

    /// The declared categories with modifiers stripped.
    pub fn category(&self) -> StyleType {
        self.style_type().category_mask()
    }

    /// The storage kind.
    pub fn kind(&self) -> ParamKind {
        match self {
            Param::Number(_) => ParamKind::Number,
            Param::Bits(_) => ParamKind::Bits,
            Param::Bool(_) => ParamKind::Bool,
            Param::Style(_) | Param::LayerBase(_) => ParamKind::Style,
        }
    }

    /// Returns `true` if this slot belongs to a repeating family.
    pub fn is_variadic(&self) -> bool {
        self.style_type().is_variadic()
    }

    /// The node slot, for both plain and layer-base slots.
    pub fn as_style(&self) -> Option<&StyleParam> {
        match self {
            Param::Style(p) => Some(p),
            Param::LayerBase(p) => Some(&p.slot),
            _ => None,
        }
    }

    pub(crate) fn as_style_mut(&mut self) -> Option<&mut StyleParam> {
        match self {
            Param::Style(p) => Some(p),
            Param::LayerBase(p) => Some(&mut p.slot),
            _ => None,
        }
    }

    /// The bound child, for node slots.
    pub fn child(&self) -> Option<NodeId> {
        self.as_style().and_then(StyleParam::child)
    }
}
