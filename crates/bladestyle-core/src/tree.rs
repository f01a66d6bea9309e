//! Arena-backed style expression tree.
//!
//! A [`StyleTree`] owns every node. Nodes refer to each other only through
//! [`NodeId`] handles: the owning edge lives in a parent's node slot, while the
//! parent link stored on each node is a plain handle that can never keep a
//! node alive or touch freed memory.

use log::trace;

use crate::{
    catalog::function,
    error::{ModelError, Result},
    generator::{Arg, StyleDef, Syntax},
    param::{Param, ParamKind},
    style_type::{Category, StyleType},
};

/// Identifier for a node in a [`StyleTree`].
///
/// A small, copyable handle made of a slot index and a generation counter.
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On removal the slot's generation is bumped, so every outstanding
///   `NodeId` for it becomes stale at once.
/// - A stale `NodeId` never aliases a different live node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(u32, u32);

impl NodeId {
    const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }

    const fn generation(self) -> u32 {
        self.1
    }
}

/// One node of a style expression.
#[derive(Debug, Clone)]
pub struct StyleNode {
    def: &'static StyleDef,
    params: Vec<Param>,
    parent: Option<NodeId>,
}

impl StyleNode {
    pub(crate) fn new(def: &'static StyleDef, params: Vec<Param>, parent: Option<NodeId>) -> Self {
        Self {
            def,
            params,
            parent,
        }
    }

    /// The static definition this node was generated from.
    pub fn def(&self) -> &'static StyleDef {
        self.def
    }

    /// Canonical name, as written in source text.
    pub fn name(&self) -> &'static str {
        self.def.name
    }

    pub fn display_name(&self) -> &'static str {
        self.def.display_name
    }

    pub fn category(&self) -> Category {
        self.def.category
    }

    pub fn syntax(&self) -> Syntax {
        self.def.syntax
    }

    /// Ordered parameters.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn param(&self, index: usize) -> Option<&Param> {
        self.params.get(index)
    }

    /// The node this one was created under or is bound to, if any.
    ///
    /// This is context only; it does not imply ownership. See
    /// [`StyleTree::owner`] for the owning slot.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    fn param_or_err(&self, index: usize) -> Result<&Param> {
        self.params.get(index).ok_or(ModelError::IndexOutOfRange {
            node: self.def.name,
            index,
            len: self.params.len(),
        })
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<StyleNode>,
}

/// Arena owning a style expression and any detached subtrees being edited.
#[derive(Debug, Default)]
pub struct StyleTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    root: Option<NodeId>,
    live: usize,
    narrow_layer_bases: bool,
}

impl StyleTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree that narrows layer-base slots to the slot their
    /// owner is bound to. See [`effective_type`](Self::effective_type).
    pub fn with_layer_base_narrowing() -> Self {
        Self {
            narrow_layer_bases: true,
            ..Self::default()
        }
    }

    pub fn narrows_layer_bases(&self) -> bool {
        self.narrow_layer_bases
    }

    /// Number of live nodes, attached or not.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// The root expression, if one is set.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Make `id` the root, destroying the previous root subtree.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::StaleNode`] for a dead handle and
    /// [`ModelError::NodeAttached`] if `id` is owned by a parameter.
    pub fn set_root(&mut self, id: NodeId) -> Result<()> {
        let name = self.node(id)?.name();
        if self.owner(id).is_some() {
            return Err(ModelError::NodeAttached { node: name });
        }
        if let Some(old) = self.root.replace(id) {
            if old != id {
                self.free_subtree(old);
            }
        }
        self.node_mut(id)?.parent = None;
        Ok(())
    }

    /// Clear the root without destroying it.
    pub fn take_root(&mut self) -> Option<NodeId> {
        self.root.take()
    }

    /// Returns `true` if `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: NodeId) -> Option<&StyleNode> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.node.as_ref()
    }

    fn node(&self, id: NodeId) -> Result<&StyleNode> {
        self.get(id).ok_or(ModelError::StaleNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut StyleNode> {
        self.slots
            .get_mut(id.idx())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_mut())
            .ok_or(ModelError::StaleNode(id))
    }

    /// Iterate over every live node.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &StyleNode)> {
        self.slots.iter().enumerate().filter_map(|(idx, slot)| {
            slot.node
                .as_ref()
                .map(|node| (NodeId::new(idx as u32, slot.generation), node))
        })
    }

    pub(crate) fn insert(&mut self, node: StyleNode) -> NodeId {
        self.live += 1;
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.node = Some(node);
            return NodeId::new(idx, slot.generation);
        }
        let idx = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 1,
            node: Some(node),
        });
        NodeId::new(idx, 1)
    }

    /// Destroy `id` and everything it owns, without touching its owner.
    pub(crate) fn free_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            let Some(slot) = self.slots.get_mut(id.idx()) else {
                continue;
            };
            if slot.generation != id.generation() {
                continue;
            }
            let Some(node) = slot.node.take() else {
                continue;
            };
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(id.0);
            self.live -= 1;
            if self.root == Some(id) {
                self.root = None;
            }
            stack.extend(node.params.iter().filter_map(Param::child));
        }
        trace!(node:? = id; "Freed subtree");
    }

    /// Destroy an unowned subtree, such as one previously detached.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NodeAttached`] if a parameter still owns `id`.
    pub fn remove_subtree(&mut self, id: NodeId) -> Result<()> {
        let name = self.node(id)?.name();
        if self.owner(id).is_some() {
            return Err(ModelError::NodeAttached { node: name });
        }
        self.free_subtree(id);
        Ok(())
    }

    /// The node and parameter index owning `id`, if it is bound.
    pub fn owner(&self, id: NodeId) -> Option<(NodeId, usize)> {
        let parent = self.get(id)?.parent?;
        let index = self
            .get(parent)?
            .params
            .iter()
            .position(|p| p.child() == Some(id))?;
        Some((parent, index))
    }

    /// Live nodes that are neither the root nor owned by a parameter.
    pub fn detached(&self) -> Vec<NodeId> {
        self.iter()
            .map(|(id, _)| id)
            .filter(|id| Some(*id) != self.root && self.owner(*id).is_none())
            .collect()
    }

    /// Direct children of `id`, in parameter order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.get(id)
            .into_iter()
            .flat_map(|node| node.params.iter().filter_map(Param::child))
    }

    /// `id` and all nodes it owns, in pre-order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            if !self.is_alive(id) {
                continue;
            }
            out.push(id);
            let children: Vec<NodeId> = self.children(id).collect();
            stack.extend(children.into_iter().rev());
        }
        out
    }

    /// Returns `true` if `candidate` owns `id`, directly or transitively.
    fn is_ancestor(&self, candidate: NodeId, id: NodeId) -> bool {
        let mut current = id;
        while let Some((owner, _)) = self.owner(current) {
            if owner == candidate {
                return true;
            }
            current = owner;
        }
        false
    }

    /// The type a parameter accepts right now.
    ///
    /// - A REFARG_n slot accepts exactly the category bound to parameter n,
    ///   or its declared categories while parameter n is empty.
    /// - On trees built with [`with_layer_base_narrowing`](Self::with_layer_base_narrowing),
    ///   a layer-base slot is narrowed to the categories accepted by the slot
    ///   its owning node is bound to, when the two overlap.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::StaleNode`] or [`ModelError::IndexOutOfRange`].
    pub fn effective_type(&self, id: NodeId, index: usize) -> Result<StyleType> {
        // Layer-base slots waiting for the type of the slot above them.
        let mut pending = Vec::new();
        let (mut id, mut index) = (id, index);
        let mut ty = loop {
            let node = self.node(id)?;
            let param = node.param_or_err(index)?;
            let declared = param.style_type();

            if let Some(n) = declared.refarg() {
                let variadic = declared & StyleType::VARIADIC;
                let bound = node
                    .params
                    .get(usize::from(n) - 1)
                    .and_then(Param::child)
                    .and_then(|child| self.get(child));
                break match bound {
                    Some(target) => target.category().flag() | variadic,
                    None => declared.category_mask() | variadic,
                };
            }

            if self.narrow_layer_bases && matches!(param, Param::LayerBase(_)) {
                if let Some((owner, slot)) = self.owner(id) {
                    pending.push(declared);
                    (id, index) = (owner, slot);
                    continue;
                }
            }
            break declared;
        };

        for declared in pending.into_iter().rev() {
            ty = narrow(declared, ty);
        }
        Ok(ty)
    }

    /// Bind `arg` to parameter `index` of `id`, replacing and destroying the
    /// previous child.
    ///
    /// Integers go to scalar parameters (numbers are clamped). An integer
    /// given to a node slot that accepts functions is wrapped in an implicit
    /// `Int<n>` node. Node arguments must be live, unowned, not an ancestor
    /// of `id`, and of a category the slot accepts.
    ///
    /// On failure nothing changes and a node argument stays with the caller.
    ///
    /// # Errors
    ///
    /// See [`ModelError`].
    pub fn set_param(&mut self, id: NodeId, index: usize, arg: Arg) -> Result<()> {
        let param = self.node(id)?.param_or_err(index)?;
        let name = param.name().to_string();
        match (param.kind(), arg) {
            (ParamKind::Number, Arg::Int(value)) => {
                if let Param::Number(p) = &mut self.node_mut(id)?.params[index] {
                    p.set(value);
                }
                Ok(())
            }
            (ParamKind::Bits, Arg::Int(value)) => {
                let bits = u16::try_from(value).map_err(|_| ModelError::ValueOutOfRange {
                    param: name,
                    kind: ParamKind::Bits,
                    value,
                })?;
                if let Param::Bits(p) = &mut self.node_mut(id)?.params[index] {
                    p.set(bits);
                }
                Ok(())
            }
            (ParamKind::Bool, Arg::Int(value)) => {
                let flag = match value {
                    0 => false,
                    1 => true,
                    _ => {
                        return Err(ModelError::ValueOutOfRange {
                            param: name,
                            kind: ParamKind::Bool,
                            value,
                        });
                    }
                };
                if let Param::Bool(p) = &mut self.node_mut(id)?.params[index] {
                    p.set(flag);
                }
                Ok(())
            }
            (ParamKind::Style, Arg::Node(child)) => self.bind_child(id, index, child, false),
            (ParamKind::Style, Arg::Int(value)) => {
                let expected = self.effective_type(id, index)?;
                if !expected.accepts(Category::Function) {
                    return Err(ModelError::TypeMismatch {
                        param: name,
                        expected: expected.category_mask(),
                        found: Category::Number,
                    });
                }
                let literal = self.insert_int(value, id);
                self.bind_child(id, index, literal, true).inspect_err(|_| {
                    self.free_subtree(literal);
                })
            }
            (kind, Arg::Node(child)) => Err(ModelError::TypeMismatch {
                param: name,
                expected: kind_tag(kind),
                found: self.node(child)?.category(),
            }),
        }
    }

    fn insert_int(&mut self, value: i32, parent: NodeId) -> NodeId {
        let mut param = function::INT.params[0].instantiate(None);
        if let Param::Number(p) = &mut param {
            p.set(value);
        }
        self.insert(StyleNode::new(&function::INT, vec![param], Some(parent)))
    }

    fn bind_child(&mut self, id: NodeId, index: usize, child: NodeId, shorthand: bool) -> Result<()> {
        let child_node = self.node(child)?;
        let found = child_node.category();
        let child_name = child_node.name();

        if self.owner(child).is_some() {
            return Err(ModelError::NodeAttached { node: child_name });
        }
        if child == id || self.is_ancestor(child, id) {
            return Err(ModelError::Cycle { node: child_name });
        }

        let expected = self.effective_type(id, index)?;
        let param_name = self.node(id)?.params[index].name().to_string();
        if !expected.accepts(found) {
            return Err(ModelError::TypeMismatch {
                param: param_name,
                expected: expected.category_mask(),
                found,
            });
        }
        self.check_ref_dependents(id, index, found)?;
        self.check_layer_bases(child, expected)?;

        if self.root == Some(child) {
            self.root = None;
        }
        let previous = self.node_mut(id)?.params[index]
            .as_style_mut()
            .and_then(|slot| slot.bind(child, shorthand));
        self.node_mut(child)?.parent = Some(id);
        if let Some(previous) = previous {
            self.free_subtree(previous);
        }
        Ok(())
    }

    /// Reject a binding that would break a REFARG slot already bound to a
    /// different category, or a layer base inside one of those slots.
    fn check_ref_dependents(&self, id: NodeId, index: usize, category: Category) -> Result<()> {
        let node = self.node(id)?;
        for param in &node.params {
            if param.style_type().refarg() != Some((index + 1) as u8) {
                continue;
            }
            let Some(child) = param.child() else {
                continue;
            };
            let bound = self.node(child)?;
            if bound.category() != category {
                return Err(ModelError::TypeMismatch {
                    param: param.name().to_string(),
                    expected: category.flag(),
                    found: bound.category(),
                });
            }
            self.check_layer_bases(child, category.flag())?;
        }
        Ok(())
    }

    /// Reject placing `child` into a slot of type `outer` when that would
    /// narrow a layer-base slot below what is already bound there, at any
    /// depth.
    fn check_layer_bases(&self, child: NodeId, outer: StyleType) -> Result<()> {
        if !self.narrow_layer_bases {
            return Ok(());
        }
        let mut stack = vec![(child, outer)];
        while let Some((id, outer)) = stack.pop() {
            for param in &self.node(id)?.params {
                let Param::LayerBase(base) = param else {
                    continue;
                };
                let Some(bound_id) = base.slot().child() else {
                    continue;
                };
                let bound = self.node(bound_id)?;
                let narrowed = narrow(param.style_type(), outer);
                if !narrowed.accepts(bound.category()) {
                    return Err(ModelError::TypeMismatch {
                        param: param.name().to_string(),
                        expected: narrowed.category_mask(),
                        found: bound.category(),
                    });
                }
                stack.push((bound_id, narrowed));
            }
        }
        Ok(())
    }

    /// Remove a variadic slot, destroying its child.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotVariadic`] for fixed parameters.
    pub fn remove_param(&mut self, id: NodeId, index: usize) -> Result<()> {
        let param = self.node(id)?.param_or_err(index)?;
        if !param.is_variadic() {
            return Err(ModelError::NotVariadic {
                param: param.name().to_string(),
            });
        }
        let removed = self.node_mut(id)?.params.remove(index);
        if let Some(child) = removed.child() {
            self.free_subtree(child);
        }
        self.renumber_variadic(id)
    }

    /// Grow the trailing variadic family by one slot bound to `arg`.
    ///
    /// Returns the index of the new slot.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NoVariadicSlot`] if the node has no variadic
    /// family, or any error [`set_param`](Self::set_param) reports.
    pub fn append_param(&mut self, id: NodeId, arg: Arg) -> Result<usize> {
        let node = self.node(id)?;
        let def = node.def;
        let variadic = def
            .variadic_param()
            .ok_or(ModelError::NoVariadicSlot { node: def.name })?;
        let ordinal = node.params.len() - def.fixed_len() + 1;
        let index = node.params.len();

        self.node_mut(id)?
            .params
            .push(variadic.instantiate(Some(ordinal)));
        if let Err(err) = self.set_param(id, index, arg) {
            self.node_mut(id)?.params.pop();
            return Err(err);
        }
        Ok(index)
    }

    fn renumber_variadic(&mut self, id: NodeId) -> Result<()> {
        let node = self.node_mut(id)?;
        let def = node.def;
        let Some(variadic) = def.variadic_param() else {
            return Ok(());
        };
        let fixed = def.fixed_len();
        for (n, param) in node.params[fixed..].iter_mut().enumerate() {
            param.rename(format!("{} {}", variadic.name, n + 1));
        }
        Ok(())
    }

    /// Clear a node slot without destroying the child, which is returned
    /// unowned. The caller must re-attach it or call
    /// [`remove_subtree`](Self::remove_subtree).
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::WrongParamKind`] for scalar parameters.
    pub fn detach_param(&mut self, id: NodeId, index: usize) -> Result<Option<NodeId>> {
        let param = self.node(id)?.param_or_err(index)?;
        if param.kind() != ParamKind::Style {
            return Err(wrong_kind(param, ParamKind::Style));
        }
        let child = self.node_mut(id)?.params[index]
            .as_style_mut()
            .and_then(|slot| slot.clear());
        if let Some(child) = child {
            self.node_mut(child)?.parent = None;
        }
        Ok(child)
    }

    /// The child bound to a node slot.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::WrongParamKind`] for scalar parameters.
    pub fn param_style(&self, id: NodeId, index: usize) -> Result<Option<NodeId>> {
        let param = self.node(id)?.param_or_err(index)?;
        param
            .as_style()
            .map(|slot| slot.child())
            .ok_or_else(|| wrong_kind(param, ParamKind::Style))
    }

    pub fn param_number(&self, id: NodeId, index: usize) -> Result<i32> {
        match self.node(id)?.param_or_err(index)? {
            Param::Number(p) => Ok(p.value()),
            other => Err(wrong_kind(other, ParamKind::Number)),
        }
    }

    pub fn param_bits(&self, id: NodeId, index: usize) -> Result<u16> {
        match self.node(id)?.param_or_err(index)? {
            Param::Bits(p) => Ok(p.value()),
            other => Err(wrong_kind(other, ParamKind::Bits)),
        }
    }

    pub fn param_bool(&self, id: NodeId, index: usize) -> Result<bool> {
        match self.node(id)?.param_or_err(index)? {
            Param::Bool(p) => Ok(p.value()),
            other => Err(wrong_kind(other, ParamKind::Bool)),
        }
    }
}

/// A layer-base slot declared as `declared` inside a slot of type `outer`.
fn narrow(declared: StyleType, outer: StyleType) -> StyleType {
    let narrowed = declared.category_mask() & outer.category_mask();
    if narrowed.is_empty() {
        declared
    } else {
        narrowed | (declared & StyleType::VARIADIC)
    }
}

fn wrong_kind(param: &Param, requested: ParamKind) -> ModelError {
    ModelError::WrongParamKind {
        param: param.name().to_string(),
        requested,
        actual: param.kind(),
    }
}

fn kind_tag(kind: ParamKind) -> StyleType {
    match kind {
        ParamKind::Number => StyleType::NUMBER,
        ParamKind::Bits => StyleType::BITS,
        ParamKind::Bool => StyleType::BOOL,
        ParamKind::Style => StyleType::STYLETYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::{color, fixed_color, function, layer, transition, wrapper},
        generator::Generator,
    };

    fn make(tree: &mut StyleTree, def: &'static StyleDef, args: Vec<Arg>) -> NodeId {
        Generator::new(def)
            .generate(tree, None, args)
            .unwrap_or_else(|err| panic!("failed to generate {}: {err}", def.name))
    }

    fn red(tree: &mut StyleTree) -> NodeId {
        make(tree, &fixed_color::RED, Vec::new())
    }

    #[test]
    fn test_stale_handles_do_not_alias() {
        let mut tree = StyleTree::new();
        let first = red(&mut tree);
        tree.remove_subtree(first).expect("unowned node is removable");
        let second = red(&mut tree);

        assert_eq!(first.idx(), second.idx());
        assert!(!tree.is_alive(first));
        assert!(tree.is_alive(second));
        assert_eq!(tree.param_style(first, 0), Err(ModelError::StaleNode(first)));
    }

    #[test]
    fn test_set_param_index_out_of_range() {
        let mut tree = StyleTree::new();
        let flicker = Generator::new(&color::AUDIO_FLICKER).instantiate(&mut tree, None);
        let c = red(&mut tree);

        let err = tree.set_param(flicker, 5, Arg::Node(c)).unwrap_err();
        assert!(matches!(err, ModelError::IndexOutOfRange { index: 5, len: 2, .. }));
    }

    #[test]
    fn test_set_param_rejects_wrong_category_and_keeps_value() {
        let mut tree = StyleTree::new();
        let ptr = Generator::new(&wrapper::STYLE_PTR).instantiate(&mut tree, None);
        let c = red(&mut tree);
        tree.set_param(ptr, 0, Arg::Node(c)).expect("colour fits");

        let swing = make(&mut tree, &function::SWING_SPEED, vec![Arg::Int(400)]);
        let err = tree.set_param(ptr, 0, Arg::Node(swing)).unwrap_err();

        assert!(matches!(
            err,
            ModelError::TypeMismatch {
                found: Category::Function,
                ..
            }
        ));
        assert_eq!(tree.param_style(ptr, 0), Ok(Some(c)));
        assert!(tree.is_alive(swing));
        assert_eq!(tree.owner(swing), None);
    }

    #[test]
    fn test_set_param_replaces_and_destroys_previous_child() {
        let mut tree = StyleTree::new();
        let ptr = Generator::new(&wrapper::STYLE_PTR).instantiate(&mut tree, None);
        let first = red(&mut tree);
        let second = make(&mut tree, &fixed_color::BLUE, Vec::new());

        tree.set_param(ptr, 0, Arg::Node(first)).expect("bind first");
        tree.set_param(ptr, 0, Arg::Node(second)).expect("bind second");

        assert!(!tree.is_alive(first));
        assert_eq!(tree.owner(second), Some((ptr, 0)));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_set_param_scalars() {
        let mut tree = StyleTree::new();
        let rgb = Generator::new(&color::RGB).instantiate(&mut tree, None);

        tree.set_param(rgb, 0, Arg::Int(255)).expect("number fits");
        tree.set_param(rgb, 1, Arg::Int(99999)).expect("number clamps");
        assert_eq!(tree.param_number(rgb, 0), Ok(255));
        assert_eq!(tree.param_number(rgb, 1), Ok(32768));

        let c = red(&mut tree);
        let err = tree.set_param(rgb, 2, Arg::Node(c)).unwrap_err();
        assert!(matches!(err, ModelError::TypeMismatch { .. }));
    }

    #[test]
    fn test_set_param_bits_and_bool_ranges() {
        let mut tree = StyleTree::new();
        let seq = Generator::new(&color::SEQUENCE).instantiate(&mut tree, None);
        let idx = tree
            .append_param(seq, Arg::Int(0b1010))
            .expect("bits slot appended");
        assert_eq!(tree.param_bits(seq, idx), Ok(0b1010));
        assert!(matches!(
            tree.set_param(seq, idx, Arg::Int(70000)),
            Err(ModelError::ValueOutOfRange { .. })
        ));

        let helper = Generator::new(&color::IN_OUT_HELPER).instantiate(&mut tree, None);
        assert_eq!(tree.param_bool(helper, 4), Ok(true));
        tree.set_param(helper, 4, Arg::Int(0)).expect("0 is false");
        assert_eq!(tree.param_bool(helper, 4), Ok(false));
        assert!(matches!(
            tree.set_param(helper, 4, Arg::Int(2)),
            Err(ModelError::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn test_integer_into_function_slot_creates_shorthand_int() {
        let mut tree = StyleTree::new();
        let wipe = Generator::new(&transition::TR_WIPE_X).instantiate(&mut tree, None);

        tree.set_param(wipe, 0, Arg::Int(1000)).expect("literal wraps");

        let child = tree.param_style(wipe, 0).expect("style slot").expect("bound");
        let int = tree.get(child).expect("live");
        assert_eq!(int.name(), "Int");
        assert_eq!(tree.param_number(child, 0), Ok(1000));
        assert!(tree.get(wipe).expect("live").params()[0]
            .as_style()
            .is_some_and(|s| s.is_shorthand()));
    }

    #[test]
    fn test_integer_into_colour_slot_is_rejected() {
        let mut tree = StyleTree::new();
        let ptr = Generator::new(&wrapper::STYLE_PTR).instantiate(&mut tree, None);

        let err = tree.set_param(ptr, 0, Arg::Int(5)).unwrap_err();
        assert!(matches!(
            err,
            ModelError::TypeMismatch {
                found: Category::Number,
                ..
            }
        ));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_attached_node_cannot_be_bound_twice() {
        let mut tree = StyleTree::new();
        let a = Generator::new(&wrapper::STYLE_PTR).instantiate(&mut tree, None);
        let b = Generator::new(&wrapper::STYLE_PTR).instantiate(&mut tree, None);
        let c = red(&mut tree);
        tree.set_param(a, 0, Arg::Node(c)).expect("bind");

        let err = tree.set_param(b, 0, Arg::Node(c)).unwrap_err();
        assert!(matches!(err, ModelError::NodeAttached { .. }));
    }

    #[test]
    fn test_cycles_are_rejected() {
        let mut tree = StyleTree::new();
        let outer = Generator::new(&color::AUDIO_FLICKER).instantiate(&mut tree, None);
        let inner = Generator::new(&color::AUDIO_FLICKER).instantiate(&mut tree, None);
        tree.set_param(outer, 0, Arg::Node(inner)).expect("bind");

        assert!(matches!(
            tree.set_param(inner, 0, Arg::Node(outer)),
            Err(ModelError::Cycle { .. })
        ));
        assert!(matches!(
            tree.set_param(outer, 1, Arg::Node(outer)),
            Err(ModelError::Cycle { .. })
        ));
    }

    #[test]
    fn test_remove_param_only_for_variadic_slots() {
        let mut tree = StyleTree::new();
        let gradient = Generator::new(&color::GRADIENT).instantiate(&mut tree, None);
        for def in [&fixed_color::RED, &fixed_color::GREEN, &fixed_color::BLUE] {
            let c = make(&mut tree, def, Vec::new());
            tree.append_param(gradient, Arg::Node(c)).expect("append");
        }
        let green = tree.param_style(gradient, 1).expect("slot").expect("bound");

        tree.remove_param(gradient, 1).expect("variadic slot removable");

        assert!(!tree.is_alive(green));
        let node = tree.get(gradient).expect("live");
        let names: Vec<&str> = node.params().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["COLORS 1", "COLORS 2"]);

        let flicker = Generator::new(&color::AUDIO_FLICKER).instantiate(&mut tree, None);
        assert!(matches!(
            tree.remove_param(flicker, 0),
            Err(ModelError::NotVariadic { .. })
        ));
    }

    #[test]
    fn test_append_param_without_variadic_family() {
        let mut tree = StyleTree::new();
        let flicker = Generator::new(&color::AUDIO_FLICKER).instantiate(&mut tree, None);
        let c = red(&mut tree);
        assert!(matches!(
            tree.append_param(flicker, Arg::Node(c)),
            Err(ModelError::NoVariadicSlot { .. })
        ));
        assert_eq!(tree.get(flicker).expect("live").params().len(), 2);
    }

    #[test]
    fn test_detach_keeps_subtree_alive() {
        let mut tree = StyleTree::new();
        let ptr = Generator::new(&wrapper::STYLE_PTR).instantiate(&mut tree, None);
        let c = red(&mut tree);
        tree.set_param(ptr, 0, Arg::Node(c)).expect("bind");

        let detached = tree.detach_param(ptr, 0).expect("style slot");

        assert_eq!(detached, Some(c));
        assert!(tree.is_alive(c));
        assert_eq!(tree.owner(c), None);
        assert_eq!(tree.param_style(ptr, 0), Ok(None));
        assert!(tree.detached().contains(&c));

        let other = Generator::new(&wrapper::STYLE_PTR).instantiate(&mut tree, None);
        tree.set_param(other, 0, Arg::Node(c)).expect("relocated");
        assert_eq!(tree.owner(c), Some((other, 0)));
    }

    #[test]
    fn test_typed_accessors_are_checked() {
        let mut tree = StyleTree::new();
        let rgb = make(&mut tree, &color::RGB, vec![Arg::Int(1), Arg::Int(2), Arg::Int(3)]);

        assert!(matches!(
            tree.param_style(rgb, 0),
            Err(ModelError::WrongParamKind {
                requested: ParamKind::Style,
                actual: ParamKind::Number,
                ..
            })
        ));
        assert!(matches!(
            tree.param_bool(rgb, 0),
            Err(ModelError::WrongParamKind { .. })
        ));
        assert!(matches!(
            tree.detach_param(rgb, 0),
            Err(ModelError::WrongParamKind { .. })
        ));
    }

    #[test]
    fn test_refarg_follows_bound_category() {
        let mut tree = StyleTree::new();
        let mix = Generator::new(&color::MIX).instantiate(&mut tree, None);
        let base = red(&mut tree);
        let first = make(
            &mut tree,
            &layer::ALPHA_L,
            vec![Arg::Node(base), Arg::Int(16384)],
        );
        tree.set_param(mix, 1, Arg::Node(first)).expect("layer fits");

        // Later colours must now be layers too.
        let c = red(&mut tree);
        let err = tree.append_param(mix, Arg::Node(c)).unwrap_err();
        assert!(matches!(err, ModelError::TypeMismatch { .. }));
        assert_eq!(
            tree.effective_type(mix, 1).map(|t| t.category_mask()),
            Ok(StyleType::COLOR | StyleType::LAYER)
        );
    }

    #[test]
    fn test_rebinding_refarg_target_rechecks_layer_bases() {
        let mut tree = StyleTree::with_layer_base_narrowing();
        let mix = Generator::new(&color::MIX).instantiate(&mut tree, None);
        tree.set_param(mix, 0, Arg::Int(1)).expect("function slot");

        // While the first colour is empty, later colours accept layers.
        let base = red(&mut tree);
        let alpha = make(&mut tree, &layer::ALPHA_L, vec![Arg::Node(base), Arg::Int(1)]);
        let layers = make(&mut tree, &color::LAYERS, vec![Arg::Node(alpha)]);
        tree.append_param(mix, Arg::Node(layers)).expect("colour slot");

        // A colour here narrows the `Layers` base to colours, which its
        // `AlphaL` base no longer satisfies.
        let first = red(&mut tree);
        let err = tree.set_param(mix, 1, Arg::Node(first)).unwrap_err();
        assert!(matches!(
            err,
            ModelError::TypeMismatch {
                found: Category::Layer,
                ..
            }
        ));
        assert_eq!(tree.param_style(mix, 1), Ok(None));
        assert!(tree.owner(first).is_none());
    }

    #[test]
    fn test_layer_base_narrows_to_owner_slot() {
        let mut tree = StyleTree::with_layer_base_narrowing();
        let layers = Generator::new(&color::LAYERS).instantiate(&mut tree, None);
        assert_eq!(
            tree.effective_type(layers, 0).map(|t| t.category_mask()),
            Ok(StyleType::COLOR | StyleType::LAYER)
        );

        let ptr = Generator::new(&wrapper::STYLE_PTR).instantiate(&mut tree, None);
        tree.set_param(ptr, 0, Arg::Node(layers)).expect("Layers is a colour");
        assert_eq!(
            tree.effective_type(layers, 0).map(|t| t.category_mask()),
            Ok(StyleType::COLOR)
        );

        let alpha = Generator::new(&layer::ALPHA_L).instantiate(&mut tree, None);
        let err = tree.set_param(layers, 0, Arg::Node(alpha)).unwrap_err();
        assert!(matches!(err, ModelError::TypeMismatch { .. }));
    }

    #[test]
    fn test_layer_base_narrowing_is_transitive() {
        let mut tree = StyleTree::with_layer_base_narrowing();
        let base = red(&mut tree);
        let alpha = make(&mut tree, &layer::ALPHA_L, vec![Arg::Node(base), Arg::Int(1)]);
        let inner = make(&mut tree, &color::LAYERS, vec![Arg::Node(alpha)]);
        let outer = make(&mut tree, &color::LAYERS, vec![Arg::Node(inner)]);
        assert_eq!(
            tree.effective_type(inner, 0).map(|t| t.category_mask()),
            Ok(StyleType::COLOR | StyleType::LAYER)
        );

        let ptr = Generator::new(&wrapper::STYLE_PTR).instantiate(&mut tree, None);
        let err = tree.set_param(ptr, 0, Arg::Node(outer)).unwrap_err();
        assert!(matches!(
            err,
            ModelError::TypeMismatch {
                found: Category::Layer,
                ..
            }
        ));
        assert!(tree.owner(outer).is_none());
    }

    #[test]
    fn test_layer_base_not_narrowed_by_default() {
        let mut tree = StyleTree::new();
        assert!(!tree.narrows_layer_bases());
        let base = red(&mut tree);
        let alpha = make(&mut tree, &layer::ALPHA_L, vec![Arg::Node(base), Arg::Int(1)]);
        let layers = make(&mut tree, &color::LAYERS, vec![Arg::Node(alpha)]);
        let ptr = Generator::new(&wrapper::STYLE_PTR).instantiate(&mut tree, None);

        tree.set_param(ptr, 0, Arg::Node(layers)).expect("layers accepted");
        assert_eq!(
            tree.effective_type(layers, 0).map(|t| t.category_mask()),
            Ok(StyleType::COLOR | StyleType::LAYER)
        );
    }

    #[test]
    fn test_remove_subtree_requires_detached() {
        let mut tree = StyleTree::new();
        let ptr = Generator::new(&wrapper::STYLE_PTR).instantiate(&mut tree, None);
        let c = red(&mut tree);
        tree.set_param(ptr, 0, Arg::Node(c)).expect("bind");

        assert!(matches!(
            tree.remove_subtree(c),
            Err(ModelError::NodeAttached { .. })
        ));
        tree.remove_subtree(ptr).expect("root-level node removable");
        assert!(tree.is_empty());
    }

    #[test]
    fn test_set_root_replaces_previous_root() {
        let mut tree = StyleTree::new();
        let first = red(&mut tree);
        tree.set_root(first).expect("root");
        let second = red(&mut tree);
        tree.set_root(second).expect("root");

        assert!(!tree.is_alive(first));
        assert_eq!(tree.root(), Some(second));
        assert!(tree.detached().is_empty());
    }

    #[test]
    fn test_descendants_are_pre_order() {
        let mut tree = StyleTree::new();
        let a = red(&mut tree);
        let b = make(&mut tree, &fixed_color::BLUE, Vec::new());
        let flicker = make(&mut tree, &color::AUDIO_FLICKER, vec![Arg::Node(a), Arg::Node(b)]);
        let ptr = make(&mut tree, &wrapper::STYLE_PTR, vec![Arg::Node(flicker)]);

        assert_eq!(tree.descendants(ptr), vec![ptr, flicker, a, b]);
    }
}
