//! Name to generator lookup.
//!
//! Each [`Family`] has its own table. A [`Registry`] owns all of them plus the
//! order in which they are searched when a name is resolved, so a name defined
//! in two families always resolves to the same one.

use std::fmt;

use indexmap::IndexMap;
use log::{debug, warn};

use crate::{
    generator::{Generator, StyleDef},
    style_type::Category,
};

/// A generator table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Function,
    TimeFunction,
    Color,
    FixedColor,
    Builtin,
    Argument,
    LockupType,
    Effect,
    Transition,
    Layer,
    Wrapper,
    Function3D,
}

impl Family {
    /// Default lookup order for [`Registry::get`].
    pub const LOOKUP_ORDER: [Family; 12] = [
        Family::Function,
        Family::TimeFunction,
        Family::Color,
        Family::FixedColor,
        Family::Builtin,
        Family::Argument,
        Family::LockupType,
        Family::Effect,
        Family::Transition,
        Family::Layer,
        Family::Wrapper,
        Family::Function3D,
    ];

    /// The category of every node generated from this table.
    pub const fn category(self) -> Category {
        match self {
            Family::Function => Category::Function,
            Family::TimeFunction => Category::TimeFunction,
            Family::Color | Family::FixedColor => Category::Color,
            Family::Builtin => Category::Builtin,
            Family::Argument => Category::Argument,
            Family::LockupType => Category::LockupType,
            Family::Effect => Category::Effect,
            Family::Transition => Category::Transition,
            Family::Layer => Category::Layer,
            Family::Wrapper => Category::Wrapper,
            Family::Function3D => Category::Function3D,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Family::Function => "function",
            Family::TimeFunction => "time function",
            Family::Color => "color",
            Family::FixedColor => "fixed color",
            Family::Builtin => "built-in",
            Family::Argument => "argument",
            Family::LockupType => "lockup type",
            Family::Effect => "effect",
            Family::Transition => "transition",
            Family::Layer => "layer",
            Family::Wrapper => "wrapper",
            Family::Function3D => "3D function",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type Table = IndexMap<&'static str, Generator>;

/// Immutable set of generator tables with a fixed lookup order.
#[derive(Debug, Clone)]
pub struct Registry {
    tables: IndexMap<Family, Table>,
    lookup_order: Vec<Family>,
}

impl Registry {
    /// Start assembling a registry with the default lookup order.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Look `name` up, probing the families in order.
    pub fn get(&self, name: &str) -> Option<&Generator> {
        self.resolve(name).map(|(_, generator)| generator)
    }

    /// Like [`get`](Self::get), also reporting which family matched.
    pub fn resolve(&self, name: &str) -> Option<(Family, &Generator)> {
        self.lookup_order.iter().find_map(|family| {
            self.tables
                .get(family)
                .and_then(|table| table.get(name))
                .map(|generator| (*family, generator))
        })
    }

    /// Lookup restricted to one family.
    pub fn get_in(&self, family: Family, name: &str) -> Option<&Generator> {
        self.tables.get(&family)?.get(name)
    }

    /// Generators of one family, in registration order.
    pub fn family(&self, family: Family) -> impl Iterator<Item = &Generator> {
        self.tables.get(&family).into_iter().flat_map(|t| t.values())
    }

    /// The order in which [`get`](Self::get) searches families.
    pub fn lookup_order(&self) -> &[Family] {
        &self.lookup_order
    }

    /// Every generator with its family, in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = (Family, &Generator)> {
        self.lookup_order
            .iter()
            .filter_map(|family| self.tables.get(family).map(|t| (*family, t)))
            .flat_map(|(family, table)| table.values().map(move |g| (family, g)))
    }

    /// Total number of generators.
    pub fn len(&self) -> usize {
        self.tables.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builder for [`Registry`].
#[derive(Debug)]
pub struct RegistryBuilder {
    tables: IndexMap<Family, Table>,
    lookup_order: Vec<Family>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            tables: IndexMap::new(),
            lookup_order: Family::LOOKUP_ORDER.to_vec(),
        }
    }

    /// Register `def` under `family`. A later definition with the same name
    /// in the same family replaces the earlier one.
    pub fn with(mut self, family: Family, def: &'static StyleDef) -> Self {
        self.insert(family, def);
        self
    }

    /// Register every definition in `defs` under `family`.
    pub fn with_all(mut self, family: Family, defs: &[&'static StyleDef]) -> Self {
        for def in defs {
            self.insert(family, def);
        }
        self
    }

    /// Replace the lookup order. Families left out are never searched by
    /// [`Registry::get`].
    pub fn with_lookup_order(mut self, order: impl Into<Vec<Family>>) -> Self {
        self.lookup_order = order.into();
        self
    }

    fn insert(&mut self, family: Family, def: &'static StyleDef) {
        if def.category != family.category() {
            warn!(
                name = def.name,
                family = family.as_str(),
                category = def.category.as_str();
                "Definition category differs from its family"
            );
        }
        let table = self.tables.entry(family).or_default();
        if table.insert(def.name, Generator::new(def)).is_some() {
            warn!(name = def.name, family = family.as_str(); "Duplicate definition replaced");
        }
    }

    pub fn build(self) -> Registry {
        let registry = Registry {
            tables: self.tables,
            lookup_order: self.lookup_order,
        };
        debug!(generators = registry.len(); "Registry built");
        registry
    }
}
