//! Blade Style - parse, check and regenerate lightsaber blade style
//! expressions.
//!
//! Styles are nested template expressions such as
//! `StylePtr<Layers<Blue, AlphaL<White, SwingSpeed<600>>>>()`. This crate
//! reads them into a typed [`StyleTree`], validates them, and writes them back
//! as canonical text.

pub mod config;

mod error;

pub use bladestyle_core::{
    Arg, Category, Family, ModelError, NodeId, Registry, StyleNode, StyleTree, StyleType, catalog,
};
pub use bladestyle_parser::{BitsFormat, EmitError, EmitOptions, error::ParseError};

pub use error::BladeStyleError;

use log::{debug, info, trace};

use config::AppConfig;

/// Builder for parsing, validating and writing styles.
///
/// Uses the built-in catalog unless another [`Registry`] is supplied.
///
/// # Examples
///
/// ```rust
/// use bladestyle::{StyleBuilder, config::AppConfig};
///
/// let builder = StyleBuilder::new(AppConfig::default());
///
/// let tree = builder.parse("StylePtr< Rgb<255, 0, 0> >()")
///     .expect("Failed to parse");
/// let root = tree.root().expect("parse sets the root");
///
/// let text = builder.to_source(&tree, root)
///     .expect("Failed to write");
/// assert_eq!(text, "StylePtr<Rgb<255,0,0>>()");
/// ```
#[derive(Debug, Default)]
pub struct StyleBuilder {
    config: AppConfig,
    registry: Option<Registry>,
}

impl StyleBuilder {
    /// Create a new style builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            registry: None,
        }
    }

    /// Resolve names through `registry` instead of the built-in catalog.
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// The registry names are resolved through.
    pub fn registry(&self) -> &Registry {
        self.registry
            .as_ref()
            .unwrap_or_else(|| catalog::builtin_registry())
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse source text into a tree rooted at the expression.
    ///
    /// When `parse.require_complete` is set, the tree is also validated.
    /// `parse.narrow_layer_bases` selects how layer bases are checked, see
    /// [`StyleTree::with_layer_base_narrowing`].
    ///
    /// # Errors
    ///
    /// Returns `BladeStyleError::Parse` for syntax and binding errors, and
    /// `BladeStyleError::Validation` for incomplete styles.
    pub fn parse(&self, source: &str) -> Result<StyleTree, BladeStyleError> {
        info!(len = source.len(); "Parsing style");

        let mut tree = if self.config.parse().narrow_layer_bases() {
            StyleTree::with_layer_base_narrowing()
        } else {
            StyleTree::new()
        };
        let root = bladestyle_parser::parse_into(source, self.registry(), &mut tree)
            .map_err(|err| BladeStyleError::new_parse_error(err, source))?;
        tree.set_root(root)?;

        if self.config.parse().require_complete() {
            self.validate(&tree)?;
        }

        debug!(nodes = tree.len(); "Style parsed successfully");
        trace!(tree:?; "Parsed style");
        Ok(tree)
    }

    /// Check that every parameter of the expression is set.
    ///
    /// # Errors
    ///
    /// Returns `BladeStyleError::Validation` naming the first empty slot.
    pub fn validate(&self, tree: &StyleTree) -> Result<(), BladeStyleError> {
        tree.validate()?;
        debug!("Style validated");
        Ok(())
    }

    /// Write `node` and its subtree as canonical text.
    ///
    /// # Errors
    ///
    /// Returns `BladeStyleError::Emit` for incomplete or stale nodes.
    pub fn to_source(&self, tree: &StyleTree, node: NodeId) -> Result<String, BladeStyleError> {
        let options = self.config.emit().options();
        let text = bladestyle_parser::to_source_with(tree, node, &options)?;
        debug!(len = text.len(), bits_format:% = options.bits_format; "Style written");
        Ok(text)
    }

    /// Indented listing of `node` and its subtree.
    ///
    /// # Errors
    ///
    /// Returns `BladeStyleError::Emit` for stale nodes.
    pub fn describe(&self, tree: &StyleTree, node: NodeId) -> Result<String, BladeStyleError> {
        Ok(bladestyle_parser::describe(tree, node)?)
    }

    /// Parse `source` and write it back in canonical form.
    ///
    /// # Errors
    ///
    /// See [`parse`](Self::parse) and [`to_source`](Self::to_source).
    pub fn format(&self, source: &str) -> Result<String, BladeStyleError> {
        let tree = self.parse(source)?;
        match tree.root() {
            Some(root) => self.to_source(&tree, root),
            None => Ok(String::new()),
        }
    }

    /// Create a detached node named `name` with default scalars and empty
    /// slots, as an editor does when a catalog entry is picked.
    ///
    /// # Errors
    ///
    /// Returns `BladeStyleError::UnknownStyle` if no registry defines `name`.
    pub fn instantiate(&self, tree: &mut StyleTree, name: &str) -> Result<NodeId, BladeStyleError> {
        let generator = self
            .registry()
            .get(name)
            .ok_or_else(|| BladeStyleError::UnknownStyle(name.to_string()))?;
        let id = generator.instantiate(tree, None);
        trace!(name = generator.name(); "Instantiated style");
        Ok(id)
    }
}
