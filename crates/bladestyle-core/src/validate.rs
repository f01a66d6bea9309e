//! Completeness checks run before a tree is saved or emitted.

use log::debug;

use crate::{
    error::{ModelError, Result},
    tree::{NodeId, StyleTree},
};

impl StyleTree {
    /// Check that every node slot of `id` is bound.
    ///
    /// Scalars always hold a value, so only node slots can be incomplete.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Incomplete`] naming the first empty slot.
    pub fn validate_params(&self, id: NodeId) -> Result<()> {
        let node = self.get(id).ok_or(ModelError::StaleNode(id))?;
        for param in node.params() {
            if let Some(slot) = param.as_style() {
                if slot.child().is_none() {
                    return Err(ModelError::Incomplete {
                        node: node.name(),
                        param: param.name().to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Validate `id` and every node it owns, in pre-order.
    ///
    /// # Errors
    ///
    /// Returns the first [`ModelError::Incomplete`] found.
    pub fn validate_subtree(&self, id: NodeId) -> Result<()> {
        if !self.is_alive(id) {
            return Err(ModelError::StaleNode(id));
        }
        self.descendants(id)
            .into_iter()
            .try_for_each(|node| self.validate_params(node))
    }

    /// Validate the whole expression from the root.
    ///
    /// A tree without a root has nothing to check.
    pub fn validate(&self) -> Result<()> {
        match self.root() {
            Some(root) => {
                let result = self.validate_subtree(root);
                if let Err(err) = &result {
                    debug!(err:%; "Validation failed");
                }
                result
            }
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        catalog::{color, fixed_color, wrapper},
        error::ModelError,
        generator::{Arg, Generator},
        tree::StyleTree,
    };

    #[test]
    fn test_complete_tree_validates() {
        let mut tree = StyleTree::new();
        let red = Generator::new(&fixed_color::RED)
            .generate(&mut tree, None, Vec::new())
            .expect("Red");
        let ptr = Generator::new(&wrapper::STYLE_PTR)
            .generate(&mut tree, None, vec![Arg::Node(red)])
            .expect("StylePtr<Red>");
        tree.set_root(ptr).expect("root");

        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_empty_slot_is_reported_deep_in_tree() {
        let mut tree = StyleTree::new();
        let flicker = Generator::new(&color::AUDIO_FLICKER).instantiate(&mut tree, None);
        let red = Generator::new(&fixed_color::RED)
            .generate(&mut tree, None, Vec::new())
            .expect("Red");
        tree.set_param(flicker, 0, Arg::Node(red)).expect("bind");
        let ptr = Generator::new(&wrapper::STYLE_PTR)
            .generate(&mut tree, None, vec![Arg::Node(flicker)])
            .expect("StylePtr");
        tree.set_root(ptr).expect("root");

        assert_eq!(
            tree.validate(),
            Err(ModelError::Incomplete {
                node: "AudioFlicker",
                param: "B".to_string(),
            })
        );
        assert_eq!(tree.validate_params(ptr), Ok(()));
    }

    #[test]
    fn test_empty_tree_is_valid() {
        assert_eq!(StyleTree::new().validate(), Ok(()));
    }
}
