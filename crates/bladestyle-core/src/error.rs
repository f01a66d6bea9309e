//! Error types for tree mutation and node generation.

use std::fmt;

use thiserror::Error;

use crate::{
    param::ParamKind,
    style_type::{Category, StyleType},
    tree::NodeId,
};

/// A type alias for `Result<T, ModelError>`.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised by [`StyleTree`](crate::StyleTree) operations.
///
/// Every failing operation leaves the tree exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("node handle {0:?} is stale or was never allocated")]
    StaleNode(NodeId),

    #[error("parameter index {index} is out of range for `{node}` ({len} parameters)")]
    IndexOutOfRange {
        node: &'static str,
        index: usize,
        len: usize,
    },

    #[error("`{param}` expects {expected}, found {found}")]
    TypeMismatch {
        param: String,
        expected: StyleType,
        found: Category,
    },

    #[error("`{param}` is a {actual} parameter, not {requested}")]
    WrongParamKind {
        param: String,
        requested: ParamKind,
        actual: ParamKind,
    },

    #[error("value {value} does not fit {kind} parameter `{param}`")]
    ValueOutOfRange {
        param: String,
        kind: ParamKind,
        value: i32,
    },

    #[error("`{param}` is not a variadic parameter")]
    NotVariadic { param: String },

    #[error("`{node}` has no variadic parameter")]
    NoVariadicSlot { node: &'static str },

    #[error("node `{node}` is already owned by another parameter")]
    NodeAttached { node: &'static str },

    #[error("attaching `{node}` would make it its own ancestor")]
    Cycle { node: &'static str },

    #[error("parameter `{param}` of `{node}` is not set")]
    Incomplete { node: &'static str, param: String },
}

/// Expected argument count of a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Between `min` and `max` arguments, both inclusive.
    Range { min: usize, max: usize },
    /// At least this many arguments.
    AtLeast(usize),
}

impl Arity {
    /// Returns `true` if `count` arguments are acceptable.
    pub fn allows(&self, count: usize) -> bool {
        match *self {
            Arity::Range { min, max } => (min..=max).contains(&count),
            Arity::AtLeast(min) => count >= min,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Arity::Range { min, max } if min == max => write!(f, "{min}"),
            Arity::Range { min, max } => write!(f, "{min} to {max}"),
            Arity::AtLeast(min) => write!(f, "at least {min}"),
        }
    }
}

/// Errors raised when a generator cannot produce a node.
///
/// A failed generation never leaves nodes behind: the arguments handed to the
/// generator are destroyed along with any partially built node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("`{name}` takes {expected} arguments, found {found}")]
    ArgumentCount {
        name: &'static str,
        expected: Arity,
        found: usize,
    },

    #[error("argument {} of `{name}`: {source}", .index + 1)]
    Argument {
        name: &'static str,
        index: usize,
        #[source]
        source: ModelError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_allows() {
        assert!(Arity::Range { min: 1, max: 2 }.allows(1));
        assert!(Arity::Range { min: 1, max: 2 }.allows(2));
        assert!(!Arity::Range { min: 1, max: 2 }.allows(3));
        assert!(Arity::AtLeast(2).allows(5));
        assert!(!Arity::AtLeast(2).allows(1));
    }

    #[test]
    fn test_arity_display() {
        assert_eq!(Arity::Range { min: 3, max: 3 }.to_string(), "3");
        assert_eq!(Arity::Range { min: 0, max: 2 }.to_string(), "0 to 2");
        assert_eq!(Arity::AtLeast(1).to_string(), "at least 1");
    }

    #[test]
    fn test_generate_error_display_is_one_based() {
        let err = GenerateError::Argument {
            name: "Mix",
            index: 0,
            source: ModelError::NotVariadic {
                param: "F".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "argument 1 of `Mix`: `F` is not a variadic parameter"
        );
    }
}
