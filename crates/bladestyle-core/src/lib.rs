//! Blade Style Core Types and Definitions
//!
//! This crate provides the in-memory model of the blade style expression
//! language. It includes:
//!
//! - **Type tags**: Category flags and modifiers ([`style_type::StyleType`])
//! - **Parameters**: Scalar and node slots ([`param::Param`])
//! - **Tree**: Generational arena owning every node ([`tree::StyleTree`])
//! - **Generators**: Static definitions and node factories ([`generator`] module)
//! - **Registry**: Name lookup across families ([`registry::Registry`])
//! - **Catalog**: The built-in definitions ([`catalog`] module)

pub mod catalog;
pub mod error;
pub mod generator;
pub mod param;
pub mod registry;
pub mod style_type;
pub mod tree;
mod validate;

pub use error::{Arity, GenerateError, ModelError};
pub use generator::{Arg, Generator, StyleDef, Syntax};
pub use param::{Param, ParamKind};
pub use registry::{Family, Registry};
pub use style_type::{Category, StyleType};
pub use tree::{NodeId, StyleNode, StyleTree};
