//! Built-in style definitions, grouped by family.

use std::sync::OnceLock;

use crate::registry::{Family, Registry};

/// Declare parameterless constants written as a bare name, plus an `ALL`
/// slice listing them.
macro_rules! constants {
    ($category:expr; $($ident:ident => $name:literal, $display:literal;)*) => {
        $(
            pub static $ident: $crate::generator::StyleDef = $crate::generator::StyleDef::new(
                $name,
                $display,
                $category,
                $crate::generator::Syntax::Bare,
                &[],
            );
        )*

        /// Every definition in this family.
        pub static ALL: &[&$crate::generator::StyleDef] = &[$(&$ident),*];
    };
}

pub mod argument;
pub mod builtin;
pub mod color;
pub mod effect;
pub mod fixed_color;
pub mod function;
pub mod function3d;
pub mod layer;
pub mod lockup_type;
pub mod time_function;
pub mod transition;
pub mod wrapper;

/// Assemble a fresh registry holding the whole catalog.
pub fn registry() -> Registry {
    Registry::builder()
        .with_all(Family::Function, function::ALL)
        .with_all(Family::TimeFunction, time_function::ALL)
        .with_all(Family::Color, color::ALL)
        .with_all(Family::FixedColor, fixed_color::ALL)
        .with_all(Family::Builtin, builtin::ALL)
        .with_all(Family::Argument, argument::ALL)
        .with_all(Family::LockupType, lockup_type::ALL)
        .with_all(Family::Effect, effect::ALL)
        .with_all(Family::Transition, transition::ALL)
        .with_all(Family::Layer, layer::ALL)
        .with_all(Family::Wrapper, wrapper::ALL)
        .with_all(Family::Function3D, function3d::ALL)
        .build()
}

/// The shared catalog registry, built on first use.
pub fn builtin_registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(registry)
}
