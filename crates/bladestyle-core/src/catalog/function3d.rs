//! Functions producing a 3D vector per LED.

use crate::{
    generator::{ParamDef, StyleDef, Syntax},
    style_type::{Category, StyleType},
};

const FUNCTION: StyleType = StyleType::FUNCTION;

pub static XYZ: StyleDef = StyleDef::new(
    "XYZ",
    "XYZ",
    Category::Function3D,
    Syntax::Template,
    &[
        ParamDef::style("X", FUNCTION),
        ParamDef::style("Y", FUNCTION),
        ParamDef::style("Z", FUNCTION),
    ],
);

pub static ROTATE_3D: StyleDef = StyleDef::new(
    "Rotate3D",
    "Rotate 3D",
    Category::Function3D,
    Syntax::Template,
    &[
        ParamDef::style("F", StyleType::FUNCTION3D),
        ParamDef::style("ANGLE", FUNCTION),
    ],
);

pub static BLADE_DIRECTION_3D: StyleDef = StyleDef::new(
    "BladeDirection3D",
    "Blade Direction",
    Category::Function3D,
    Syntax::Bare,
    &[],
);

pub static ALL: &[&StyleDef] = &[&XYZ, &ROTATE_3D, &BLADE_DIRECTION_3D];
