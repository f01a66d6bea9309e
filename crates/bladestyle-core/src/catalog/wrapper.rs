//! Top-level wrappers turning a colour into an installable style.

use crate::{
    generator::{ParamDef, StyleDef, Syntax},
    style_type::{Category, StyleType},
};

pub static STYLE_PTR: StyleDef = StyleDef::new(
    "StylePtr",
    "Style",
    Category::Wrapper,
    Syntax::Call,
    &[ParamDef::style("STYLE", StyleType::COLOR)],
);

pub static CHARGING_STYLE_PTR: StyleDef = StyleDef::new(
    "ChargingStylePtr",
    "Charging Style",
    Category::Wrapper,
    Syntax::Call,
    &[ParamDef::style("STYLE", StyleType::COLOR)],
);

pub static ALL: &[&StyleDef] = &[&STYLE_PTR, &CHARGING_STYLE_PTR];
