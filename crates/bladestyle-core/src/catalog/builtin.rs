//! Complete styles shipped with the firmware.

use crate::{
    generator::{ParamDef, StyleDef, Syntax},
    style_type::{Category, StyleType},
};

const COLOR: StyleType = StyleType::COLOR;

const fn call(name: &'static str, display_name: &'static str, params: &'static [ParamDef]) -> StyleDef {
    StyleDef::new(name, display_name, Category::Builtin, Syntax::Call, params)
}

const fn reference(name: &'static str, display_name: &'static str) -> StyleDef {
    StyleDef::new(name, display_name, Category::Builtin, Syntax::Reference, &[])
}

pub static STYLE_NORMAL_PTR: StyleDef = call(
    "StyleNormalPtr",
    "Normal",
    &[
        ParamDef::style("BASE", COLOR),
        ParamDef::style("CLASH", COLOR),
        ParamDef::number("OUT_MS", 300),
        ParamDef::number("IN_MS", 800),
    ],
);

pub static STYLE_FIRE_PTR: StyleDef = call(
    "StyleFirePtr",
    "Fire",
    &[
        ParamDef::style("COLOR1", COLOR),
        ParamDef::style("COLOR2", COLOR),
        ParamDef::number("DELAY", 0).optional(),
        ParamDef::number("SPEED", 2).optional(),
    ],
);

pub static STYLE_RAINBOW_PTR: StyleDef = call(
    "StyleRainbowPtr",
    "Rainbow",
    &[ParamDef::number("OUT_MS", 300), ParamDef::number("IN_MS", 800)],
);

pub static STYLE_STROBE_PTR: StyleDef = call(
    "StyleStrobePtr",
    "Strobe",
    &[
        ParamDef::style("STROBE_COLOR", COLOR),
        ParamDef::style("CLASH", COLOR),
        ParamDef::number("FREQUENCY", 15),
        ParamDef::number("OUT_MS", 300),
        ParamDef::number("IN_MS", 800),
    ],
);

pub static STYLE_CHARGING: StyleDef = reference("style_charging", "Charging");

pub static STYLE_POV: StyleDef = reference("style_pov", "Persistence of Vision");

pub static ALL: &[&StyleDef] = &[
    &STYLE_NORMAL_PTR,
    &STYLE_FIRE_PTR,
    &STYLE_RAINBOW_PTR,
    &STYLE_STROBE_PTR,
    &STYLE_CHARGING,
    &STYLE_POV,
];
