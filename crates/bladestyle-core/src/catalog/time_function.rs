//! Functions producing a duration in milliseconds.

use crate::{
    generator::{ParamDef, StyleDef, Syntax},
    style_type::{Category, StyleType},
};

const fn time(name: &'static str, display_name: &'static str, params: &'static [ParamDef]) -> StyleDef {
    StyleDef::new(name, display_name, Category::TimeFunction, Syntax::Template, params)
}

/// Length of the sound file played for the current effect. Written `WavLen<>`.
pub static WAV_LEN: StyleDef = time("WavLen", "Sound Length", &[]);

pub static IGNITION_TIME: StyleDef = time(
    "IgnitionTime",
    "Ignition Time",
    &[ParamDef::number("DEFAULT", 300).optional()],
);

pub static RETRACTION_TIME: StyleDef = time(
    "RetractionTime",
    "Retraction Time",
    &[ParamDef::number("DEFAULT", 0).optional()],
);

pub static BEND_TIME_POW_INV_X: StyleDef = time(
    "BendTimePowInvX",
    "Bend Time",
    &[
        ParamDef::style("MILLIS", StyleType::FUNCTION.union(StyleType::TIMEFUNC)),
        ParamDef::style("EXPONENT", StyleType::FUNCTION),
    ],
);

pub static ALL: &[&StyleDef] = &[&WAV_LEN, &IGNITION_TIME, &RETRACTION_TIME, &BEND_TIME_POW_INV_X];
