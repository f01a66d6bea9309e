//! Functions producing a value per LED, mostly in 0..=32768.

use crate::{
    generator::{ParamDef, StyleDef, Syntax},
    style_type::{Category, StyleType},
};

const FUNCTION: StyleType = StyleType::FUNCTION;
const FUNCTION_OR_TIME: StyleType = StyleType::FUNCTION.union(StyleType::TIMEFUNC);

const fn function(name: &'static str, display_name: &'static str, params: &'static [ParamDef]) -> StyleDef {
    StyleDef::new(name, display_name, Category::Function, Syntax::Template, params)
}

const fn bare(name: &'static str, display_name: &'static str) -> StyleDef {
    StyleDef::new(name, display_name, Category::Function, Syntax::Bare, &[])
}

/// A constant. Also produced implicitly for integer literals in function slots.
pub static INT: StyleDef = function("Int", "Integer", &[ParamDef::number("N", 0)]);

pub static INT_ARG: StyleDef = function(
    "IntArg",
    "Integer Argument",
    &[
        ParamDef::style("ARG", StyleType::ARGUMENT),
        ParamDef::number("DEFAULT", 0),
    ],
);

pub static SCALE: StyleDef = function(
    "Scale",
    "Scale",
    &[
        ParamDef::style("F", FUNCTION),
        ParamDef::style("A", FUNCTION),
        ParamDef::style("B", FUNCTION),
    ],
);

pub static INVERT_F: StyleDef = function("InvertF", "Invert", &[ParamDef::style("F", FUNCTION)]);

pub static SIN: StyleDef = function(
    "Sin",
    "Sine",
    &[
        ParamDef::style("RPM", FUNCTION),
        ParamDef::style("LOW", FUNCTION),
        ParamDef::style("HIGH", FUNCTION),
    ],
);

pub static SAW: StyleDef = function(
    "Saw",
    "Sawtooth",
    &[
        ParamDef::style("RPM", FUNCTION),
        ParamDef::style("LOW", FUNCTION),
        ParamDef::style("HIGH", FUNCTION),
    ],
);

pub static SWING_SPEED: StyleDef =
    function("SwingSpeed", "Swing Speed", &[ParamDef::number("MAX", 250)]);

pub static SWING_ACCELERATION: StyleDef = function(
    "SwingAcceleration",
    "Swing Acceleration",
    &[ParamDef::number("MAX", 130).optional()],
);

pub static BLADE_ANGLE: StyleDef = function(
    "BladeAngle",
    "Blade Angle",
    &[
        ParamDef::number("MIN", 0).optional(),
        ParamDef::number("MAX", 32768).optional(),
    ],
);

pub static TWIST_ANGLE: StyleDef = function(
    "TwistAngle",
    "Twist Angle",
    &[
        ParamDef::number("N", 2).optional(),
        ParamDef::number("OFFSET", 0).optional(),
    ],
);

pub static SOUND_LEVEL: StyleDef = bare("SoundLevel", "Sound Level");

pub static NOISY_SOUND_LEVEL: StyleDef = bare("NoisySoundLevel", "Noisy Sound Level");

pub static SMOOTH_SOUND_LEVEL: StyleDef = bare("SmoothSoundLevel", "Smooth Sound Level");

pub static BATTERY_LEVEL: StyleDef = bare("BatteryLevel", "Battery Level");

pub static BUMP: StyleDef = function(
    "Bump",
    "Bump",
    &[
        ParamDef::style("POS", FUNCTION),
        ParamDef::style("WIDTH_FRACTION", FUNCTION),
    ],
);

pub static SMOOTH_STEP: StyleDef = function(
    "SmoothStep",
    "Smooth Step",
    &[
        ParamDef::style("POS", FUNCTION),
        ParamDef::style("WIDTH", FUNCTION),
    ],
);

pub static LINEAR_SECTION_F: StyleDef = function(
    "LinearSectionF",
    "Linear Section",
    &[
        ParamDef::style("POS", FUNCTION),
        ParamDef::style("FRACTION", FUNCTION),
    ],
);

pub static SUM: StyleDef = function(
    "Sum",
    "Sum",
    &[
        ParamDef::style("F1", FUNCTION),
        ParamDef::style("F2", FUNCTION),
        ParamDef::style("F", FUNCTION).variadic(),
    ],
);

pub static MULT: StyleDef = function(
    "Mult",
    "Multiply",
    &[
        ParamDef::style("F1", FUNCTION),
        ParamDef::style("F2", FUNCTION),
        ParamDef::style("F", FUNCTION).variadic(),
    ],
);

pub static PERCENTAGE: StyleDef = function(
    "Percentage",
    "Percentage",
    &[
        ParamDef::style("F", FUNCTION),
        ParamDef::number("PERCENT", 50),
    ],
);

pub static IFON: StyleDef = function(
    "Ifon",
    "If On",
    &[ParamDef::style("A", FUNCTION), ParamDef::style("B", FUNCTION)],
);

pub static HOLD_PEAK_F: StyleDef = function(
    "HoldPeakF",
    "Hold Peak",
    &[
        ParamDef::style("F", FUNCTION),
        ParamDef::style("HOLD_MILLIS", FUNCTION_OR_TIME),
        ParamDef::style("SPEED", FUNCTION),
    ],
);

pub static THRESHOLD_PULSE_F: StyleDef = function(
    "ThresholdPulseF",
    "Threshold Pulse",
    &[
        ParamDef::style("F", FUNCTION),
        ParamDef::style("THRESHOLD", FUNCTION),
    ],
);

pub static EFFECT_POSITION: StyleDef = function(
    "EffectPosition",
    "Effect Position",
    &[ParamDef::style("EFFECT", StyleType::EFFECT)],
);

pub static INCREMENT_WITH_RESET: StyleDef = function(
    "IncrementWithReset",
    "Increment With Reset",
    &[
        ParamDef::style("PULSE", FUNCTION),
        ParamDef::style("RESET_PULSE", FUNCTION),
        ParamDef::style("MAX", FUNCTION),
        ParamDef::style("INCREMENT", FUNCTION),
    ],
);

pub static BROWN_NOISE_F: StyleDef = function(
    "BrownNoiseF",
    "Brown Noise",
    &[ParamDef::style("GRADE", FUNCTION)],
);

pub static TRIGGER: StyleDef = function(
    "Trigger",
    "Trigger",
    &[
        ParamDef::style("EFFECT", StyleType::EFFECT),
        ParamDef::style("FADE_IN_MILLIS", FUNCTION_OR_TIME),
        ParamDef::style("SUSTAIN_MILLIS", FUNCTION_OR_TIME),
        ParamDef::style("FADE_OUT_MILLIS", FUNCTION_OR_TIME),
    ],
);

/// Projects two 3D functions onto each other.
pub static DOT_3D: StyleDef = function(
    "Dot3D",
    "Dot Product",
    &[
        ParamDef::style("A", StyleType::FUNCTION3D),
        ParamDef::style("B", StyleType::FUNCTION3D),
    ],
);

pub static ALL: &[&StyleDef] = &[
    &INT,
    &INT_ARG,
    &SCALE,
    &INVERT_F,
    &SIN,
    &SAW,
    &SWING_SPEED,
    &SWING_ACCELERATION,
    &BLADE_ANGLE,
    &TWIST_ANGLE,
    &SOUND_LEVEL,
    &NOISY_SOUND_LEVEL,
    &SMOOTH_SOUND_LEVEL,
    &BATTERY_LEVEL,
    &BUMP,
    &SMOOTH_STEP,
    &LINEAR_SECTION_F,
    &SUM,
    &MULT,
    &PERCENTAGE,
    &IFON,
    &HOLD_PEAK_F,
    &THRESHOLD_PULSE_F,
    &EFFECT_POSITION,
    &INCREMENT_WITH_RESET,
    &BROWN_NOISE_F,
    &TRIGGER,
    &DOT_3D,
];
