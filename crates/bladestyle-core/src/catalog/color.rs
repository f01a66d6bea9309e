//! Colour expressions.

use crate::{
    generator::{ParamDef, StyleDef, Syntax},
    style_type::{Category, StyleType},
};

const COLOR: StyleType = StyleType::COLOR;
const COLOR_OR_LAYER: StyleType = StyleType::COLOR.union(StyleType::LAYER);
const FUNCTION: StyleType = StyleType::FUNCTION;

const fn color(name: &'static str, display_name: &'static str, params: &'static [ParamDef]) -> StyleDef {
    StyleDef::new(name, display_name, Category::Color, Syntax::Template, params)
}

pub static RGB: StyleDef = color(
    "Rgb",
    "RGB",
    &[
        ParamDef::number("R", 0),
        ParamDef::number("G", 0),
        ParamDef::number("B", 0),
    ],
);

pub static RGB16: StyleDef = color(
    "Rgb16",
    "RGB16",
    &[
        ParamDef::number("R", 0),
        ParamDef::number("G", 0),
        ParamDef::number("B", 0),
    ],
);

/// Colour taken from a preset argument, with a fallback.
pub static RGB_ARG: StyleDef = color(
    "RgbArg",
    "RGB Argument",
    &[
        ParamDef::style("ARG", StyleType::ARGUMENT),
        ParamDef::style("DEFAULT", COLOR),
    ],
);

/// Blend between colours by a function. Every colour after the first takes
/// the first colour's category.
pub static MIX: StyleDef = color(
    "Mix",
    "Mix",
    &[
        ParamDef::style("F", FUNCTION),
        ParamDef::style("C1", COLOR_OR_LAYER),
        ParamDef::style("COLORS", COLOR_OR_LAYER.with_refarg(2)).variadic(),
    ],
);

pub static GRADIENT: StyleDef = color(
    "Gradient",
    "Gradient",
    &[ParamDef::style("COLORS", COLOR).variadic()],
);

pub static AUDIO_FLICKER: StyleDef = color(
    "AudioFlicker",
    "Audio Flicker",
    &[ParamDef::style("A", COLOR), ParamDef::style("B", COLOR)],
);

pub static RANDOM_FLICKER: StyleDef = color(
    "RandomFlicker",
    "Random Flicker",
    &[ParamDef::style("A", COLOR), ParamDef::style("B", COLOR)],
);

pub static RANDOM_PER_LED_FLICKER: StyleDef = color(
    "RandomPerLEDFlicker",
    "Random Per LED Flicker",
    &[ParamDef::style("A", COLOR), ParamDef::style("B", COLOR)],
);

pub static BROWN_NOISE_FLICKER: StyleDef = color(
    "BrownNoiseFlicker",
    "Brown Noise Flicker",
    &[
        ParamDef::style("A", COLOR),
        ParamDef::style("B", COLOR),
        ParamDef::number("GRADE", 50),
    ],
);

pub static HUMP_FLICKER: StyleDef = color(
    "HumpFlicker",
    "Hump Flicker",
    &[
        ParamDef::style("A", COLOR),
        ParamDef::style("B", COLOR),
        ParamDef::number("HUMP_WIDTH", 50),
    ],
);

pub static PULSING: StyleDef = color(
    "Pulsing",
    "Pulsing",
    &[
        ParamDef::style("A", COLOR),
        ParamDef::style("B", COLOR),
        ParamDef::number("PULSE_MILLIS", 800),
    ],
);

pub static BLINKING: StyleDef = color(
    "Blinking",
    "Blinking",
    &[
        ParamDef::style("A", COLOR),
        ParamDef::style("B", COLOR),
        ParamDef::number("BLINK_MILLIS", 1000),
        ParamDef::number("BLINK_PROMILLE", 500),
    ],
);

pub static STROBE: StyleDef = color(
    "Strobe",
    "Strobe",
    &[
        ParamDef::style("BASE", COLOR),
        ParamDef::style("STROBE_COLOR", COLOR),
        ParamDef::number("FREQUENCY", 15),
        ParamDef::number("STROBE_MILLIS", 1),
    ],
);

pub static STRIPES: StyleDef = color(
    "Stripes",
    "Stripes",
    &[
        ParamDef::number("WIDTH", 1000),
        ParamDef::number("SPEED", 1000),
        ParamDef::style("COLORS", COLOR).variadic(),
    ],
);

pub static STRIPES_X: StyleDef = color(
    "StripesX",
    "Stripes X",
    &[
        ParamDef::style("WIDTH", FUNCTION),
        ParamDef::style("SPEED", FUNCTION),
        ParamDef::style("COLORS", COLOR).variadic(),
    ],
);

pub static SPARKLE: StyleDef = color(
    "Sparkle",
    "Sparkle",
    &[
        ParamDef::style("BASE", COLOR),
        ParamDef::style("SPARKLE_COLOR", COLOR),
        ParamDef::number("SPARK_CHANCE_PROMILLE", 300).optional(),
        ParamDef::number("SPARK_INTENSITY", 1024).optional(),
    ],
);

pub static STYLE_FIRE: StyleDef = color(
    "StyleFire",
    "Fire",
    &[
        ParamDef::style("COLOR1", COLOR),
        ParamDef::style("COLOR2", COLOR),
        ParamDef::number("DELAY", 0).optional(),
        ParamDef::number("SPEED", 2).optional(),
    ],
);

pub static CYLON: StyleDef = color(
    "Cylon",
    "Cylon",
    &[
        ParamDef::style("COLOR", COLOR),
        ParamDef::number("PERCENTAGE", 5),
        ParamDef::number("RPM", 20),
    ],
);

pub static ON_SPARK: StyleDef = color(
    "OnSpark",
    "On Spark",
    &[
        ParamDef::style("BASE", COLOR),
        ParamDef::style("SPARK_COLOR", COLOR),
        ParamDef::number("MILLIS", 200).optional(),
    ],
);

pub static SIMPLE_CLASH: StyleDef = color(
    "SimpleClash",
    "Simple Clash",
    &[
        ParamDef::style("BASE", COLOR),
        ParamDef::style("CLASH_COLOR", COLOR),
        ParamDef::number("CLASH_MILLIS", 40).optional(),
    ],
);

pub static RAINBOW: StyleDef =
    StyleDef::new("Rainbow", "Rainbow", Category::Color, Syntax::Bare, &[]);

pub static ROTATE_COLORS_X: StyleDef = color(
    "RotateColorsX",
    "Rotate Colors",
    &[
        ParamDef::style("ROTATION", FUNCTION),
        ParamDef::style("COLOR", COLOR),
    ],
);

pub static REMAP: StyleDef = color(
    "Remap",
    "Remap",
    &[
        ParamDef::style("F", FUNCTION),
        ParamDef::style("COLOR", COLOR),
    ],
);

/// A base colour with layers composited over it, bottom first.
pub static LAYERS: StyleDef = color(
    "Layers",
    "Layers",
    &[
        ParamDef::layer_base("BASE", COLOR_OR_LAYER),
        ParamDef::style("LAYERS", StyleType::LAYER).variadic(),
    ],
);

pub static IN_OUT_HELPER: StyleDef = color(
    "InOutHelper",
    "In Out Helper",
    &[
        ParamDef::style("COLOR", COLOR),
        ParamDef::number("OUT_MILLIS", 300),
        ParamDef::number("IN_MILLIS", 800),
        ParamDef::style("OFF_COLOR", COLOR),
        ParamDef::boolean("ALLOW_DISABLE", true).optional(),
    ],
);

/// Plays a bit pattern, one bit every `MILLIS_PER_BIT`.
pub static SEQUENCE: StyleDef = color(
    "Sequence",
    "Sequence",
    &[
        ParamDef::style("COLOR", COLOR),
        ParamDef::style("OFF_COLOR", COLOR),
        ParamDef::number("MILLIS_PER_BIT", 100),
        ParamDef::number("BITS", 16),
        ParamDef::bits("PATTERN", 0).variadic(),
    ],
);

pub static COLOR_CHANGE: StyleDef = color(
    "ColorChange",
    "Color Change",
    &[
        ParamDef::style("TRANSITION", StyleType::TRANSITION),
        ParamDef::style("COLORS", COLOR).variadic(),
    ],
);

pub static COLOR_SELECT: StyleDef = color(
    "ColorSelect",
    "Color Select",
    &[
        ParamDef::style("F", FUNCTION),
        ParamDef::style("TRANSITION", StyleType::TRANSITION),
        ParamDef::style("COLORS", COLOR).variadic(),
    ],
);

pub static ALL: &[&StyleDef] = &[
    &RGB,
    &RGB16,
    &RGB_ARG,
    &MIX,
    &GRADIENT,
    &AUDIO_FLICKER,
    &RANDOM_FLICKER,
    &RANDOM_PER_LED_FLICKER,
    &BROWN_NOISE_FLICKER,
    &HUMP_FLICKER,
    &PULSING,
    &BLINKING,
    &STROBE,
    &STRIPES,
    &STRIPES_X,
    &SPARKLE,
    &STYLE_FIRE,
    &CYLON,
    &ON_SPARK,
    &SIMPLE_CLASH,
    &RAINBOW,
    &ROTATE_COLORS_X,
    &REMAP,
    &LAYERS,
    &IN_OUT_HELPER,
    &SEQUENCE,
    &COLOR_CHANGE,
    &COLOR_SELECT,
];
