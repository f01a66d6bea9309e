//! Layers, composited over a base colour by `Layers<>`.

use crate::{
    generator::{ParamDef, StyleDef, Syntax},
    style_type::{Category, StyleType},
};

const COLOR: StyleType = StyleType::COLOR;
const COLOR_OR_LAYER: StyleType = StyleType::COLOR.union(StyleType::LAYER);
const FUNCTION: StyleType = StyleType::FUNCTION;
const TRANSITION: StyleType = StyleType::TRANSITION;

const fn layer(name: &'static str, display_name: &'static str, params: &'static [ParamDef]) -> StyleDef {
    StyleDef::new(name, display_name, Category::Layer, Syntax::Template, params)
}

pub static ALPHA_L: StyleDef = layer(
    "AlphaL",
    "Alpha Layer",
    &[
        ParamDef::style("COLOR", COLOR_OR_LAYER),
        ParamDef::style("ALPHA", FUNCTION),
    ],
);

pub static TRANSITION_EFFECT_L: StyleDef = layer(
    "TransitionEffectL",
    "Transition Effect",
    &[
        ParamDef::style("TRANSITION", TRANSITION),
        ParamDef::style("EFFECT", StyleType::EFFECT),
    ],
);

pub static MULTI_TRANSITION_EFFECT_L: StyleDef = layer(
    "MultiTransitionEffectL",
    "Multi Transition Effect",
    &[
        ParamDef::style("TRANSITION", TRANSITION),
        ParamDef::style("EFFECT", StyleType::EFFECT),
    ],
);

pub static TRANSITION_LOOP_L: StyleDef = layer(
    "TransitionLoopL",
    "Transition Loop",
    &[ParamDef::style("TRANSITION", TRANSITION)],
);

pub static TRANSITION_PULSE_L: StyleDef = layer(
    "TransitionPulseL",
    "Transition Pulse",
    &[
        ParamDef::style("TRANSITION", TRANSITION),
        ParamDef::style("PULSE", FUNCTION),
    ],
);

/// Ignition and retraction.
pub static IN_OUT_TR_L: StyleDef = layer(
    "InOutTrL",
    "In Out Transition",
    &[
        ParamDef::style("OUT_TR", TRANSITION),
        ParamDef::style("IN_TR", TRANSITION),
        ParamDef::style("OFF", COLOR_OR_LAYER),
    ],
);

pub static IN_OUT_HELPER_L: StyleDef = layer(
    "InOutHelperL",
    "In Out Helper",
    &[
        ParamDef::style("EXTENSION", FUNCTION),
        ParamDef::style("OFF_COLOR", COLOR),
        ParamDef::boolean("ALLOW_DISABLE", true).optional(),
    ],
);

pub static LOCKUP_TR_L: StyleDef = layer(
    "LockupTrL",
    "Lockup Transition",
    &[
        ParamDef::style("COLOR", COLOR),
        ParamDef::style("BEGIN_TR", TRANSITION),
        ParamDef::style("END_TR", TRANSITION),
        ParamDef::style("LOCKUP_TYPE", StyleType::LOCKUPTYPE),
    ],
);

pub static LOCKUP_L: StyleDef = layer(
    "LockupL",
    "Lockup",
    &[
        ParamDef::style("LOCKUP", COLOR),
        ParamDef::style("DRAG", COLOR),
        ParamDef::style("LOCKUP_SHAPE", FUNCTION),
        ParamDef::style("DRAG_SHAPE", FUNCTION),
    ],
);

pub static RESPONSIVE_LOCKUP_L: StyleDef = layer(
    "ResponsiveLockupL",
    "Responsive Lockup",
    &[
        ParamDef::style("COLOR", COLOR),
        ParamDef::style("TR1", TRANSITION),
        ParamDef::style("TR2", TRANSITION),
        ParamDef::style("TOP", FUNCTION),
        ParamDef::style("BOTTOM", FUNCTION),
        ParamDef::style("SIZE", FUNCTION),
    ],
);

pub static RESPONSIVE_DRAG_L: StyleDef = layer(
    "ResponsiveDragL",
    "Responsive Drag",
    &[
        ParamDef::style("COLOR", COLOR),
        ParamDef::style("TR1", TRANSITION),
        ParamDef::style("TR2", TRANSITION),
        ParamDef::style("SIZE1", FUNCTION),
        ParamDef::style("SIZE2", FUNCTION),
    ],
);

pub static RESPONSIVE_MELT_L: StyleDef = layer(
    "ResponsiveMeltL",
    "Responsive Melt",
    &[
        ParamDef::style("COLOR", COLOR),
        ParamDef::style("TR1", TRANSITION),
        ParamDef::style("TR2", TRANSITION),
    ],
);

pub static RESPONSIVE_LIGHTNING_BLOCK_L: StyleDef = layer(
    "ResponsiveLightningBlockL",
    "Responsive Lightning Block",
    &[
        ParamDef::style("COLOR", COLOR),
        ParamDef::style("TR1", TRANSITION),
        ParamDef::style("TR2", TRANSITION),
    ],
);

pub static RESPONSIVE_CLASH_L: StyleDef = layer(
    "ResponsiveClashL",
    "Responsive Clash",
    &[
        ParamDef::style("COLOR", COLOR),
        ParamDef::style("TR1", TRANSITION),
        ParamDef::style("TR2", TRANSITION),
        ParamDef::style("TOP", FUNCTION),
        ParamDef::style("BOTTOM", FUNCTION),
        ParamDef::style("SIZE", FUNCTION),
    ],
);

pub static RESPONSIVE_BLAST_L: StyleDef = layer(
    "ResponsiveBlastL",
    "Responsive Blast",
    &[
        ParamDef::style("COLOR", COLOR),
        ParamDef::style("FADEOUT_MS", FUNCTION),
        ParamDef::style("WAVE_SIZE", FUNCTION),
        ParamDef::style("WAVE_SPEED", FUNCTION),
    ],
);

pub static RESPONSIVE_STAB_L: StyleDef = layer(
    "ResponsiveStabL",
    "Responsive Stab",
    &[
        ParamDef::style("COLOR", COLOR),
        ParamDef::style("TR1", TRANSITION),
        ParamDef::style("TR2", TRANSITION),
        ParamDef::style("SIZE1", FUNCTION),
        ParamDef::style("SIZE2", FUNCTION),
    ],
);

pub static BLAST_L: StyleDef = layer(
    "BlastL",
    "Blast",
    &[
        ParamDef::style("BLAST", COLOR),
        ParamDef::number("FADEOUT_MS", 200).optional(),
        ParamDef::number("WAVE_SIZE", 100).optional(),
        ParamDef::number("WAVE_SPEED", 400).optional(),
    ],
);

pub static SIMPLE_CLASH_L: StyleDef = layer(
    "SimpleClashL",
    "Simple Clash",
    &[
        ParamDef::style("CLASH_COLOR", COLOR),
        ParamDef::number("CLASH_MILLIS", 40).optional(),
    ],
);

pub static BLINKING_L: StyleDef = layer(
    "BlinkingL",
    "Blinking",
    &[
        ParamDef::style("COLOR", COLOR),
        ParamDef::style("BLINK_MILLIS", FUNCTION),
        ParamDef::style("BLINK_PROMILLE", FUNCTION),
    ],
);

pub static SPARKLE_L: StyleDef = layer(
    "SparkleL",
    "Sparkle",
    &[
        ParamDef::style("SPARKLE_COLOR", COLOR),
        ParamDef::number("SPARK_CHANCE_PROMILLE", 300).optional(),
        ParamDef::number("SPARK_INTENSITY", 1024).optional(),
    ],
);

pub static ON_SPARK_L: StyleDef = layer(
    "OnSparkL",
    "On Spark",
    &[
        ParamDef::style("SPARK_COLOR", COLOR),
        ParamDef::number("MILLIS", 200).optional(),
    ],
);

pub static ALL: &[&StyleDef] = &[
    &ALPHA_L,
    &TRANSITION_EFFECT_L,
    &MULTI_TRANSITION_EFFECT_L,
    &TRANSITION_LOOP_L,
    &TRANSITION_PULSE_L,
    &IN_OUT_TR_L,
    &IN_OUT_HELPER_L,
    &LOCKUP_TR_L,
    &LOCKUP_L,
    &RESPONSIVE_LOCKUP_L,
    &RESPONSIVE_DRAG_L,
    &RESPONSIVE_MELT_L,
    &RESPONSIVE_LIGHTNING_BLOCK_L,
    &RESPONSIVE_CLASH_L,
    &RESPONSIVE_BLAST_L,
    &RESPONSIVE_STAB_L,
    &BLAST_L,
    &SIMPLE_CLASH_L,
    &BLINKING_L,
    &SPARKLE_L,
    &ON_SPARK_L,
];
