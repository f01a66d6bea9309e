//! Transitions between two colours over time.

use crate::{
    generator::{ParamDef, StyleDef, Syntax},
    style_type::{Category, StyleType},
};

const COLOR: StyleType = StyleType::COLOR;
const FUNCTION: StyleType = StyleType::FUNCTION;
const MILLIS: StyleType = StyleType::FUNCTION.union(StyleType::TIMEFUNC);
const TRANSITION: StyleType = StyleType::TRANSITION;
const STEP: StyleType = StyleType::TRANSITION
    .union(StyleType::COLOR)
    .union(StyleType::LAYER);

const fn transition(name: &'static str, display_name: &'static str, params: &'static [ParamDef]) -> StyleDef {
    StyleDef::new(name, display_name, Category::Transition, Syntax::Template, params)
}

pub static TR_INSTANT: StyleDef = StyleDef::new(
    "TrInstant",
    "Instant",
    Category::Transition,
    Syntax::Bare,
    &[],
);

pub static TR_FADE: StyleDef = transition("TrFade", "Fade", &[ParamDef::number("MILLIS", 300)]);

pub static TR_FADE_X: StyleDef = transition("TrFadeX", "Fade", &[ParamDef::style("MILLIS", MILLIS)]);

pub static TR_SMOOTH_FADE: StyleDef = transition(
    "TrSmoothFade",
    "Smooth Fade",
    &[ParamDef::number("MILLIS", 300)],
);

pub static TR_WIPE: StyleDef = transition("TrWipe", "Wipe", &[ParamDef::number("MILLIS", 300)]);

pub static TR_WIPE_X: StyleDef = transition("TrWipeX", "Wipe", &[ParamDef::style("MILLIS", MILLIS)]);

pub static TR_WIPE_IN: StyleDef =
    transition("TrWipeIn", "Wipe In", &[ParamDef::number("MILLIS", 300)]);

pub static TR_WIPE_IN_X: StyleDef =
    transition("TrWipeInX", "Wipe In", &[ParamDef::style("MILLIS", MILLIS)]);

pub static TR_CENTER_WIPE: StyleDef = transition(
    "TrCenterWipe",
    "Center Wipe",
    &[
        ParamDef::number("MILLIS", 300),
        ParamDef::number("POS", 16384).optional(),
    ],
);

pub static TR_CENTER_WIPE_X: StyleDef = transition(
    "TrCenterWipeX",
    "Center Wipe",
    &[
        ParamDef::style("MILLIS", MILLIS),
        ParamDef::style("POS", FUNCTION),
    ],
);

pub static TR_DELAY: StyleDef = transition("TrDelay", "Delay", &[ParamDef::number("MILLIS", 300)]);

pub static TR_DELAY_X: StyleDef =
    transition("TrDelayX", "Delay", &[ParamDef::style("MILLIS", MILLIS)]);

pub static TR_BOING: StyleDef = transition(
    "TrBoing",
    "Boing",
    &[ParamDef::number("MILLIS", 300), ParamDef::number("N", 2)],
);

pub static TR_COLOR_CYCLE: StyleDef = transition(
    "TrColorCycle",
    "Color Cycle",
    &[
        ParamDef::number("MILLIS", 300),
        ParamDef::number("START_RPM", 0).optional(),
        ParamDef::number("END_RPM", 6000).optional(),
    ],
);

pub static TR_WAVE_X: StyleDef = transition(
    "TrWaveX",
    "Wave",
    &[
        ParamDef::style("COLOR", COLOR),
        ParamDef::style("FADEOUT_MS", FUNCTION),
        ParamDef::style("WAVE_SIZE", FUNCTION),
        ParamDef::style("WAVE_SPEED", FUNCTION),
        ParamDef::style("WAVE_CENTER", FUNCTION),
    ],
);

pub static TR_SPARK_X: StyleDef = transition(
    "TrSparkX",
    "Spark",
    &[
        ParamDef::style("COLOR", COLOR),
        ParamDef::style("SPARK_WIDTH", FUNCTION),
        ParamDef::style("WAVE_MS", FUNCTION),
        ParamDef::style("WAVE_CENTER", FUNCTION),
    ],
);

/// Transitions played back to back, optionally separated by colours.
pub static TR_CONCAT: StyleDef = transition(
    "TrConcat",
    "Concatenate",
    &[
        ParamDef::style("TRANSITION", TRANSITION),
        ParamDef::style("STEPS", STEP).variadic(),
    ],
);

pub static TR_JOIN: StyleDef = transition(
    "TrJoin",
    "Join",
    &[
        ParamDef::style("TR1", TRANSITION),
        ParamDef::style("TR", TRANSITION).variadic(),
    ],
);

pub static TR_JOIN_R: StyleDef = transition(
    "TrJoinR",
    "Join Right",
    &[
        ParamDef::style("TR1", TRANSITION),
        ParamDef::style("TR", TRANSITION).variadic(),
    ],
);

pub static TR_RANDOM: StyleDef = transition(
    "TrRandom",
    "Random",
    &[ParamDef::style("TRANSITIONS", TRANSITION).variadic()],
);

pub static TR_SELECT: StyleDef = transition(
    "TrSelect",
    "Select",
    &[
        ParamDef::style("F", FUNCTION),
        ParamDef::style("TRANSITIONS", TRANSITION).variadic(),
    ],
);

pub static TR_EXTEND: StyleDef = transition(
    "TrExtend",
    "Extend",
    &[
        ParamDef::number("MILLIS", 300),
        ParamDef::style("TRANSITION", TRANSITION),
    ],
);

pub static TR_LOOP: StyleDef = transition(
    "TrLoop",
    "Loop",
    &[ParamDef::style("TRANSITION", TRANSITION)],
);

pub static TR_DO_EFFECT: StyleDef = transition(
    "TrDoEffect",
    "Do Effect",
    &[
        ParamDef::style("TRANSITION", TRANSITION),
        ParamDef::style("EFFECT", StyleType::EFFECT),
    ],
);

pub static ALL: &[&StyleDef] = &[
    &TR_INSTANT,
    &TR_FADE,
    &TR_FADE_X,
    &TR_SMOOTH_FADE,
    &TR_WIPE,
    &TR_WIPE_X,
    &TR_WIPE_IN,
    &TR_WIPE_IN_X,
    &TR_CENTER_WIPE,
    &TR_CENTER_WIPE_X,
    &TR_DELAY,
    &TR_DELAY_X,
    &TR_BOING,
    &TR_COLOR_CYCLE,
    &TR_WAVE_X,
    &TR_SPARK_X,
    &TR_CONCAT,
    &TR_JOIN,
    &TR_JOIN_R,
    &TR_RANDOM,
    &TR_SELECT,
    &TR_EXTEND,
    &TR_LOOP,
    &TR_DO_EFFECT,
];
