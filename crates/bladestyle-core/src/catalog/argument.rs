//! Preset argument slots, edited per preset on the board.

use crate::style_type::Category;

constants! { Category::Argument;
    BASE_COLOR_ARG => "BASE_COLOR_ARG", "Base Color";
    ALT_COLOR_ARG => "ALT_COLOR_ARG", "Alt Color";
    ALT_COLOR2_ARG => "ALT_COLOR2_ARG", "Alt Color 2";
    ALT_COLOR3_ARG => "ALT_COLOR3_ARG", "Alt Color 3";
    STYLE_OPTION_ARG => "STYLE_OPTION_ARG", "Style Option";
    STYLE_OPTION2_ARG => "STYLE_OPTION2_ARG", "Style Option 2";
    STYLE_OPTION3_ARG => "STYLE_OPTION3_ARG", "Style Option 3";
    IGNITION_OPTION_ARG => "IGNITION_OPTION_ARG", "Ignition Option";
    IGNITION_TIME_ARG => "IGNITION_TIME_ARG", "Ignition Time";
    IGNITION_DELAY_ARG => "IGNITION_DELAY_ARG", "Ignition Delay";
    IGNITION_COLOR_ARG => "IGNITION_COLOR_ARG", "Ignition Color";
    IGNITION_POWER_UP_ARG => "IGNITION_POWER_UP_ARG", "Ignition Power Up";
    BLAST_COLOR_ARG => "BLAST_COLOR_ARG", "Blast Color";
    CLASH_COLOR_ARG => "CLASH_COLOR_ARG", "Clash Color";
    LOCKUP_COLOR_ARG => "LOCKUP_COLOR_ARG", "Lockup Color";
    DRAG_COLOR_ARG => "DRAG_COLOR_ARG", "Drag Color";
    LB_COLOR_ARG => "LB_COLOR_ARG", "Lightning Block Color";
    STAB_COLOR_ARG => "STAB_COLOR_ARG", "Stab Color";
    SWING_COLOR_ARG => "SWING_COLOR_ARG", "Swing Color";
    SWING_OPTION_ARG => "SWING_OPTION_ARG", "Swing Option";
    EMITTER_COLOR_ARG => "EMITTER_COLOR_ARG", "Emitter Color";
    EMITTER_SIZE_ARG => "EMITTER_SIZE_ARG", "Emitter Size";
    OFF_COLOR_ARG => "OFF_COLOR_ARG", "Off Color";
    PREON_COLOR_ARG => "PREON_COLOR_ARG", "Preon Color";
    PREON_OPTION_ARG => "PREON_OPTION_ARG", "Preon Option";
    PREON_SIZE_ARG => "PREON_SIZE_ARG", "Preon Size";
    RETRACTION_OPTION_ARG => "RETRACTION_OPTION_ARG", "Retraction Option";
    RETRACTION_TIME_ARG => "RETRACTION_TIME_ARG", "Retraction Time";
    RETRACTION_DELAY_ARG => "RETRACTION_DELAY_ARG", "Retraction Delay";
    RETRACTION_COLOR_ARG => "RETRACTION_COLOR_ARG", "Retraction Color";
    RETRACTION_COOL_DOWN_ARG => "RETRACTION_COOL_DOWN_ARG", "Retraction Cool Down";
}
