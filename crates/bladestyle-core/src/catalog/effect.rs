//! Blade effect identifiers.

use crate::style_type::Category;

constants! { Category::Effect;
    EFFECT_NONE => "EFFECT_NONE", "None";
    EFFECT_CLASH => "EFFECT_CLASH", "Clash";
    EFFECT_BLAST => "EFFECT_BLAST", "Blast";
    EFFECT_FORCE => "EFFECT_FORCE", "Force";
    EFFECT_STAB => "EFFECT_STAB", "Stab";
    EFFECT_BOOT => "EFFECT_BOOT", "Boot";
    EFFECT_LOCKUP_BEGIN => "EFFECT_LOCKUP_BEGIN", "Lockup Begin";
    EFFECT_LOCKUP_END => "EFFECT_LOCKUP_END", "Lockup End";
    EFFECT_DRAG_BEGIN => "EFFECT_DRAG_BEGIN", "Drag Begin";
    EFFECT_DRAG_END => "EFFECT_DRAG_END", "Drag End";
    EFFECT_PREON => "EFFECT_PREON", "Preon";
    EFFECT_POSTOFF => "EFFECT_POSTOFF", "Postoff";
    EFFECT_IGNITION => "EFFECT_IGNITION", "Ignition";
    EFFECT_RETRACTION => "EFFECT_RETRACTION", "Retraction";
    EFFECT_CHANGE => "EFFECT_CHANGE", "Change";
    EFFECT_NEWFONT => "EFFECT_NEWFONT", "New Font";
    EFFECT_LOW_BATTERY => "EFFECT_LOW_BATTERY", "Low Battery";
    EFFECT_POWERSAVE => "EFFECT_POWERSAVE", "Power Save";
    EFFECT_BATTERY_LEVEL => "EFFECT_BATTERY_LEVEL", "Battery Level";
    EFFECT_FAST_ON => "EFFECT_FAST_ON", "Fast On";
    EFFECT_USER1 => "EFFECT_USER1", "User 1";
    EFFECT_USER2 => "EFFECT_USER2", "User 2";
    EFFECT_USER3 => "EFFECT_USER3", "User 3";
    EFFECT_USER4 => "EFFECT_USER4", "User 4";
}
