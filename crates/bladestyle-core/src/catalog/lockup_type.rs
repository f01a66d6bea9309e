//! Lockup type identifiers.

use crate::style_type::Category;

constants! { Category::LockupType;
    LOCKUP_NORMAL => "SaberBase::LOCKUP_NORMAL", "Normal";
    LOCKUP_DRAG => "SaberBase::LOCKUP_DRAG", "Drag";
    LOCKUP_ARMED => "SaberBase::LOCKUP_ARMED", "Armed";
    LOCKUP_AUTOFIRE => "SaberBase::LOCKUP_AUTOFIRE", "Autofire";
    LOCKUP_MELT => "SaberBase::LOCKUP_MELT", "Melt";
    LOCKUP_LIGHTNING_BLOCK => "SaberBase::LOCKUP_LIGHTNING_BLOCK", "Lightning Block";
}
