//! Type tags for blade style nodes and parameters.
//!
//! Every node belongs to exactly one [`Category`]. Parameters declare the set
//! of categories they accept as a [`StyleType`], optionally combined with the
//! [`StyleType::VARIADIC`] modifier and a REFARG selector (see
//! [`StyleType::refarg`]).

use std::fmt;

bitflags::bitflags! {
    /// A 32-bit tag describing what a node is or what a parameter accepts.
    ///
    /// The low bits hold disjoint category flags. Bit 16 is the
    /// [`VARIADIC`](Self::VARIADIC) modifier and bits 24..28 hold a 4-bit REFARG
    /// selector. The selector is a number, not a set of flags: use
    /// [`refarg`](Self::refarg) to read it rather than `contains`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct StyleType: u32 {
        /// Top-level wrapper turning a colour into an installable style.
        const WRAPPER    = 1 << 0;
        /// Complete built-in style shipped with the firmware.
        const BUILTIN    = 1 << 1;
        /// Function producing a value per LED.
        const FUNCTION   = 1 << 2;
        /// Function producing a 3D point.
        const FUNCTION3D = 1 << 3;
        /// Scalar number.
        const NUMBER     = 1 << 4;
        /// Scalar 16-bit field.
        const BITS       = 1 << 5;
        /// Scalar boolean.
        const BOOL       = 1 << 6;
        /// Colour expression.
        const COLOR      = 1 << 7;
        /// Layer composited over a base colour.
        const LAYER      = 1 << 8;
        /// Transition between two colours.
        const TRANSITION = 1 << 9;
        /// Function producing a duration in milliseconds.
        const TIMEFUNC   = 1 << 10;
        /// Blade effect identifier.
        const EFFECT     = 1 << 11;
        /// Lockup type identifier.
        const LOCKUPTYPE = 1 << 12;
        /// Preset argument slot.
        const ARGUMENT   = 1 << 13;

        /// The parameter slot repeats and consumes all trailing arguments.
        const VARIADIC   = 1 << 16;

        /// Parameter type equals whatever is bound to parameter 1.
        const REFARG_1   = 1 << 24;
        /// Parameter type equals whatever is bound to parameter 2.
        const REFARG_2   = 2 << 24;
        /// Parameter type equals whatever is bound to parameter 3.
        const REFARG_3   = 3 << 24;
        /// Parameter type equals whatever is bound to parameter 4.
        const REFARG_4   = 4 << 24;
        /// Parameter type equals whatever is bound to parameter 5.
        const REFARG_5   = 5 << 24;
        /// Parameter type equals whatever is bound to parameter 6.
        const REFARG_6   = 6 << 24;
        /// Parameter type equals whatever is bound to parameter 7.
        const REFARG_7   = 7 << 24;
        /// Parameter type equals whatever is bound to parameter 8.
        const REFARG_8   = 8 << 24;
        /// All bits of the REFARG selector.
        const REFARG_MASK = 0xF << 24;

        /// Union of every category flag.
        const FLAGMASK = Self::WRAPPER.bits()
            | Self::BUILTIN.bits()
            | Self::FUNCTION.bits()
            | Self::FUNCTION3D.bits()
            | Self::NUMBER.bits()
            | Self::BITS.bits()
            | Self::BOOL.bits()
            | Self::COLOR.bits()
            | Self::LAYER.bits()
            | Self::TRANSITION.bits()
            | Self::TIMEFUNC.bits()
            | Self::EFFECT.bits()
            | Self::LOCKUPTYPE.bits()
            | Self::ARGUMENT.bits();

        /// Union of the categories whose values are sub-expressions.
        const STYLETYPE = Self::FLAGMASK.bits()
            & !(Self::NUMBER.bits() | Self::BITS.bits() | Self::BOOL.bits());
    }
}

const REFARG_SHIFT: u32 = 24;

impl StyleType {
    /// Strip the modifiers, leaving only category flags.
    pub const fn category_mask(self) -> Self {
        Self::from_bits_retain(self.bits() & Self::FLAGMASK.bits())
    }

    /// Returns `true` if the VARIADIC modifier is set.
    pub const fn is_variadic(self) -> bool {
        self.bits() & Self::VARIADIC.bits() != 0
    }

    /// Mark the tag as VARIADIC.
    pub const fn variadic(self) -> Self {
        Self::from_bits_retain(self.bits() | Self::VARIADIC.bits())
    }

    /// The 1-based parameter index this tag refers back to, if any.
    pub const fn refarg(self) -> Option<u8> {
        let n = (self.bits() & Self::REFARG_MASK.bits()) >> REFARG_SHIFT;
        if n == 0 { None } else { Some(n as u8) }
    }

    /// Replace the REFARG selector with `n`, or `None` if `n` is outside 1..=8.
    pub const fn try_with_refarg(self, n: u8) -> Option<Self> {
        if n < 1 || n > 8 {
            return None;
        }
        Some(Self::from_bits_retain(
            (self.bits() & !Self::REFARG_MASK.bits()) | ((n as u32) << REFARG_SHIFT),
        ))
    }

    /// Const form of [`try_with_refarg`](Self::try_with_refarg) for catalog
    /// tables, where a bad selector fails the build.
    pub(crate) const fn with_refarg(self, n: u8) -> Self {
        match self.try_with_refarg(n) {
            Some(tag) => tag,
            None => panic!("REFARG selector must be in 1..=8"),
        }
    }

    /// Returns `true` if a node of `category` may be bound to a slot with this tag.
    pub const fn accepts(self, category: Category) -> bool {
        self.bits() & category.flag().bits() != 0
    }

    /// Returns `true` if any category in this tag is a sub-expression category.
    pub const fn is_style_type(self) -> bool {
        self.bits() & Self::STYLETYPE.bits() != 0
    }

    /// The categories present in this tag, in declaration order.
    pub fn categories(self) -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(move |c| self.accepts(*c))
    }
}

impl fmt::Display for StyleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for category in self.categories() {
            if !first {
                f.write_str("|")?;
            }
            f.write_str(category.as_str())?;
            first = false;
        }
        if first {
            f.write_str("NONE")?;
        }
        if self.is_variadic() {
            f.write_str("|VARIADIC")?;
        }
        if let Some(n) = self.refarg() {
            write!(f, "|REFARG_{n}")?;
        }
        Ok(())
    }
}

/// The kind of a node. Exactly one per node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Wrapper,
    Builtin,
    Function,
    Function3D,
    Number,
    Bits,
    Bool,
    Color,
    Layer,
    Transition,
    TimeFunction,
    Effect,
    LockupType,
    Argument,
}

impl Category {
    /// Every category in flag order.
    pub const ALL: [Category; 14] = [
        Category::Wrapper,
        Category::Builtin,
        Category::Function,
        Category::Function3D,
        Category::Number,
        Category::Bits,
        Category::Bool,
        Category::Color,
        Category::Layer,
        Category::Transition,
        Category::TimeFunction,
        Category::Effect,
        Category::LockupType,
        Category::Argument,
    ];

    /// The flag bit for this category.
    pub const fn flag(self) -> StyleType {
        match self {
            Category::Wrapper => StyleType::WRAPPER,
            Category::Builtin => StyleType::BUILTIN,
            Category::Function => StyleType::FUNCTION,
            Category::Function3D => StyleType::FUNCTION3D,
            Category::Number => StyleType::NUMBER,
            Category::Bits => StyleType::BITS,
            Category::Bool => StyleType::BOOL,
            Category::Color => StyleType::COLOR,
            Category::Layer => StyleType::LAYER,
            Category::Transition => StyleType::TRANSITION,
            Category::TimeFunction => StyleType::TIMEFUNC,
            Category::Effect => StyleType::EFFECT,
            Category::LockupType => StyleType::LOCKUPTYPE,
            Category::Argument => StyleType::ARGUMENT,
        }
    }

    /// Recover the category from a tag holding exactly one category flag.
    pub fn from_flag(tag: StyleType) -> Option<Category> {
        let mut categories = tag.categories();
        match (categories.next(), categories.next()) {
            (Some(category), None) => Some(category),
            _ => None,
        }
    }

    /// Returns `true` for categories whose values are scalars rather than nodes.
    pub const fn is_scalar(self) -> bool {
        matches!(self, Category::Number | Category::Bits | Category::Bool)
    }

    /// Upper-case tag name, as used in diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Wrapper => "WRAPPER",
            Category::Builtin => "BUILTIN",
            Category::Function => "FUNCTION",
            Category::Function3D => "FUNCTION3D",
            Category::Number => "NUMBER",
            Category::Bits => "BITS",
            Category::Bool => "BOOL",
            Category::Color => "COLOR",
            Category::Layer => "LAYER",
            Category::Transition => "TRANSITION",
            Category::TimeFunction => "TIMEFUNC",
            Category::Effect => "EFFECT",
            Category::LockupType => "LOCKUPTYPE",
            Category::Argument => "ARGUMENT",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_flags_are_disjoint() {
        let mut seen = StyleType::empty();
        for category in Category::ALL {
            assert!(!seen.intersects(category.flag()), "{category} overlaps");
            seen |= category.flag();
        }
        assert_eq!(seen, StyleType::FLAGMASK);
    }

    #[test]
    fn test_flagmask_strips_modifiers() {
        let tag = (StyleType::COLOR | StyleType::LAYER).variadic().with_refarg(3);
        assert_eq!(tag.category_mask(), StyleType::COLOR | StyleType::LAYER);
        assert!(tag.is_variadic());
        assert_eq!(tag.refarg(), Some(3));
    }

    #[test]
    fn test_refarg_constants_match_selector() {
        assert_eq!(StyleType::REFARG_1.refarg(), Some(1));
        assert_eq!(StyleType::REFARG_5.refarg(), Some(5));
        assert_eq!(StyleType::REFARG_8.refarg(), Some(8));
        assert_eq!(StyleType::COLOR.refarg(), None);
        assert_eq!(StyleType::COLOR.with_refarg(2), StyleType::COLOR | StyleType::REFARG_2);
    }

    #[test]
    fn test_try_with_refarg_rejects_out_of_range() {
        assert_eq!(StyleType::COLOR.try_with_refarg(0), None);
        assert_eq!(StyleType::COLOR.try_with_refarg(9), None);
        assert_eq!(
            StyleType::COLOR.variadic().try_with_refarg(8),
            Some(StyleType::COLOR | StyleType::VARIADIC | StyleType::REFARG_8)
        );
        // Replaces rather than merges an existing selector.
        assert_eq!(
            StyleType::REFARG_3.try_with_refarg(1).and_then(StyleType::refarg),
            Some(1)
        );
    }

    #[test]
    fn test_styletype_excludes_scalars() {
        assert!(!StyleType::STYLETYPE.intersects(StyleType::NUMBER));
        assert!(!StyleType::STYLETYPE.intersects(StyleType::BITS));
        assert!(!StyleType::STYLETYPE.intersects(StyleType::BOOL));
        assert!(StyleType::STYLETYPE.contains(StyleType::COLOR | StyleType::TRANSITION));
        assert!(StyleType::COLOR.is_style_type());
        assert!(!StyleType::NUMBER.is_style_type());
    }

    #[test]
    fn test_accepts() {
        let tag = StyleType::FUNCTION | StyleType::TIMEFUNC;
        assert!(tag.accepts(Category::Function));
        assert!(tag.accepts(Category::TimeFunction));
        assert!(!tag.accepts(Category::Color));
    }

    #[test]
    fn test_from_flag() {
        assert_eq!(Category::from_flag(StyleType::LAYER), Some(Category::Layer));
        assert_eq!(
            Category::from_flag(StyleType::LAYER.variadic()),
            Some(Category::Layer)
        );
        assert_eq!(Category::from_flag(StyleType::LAYER | StyleType::COLOR), None);
        assert_eq!(Category::from_flag(StyleType::empty()), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(StyleType::COLOR.to_string(), "COLOR");
        assert_eq!(
            (StyleType::COLOR | StyleType::LAYER).variadic().to_string(),
            "COLOR|LAYER|VARIADIC"
        );
        assert_eq!(StyleType::COLOR.with_refarg(2).to_string(), "COLOR|REFARG_2");
        assert_eq!(StyleType::empty().to_string(), "NONE");
    }
}
