//! Pre-computed type metadata flags.
//!
//! `TypeFlags` are computed once when a type is interned and stored next to
//! it, so questions like "does this mention a sound anywhere" need no
//! traversal.
//!
//! Flags come in two groups:
//! - **Category flags** say what the type itself is.
//! - **Presence flags** say what it contains, and propagate from children.

use bitflags::bitflags;

use crate::TypeRef;

bitflags! {
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TypeFlags: u16 {
        // === Category Flags (bits 0-7) ===

        /// One of the built-in primitives.
        const IS_PRIMITIVE = 1 << 0;
        /// `int`, `rational` or `float`.
        const IS_NUMERIC = 1 << 1;
        const IS_TUPLE = 1 << 2;
        /// The empty tuple.
        const IS_UNIT = 1 << 3;
        const IS_FUNCTION = 1 << 4;
        const IS_SOUND = 1 << 5;

        // === Presence Flags (bits 8-15) ===

        /// Is or contains a sound type.
        const HAS_SOUND = 1 << 8;
        /// Is or contains a function type.
        const HAS_FUNCTION = 1 << 9;
    }
}

impl TypeFlags {
    /// Flags inherited by a compound type from its children.
    pub const PROPAGATE_MASK: Self =
        Self::from_bits_truncate(Self::HAS_SOUND.bits() | Self::HAS_FUNCTION.bits());

    /// Flags for `ty`, given the flags of its children.
    pub fn compute(ty: TypeRef<'_>, children: impl IntoIterator<Item = Self>) -> Self {
        let own = match ty {
            TypeRef::Primitive(kind) if kind.is_numeric() => Self::IS_PRIMITIVE | Self::IS_NUMERIC,
            TypeRef::Primitive(_) => Self::IS_PRIMITIVE,
            TypeRef::Tuple([]) => Self::IS_TUPLE | Self::IS_UNIT,
            TypeRef::Tuple(_) => Self::IS_TUPLE,
            TypeRef::Function { .. } => Self::IS_FUNCTION | Self::HAS_FUNCTION,
            TypeRef::Sound(_) => Self::IS_SOUND | Self::HAS_SOUND,
        };
        own | Self::propagate_all(children)
    }

    #[inline]
    pub const fn propagate_from(child: Self) -> Self {
        Self::from_bits_truncate(child.bits() & Self::PROPAGATE_MASK.bits())
    }

    /// Combine propagated flags from multiple children.
    #[inline]
    pub fn propagate_all(children: impl IntoIterator<Item = Self>) -> Self {
        children
            .into_iter()
            .fold(Self::empty(), |acc, child| acc | Self::propagate_from(child))
    }

    #[inline]
    pub const fn has_sound(self) -> bool {
        self.contains(Self::HAS_SOUND)
    }

    #[inline]
    pub const fn has_function(self) -> bool {
        self.contains(Self::HAS_FUNCTION)
    }
}

impl Default for TypeFlags {
    fn default() -> Self {
        Self::empty()
    }
}
