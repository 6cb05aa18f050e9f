//! Types for cryss.
//!
//! Every type lives in one session-wide [`TypeInterner`] and is handled by
//! its [`TypeId`]. Interning is hash-consing: structurally equal types get
//! the same id, so type equality is id equality.
//!
//! - [`TypeRef`] is the borrowed description handed to the interner,
//!   [`TypeData`] what it stores.
//! - [`TypeFlags`] are computed once per type at intern time.
//! - [`lower_type`] and [`lower_item_types`] turn parsed annotations into ids.

mod data;
mod flags;
mod id;
mod interner;
mod lower;

pub use data::{PrimitiveKind, TypeData, TypeRef};
pub use flags::TypeFlags;
pub use id::TypeId;
pub use interner::{SharedTypeInterner, TypeInternError, TypeInterner};
pub use lower::{lower_item_types, lower_type, ItemTypes, LowerError};

// Size assertions to prevent accidental regressions.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{TypeData, TypeId};
    cryss_ir::static_assert_size!(TypeId, 4);
    // Function variant: Box<[TypeId]> (16) + TypeId (4), plus the tag
    cryss_ir::static_assert_size!(TypeData, 24);
}
