//! Interned type identifier.

use std::fmt;

/// Handle to a type owned by a [`TypeInterner`](crate::TypeInterner).
///
/// # Layout
/// 32 bits split into bucket (4 bits) + local index (28 bits):
/// - Bits 31-28: bucket, one per type shape
/// - Bits 27-0: index within the bucket
///
/// Two ids from the same interner are equal exactly when the types they
/// name are structurally equal.
///
/// # Pre-interned Types
/// The primitives sit at fixed indices of the primitive bucket, and the
/// empty tuple is the first entry of the tuple bucket.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    pub const BOOLEAN: TypeId = TypeId::from_bucket_local(Self::PRIMITIVE_BUCKET, 0);
    pub const INTEGER: TypeId = TypeId::from_bucket_local(Self::PRIMITIVE_BUCKET, 1);
    pub const RATIONAL: TypeId = TypeId::from_bucket_local(Self::PRIMITIVE_BUCKET, 2);
    pub const FLOAT: TypeId = TypeId::from_bucket_local(Self::PRIMITIVE_BUCKET, 3);
    pub const STR: TypeId = TypeId::from_bucket_local(Self::PRIMITIVE_BUCKET, 4);
    /// The empty tuple `()`.
    pub const UNIT: TypeId = TypeId::from_bucket_local(Self::TUPLE_BUCKET, 0);

    pub(crate) const PRIMITIVE_BUCKET: u32 = 0;
    pub(crate) const TUPLE_BUCKET: u32 = 1;
    pub(crate) const FUNCTION_BUCKET: u32 = 2;
    pub(crate) const SOUND_BUCKET: u32 = 3;

    /// Maximum local index per bucket (2^28 - 1).
    pub const MAX_LOCAL: u32 = 0x0FFF_FFFF;

    /// Create a `TypeId` from bucket and local index.
    #[inline]
    pub(crate) const fn from_bucket_local(bucket: u32, local: u32) -> Self {
        debug_assert!(bucket < 16);
        debug_assert!(local <= Self::MAX_LOCAL);
        TypeId((bucket << 28) | local)
    }

    /// Extract the bucket index (bits 31-28).
    #[inline]
    pub const fn bucket(self) -> usize {
        (self.0 >> 28) as usize
    }

    /// Extract the local index within the bucket (bits 27-0).
    #[inline]
    pub const fn local(self) -> usize {
        (self.0 & Self::MAX_LOCAL) as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.bucket() == Self::PRIMITIVE_BUCKET as usize
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({}:{})", self.bucket(), self.local())
    }
}
