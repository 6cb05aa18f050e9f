//! Bucketed type interner.
//!
//! One bucket per type shape. A bucket maps the child ids that identify a
//! type (see [`TypeRef`]) to its local index, and stores the owned
//! [`TypeData`] with its [`TypeFlags`] at that index. Types are never
//! removed, so an id stays valid for the life of the interner.

use std::fmt;
use std::sync::Arc;

use cryss_stack::ensure_sufficient_stack;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use thiserror::Error;
use tracing::trace;

use crate::{PrimitiveKind, TypeData, TypeFlags, TypeId, TypeRef};

/// Error when interning a type fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TypeInternError {
    /// A bucket already holds `TypeId::MAX_LOCAL + 1` types.
    #[error("type interner bucket {bucket} is full")]
    BucketOverflow { bucket: usize },

    /// A child id that this interner never handed out.
    #[error("{id:?} does not name a type in this interner")]
    ForeignId { id: TypeId },
}

struct Entry {
    data: TypeData,
    flags: TypeFlags,
}

struct Bucket {
    /// Identifying child ids to local index.
    map: FxHashMap<Box<[TypeId]>, u32>,
    entries: Vec<Entry>,
}

impl Bucket {
    fn new() -> Self {
        Bucket {
            map: FxHashMap::default(),
            entries: Vec::with_capacity(64),
        }
    }

    fn push(&mut self, key: &[TypeId], data: TypeData, flags: TypeFlags) -> Option<u32> {
        let local = u32::try_from(self.entries.len())
            .ok()
            .filter(|&local| local <= TypeId::MAX_LOCAL)?;
        self.entries.push(Entry { data, flags });
        self.map.insert(key.into(), local);
        Some(local)
    }
}

const NUM_BUCKETS: usize = 4;

/// The primitives plus `()`.
const PRE_INTERNED: usize = PrimitiveKind::ALL.len() + 1;

/// Hash-consing store for types.
///
/// # Thread Safety
/// Each bucket sits behind its own `RwLock`. Lookups of existing types take
/// only the read lock; an insert re-checks under the write lock, so two
/// callers racing to intern the same type get the same id.
pub struct TypeInterner {
    buckets: [RwLock<Bucket>; NUM_BUCKETS],
}

impl TypeInterner {
    /// Create an interner holding the primitives and `()`.
    pub fn new() -> Self {
        // Primitives have fixed ids and no children to key them by, so they
        // only get entries.
        let mut primitives = Bucket::new();
        for kind in PrimitiveKind::ALL {
            debug_assert_eq!(primitives.entries.len(), kind.type_id().local());
            let ty = TypeRef::Primitive(kind);
            primitives.entries.push(Entry {
                data: ty.to_data(),
                flags: TypeFlags::compute(ty, []),
            });
        }

        let mut tuples = Bucket::new();
        let unit = TypeRef::Tuple(&[]);
        tuples.push(&[], unit.to_data(), TypeFlags::compute(unit, []));

        TypeInterner {
            buckets: [
                RwLock::new(primitives),
                RwLock::new(tuples),
                RwLock::new(Bucket::new()),
                RwLock::new(Bucket::new()),
            ],
        }
    }

    /// Intern `ty`, returning the id of the existing copy if there is one.
    ///
    /// Every child id in `ty` must come from this interner.
    pub fn try_intern(&self, ty: TypeRef<'_>) -> Result<TypeId, TypeInternError> {
        if let TypeRef::Primitive(kind) = ty {
            return Ok(kind.type_id());
        }

        let bucket_idx = ty.bucket();
        let bucket = &self.buckets[bucket_idx as usize];
        let mut buf = SmallVec::new();
        let key = ty.key(&mut buf);

        // Fast path: already interned
        if let Some(&local) = bucket.read().map.get(key) {
            return Ok(TypeId::from_bucket_local(bucket_idx, local));
        }

        // Children may live in this same bucket, so read their flags before
        // taking the write lock.
        let children = key
            .iter()
            .map(|&child| self.get_flags(child).ok_or(TypeInternError::ForeignId { id: child }))
            .collect::<Result<SmallVec<[TypeFlags; 8]>, _>>()?;
        let flags = TypeFlags::compute(ty, children);

        let mut guard = bucket.write();

        // Double-check after acquiring write lock
        if let Some(&local) = guard.map.get(key) {
            return Ok(TypeId::from_bucket_local(bucket_idx, local));
        }

        let local = guard
            .push(key, ty.to_data(), flags)
            .ok_or(TypeInternError::BucketOverflow {
                bucket: bucket_idx as usize,
            })?;
        let id = TypeId::from_bucket_local(bucket_idx, local);
        trace!(?id, ?ty, "interned type");
        Ok(id)
    }

    /// Intern `ty`.
    ///
    /// # Panics
    /// Panics if `ty` mentions a foreign id or a bucket is full. Use
    /// [`try_intern`](Self::try_intern) to handle those.
    pub fn intern(&self, ty: TypeRef<'_>) -> TypeId {
        self.try_intern(ty).unwrap_or_else(|e| panic!("{e}"))
    }

    #[inline]
    pub fn primitive(&self, kind: PrimitiveKind) -> TypeId {
        kind.type_id()
    }

    pub fn tuple(&self, elems: &[TypeId]) -> TypeId {
        self.intern(TypeRef::Tuple(elems))
    }

    pub fn function(&self, params: &[TypeId], ret: TypeId) -> TypeId {
        self.intern(TypeRef::Function { params, ret })
    }

    pub fn sound(&self, inner: TypeId) -> TypeId {
        self.intern(TypeRef::Sound(inner))
    }

    /// The data `id` was interned from, or `None` for a foreign id.
    pub fn get(&self, id: TypeId) -> Option<TypeData> {
        let bucket = self.buckets.get(id.bucket())?.read();
        bucket.entries.get(id.local()).map(|entry| entry.data.clone())
    }

    fn get_flags(&self, id: TypeId) -> Option<TypeFlags> {
        let bucket = self.buckets.get(id.bucket())?.read();
        bucket.entries.get(id.local()).map(|entry| entry.flags)
    }

    /// Look up the type data for a `TypeId`.
    ///
    /// # Panics
    /// Panics if `id` was not created by this interner.
    pub fn lookup(&self, id: TypeId) -> TypeData {
        self.get(id)
            .unwrap_or_else(|| panic!("{}", TypeInternError::ForeignId { id }))
    }

    /// Flags computed when `id` was interned.
    ///
    /// # Panics
    /// Panics if `id` was not created by this interner.
    pub fn flags(&self, id: TypeId) -> TypeFlags {
        self.get_flags(id)
            .unwrap_or_else(|| panic!("{}", TypeInternError::ForeignId { id }))
    }

    /// Render `id` as it would be written in source, with functions as
    /// `(params) -> ret`.
    pub fn display(&self, id: TypeId) -> String {
        let mut out = String::new();
        self.write_type(id, &mut out);
        out
    }

    fn write_type(&self, id: TypeId, out: &mut String) {
        ensure_sufficient_stack(|| match self.lookup(id) {
            TypeData::Primitive(kind) => out.push_str(kind.name()),
            TypeData::Tuple(elems) => {
                self.write_list(&elems, out);
                if elems.len() == 1 {
                    out.insert(out.len() - 1, ',');
                }
            }
            TypeData::Function { params, ret } => {
                self.write_list(&params, out);
                out.push_str(" -> ");
                self.write_type(ret, out);
            }
            TypeData::Sound(inner) => {
                out.push_str("sound[");
                self.write_type(inner, out);
                out.push(']');
            }
        });
    }

    /// `(a, b, ..)`
    fn write_list(&self, ids: &[TypeId], out: &mut String) {
        out.push('(');
        for (i, &id) in ids.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write_type(id, out);
        }
        out.push(')');
    }

    /// Number of interned types, the pre-interned ones included.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|b| b.read().entries.len()).sum()
    }

    /// Whether only the pre-interned types are present.
    pub fn is_empty(&self) -> bool {
        self.len() <= PRE_INTERNED
    }
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TypeInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sizes: Vec<usize> = self.buckets.iter().map(|b| b.read().entries.len()).collect();
        f.debug_struct("TypeInterner")
            .field("buckets", &sizes)
            .finish()
    }
}

/// Clonable handle to one session's interner.
///
/// All phases that name types share the same store through this, so ids
/// handed out by one phase are valid in the next.
#[derive(Clone, Default)]
pub struct SharedTypeInterner(Arc<TypeInterner>);

impl SharedTypeInterner {
    pub fn new() -> Self {
        SharedTypeInterner(Arc::new(TypeInterner::new()))
    }
}

impl fmt::Debug for SharedTypeInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedTypeInterner")
            .field("len", &self.0.len())
            .finish()
    }
}

impl std::ops::Deref for SharedTypeInterner {
    type Target = TypeInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
