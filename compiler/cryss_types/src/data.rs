//! Type representations stored in and looked up against the interner.
//!
//! `TypeData` is what the interner owns. `TypeRef` is the borrowed form
//! callers hand in: it names the same shapes over slices, so a lookup that
//! hits never allocates.

use std::fmt;

use smallvec::SmallVec;

use crate::TypeId;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrimitiveKind {
    Boolean,
    Integer,
    Rational,
    Float,
    Str,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 5] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Integer,
        PrimitiveKind::Rational,
        PrimitiveKind::Float,
        PrimitiveKind::Str,
    ];

    /// The pre-interned id of this primitive.
    #[inline]
    pub const fn type_id(self) -> TypeId {
        match self {
            PrimitiveKind::Boolean => TypeId::BOOLEAN,
            PrimitiveKind::Integer => TypeId::INTEGER,
            PrimitiveKind::Rational => TypeId::RATIONAL,
            PrimitiveKind::Float => TypeId::FLOAT,
            PrimitiveKind::Str => TypeId::STR,
        }
    }

    /// Name used in annotations and when printing types.
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "bool",
            PrimitiveKind::Integer => "int",
            PrimitiveKind::Rational => "rational",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Str => "str",
        }
    }

    pub fn from_name(name: &str) -> Option<PrimitiveKind> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            PrimitiveKind::Integer | PrimitiveKind::Rational | PrimitiveKind::Float
        )
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A type as stored in the interner. Children are ids of types interned
/// before it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeData {
    Primitive(PrimitiveKind),
    Tuple(Box<[TypeId]>),
    Function { params: Box<[TypeId]>, ret: TypeId },
    /// A sound producing values of the inner type.
    Sound(TypeId),
}

impl TypeData {
    pub fn as_type_ref(&self) -> TypeRef<'_> {
        match self {
            TypeData::Primitive(kind) => TypeRef::Primitive(*kind),
            TypeData::Tuple(elems) => TypeRef::Tuple(elems),
            TypeData::Function { params, ret } => TypeRef::Function { params, ret: *ret },
            TypeData::Sound(inner) => TypeRef::Sound(*inner),
        }
    }
}

/// Borrowed type description, the input to
/// [`TypeInterner::try_intern`](crate::TypeInterner::try_intern).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeRef<'a> {
    Primitive(PrimitiveKind),
    Tuple(&'a [TypeId]),
    Function { params: &'a [TypeId], ret: TypeId },
    Sound(TypeId),
}

impl<'a> TypeRef<'a> {
    pub fn to_data(self) -> TypeData {
        match self {
            TypeRef::Primitive(kind) => TypeData::Primitive(kind),
            TypeRef::Tuple(elems) => TypeData::Tuple(elems.into()),
            TypeRef::Function { params, ret } => TypeData::Function {
                params: params.into(),
                ret,
            },
            TypeRef::Sound(inner) => TypeData::Sound(inner),
        }
    }

    /// Bucket that stores types of this shape.
    pub(crate) const fn bucket(self) -> u32 {
        match self {
            TypeRef::Primitive(_) => TypeId::PRIMITIVE_BUCKET,
            TypeRef::Tuple(_) => TypeId::TUPLE_BUCKET,
            TypeRef::Function { .. } => TypeId::FUNCTION_BUCKET,
            TypeRef::Sound(_) => TypeId::SOUND_BUCKET,
        }
    }

    /// The child ids that identify a type within its bucket: the elements
    /// of a tuple, `[ret, params..]` for a function, the inner type of a
    /// sound. Tuples borrow their slice; the others are laid out in `buf`.
    pub(crate) fn key<'k>(&self, buf: &'k mut SmallVec<[TypeId; 8]>) -> &'k [TypeId]
    where
        'a: 'k,
    {
        match *self {
            TypeRef::Primitive(_) => &[],
            TypeRef::Tuple(elems) => elems,
            TypeRef::Function { params, ret } => {
                buf.push(ret);
                buf.extend_from_slice(params);
                buf.as_slice()
            }
            TypeRef::Sound(inner) => {
                buf.push(inner);
                buf.as_slice()
            }
        }
    }
}
