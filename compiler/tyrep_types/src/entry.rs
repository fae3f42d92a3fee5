//! Entries of the flat type namespace.
//!
//! Primitive spellings, named types and aggregates share one identifier
//! namespace. A name resolves to exactly one [`TypeEntry`].

use crate::{AggregateId, PrimitiveKind};

/// Everything a name in the registry can refer to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeEntry {
    /// A built-in spelling of a primitive kind.
    Primitive(PrimitiveKind),

    /// A user-defined type over a primitive.
    Named(NamedType),

    /// A struct or union.
    Aggregate(AggregateId),
}

impl TypeEntry {
    /// The primitive kind underneath a spelling or named type.
    pub fn primitive(&self) -> Option<PrimitiveKind> {
        match self {
            Self::Primitive(kind) => Some(*kind),
            Self::Named(named) => Some(named.primitive),
            Self::Aggregate(_) => None,
        }
    }

    #[inline]
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::Aggregate(_))
    }
}

/// A user-defined identifier bound to a primitive kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedType {
    pub primitive: PrimitiveKind,

    /// Width in bits, never more than `primitive.bit_width()`.
    pub bit_size: u32,

    /// Identifier of the pointee, for pointer-like types. Not used for sizing.
    pub points_to: Option<String>,
}

impl NamedType {
    /// Bytes occupied; sub-byte widths round up.
    #[inline]
    pub fn byte_size(&self) -> usize {
        self.bit_size.div_ceil(8) as usize
    }
}

/// How a named type selects its primitive: by kind or by spelling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PrimitiveRef<'a> {
    Kind(PrimitiveKind),
    Name(&'a str),
}

impl From<PrimitiveKind> for PrimitiveRef<'_> {
    fn from(kind: PrimitiveKind) -> Self {
        Self::Kind(kind)
    }
}

impl<'a> From<&'a str> for PrimitiveRef<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}
