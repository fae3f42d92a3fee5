//! Struct and union definitions.
//!
//! Aggregates are stored by the `TypeManager` in a flat vector and referenced
//! through [`AggregateId`] handles. Members keep declaration order and are
//! never reordered or removed.

use std::fmt;
use std::num::NonZeroUsize;

/// Handle to an aggregate owned by a `TypeManager`.
///
/// Returned by aggregate registration and threaded into member insertion.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct AggregateId(u32);

impl AggregateId {
    #[inline]
    pub(crate) const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for AggregateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AggregateId({})", self.0)
    }
}

/// Whether members are laid out sequentially or overlap.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AggregateKind {
    #[default]
    Struct,
    Union,
}

impl AggregateKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Union => "union",
        }
    }
}

impl fmt::Display for AggregateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A registered struct or union.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Aggregate {
    /// The aggregate name.
    pub name: String,

    /// Struct or union.
    pub kind: AggregateKind,

    /// Size is rounded up to a multiple of this.
    pub alignment: NonZeroUsize,

    /// Members in declaration order.
    pub members: Vec<Member>,
}

impl Aggregate {
    pub(crate) fn new(name: String, kind: AggregateKind, alignment: NonZeroUsize) -> Self {
        Self {
            name,
            kind,
            alignment,
            members: Vec::new(),
        }
    }

    #[inline]
    pub fn is_union(&self) -> bool {
        self.kind == AggregateKind::Union
    }

    /// Look up a member by name.
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name == name)
    }

    #[inline]
    pub fn has_member(&self, name: &str) -> bool {
        self.member(name).is_some()
    }
}

/// One field of an aggregate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    /// Member name, unique within its aggregate.
    pub name: String,

    /// Name of the member's type.
    pub ty: String,

    /// Byte offset from the start of the aggregate. Unused for unions.
    pub offset: usize,

    /// Element count; 0 for a scalar.
    pub array_len: usize,
}

impl Member {
    /// Number of elements the member occupies (scalars count as one).
    #[inline]
    pub fn element_count(&self) -> usize {
        self.array_len.max(1)
    }
}

/// Member declaration passed to `TypeManager::add_member`.
///
/// ```text
/// MemberDecl::new("buf", "char").array(16)
/// MemberDecl::new("len", "size_t").at(16)
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberDecl {
    pub name: String,
    pub ty: String,
    /// Explicit byte offset; `None` infers it from the layout so far.
    pub offset: Option<usize>,
    pub array_len: usize,
}

impl MemberDecl {
    /// A scalar member with an inferred offset.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            offset: None,
            array_len: 0,
        }
    }

    /// Place the member at an explicit offset, stored without validation.
    #[must_use]
    pub fn at(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Make the member a fixed-size array.
    #[must_use]
    pub fn array(mut self, len: usize) -> Self {
        self.array_len = len;
        self
    }
}
