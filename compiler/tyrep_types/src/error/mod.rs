//! Registry errors.
//!
//! Mutations report [`RegistryError`]; size queries report [`SizeError`].
//! A rejected mutation never changes the registry.

use thiserror::Error;

use crate::AggregateId;

/// Why a size query could not produce a byte count.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SizeError {
    /// No entity of any kind has this name.
    #[error("type `{name}` is not defined")]
    Undefined { name: String },

    /// An aggregate with no members has no computable size.
    #[error("aggregate `{name}` has no members")]
    Empty { name: String },

    /// Resolution hit the recursion ceiling, usually a self-containing aggregate.
    #[error("size of `{name}` exceeds the recursion limit of {limit}")]
    TooDeep { name: String, limit: u32 },

    /// The byte count does not fit in `usize`.
    #[error("size of `{name}` overflows")]
    Overflow { name: String },
}

impl SizeError {
    /// Name of the type that failed to resolve.
    pub fn name(&self) -> &str {
        match self {
            Self::Undefined { name }
            | Self::Empty { name }
            | Self::TooDeep { name, .. }
            | Self::Overflow { name } => name,
        }
    }
}

/// Why a registration or member insertion was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The name is already taken by a primitive spelling, named type, or aggregate.
    #[error("`{name}` is already defined")]
    Duplicate { name: String },

    /// The primitive spelling is not in the built-in table.
    #[error("`{name}` is not a primitive type")]
    UnknownPrimitive { name: String },

    /// A member references a type that is not defined.
    #[error("member `{member}` references undefined type `{ty}`")]
    UnknownType { member: String, ty: String },

    /// No aggregate has this name.
    #[error("`{name}` is not a struct or union")]
    UnknownAggregate { name: String },

    /// The handle was not issued by this registry.
    #[error("aggregate handle {0:?} does not belong to this registry")]
    InvalidHandle(AggregateId),

    /// An explicit bit size is wider than the primitive it narrows.
    #[error("`{name}` declares {bit_size} bits but its primitive holds only {natural}")]
    BitSizeMismatch {
        name: String,
        bit_size: u32,
        natural: u32,
    },

    /// The aggregate already has a member with this name.
    #[error("`{aggregate}` already has a member named `{member}`")]
    DuplicateMember { aggregate: String, member: String },

    /// The registry already holds as many aggregates as a handle can address.
    #[error("cannot register more than {limit} aggregates")]
    CapacityExceeded { limit: u32 },

    /// An offset could not be inferred because the aggregate so far has no size.
    #[error("cannot place `{member}` in `{aggregate}`: {source}")]
    UnsizedAggregate {
        aggregate: String,
        member: String,
        #[source]
        source: SizeError,
    },
}
