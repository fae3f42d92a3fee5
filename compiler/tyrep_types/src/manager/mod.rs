//! The type registry.
//!
//! `TypeManager` owns one flat namespace of [`TypeEntry`] values keyed by
//! name, plus the aggregate storage those entries point into.
//!
//! # Architecture
//!
//! ```text
//! entries: name -> TypeEntry
//!     ├── Primitive(kind)       built-in spellings, loaded at construction
//!     ├── Named(NamedType)      register_type
//!     └── Aggregate(id) ──────► aggregates[id]   register_aggregate / add_member
//! ```
//!
//! Nothing is ever removed. Every failed mutation is a no-op.

use std::num::NonZeroUsize;

use rustc_hash::FxHashMap;

use crate::primitive::SPELLINGS;
use crate::{
    Aggregate, AggregateId, AggregateKind, Layout, Member, MemberDecl, NamedType, PrimitiveKind,
    PrimitiveRef, RegistryError, RegistryOptions, SizeError, TypeEntry,
};

mod size;

/// Registry of primitive spellings, named types, and aggregates.
#[derive(Clone, Debug)]
pub struct TypeManager {
    /// Every defined name, of any kind.
    entries: FxHashMap<String, TypeEntry>,

    /// Aggregate storage, indexed by `AggregateId`.
    aggregates: Vec<Aggregate>,

    options: RegistryOptions,
}

impl Default for TypeManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeManager {
    /// Create a registry holding only the built-in primitive spellings.
    pub fn new() -> Self {
        Self::with_options(RegistryOptions::default())
    }

    pub fn with_options(options: RegistryOptions) -> Self {
        let entries = SPELLINGS
            .iter()
            .map(|&(name, kind)| (name.to_owned(), TypeEntry::Primitive(kind)))
            .collect();
        Self {
            entries,
            aggregates: Vec::new(),
            options,
        }
    }

    #[inline]
    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    // === Registration ===

    /// Register a named type over a primitive.
    ///
    /// A `bit_size` of 0 takes the primitive's natural width. Wider than
    /// natural is rejected.
    pub fn register_type<'a>(
        &mut self,
        name: &str,
        primitive: impl Into<PrimitiveRef<'a>>,
        bit_size: u32,
        points_to: Option<&str>,
    ) -> Result<(), RegistryError> {
        self.ensure_undefined(name)?;

        let primitive = match primitive.into() {
            PrimitiveRef::Kind(kind) => kind,
            PrimitiveRef::Name(spelling) => {
                self.spelling(spelling)
                    .ok_or_else(|| RegistryError::UnknownPrimitive {
                        name: spelling.to_owned(),
                    })?
            }
        };

        let natural = primitive.bit_width();
        let bit_size = match bit_size {
            0 => natural,
            bits if bits > natural => {
                return Err(RegistryError::BitSizeMismatch {
                    name: name.to_owned(),
                    bit_size: bits,
                    natural,
                });
            }
            bits => bits,
        };

        tracing::debug!(name, %primitive, bit_size, ?points_to, "registered named type");
        self.entries.insert(
            name.to_owned(),
            TypeEntry::Named(NamedType {
                primitive,
                bit_size,
                points_to: points_to.map(str::to_owned),
            }),
        );
        Ok(())
    }

    /// Register an empty struct or union.
    ///
    /// `alignment` defaults to `RegistryOptions::default_alignment`.
    pub fn register_aggregate(
        &mut self,
        name: &str,
        kind: AggregateKind,
        alignment: Option<NonZeroUsize>,
    ) -> Result<AggregateId, RegistryError> {
        self.ensure_undefined(name)?;

        let raw = u32::try_from(self.aggregates.len())
            .map_err(|_| RegistryError::CapacityExceeded { limit: u32::MAX })?;
        let id = AggregateId::from_raw(raw);
        let alignment = alignment.unwrap_or(self.options.default_alignment);

        tracing::debug!(name, %kind, alignment = alignment.get(), ?id, "registered aggregate");
        self.aggregates
            .push(Aggregate::new(name.to_owned(), kind, alignment));
        self.entries
            .insert(name.to_owned(), TypeEntry::Aggregate(id));
        Ok(id)
    }

    #[inline]
    pub fn register_struct(
        &mut self,
        name: &str,
        alignment: Option<NonZeroUsize>,
    ) -> Result<AggregateId, RegistryError> {
        self.register_aggregate(name, AggregateKind::Struct, alignment)
    }

    #[inline]
    pub fn register_union(
        &mut self,
        name: &str,
        alignment: Option<NonZeroUsize>,
    ) -> Result<AggregateId, RegistryError> {
        self.register_aggregate(name, AggregateKind::Union, alignment)
    }

    /// Append a member to an aggregate, returning the offset it was placed at.
    ///
    /// Without an explicit offset, the member goes right after the current
    /// layout, or into its trailing padding when the member's element size
    /// fits there.
    pub fn add_member(
        &mut self,
        id: AggregateId,
        decl: MemberDecl,
    ) -> Result<usize, RegistryError> {
        let aggregate = self
            .aggregates
            .get(id.index())
            .ok_or(RegistryError::InvalidHandle(id))?;

        if !self.entries.contains_key(&decl.ty) {
            return Err(RegistryError::UnknownType {
                member: decl.name,
                ty: decl.ty,
            });
        }
        if aggregate.has_member(&decl.name) {
            return Err(RegistryError::DuplicateMember {
                aggregate: aggregate.name.clone(),
                member: decl.name,
            });
        }

        let offset = match decl.offset {
            Some(offset) => offset,
            None => self.infer_offset(aggregate, &decl)?,
        };

        tracing::debug!(
            aggregate = %aggregate.name,
            member = %decl.name,
            ty = %decl.ty,
            offset,
            array_len = decl.array_len,
            "added member"
        );
        self.aggregates[id.index()].members.push(Member {
            name: decl.name,
            ty: decl.ty,
            offset,
            array_len: decl.array_len,
        });
        Ok(offset)
    }

    /// [`add_member`](Self::add_member) addressed by aggregate name.
    pub fn add_member_by_name(
        &mut self,
        aggregate: &str,
        decl: MemberDecl,
    ) -> Result<usize, RegistryError> {
        let id = self
            .aggregate_id(aggregate)
            .ok_or_else(|| RegistryError::UnknownAggregate {
                name: aggregate.to_owned(),
            })?;
        self.add_member(id, decl)
    }

    fn infer_offset(
        &self,
        aggregate: &Aggregate,
        decl: &MemberDecl,
    ) -> Result<usize, RegistryError> {
        if aggregate.members.is_empty() {
            return Ok(0);
        }

        let base = self
            .aggregate_layout(aggregate, 0)
            .map_err(|source| RegistryError::UnsizedAggregate {
                aggregate: aggregate.name.clone(),
                member: decl.name.clone(),
                source,
            })?;

        // An element that can't be sized is treated as fitting.
        let fits_in_padding = self
            .resolve(&decl.ty, 0)
            .map_or(true, |elem| elem.size <= base.trailing_padding);

        if base.trailing_padding > 0 && fits_in_padding {
            Ok(base.content_size())
        } else {
            Ok(base.size)
        }
    }

    fn ensure_undefined(&self, name: &str) -> Result<(), RegistryError> {
        if self.is_defined(name) {
            tracing::debug!(name, "rejected duplicate definition");
            return Err(RegistryError::Duplicate {
                name: name.to_owned(),
            });
        }
        Ok(())
    }

    // === Lookup ===

    /// Whether `name` is a primitive spelling, named type, or aggregate.
    #[inline]
    pub fn is_defined(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[inline]
    pub fn entry(&self, name: &str) -> Option<&TypeEntry> {
        self.entries.get(name)
    }

    /// Primitive kind of a built-in spelling. Named types are not spellings.
    pub fn spelling(&self, name: &str) -> Option<PrimitiveKind> {
        match self.entries.get(name)? {
            TypeEntry::Primitive(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn named_type(&self, name: &str) -> Option<&NamedType> {
        match self.entries.get(name)? {
            TypeEntry::Named(named) => Some(named),
            _ => None,
        }
    }

    pub fn aggregate_id(&self, name: &str) -> Option<AggregateId> {
        match self.entries.get(name)? {
            TypeEntry::Aggregate(id) => Some(*id),
            _ => None,
        }
    }

    #[inline]
    pub fn aggregate(&self, id: AggregateId) -> Option<&Aggregate> {
        self.aggregates.get(id.index())
    }

    pub fn aggregate_by_name(&self, name: &str) -> Option<&Aggregate> {
        self.aggregate(self.aggregate_id(name)?)
    }

    /// Aggregates in registration order.
    pub fn aggregates(&self) -> impl Iterator<Item = (AggregateId, &Aggregate)> {
        self.aggregates.iter().enumerate().map(|(i, agg)| {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "registration caps the aggregate count at u32::MAX"
            )]
            let id = AggregateId::from_raw(i as u32);
            (id, agg)
        })
    }

    /// Number of defined names, built-in spellings included.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// False for any constructed registry, which holds the built-in spellings.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // === Size queries ===

    /// Size of `name` in bytes.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn size_of(&self, name: &str) -> Result<usize, SizeError> {
        self.resolve(name, 0).map(|layout| layout.size)
    }

    /// Size of `name` together with the trailing padding its alignment added.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn layout_of(&self, name: &str) -> Result<Layout, SizeError> {
        self.resolve(name, 0)
    }

    /// Size of `name`, with every failure collapsed to 0.
    pub fn size_or_zero(&self, name: &str) -> usize {
        self.size_of(name).unwrap_or(0)
    }
}
