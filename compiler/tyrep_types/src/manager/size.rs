//! Recursive size resolution.
//!
//! Depth is checked before lookup so that self-containing aggregates stop at
//! `RegistryOptions::max_depth`. The limit is caller-controlled, so each level
//! grows the stack on demand rather than trusting the limit to fit.

use crate::{Aggregate, AggregateKind, Layout, Member, SizeError, TypeEntry};

use super::TypeManager;

/// Grow the stack when less than this remains (100KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Size of each stack extension (1MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

#[inline]
#[cfg(not(target_arch = "wasm32"))]
fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

impl TypeManager {
    pub(super) fn resolve(&self, name: &str, depth: u32) -> Result<Layout, SizeError> {
        ensure_sufficient_stack(|| self.resolve_inner(name, depth))
    }

    fn resolve_inner(&self, name: &str, depth: u32) -> Result<Layout, SizeError> {
        if depth >= self.options.max_depth {
            return Err(SizeError::TooDeep {
                name: name.to_owned(),
                limit: self.options.max_depth,
            });
        }

        match self.entries.get(name) {
            Some(TypeEntry::Primitive(kind)) => Ok(Layout::scalar(kind.byte_width())),
            Some(TypeEntry::Named(named)) => Ok(Layout::scalar(named.byte_size())),
            // Ids in `entries` are only ever issued by this registry.
            Some(TypeEntry::Aggregate(id)) => {
                self.aggregate_layout(&self.aggregates[id.index()], depth)
            }
            None => Err(SizeError::Undefined {
                name: name.to_owned(),
            }),
        }
    }

    /// Layout of an aggregate, rounded up to its alignment.
    ///
    /// A union takes its largest member, failing on the first member that
    /// cannot be sized. A struct ends where its last member ends; earlier
    /// members are not consulted.
    pub(super) fn aggregate_layout(
        &self,
        aggregate: &Aggregate,
        depth: u32,
    ) -> Result<Layout, SizeError> {
        let overflow = || SizeError::Overflow {
            name: aggregate.name.clone(),
        };

        let Some(last) = aggregate.members.last() else {
            return Err(SizeError::Empty {
                name: aggregate.name.clone(),
            });
        };

        let content = match aggregate.kind {
            AggregateKind::Union => {
                let mut largest = 0;
                for member in &aggregate.members {
                    largest = largest.max(self.member_extent(member, depth + 1, &aggregate.name)?);
                }
                largest
            }
            AggregateKind::Struct => {
                let extent = self.member_extent(last, depth + 1, &aggregate.name)?;
                last.offset.checked_add(extent).ok_or_else(overflow)?
            }
        };

        Layout::aligned(content, aggregate.alignment).ok_or_else(overflow)
    }

    /// Bytes a member occupies: element size times element count.
    fn member_extent(
        &self,
        member: &Member,
        depth: u32,
        aggregate: &str,
    ) -> Result<usize, SizeError> {
        let element = self.resolve(&member.ty, depth)?.size;
        element
            .checked_mul(member.element_count())
            .ok_or_else(|| SizeError::Overflow {
                name: aggregate.to_owned(),
            })
    }
}
