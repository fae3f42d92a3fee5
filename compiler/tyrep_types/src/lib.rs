//! Native type layout registry.
//!
//! Models C-like type layouts (primitive spellings, named types, structs and
//! unions) and computes their byte sizes the way a native compiler would,
//! without access to one. Tooling uses it to interpret raw memory against a
//! user-declared type schema.
//!
//! # Model
//!
//! - `PrimitiveKind`: 13 hardware scalars with host-native widths
//! - `NamedType`: a user identifier over a primitive, optionally narrowed
//! - `Aggregate`: struct or union with ordered members and an alignment
//!
//! All three share one namespace in `TypeManager`. Aggregates are addressed
//! through `AggregateId` handles returned at registration.
//!
//! ```text
//! let mut tm = TypeManager::new();
//! let pair = tm.register_struct("Pair", None)?;
//! tm.add_member(pair, MemberDecl::new("a", "int32"))?;   // offset 0
//! tm.add_member(pair, MemberDecl::new("b", "int32"))?;   // offset 4
//! assert_eq!(tm.size_of("Pair")?, 8);
//! ```

mod aggregate;
mod entry;
mod error;
mod layout;
mod manager;
mod options;
pub mod primitive;

pub use aggregate::{Aggregate, AggregateId, AggregateKind, Member, MemberDecl};
pub use entry::{NamedType, PrimitiveRef, TypeEntry};
pub use error::{RegistryError, SizeError};
pub use layout::Layout;
pub use manager::TypeManager;
pub use options::{RegistryOptions, DEFAULT_MAX_DEPTH};
pub use primitive::PrimitiveKind;

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{AggregateId, Layout};
    // Handles stay a single u32 so they can be copied freely.
    const _: () = assert!(std::mem::size_of::<AggregateId>() == 4);
    const _: () = assert!(std::mem::size_of::<Layout>() == 16);
}
