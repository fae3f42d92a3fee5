//! Registry configuration.

use std::num::NonZeroUsize;

use crate::primitive::POINTER_WIDTH;

/// Default recursion ceiling for size resolution.
pub const DEFAULT_MAX_DEPTH: u32 = 100;

/// Tunables for a `TypeManager`.
///
/// Primitive widths are fixed by the host and are not part of this.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Alignment given to aggregates registered without one.
    pub default_alignment: NonZeroUsize,

    /// Size resolution gives up with `SizeError::TooDeep` at this depth.
    pub max_depth: u32,
}

impl RegistryOptions {
    #[must_use]
    pub fn with_default_alignment(mut self, alignment: NonZeroUsize) -> Self {
        self.default_alignment = alignment;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            default_alignment: NonZeroUsize::new(POINTER_WIDTH).unwrap_or(NonZeroUsize::MIN),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
