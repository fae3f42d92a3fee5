//! Computed layout of a type.

use std::num::NonZeroUsize;

/// Size of a type plus the padding its alignment added at the end.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Layout {
    /// Total size in bytes, including trailing padding.
    pub size: usize,

    /// Bytes appended to reach the aggregate's alignment. Always 0 for scalars.
    pub trailing_padding: usize,
}

impl Layout {
    #[inline]
    pub const fn scalar(size: usize) -> Self {
        Self {
            size,
            trailing_padding: 0,
        }
    }

    /// Round `content` bytes up to `alignment`, recording the padding.
    ///
    /// Returns `None` if the rounded size overflows.
    pub fn aligned(content: usize, alignment: NonZeroUsize) -> Option<Self> {
        let rem = content % alignment;
        if rem == 0 {
            return Some(Self::scalar(content));
        }
        let padding = alignment.get() - rem;
        Some(Self {
            size: content.checked_add(padding)?,
            trailing_padding: padding,
        })
    }

    /// Bytes used before trailing padding.
    #[inline]
    pub const fn content_size(&self) -> usize {
        self.size - self.trailing_padding
    }
}
