//! Hardware-native primitive kinds.
//!
//! Every primitive has a fixed natural width taken from the host's C type
//! sizes at compile time. The widths are never configurable at runtime.
//!
//! # Spellings
//!
//! Each kind is reachable through one or more textual spellings (`int`,
//! `int32_t`, `long`, ...). The full table lives in [`SPELLINGS`] and is
//! loaded into every `TypeManager` at construction.

use std::ffi::{c_char, c_int, c_longlong, c_short, c_uchar, c_uint, c_ulonglong, c_ushort};
use std::fmt;
use std::mem::size_of;

/// Hardware-native scalar category.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum PrimitiveKind {
    /// Signed 8-bit integer.
    Int8 = 0,
    /// Unsigned 8-bit integer.
    Uint8 = 1,
    /// Signed 16-bit integer.
    Int16 = 2,
    /// Unsigned 16-bit integer.
    Uint16 = 3,
    /// Signed 32-bit integer.
    Int32 = 4,
    /// Unsigned 32-bit integer.
    Uint32 = 5,
    /// Signed 64-bit integer.
    Int64 = 6,
    /// Unsigned 64-bit integer.
    Uint64 = 7,
    /// Signed integer of platform width.
    Dsint = 8,
    /// Unsigned integer of platform width.
    Duint = 9,
    /// Pointer-width value.
    Pointer = 10,
    /// Single-precision float.
    Float = 11,
    /// Double-precision float.
    Double = 12,
}

impl PrimitiveKind {
    /// All kinds in discriminant order.
    pub const ALL: [Self; 13] = [
        Self::Int8,
        Self::Uint8,
        Self::Int16,
        Self::Uint16,
        Self::Int32,
        Self::Uint32,
        Self::Int64,
        Self::Uint64,
        Self::Dsint,
        Self::Duint,
        Self::Pointer,
        Self::Float,
        Self::Double,
    ];

    /// Natural size in bytes on the host.
    #[inline]
    pub const fn byte_width(self) -> usize {
        match self {
            Self::Int8 => size_of::<c_char>(),
            Self::Uint8 => size_of::<c_uchar>(),
            Self::Int16 => size_of::<c_short>(),
            Self::Uint16 => size_of::<c_ushort>(),
            Self::Int32 => size_of::<c_int>(),
            Self::Uint32 => size_of::<c_uint>(),
            Self::Int64 => size_of::<c_longlong>(),
            Self::Uint64 => size_of::<c_ulonglong>(),
            Self::Dsint | Self::Duint | Self::Pointer => POINTER_WIDTH,
            Self::Float => size_of::<f32>(),
            Self::Double => size_of::<f64>(),
        }
    }

    /// Natural size in bits on the host.
    #[inline]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "native scalar widths are at most 16 bytes"
    )]
    pub const fn bit_width(self) -> u32 {
        (self.byte_width() * 8) as u32
    }

    /// Canonical spelling, the first entry for this kind in [`SPELLINGS`].
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int8 => "int8_t",
            Self::Uint8 => "uint8_t",
            Self::Int16 => "int16_t",
            Self::Uint16 => "uint16_t",
            Self::Int32 => "int32_t",
            Self::Uint32 => "uint32_t",
            Self::Int64 => "int64_t",
            Self::Uint64 => "uint64_t",
            Self::Dsint => "dsint",
            Self::Duint => "duint",
            Self::Pointer => "ptr",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    /// Every spelling bound to this kind.
    pub fn spellings(self) -> impl Iterator<Item = &'static str> {
        SPELLINGS
            .iter()
            .filter(move |(_, kind)| *kind == self)
            .map(|(name, _)| *name)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Native pointer width in bytes; also the default aggregate alignment.
pub const POINTER_WIDTH: usize = size_of::<*const ()>();

/// Built-in spellings, loaded into every registry.
pub const SPELLINGS: &[(&str, PrimitiveKind)] = &[
    ("int8_t", PrimitiveKind::Int8),
    ("int8", PrimitiveKind::Int8),
    ("char", PrimitiveKind::Int8),
    ("byte", PrimitiveKind::Int8),
    ("bool", PrimitiveKind::Int8),
    ("signed char", PrimitiveKind::Int8),
    ("uint8_t", PrimitiveKind::Uint8),
    ("uint8", PrimitiveKind::Uint8),
    ("uchar", PrimitiveKind::Uint8),
    ("unsigned char", PrimitiveKind::Uint8),
    ("ubyte", PrimitiveKind::Uint8),
    ("int16_t", PrimitiveKind::Int16),
    ("int16", PrimitiveKind::Int16),
    ("wchar_t", PrimitiveKind::Int16),
    ("char16_t", PrimitiveKind::Int16),
    ("short", PrimitiveKind::Int16),
    ("uint16_t", PrimitiveKind::Uint16),
    ("uint16", PrimitiveKind::Uint16),
    ("ushort", PrimitiveKind::Uint16),
    ("unsigned short", PrimitiveKind::Uint16),
    ("int32_t", PrimitiveKind::Int32),
    ("int32", PrimitiveKind::Int32),
    ("int", PrimitiveKind::Int32),
    ("long", PrimitiveKind::Int32),
    ("uint32_t", PrimitiveKind::Uint32),
    ("uint32", PrimitiveKind::Uint32),
    ("unsigned int", PrimitiveKind::Uint32),
    ("unsigned long", PrimitiveKind::Uint32),
    ("int64_t", PrimitiveKind::Int64),
    ("int64", PrimitiveKind::Int64),
    ("long long", PrimitiveKind::Int64),
    ("uint64_t", PrimitiveKind::Uint64),
    ("uint64", PrimitiveKind::Uint64),
    ("unsigned long long", PrimitiveKind::Uint64),
    ("dsint", PrimitiveKind::Dsint),
    ("duint", PrimitiveKind::Duint),
    ("size_t", PrimitiveKind::Duint),
    ("ptr", PrimitiveKind::Pointer),
    ("void*", PrimitiveKind::Pointer),
    ("float", PrimitiveKind::Float),
    ("double", PrimitiveKind::Double),
];
