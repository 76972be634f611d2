/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Sample kinds, their intensity ranges and storage widths
//!
//! Every kind maps to a native representation and a canonical interval,
//! the range of values that is considered to span black to white.
//!
//!|SampleKind          |native type |range            |
//!|--------------------|------------|-----------------|
//!|SampleKind::Float   | [`f32`]    |0.0    - 1.0     |
//!|SampleKind::UInt8   | [`u8`]     |0      - 255     |
//!|SampleKind::UInt16  | [`u16`]    |0      - 65535   |
//!|SampleKind::Int8    | [`i8`]     |-128   - 127     |
//!|SampleKind::Int16   | [`i16`]    |-32768 - 32767   |
//!|SampleKind::Bool    | [`bool`]   |false  - true    |
//!
//! Floats paired with a signed integer kind use `-1.0 - 1.0` instead,
//! see [`SampleKind::interval_against`].
use core::fmt::{Display, Formatter};

use crate::options::FloatRange;

/// The representation of a single image sample
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SampleKind {
    /// Floating point samples, stored as [`f32`]
    Float,
    /// Unsigned eight bit samples, using the whole range from 0-255
    UInt8,
    /// Unsigned sixteen bit samples, using the whole range from 0-65535
    UInt16,
    /// Signed eight bit samples, using the whole range from -128 to 127
    Int8,
    /// Signed sixteen bit samples, using the whole range from -32768 to 32767
    Int16,
    /// Boolean samples
    ///
    /// `false` is the bottom of the range and `true` the top,
    /// each sample takes a whole byte of storage.
    Bool
}

impl SampleKind {
    /// Every supported sample kind
    pub const ALL: [SampleKind; 6] = [
        SampleKind::Float,
        SampleKind::UInt8,
        SampleKind::UInt16,
        SampleKind::Int8,
        SampleKind::Int16,
        SampleKind::Bool
    ];

    /// Get the canonical interval `(lo, hi)` of this kind
    ///
    /// Values are expressed in the kind's own numeric domain,
    /// e.g `(0.0, 255.0)` for [`SampleKind::UInt8`]
    ///
    /// # Example
    /// ```
    /// use zune_dtype_core::sample_kind::SampleKind;
    /// assert_eq!(SampleKind::Int16.canonical_interval(), (-32768.0, 32767.0));
    /// ```
    #[rustfmt::skip]
    pub const fn canonical_interval(self) -> (f64, f64) {
        match self {
            Self::Float  => (0.0, 1.0),
            Self::UInt8  => (0.0, 255.0),
            Self::UInt16 => (0.0, 65535.0),
            Self::Int8   => (-128.0, 127.0),
            Self::Int16  => (-32768.0, 32767.0),
            Self::Bool   => (0.0, 1.0),
        }
    }

    /// The interval used for this kind when converting to or from `other`
    ///
    /// This is the canonical interval, except for [`SampleKind::Float`]
    /// paired with a signed integer kind under [`FloatRange::MatchSigned`],
    /// where floats span `-1.0 - 1.0`.
    pub const fn interval_against(self, other: SampleKind, range: FloatRange) -> (f64, f64) {
        match (self, range) {
            (Self::Float, FloatRange::MatchSigned) if other.is_signed() => (-1.0, 1.0),
            _ => self.canonical_interval()
        }
    }

    /// Number of bits used to store a single sample of this kind
    #[rustfmt::skip]
    #[allow(clippy::zero_prefixed_literal)]
    pub const fn storage_width_bits(self) -> u32 {
        match self {
            Self::Float  => 32,
            Self::UInt8  => 08,
            Self::UInt16 => 16,
            Self::Int8   => 08,
            Self::Int16  => 16,
            Self::Bool   => 08,
        }
    }

    /// Get the number of bytes needed to store a sample of this kind
    ///
    /// ```
    /// use zune_dtype_core::sample_kind::SampleKind;
    /// assert_eq!(SampleKind::UInt16.size_of(), 2);
    /// // booleans take a full byte
    /// assert_eq!(SampleKind::Bool.size_of(), 1);
    /// ```
    pub const fn size_of(self) -> usize {
        (self.storage_width_bits() / 8) as usize
    }

    /// Return true for the fixed width integer kinds
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::UInt8 | Self::UInt16 | Self::Int8 | Self::Int16)
    }

    /// Return true for the signed integer kinds
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::Int8 | Self::Int16)
    }

    /// The midpoint of the interval used when converting to or from `other`
    ///
    /// Samples at or above it become `true` when converted to
    /// [`SampleKind::Bool`].
    pub fn midpoint_against(self, other: SampleKind, range: FloatRange) -> f64 {
        let (lo, hi) = self.interval_against(other, range);
        (lo + hi) * 0.5
    }

    /// The canonical name of this kind
    pub const fn name(self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::UInt8 => "uint8",
            Self::UInt16 => "uint16",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Bool => "bool"
        }
    }

    /// Resolve a kind from its name
    ///
    /// Names are case insensitive, and the usual aliases
    /// (`f32`, `u8`, `ubyte`, `uint`, `int` ...) are understood.
    ///
    /// Returns `None` for names that do not map to a supported kind.
    ///
    /// ```
    /// use zune_dtype_core::sample_kind::SampleKind;
    /// assert_eq!(SampleKind::from_name("ubyte"), Some(SampleKind::UInt8));
    /// assert_eq!(SampleKind::from_name("float16"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<SampleKind> {
        const ALIASES: [(&str, SampleKind); 16] = [
            ("float", SampleKind::Float),
            ("float32", SampleKind::Float),
            ("f32", SampleKind::Float),
            ("uint8", SampleKind::UInt8),
            ("u8", SampleKind::UInt8),
            ("ubyte", SampleKind::UInt8),
            ("uint16", SampleKind::UInt16),
            ("u16", SampleKind::UInt16),
            ("uint", SampleKind::UInt16),
            ("int8", SampleKind::Int8),
            ("i8", SampleKind::Int8),
            ("int16", SampleKind::Int16),
            ("i16", SampleKind::Int16),
            ("int", SampleKind::Int16),
            ("bool", SampleKind::Bool),
            ("boolean", SampleKind::Bool)
        ];
        let name = name.trim();

        ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
            .map(|(_, kind)| *kind)
    }
}

impl Display for SampleKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
