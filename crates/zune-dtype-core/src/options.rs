/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Global conversion options

/// How the floating point interval is chosen during a conversion
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum FloatRange {
    /// Floats span `-1.0 - 1.0` when the other side of the conversion
    /// is a signed integer kind, and `0.0 - 1.0` otherwise
    #[default]
    MatchSigned,
    /// Floats always span `0.0 - 1.0`
    Unit
}

/// Conversion options
///
/// Options are plain values, so they can be shared freely between
/// threads running conversions.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ConvertOptions {
    /// Interval used for floating point samples
    ///
    /// - Default value: `FloatRange::MatchSigned`
    float_range:    FloatRange,
    /// Whether integer to integer conversions may use
    /// specialized integer kernels.
    ///
    /// The kernels produce the same output as the generic
    /// floating point rescale, they are just faster.
    ///
    /// - Default value: true
    use_fast_paths: bool
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            float_range:    FloatRange::MatchSigned,
            use_fast_paths: true
        }
    }
}

impl ConvertOptions {
    /// Options where floats always span `0.0 - 1.0`
    pub fn new_unit_float() -> ConvertOptions {
        ConvertOptions::default().set_float_range(FloatRange::Unit)
    }

    /// Get the interval policy used for floating point samples
    pub const fn get_float_range(&self) -> FloatRange {
        self.float_range
    }

    /// Set the interval policy used for floating point samples
    ///
    /// # Arguments
    ///
    /// * `range`: The new policy
    ///
    /// returns: ConvertOptions
    pub fn set_float_range(mut self, range: FloatRange) -> Self {
        self.float_range = range;
        self
    }

    /// Return true if integer fast paths may be used
    pub const fn get_use_fast_paths(&self) -> bool {
        self.use_fast_paths
    }

    /// Set whether integer to integer conversions may use
    /// specialized integer kernels
    ///
    /// Mainly useful for debugging and for comparing against the generic path.
    pub fn set_use_fast_paths(mut self, yes: bool) -> Self {
        self.use_fast_paths = yes;
        self
    }
}
