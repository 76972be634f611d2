/*
* Copyright (c) 2023.
*
* This software is free software;

 You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
*/
//! Sample kind conversion routines
//!
//! This converts an image from one sample kind to another
//!
//! Every kind is associated with an interval of intensities, the conversion
//! maps one interval onto the other linearly so that black stays black
//! and white stays white.
//!
//!|From \ To    | Integer                      | Float            | Bool                 |
//!|-------------|------------------------------|------------------|----------------------|
//!|Integer      | rescale, round half to even  | rescale          | threshold at midpoint|
//!|Float        | rescale, round half to even  | copy             | threshold at midpoint|
//!|Bool         | `false` -> low, `true` -> high| `0.0` / `1.0`    | copy                 |
//!
//! Results are always clipped into the target interval. Inputs are not
//! validated against the source interval, except that non finite floats are
//! rejected when converting to an integer or boolean kind.
//!
//! Floats use `-1.0 - 1.0` when the other kind is signed and `0.0 - 1.0`
//! otherwise, see [`FloatRange`](zune_dtype_core::options::FloatRange).
use zune_dtype_core::log::trace;
use zune_dtype_core::options::ConvertOptions;
use zune_dtype_core::sample_kind::SampleKind;

use crate::errors::ConversionErrors;
use crate::fast_paths::convert_integers;
use crate::image::{Image, Samples};
use crate::traits::{OperationsTrait, Sample};

#[cfg(test)]
mod tests;

/// A linear map between the intervals of two sample kinds
#[derive(Copy, Clone, Debug)]
pub(crate) struct Rescale {
    src_lo:    f64,
    src_span:  f64,
    dst_lo:    f64,
    dst_hi:    f64,
    dst_span:  f64,
    /// Midpoint of the source interval, used when converting to booleans
    threshold: f64
}

impl Rescale {
    pub(crate) fn new(from: SampleKind, to: SampleKind, options: &ConvertOptions) -> Rescale {
        let range = options.get_float_range();

        let (src_lo, src_hi) = from.interval_against(to, range);
        let (dst_lo, dst_hi) = to.interval_against(from, range);

        Rescale {
            src_lo,
            src_span: src_hi - src_lo,
            dst_lo,
            dst_hi,
            dst_span: dst_hi - dst_lo,
            threshold: from.midpoint_against(to, range)
        }
    }

    /// Map `x` from the source interval to the target interval
    #[inline(always)]
    pub(crate) fn map(&self, x: f64) -> f64 {
        let t = (x - self.src_lo) / self.src_span;
        self.dst_lo + t * self.dst_span
    }
}

/// Rescale every sample in `from`, casting it to `D`
fn rescale_slice<S: Sample, D: Sample>(from: &[S], kernel: &Rescale) -> Vec<D> {
    from.iter()
        .map(|x| D::from_rescaled(kernel.map(x.to_f64()), kernel.dst_lo, kernel.dst_hi))
        .collect()
}

/// Map samples at or above `midpoint` to true
fn threshold_slice<S: Sample>(from: &[S], midpoint: f64) -> Vec<bool> {
    from.iter().map(|x| x.to_f64() >= midpoint).collect()
}

fn rescale_to<S: Sample>(from: &[S], to: SampleKind, kernel: &Rescale) -> Samples {
    match to {
        SampleKind::Float => Samples::Float(rescale_slice(from, kernel)),
        SampleKind::UInt8 => Samples::UInt8(rescale_slice(from, kernel)),
        SampleKind::UInt16 => Samples::UInt16(rescale_slice(from, kernel)),
        SampleKind::Int8 => Samples::Int8(rescale_slice(from, kernel)),
        SampleKind::Int16 => Samples::Int16(rescale_slice(from, kernel)),
        SampleKind::Bool => Samples::Bool(threshold_slice(from, kernel.threshold))
    }
}

/// Convert samples using the generic floating point rescale
///
/// This is the reference every fast path must agree with.
pub(crate) fn rescale(from: &Samples, to: SampleKind, options: &ConvertOptions) -> Samples {
    let kernel = Rescale::new(from.kind(), to, options);

    match from {
        Samples::Float(data) => rescale_to(data, to, &kernel),
        Samples::UInt8(data) => rescale_to(data, to, &kernel),
        Samples::UInt16(data) => rescale_to(data, to, &kernel),
        Samples::Int8(data) => rescale_to(data, to, &kernel),
        Samples::Int16(data) => rescale_to(data, to, &kernel),
        Samples::Bool(data) => rescale_to(data, to, &kernel)
    }
}

/// Confirm all floats are finite
fn check_finite(data: &[f32]) -> Result<(), ConversionErrors> {
    match data.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(ConversionErrors::DomainError {
            index,
            value: data[index]
        }),
        None => Ok(())
    }
}

/// Convert an image to another sample kind using default options
///
/// The input is never modified, the result is a new image of the same
/// shape.
///
/// # Errors
/// [`ConversionErrors::DomainError`] if the image holds a `NaN` or infinite
/// float and `to` is an integer or boolean kind.
pub fn convert(image: &Image, to: SampleKind) -> Result<Image, ConversionErrors> {
    convert_with_options(image, to, &ConvertOptions::default())
}

/// Convert an image to another sample kind
///
/// See the [module documentation](self) for how each pair of kinds
/// is mapped.
///
/// # Errors
/// [`ConversionErrors::DomainError`] if the image holds a `NaN` or infinite
/// float and `to` is an integer or boolean kind.
pub fn convert_with_options(
    image: &Image, to: SampleKind, options: &ConvertOptions
) -> Result<Image, ConversionErrors> {
    let from = image.kind();

    if from == to {
        trace!("Image kind already matches requested, copying");
        return Ok(image.clone());
    }
    if let Samples::Float(data) = image.samples() {
        check_finite(data)?;
    }

    let fast = if options.get_use_fast_paths() {
        convert_integers(image.samples(), to)
    } else {
        None
    };

    let samples = match fast {
        Some(samples) => {
            trace!("Using integer fast path from {from} to {to}");
            samples
        }
        None => rescale(image.samples(), to, options)
    };
    trace!("Image kind changed from {from} to {to}");

    Ok(Image::from_parts(samples, image.shape().to_vec()))
}

/// Change the image's sample kind from its initial
/// value to the one specified by this operation.
#[derive(Copy, Clone, Debug)]
pub struct Convert {
    kind:    SampleKind,
    options: ConvertOptions
}

impl Convert {
    /// Create a conversion to `kind` using default options
    pub fn new(kind: SampleKind) -> Convert {
        Convert::with_options(kind, ConvertOptions::default())
    }

    /// Create a conversion to `kind`
    pub fn with_options(kind: SampleKind, options: ConvertOptions) -> Convert {
        Convert { kind, options }
    }

    /// Create a conversion to the kind called `name`
    ///
    /// # Errors
    /// [`ConversionErrors::UnsupportedKind`] if the name is not a known kind,
    /// see [`SampleKind::from_name`]
    ///
    /// # Example
    /// ```
    /// use zune_dtype::convert::Convert;
    /// use zune_dtype_core::sample_kind::SampleKind;
    ///
    /// assert_eq!(Convert::from_name("uint16").unwrap().kind(), SampleKind::UInt16);
    /// assert!(Convert::from_name("complex128").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Convert, ConversionErrors> {
        SampleKind::from_name(name)
            .map(Convert::new)
            .ok_or_else(|| ConversionErrors::UnsupportedKind(name.to_string()))
    }

    /// The kind images are converted to
    pub const fn kind(&self) -> SampleKind {
        self.kind
    }

    /// The options used for conversion
    pub const fn options(&self) -> &ConvertOptions {
        &self.options
    }
}

impl OperationsTrait for Convert {
    fn name(&self) -> &'static str {
        "Convert"
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ConversionErrors> {
        convert_with_options(image, self.kind, &self.options)
    }
}
