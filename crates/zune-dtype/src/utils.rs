/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Shorthands for converting to a specific kind
//!
//! - [`img_as_float`]: floats in `0.0 - 1.0`, or `-1.0 - 1.0` for signed images
//! - [`img_as_ubyte`]: unsigned bytes in `0 - 255`
//! - [`img_as_uint`]: unsigned shorts in `0 - 65535`
//! - [`img_as_int`]: signed shorts in `-32768 - 32767`
//! - [`img_as_bool`]: booleans, thresholded at the middle of the input range
//!
//! All of them use the default [`ConvertOptions`](zune_dtype_core::options::ConvertOptions),
//! use [`convert_with_options`](crate::convert::convert_with_options) to change them.
use zune_dtype_core::sample_kind::SampleKind;

use crate::convert::convert;
use crate::errors::ConversionErrors;
use crate::image::Image;

/// Convert an image to floating point samples
///
/// # Errors
/// None in practice, floats accept every input kind. The result is kept for
/// parity with the other conversions.
pub fn img_as_float(image: &Image) -> Result<Image, ConversionErrors> {
    convert(image, SampleKind::Float)
}

/// Convert an image to unsigned 8 bit samples
///
/// # Errors
/// [`ConversionErrors::DomainError`] for non finite float inputs
pub fn img_as_ubyte(image: &Image) -> Result<Image, ConversionErrors> {
    convert(image, SampleKind::UInt8)
}

/// Convert an image to unsigned 16 bit samples
///
/// # Errors
/// [`ConversionErrors::DomainError`] for non finite float inputs
pub fn img_as_uint(image: &Image) -> Result<Image, ConversionErrors> {
    convert(image, SampleKind::UInt16)
}

/// Convert an image to signed 16 bit samples
///
/// # Errors
/// [`ConversionErrors::DomainError`] for non finite float inputs
pub fn img_as_int(image: &Image) -> Result<Image, ConversionErrors> {
    convert(image, SampleKind::Int16)
}

/// Convert an image to boolean samples
///
/// # Errors
/// [`ConversionErrors::DomainError`] for non finite float inputs
pub fn img_as_bool(image: &Image) -> Result<Image, ConversionErrors> {
    convert(image, SampleKind::Bool)
}
