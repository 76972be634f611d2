/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a dense array of image samples
//!
//! An image is represented as
//!
//! - one flat buffer of samples
//!     - all of the same sample kind
//!         - laid out in row major order
//!             - with a shape describing the length of each axis
//!
//! The image does not know what the axes mean, a `[height, width, channels]`
//! shape is as valid as a `[depth, height, width]` one.
use std::borrow::Cow;

use zune_dtype_core::sample_kind::SampleKind;

use crate::errors::ConversionErrors;
use crate::traits::Sample;

/// Storage for image samples
///
/// Each variant stores the native type of the matching [`SampleKind`],
/// so the kind of an image can never disagree with its storage.
#[derive(Clone, Debug, PartialEq)]
pub enum Samples {
    /// Floating point samples
    Float(Vec<f32>),
    /// Unsigned 8 bit samples
    UInt8(Vec<u8>),
    /// Unsigned 16 bit samples
    UInt16(Vec<u16>),
    /// Signed 8 bit samples
    Int8(Vec<i8>),
    /// Signed 16 bit samples
    Int16(Vec<i16>),
    /// Boolean samples
    Bool(Vec<bool>)
}

impl Samples {
    /// Return the kind of samples stored
    pub const fn kind(&self) -> SampleKind {
        match self {
            Samples::Float(_) => SampleKind::Float,
            Samples::UInt8(_) => SampleKind::UInt8,
            Samples::UInt16(_) => SampleKind::UInt16,
            Samples::Int8(_) => SampleKind::Int8,
            Samples::Int16(_) => SampleKind::Int16,
            Samples::Bool(_) => SampleKind::Bool
        }
    }

    /// Return the number of samples stored
    pub fn len(&self) -> usize {
        match self {
            Samples::Float(data) => data.len(),
            Samples::UInt8(data) => data.len(),
            Samples::UInt16(data) => data.len(),
            Samples::Int8(data) => data.len(),
            Samples::Int16(data) => data.len(),
            Samples::Bool(data) => data.len()
        }
    }

    /// Return true if no samples are stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Number of samples described by `shape`
fn shape_length(shape: &[usize]) -> Result<usize, ConversionErrors> {
    if let Some(axis) = shape.iter().position(|x| *x == 0) {
        return Err(ConversionErrors::ZeroDimension(axis));
    }
    shape
        .iter()
        .try_fold(1_usize, |acc, x| acc.checked_mul(*x))
        .ok_or_else(|| ConversionErrors::ShapeOverflow(shape.to_vec()))
}

/// Represents a single image
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    samples: Samples,
    shape:   Vec<usize>
}

impl Image {
    /// Create a new image from samples and a shape
    ///
    /// # Arguments
    /// - `samples`: The image samples, in row major order
    /// - `shape`: Length of each axis, the product must equal the number
    ///   of samples. An empty shape describes a single sample.
    ///
    /// # Errors
    /// - [`ConversionErrors::ZeroDimension`] if an axis has length zero
    /// - [`ConversionErrors::ShapeOverflow`] if the shape describes more
    ///   samples than fit in a `usize`
    /// - [`ConversionErrors::ShapeMismatch`] if the sample count does not
    ///   match the shape
    pub fn new(samples: Samples, shape: &[usize]) -> Result<Image, ConversionErrors> {
        let expected = shape_length(shape)?;

        if expected != samples.len() {
            return Err(ConversionErrors::ShapeMismatch {
                expected,
                found: samples.len()
            });
        }
        Ok(Image {
            samples,
            shape: shape.to_vec()
        })
    }

    /// Create an image from a vector of native samples
    ///
    /// ```
    /// use zune_dtype::image::Image;
    /// use zune_dtype_core::sample_kind::SampleKind;
    ///
    /// let image = Image::from_vec(vec![0_i16; 6], &[2, 3]).unwrap();
    /// assert_eq!(image.kind(), SampleKind::Int16);
    /// ```
    pub fn from_vec<T: Sample>(data: Vec<T>, shape: &[usize]) -> Result<Image, ConversionErrors> {
        Image::new(T::wrap(data), shape)
    }

    /// Create an image where every sample is `value`
    ///
    /// # Errors
    /// - [`ConversionErrors::ZeroDimension`] if an axis has length zero
    /// - [`ConversionErrors::ShapeOverflow`] if the shape describes more
    ///   samples than fit in a `usize`
    pub fn fill<T: Sample>(value: T, shape: &[usize]) -> Result<Image, ConversionErrors> {
        let length = shape_length(shape)?;

        Image::from_vec(vec![value; length], shape)
    }

    /// Build an image from storage known to match `shape`
    pub(crate) fn from_parts(samples: Samples, shape: Vec<usize>) -> Image {
        debug_assert_eq!(samples.len(), shape.iter().product::<usize>());
        Image { samples, shape }
    }

    /// Get the kind of samples this image stores
    pub const fn kind(&self) -> SampleKind {
        self.samples.kind()
    }

    /// Get the length of each axis
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Return the number of samples in the image
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Return true if the image has no samples
    ///
    /// Images cannot be built with a zero sized axis, so this is
    /// always false, it is kept for parity with [`len`](Self::len)
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Return a reference to the underlying sample storage
    pub const fn samples(&self) -> &Samples {
        &self.samples
    }

    /// Consume the image returning its sample storage
    pub fn into_samples(self) -> Samples {
        self.samples
    }

    /// Borrow the samples as their native type
    ///
    /// Returns `None` if `T` is not the type the samples are stored in
    pub fn as_slice<T: Sample>(&self) -> Option<&[T]> {
        T::borrow(&self.samples)
    }

    /// Borrow the samples as their native type
    ///
    /// # Errors
    /// [`ConversionErrors::WrongSampleType`] if `T` is not the type the
    /// samples are stored in
    pub fn try_as_slice<T: Sample>(&self) -> Result<&[T], ConversionErrors> {
        self.as_slice().ok_or(ConversionErrors::WrongSampleType {
            expected: T::KIND,
            found:    self.kind()
        })
    }

    /// Consume the image returning samples as their native type
    ///
    /// # Errors
    /// [`ConversionErrors::WrongSampleType`] if `T` is not the type the
    /// samples are stored in
    pub fn into_vec<T: Sample>(self) -> Result<Vec<T>, ConversionErrors> {
        T::take(self.samples).map_err(|samples| ConversionErrors::WrongSampleType {
            expected: T::KIND,
            found:    samples.kind()
        })
    }

    /// View samples as raw bytes in native endian
    ///
    /// Numeric kinds are borrowed, booleans are copied out as a single
    /// byte of `0` or `1` each.
    pub fn as_native_bytes(&self) -> Cow<'_, [u8]> {
        match &self.samples {
            Samples::Float(data) => Cow::Borrowed(bytemuck::cast_slice(data.as_slice())),
            Samples::UInt8(data) => Cow::Borrowed(data.as_slice()),
            Samples::UInt16(data) => Cow::Borrowed(bytemuck::cast_slice(data.as_slice())),
            Samples::Int8(data) => Cow::Borrowed(bytemuck::cast_slice(data.as_slice())),
            Samples::Int16(data) => Cow::Borrowed(bytemuck::cast_slice(data.as_slice())),
            Samples::Bool(data) => Cow::Owned(data.iter().map(|x| u8::from(*x)).collect())
        }
    }

    /// Return every sample widened to `f64`, in row major order
    ///
    /// Booleans become `0.0` and `1.0`
    pub fn to_f64_vec(&self) -> Vec<f64> {
        fn widen<T: Sample>(data: &[T]) -> Vec<f64> {
            data.iter().map(|x| x.to_f64()).collect()
        }
        match &self.samples {
            Samples::Float(data) => widen(data),
            Samples::UInt8(data) => widen(data),
            Samples::UInt16(data) => widen(data),
            Samples::Int8(data) => widen(data),
            Samples::Int16(data) => widen(data),
            Samples::Bool(data) => widen(data)
        }
    }
}
