/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during sample conversion

use std::fmt::{Debug, Display, Formatter};

use zune_dtype_core::sample_kind::SampleKind;

/// Errors that may occur when building images or
/// converting them between sample kinds
pub enum ConversionErrors {
    /// The requested sample kind is not supported, either because
    /// the name could not be resolved or the operation does not
    /// accept that kind
    UnsupportedKind(String),
    /// A non finite float was found where the target kind
    /// needs a finite value.
    ///
    /// Contains the flat index of the sample and the offending value
    DomainError { index: usize, value: f32 },
    /// The number of samples does not match the product of the shape
    ShapeMismatch { expected: usize, found: usize },
    /// The shape has a zero sized axis, contains the axis index
    ZeroDimension(usize),
    /// The product of the shape does not fit in a `usize`,
    /// contains the shape
    ShapeOverflow(Vec<usize>),
    /// Samples were requested as a different native type than they are stored in
    WrongSampleType {
        expected: SampleKind,
        found:    SampleKind
    }
}

impl Debug for ConversionErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionErrors::UnsupportedKind(kind) => {
                writeln!(f, "Unsupported sample kind {kind:?}")
            }
            ConversionErrors::DomainError { index, value } => {
                writeln!(
                    f,
                    "Non finite sample {value} at index {index} cannot be converted to an integer or boolean kind"
                )
            }
            ConversionErrors::ShapeMismatch { expected, found } => {
                writeln!(
                    f,
                    "Shape expects {expected} samples but {found} samples were provided"
                )
            }
            ConversionErrors::ZeroDimension(axis) => {
                writeln!(f, "Axis {axis} has a length of zero")
            }
            ConversionErrors::ShapeOverflow(shape) => {
                writeln!(f, "Shape {shape:?} describes more samples than can be addressed")
            }
            ConversionErrors::WrongSampleType { expected, found } => {
                writeln!(
                    f,
                    "Samples are stored as {found} but were requested as {expected}"
                )
            }
        }
    }
}

impl Display for ConversionErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl std::error::Error for ConversionErrors {}

