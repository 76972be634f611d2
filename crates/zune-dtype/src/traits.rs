/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits shared by the conversion routines
use zune_dtype_core::log::trace;
use zune_dtype_core::sample_kind::SampleKind;

use crate::errors::ConversionErrors;
use crate::image::{Image, Samples};

/// A native type that can hold image samples
///
/// This links the Rust primitive to its [`SampleKind`] and to
/// the [`Samples`] variant storing it.
pub trait Sample: Copy + PartialOrd + Send + Sync + 'static {
    /// The kind this type stores
    const KIND: SampleKind;

    /// Widen the sample to a float without loss
    fn to_f64(self) -> f64;

    /// Create a sample from a value that was rescaled into
    /// `lo..=hi`
    ///
    /// Integers round half to even before clipping, floats are
    /// only clipped and booleans are `true` from the midpoint up.
    fn from_rescaled(value: f64, lo: f64, hi: f64) -> Self;

    /// Wrap a vector of this type into sample storage
    fn wrap(samples: Vec<Self>) -> Samples;

    /// Borrow the storage as this type, `None` if it stores
    /// another kind
    fn borrow(samples: &Samples) -> Option<&[Self]>;

    /// Take the storage as this type, returning the storage
    /// back if it stores another kind
    fn take(samples: Samples) -> Result<Vec<Self>, Samples>;
}

macro_rules! sample_for_int {
    ($int:tt, $kind:tt) => {
        impl Sample for $int {
            const KIND: SampleKind = SampleKind::$kind;

            #[inline(always)]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }

            #[inline(always)]
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            fn from_rescaled(value: f64, lo: f64, hi: f64) -> $int {
                value.round_ties_even().clamp(lo, hi) as $int
            }

            fn wrap(samples: Vec<$int>) -> Samples {
                Samples::$kind(samples)
            }

            fn borrow(samples: &Samples) -> Option<&[$int]> {
                match samples {
                    Samples::$kind(data) => Some(data),
                    _ => None
                }
            }

            fn take(samples: Samples) -> Result<Vec<$int>, Samples> {
                match samples {
                    Samples::$kind(data) => Ok(data),
                    other => Err(other)
                }
            }
        }
    };
}

sample_for_int!(u8, UInt8);
sample_for_int!(u16, UInt16);
sample_for_int!(i8, Int8);
sample_for_int!(i16, Int16);

impl Sample for f32 {
    const KIND: SampleKind = SampleKind::Float;

    #[inline(always)]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline(always)]
    #[allow(clippy::cast_possible_truncation)]
    fn from_rescaled(value: f64, lo: f64, hi: f64) -> f32 {
        value.clamp(lo, hi) as f32
    }

    fn wrap(samples: Vec<f32>) -> Samples {
        Samples::Float(samples)
    }

    fn borrow(samples: &Samples) -> Option<&[f32]> {
        match samples {
            Samples::Float(data) => Some(data),
            _ => None
        }
    }

    fn take(samples: Samples) -> Result<Vec<f32>, Samples> {
        match samples {
            Samples::Float(data) => Ok(data),
            other => Err(other)
        }
    }
}

impl Sample for bool {
    const KIND: SampleKind = SampleKind::Bool;

    #[inline(always)]
    fn to_f64(self) -> f64 {
        if self {
            1.0
        } else {
            0.0
        }
    }

    #[inline(always)]
    fn from_rescaled(value: f64, lo: f64, hi: f64) -> bool {
        value >= (lo + hi) * 0.5
    }

    fn wrap(samples: Vec<bool>) -> Samples {
        Samples::Bool(samples)
    }

    fn borrow(samples: &Samples) -> Option<&[bool]> {
        match samples {
            Samples::Bool(data) => Some(data),
            _ => None
        }
    }

    fn take(samples: Samples) -> Result<Vec<bool>, Samples> {
        match samples {
            Samples::Bool(data) => Ok(data),
            other => Err(other)
        }
    }
}

/// An operation that produces a new image from an existing one
///
/// Operations never modify their input, [`execute_impl`](OperationsTrait::execute_impl)
/// receives a shared reference and returns a freshly allocated image.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Run the operation on `image`, returning the result
    ///
    /// This is called by [`clone_and_execute`](OperationsTrait::clone_and_execute)
    /// and [`execute`](OperationsTrait::execute) after the image kind is confirmed
    /// to be supported, prefer calling those.
    fn execute_impl(&self, image: &Image) -> Result<Image, ConversionErrors>;

    /// Sample kinds this operation accepts as input
    fn supported_kinds(&self) -> &'static [SampleKind] {
        &SampleKind::ALL
    }

    /// Run the operation, returning a new image and leaving
    /// `image` untouched
    fn clone_and_execute(&self, image: &Image) -> Result<Image, ConversionErrors> {
        let kind = image.kind();

        if !self.supported_kinds().contains(&kind) {
            return Err(ConversionErrors::UnsupportedKind(format!(
                "operation {} does not support {kind} images",
                self.name()
            )));
        }
        trace!("Running {} on a {kind} image", self.name());

        self.execute_impl(image)
    }

    /// Run the operation, replacing `image` with the result
    ///
    /// On error the image is left as it was.
    fn execute(&self, image: &mut Image) -> Result<(), ConversionErrors> {
        *image = self.clone_and_execute(image)?;
        Ok(())
    }
}
