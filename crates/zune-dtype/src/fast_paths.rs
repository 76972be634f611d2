/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Integer to integer conversions without going through floats
//!
//! Between 8 and 16 bit kinds the generic rescale reduces to exact
//! integer arithmetic:
//!
//! - widening multiplies by `257` (`65535 / 255`),
//! - narrowing divides by `257` rounding to nearest, an exact half can't
//!   occur since `257` is odd,
//! - flipping signedness at the same width toggles the top bit, which is the
//!   same as adding or subtracting half the range.
//!
//! Every kernel here must produce exactly what [`rescale`](crate::convert::rescale)
//! produces for every input.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]

use zune_dtype_core::sample_kind::SampleKind;

use crate::image::Samples;

/// Map every sample through `function`
fn map<S: Copy, D>(from: &[S], function: impl Fn(S) -> D) -> Vec<D> {
    from.iter().map(|x| function(*x)).collect()
}

/// `0..=65535` to `0..=255`
#[inline(always)]
fn narrow(x: u32) -> u32 {
    (x + 128) / 257
}

/// Convert between integer kinds using integer arithmetic
///
/// Returns `None` if there is no integer kernel for this pair,
/// i.e when either side is a float or boolean or both kinds match.
pub(crate) fn convert_integers(from: &Samples, to: SampleKind) -> Option<Samples> {
    let converted = match (from, to) {
        (Samples::UInt8(data), SampleKind::UInt16) => {
            Samples::UInt16(map(data, |x| u16::from(x) * 257))
        }
        (Samples::UInt8(data), SampleKind::Int8) => Samples::Int8(map(data, |x| (x ^ 0x80) as i8)),
        (Samples::UInt8(data), SampleKind::Int16) => {
            Samples::Int16(map(data, |x| (i32::from(x) * 257 - 32768) as i16))
        }

        (Samples::UInt16(data), SampleKind::UInt8) => {
            Samples::UInt8(map(data, |x| narrow(u32::from(x)) as u8))
        }
        (Samples::UInt16(data), SampleKind::Int8) => {
            Samples::Int8(map(data, |x| (narrow(u32::from(x)) as i32 - 128) as i8))
        }
        (Samples::UInt16(data), SampleKind::Int16) => {
            Samples::Int16(map(data, |x| (x ^ 0x8000) as i16))
        }

        (Samples::Int8(data), SampleKind::UInt8) => Samples::UInt8(map(data, |x| (x as u8) ^ 0x80)),
        (Samples::Int8(data), SampleKind::UInt16) => {
            Samples::UInt16(map(data, |x| ((i32::from(x) + 128) * 257) as u16))
        }
        (Samples::Int8(data), SampleKind::Int16) => {
            Samples::Int16(map(data, |x| (i32::from(x) * 257 + 128) as i16))
        }

        (Samples::Int16(data), SampleKind::UInt8) => {
            Samples::UInt8(map(data, |x| narrow((i32::from(x) + 32768) as u32) as u8))
        }
        (Samples::Int16(data), SampleKind::UInt16) => {
            Samples::UInt16(map(data, |x| (x as u16) ^ 0x8000))
        }
        (Samples::Int16(data), SampleKind::Int8) => Samples::Int8(map(data, |x| {
            (narrow((i32::from(x) + 32768) as u32) as i32 - 128) as i8
        })),

        _ => return None
    };
    Some(converted)
}
