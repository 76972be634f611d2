/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;
use zune_dtype::image::Image;
use zune_dtype::zune_dtype_core::sample_kind::SampleKind;

/// Width and height of benchmark images
pub const BENCH_DIMENSIONS: usize = 1024;

/// Create a square image of random samples of `kind`
///
/// The generator is seeded, so every run sees the same image.
pub fn random_image(kind: SampleKind) -> Image {
    let mut rng = nanorand::WyRand::new_seed(0x2023);
    let length = BENCH_DIMENSIONS * BENCH_DIMENSIONS;
    let shape = [BENCH_DIMENSIONS, BENCH_DIMENSIONS];

    let image = match kind {
        SampleKind::Float => {
            Image::from_vec((0..length).map(|_| rng.generate::<f32>()).collect(), &shape)
        }
        SampleKind::UInt8 => {
            Image::from_vec((0..length).map(|_| rng.generate::<u8>()).collect(), &shape)
        }
        SampleKind::UInt16 => {
            Image::from_vec((0..length).map(|_| rng.generate::<u16>()).collect(), &shape)
        }
        SampleKind::Int8 => {
            Image::from_vec((0..length).map(|_| rng.generate::<i8>()).collect(), &shape)
        }
        SampleKind::Int16 => {
            Image::from_vec((0..length).map(|_| rng.generate::<i16>()).collect(), &shape)
        }
        SampleKind::Bool => {
            Image::from_vec((0..length).map(|_| rng.generate::<bool>()).collect(), &shape)
        }
    };
    image.unwrap()
}
