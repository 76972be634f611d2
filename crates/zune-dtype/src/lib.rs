/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Range preserving image sample conversions
//!
//! This crate converts image samples between floating point and fixed width
//! integer kinds, keeping the *intensity* of each sample rather than its bit
//! pattern. A `u8` sample of `255` becomes `1.0` as a float and `65535`
//! as an `u16`, a float of `0.5` becomes `128` as an `u8`.
//!
//! # Example
//! - Convert an 8 bit image to floats and back
//! ```
//! use zune_dtype::convert::convert;
//! use zune_dtype::image::Image;
//! use zune_dtype_core::sample_kind::SampleKind;
//!
//! let image = Image::from_vec(vec![0_u8, 128, 255], &[3]).unwrap();
//! let floats = convert(&image, SampleKind::Float).unwrap();
//! assert_eq!(floats.as_slice::<f32>().unwrap()[2], 1.0);
//!
//! let back = convert(&floats, SampleKind::UInt8).unwrap();
//! assert_eq!(back, image);
//! ```
//!
//! # Features
//! - `log`: Log conversions via the `log` crate
//! - `serde-support`: Serialize image descriptions and sample kinds
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::wildcard_imports
)]

pub use zune_dtype_core;

pub mod convert;
pub mod errors;
mod fast_paths;
pub mod image;
mod serde;
pub mod traits;
pub mod utils;
