/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;
use zune_dtype::convert::{convert, convert_with_options};
use zune_dtype::image::Image;
use zune_dtype::zune_dtype_core::options::ConvertOptions;
use zune_dtype::zune_dtype_core::sample_kind::SampleKind;

const INTEGER_KINDS: [SampleKind; 4] = [
    SampleKind::UInt8,
    SampleKind::UInt16,
    SampleKind::Int8,
    SampleKind::Int16
];

/// Every representable value of an integer kind, in increasing order
fn every_value(kind: SampleKind) -> Image {
    let image = match kind {
        SampleKind::UInt8 => Image::from_vec((u8::MIN..=u8::MAX).collect(), &[256]),
        SampleKind::UInt16 => Image::from_vec((u16::MIN..=u16::MAX).collect(), &[256, 256]),
        SampleKind::Int8 => Image::from_vec((i8::MIN..=i8::MAX).collect(), &[16, 16]),
        SampleKind::Int16 => Image::from_vec((i16::MIN..=i16::MAX).collect(), &[65536]),
        _ => panic!("{kind} is not an integer kind")
    };
    image.unwrap()
}

fn assert_non_decreasing(values: &[f64], context: &str) {
    for pair in values.windows(2) {
        assert!(pair[0] <= pair[1], "{context}: {} > {}", pair[0], pair[1]);
    }
}

#[test]
fn float_grid_points_survive_a_round_trip() {
    for kind in INTEGER_KINDS {
        let bits = kind.storage_width_bits();
        let tolerance = 1.0 / (2.0_f64.powi(bits as i32) - 1.0);

        // grid points of `kind` expressed as floats
        let grid = convert(&every_value(kind), SampleKind::Float).unwrap();
        let through = convert(&grid, kind).unwrap();
        let back = convert(&through, SampleKind::Float).unwrap();

        for (a, b) in grid.to_f64_vec().iter().zip(back.to_f64_vec()) {
            assert!((a - b).abs() <= tolerance, "{kind}: {a} became {b}");
        }
        // the integers themselves come back exactly
        assert_eq!(through, every_value(kind));
    }
}

#[test]
fn integer_conversions_keep_ordering() {
    for from in INTEGER_KINDS {
        let source = every_value(from);

        for to in SampleKind::ALL {
            let converted = convert(&source, to).unwrap();
            assert_non_decreasing(&converted.to_f64_vec(), &format!("{from} -> {to}"));
        }
    }
}

#[test]
fn float_conversions_keep_ordering() {
    let mut rng = nanorand::WyRand::new_seed(0x5eed);

    let mut values: Vec<f32> = (0..4096).map(|_| rng.generate::<f32>() * 3.0 - 1.5).collect();
    values.sort_by(f32::total_cmp);

    let source = Image::from_vec(values, &[64, 64]).unwrap();

    for to in SampleKind::ALL {
        for options in [ConvertOptions::default(), ConvertOptions::new_unit_float()] {
            let converted = convert_with_options(&source, to, &options).unwrap();
            assert_non_decreasing(&converted.to_f64_vec(), &format!("float -> {to}"));
        }
    }
}

#[test]
fn random_images_match_with_and_without_fast_paths() {
    let mut rng = nanorand::WyRand::new_seed(42);
    let generic = ConvertOptions::default().set_use_fast_paths(false);

    let shorts: Vec<u16> = (0..1000).map(|_| rng.generate::<u16>()).collect();
    let source = Image::from_vec(shorts, &[10, 100]).unwrap();

    for to in SampleKind::ALL {
        assert_eq!(
            convert(&source, to).unwrap(),
            convert_with_options(&source, to, &generic).unwrap(),
            "uint16 -> {to}"
        );
    }
}

#[test]
fn source_is_left_untouched() {
    let source = Image::from_vec(vec![0.1_f32, 0.7, 0.9], &[3]).unwrap();
    let before = source.clone();

    for to in SampleKind::ALL {
        let _ = convert(&source, to).unwrap();
    }
    assert_eq!(source, before);
}

#[test]
fn concurrent_conversions_of_one_image() {
    let source = every_value(SampleKind::UInt16);
    let expected = convert(&source, SampleKind::UInt8).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| convert(&source, SampleKind::UInt8).unwrap()))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
