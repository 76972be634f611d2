/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use zune_dtype_core::options::ConvertOptions;
use zune_dtype_core::sample_kind::SampleKind;

use crate::convert::{convert, convert_with_options, Convert};
use crate::errors::ConversionErrors;
use crate::image::Image;
use crate::traits::OperationsTrait;

/// An image holding the two ends of `kind`'s interval against `other`
fn interval_image(kind: SampleKind, other: SampleKind) -> Image {
    let (lo, hi) = kind.interval_against(other, ConvertOptions::default().get_float_range());

    match kind {
        SampleKind::Float => Image::from_vec(vec![lo as f32, hi as f32], &[2]),
        SampleKind::UInt8 => Image::from_vec(vec![lo as u8, hi as u8], &[2]),
        SampleKind::UInt16 => Image::from_vec(vec![lo as u16, hi as u16], &[2]),
        SampleKind::Int8 => Image::from_vec(vec![lo as i8, hi as i8], &[2]),
        SampleKind::Int16 => Image::from_vec(vec![lo as i16, hi as i16], &[2]),
        SampleKind::Bool => Image::from_vec(vec![false, true], &[2])
    }
    .unwrap()
}

#[test]
fn same_kind_is_a_copy() {
    let images = [
        Image::from_vec(vec![0.25_f32, -3.0, 7.5, f32::NAN], &[2, 2]).unwrap(),
        Image::from_vec(vec![0_u8, 17, 255], &[3]).unwrap(),
        Image::from_vec(vec![0_u16, 9000, 65535], &[3]).unwrap(),
        Image::from_vec(vec![-128_i8, 0, 127], &[3]).unwrap(),
        Image::from_vec(vec![-32768_i16, 12, 32767], &[1, 3]).unwrap(),
        Image::from_vec(vec![true, false, true], &[3]).unwrap()
    ];
    for image in images {
        let copy = convert(&image, image.kind()).unwrap();
        assert_eq!(copy.shape(), image.shape());
        // compare bits so the NaN compares equal
        assert_eq!(copy.as_native_bytes(), image.as_native_bytes());
    }
}

#[test]
fn interval_ends_map_to_interval_ends() {
    for from in SampleKind::ALL {
        for to in SampleKind::ALL {
            let source = interval_image(from, to);
            let converted = convert(&source, to).unwrap();

            assert_eq!(converted.kind(), to);
            assert_eq!(
                converted,
                interval_image(to, from),
                "boundaries of {from} -> {to}"
            );
        }
    }
}

#[test]
fn bool_threshold_is_inclusive_midpoint() {
    let image = Image::from_vec(vec![0.0_f32, 0.49, 0.5, 0.51, 1.0], &[5]).unwrap();
    let converted = convert(&image, SampleKind::Bool).unwrap();

    assert_eq!(
        converted.as_slice::<bool>().unwrap(),
        &[false, false, true, true, true]
    );
}

#[test]
fn bool_threshold_uses_source_midpoint() {
    let bytes = Image::from_vec(vec![0_u8, 127, 128, 255], &[4]).unwrap();
    let converted = convert(&bytes, SampleKind::Bool).unwrap();
    assert_eq!(
        converted.as_slice::<bool>().unwrap(),
        &[false, false, true, true]
    );

    // midpoint of -128..=127 is -0.5
    let signed = Image::from_vec(vec![-128_i8, -1, 0, 127], &[4]).unwrap();
    let converted = convert(&signed, SampleKind::Bool).unwrap();
    assert_eq!(
        converted.as_slice::<bool>().unwrap(),
        &[false, false, true, true]
    );
}

#[test]
fn bool_source_maps_to_full_range() {
    let bools = Image::from_vec(vec![false, true], &[2]).unwrap();

    let converted = convert(&bools, SampleKind::Int16).unwrap();
    assert_eq!(converted.as_slice::<i16>().unwrap(), &[-32768, 32767]);

    let converted = convert(&bools, SampleKind::Float).unwrap();
    assert_eq!(converted.as_slice::<f32>().unwrap(), &[0.0, 1.0]);
}

#[test]
fn ubyte_to_float_and_back() {
    let image = Image::from_vec(vec![0_u8, 128, 255], &[3]).unwrap();

    let floats = convert(&image, SampleKind::Float).unwrap();
    let values = floats.as_slice::<f32>().unwrap();

    assert_eq!(values[0], 0.0);
    assert!((values[1] - 0.501_96).abs() < 1e-5);
    assert_eq!(values[2], 1.0);

    let back = convert(&floats, SampleKind::UInt8).unwrap();
    assert_eq!(back.as_slice::<u8>().unwrap(), &[0, 128, 255]);
}

#[test]
fn float_to_integer_rounds_half_to_even() {
    // 0.5 * 255 = 127.5, a tie that goes to the even 128
    let image = Image::from_vec(vec![0.5_f32], &[1]).unwrap();
    let converted = convert(&image, SampleKind::UInt8).unwrap();
    assert_eq!(converted.as_slice::<u8>().unwrap(), &[128]);

    // 0.0 maps to -0.5 for signed kinds, rounding away from zero would give -1
    let image = Image::from_vec(vec![0.0_f32], &[1]).unwrap();
    let converted = convert(&image, SampleKind::Int8).unwrap();
    assert_eq!(converted.as_slice::<i8>().unwrap(), &[0]);
}

#[test]
fn float_zero_lands_in_the_middle_of_signed_kinds() {
    let image = Image::from_vec(vec![-1.0_f32, 0.0, 1.0], &[3]).unwrap();

    let converted = convert(&image, SampleKind::Int16).unwrap();
    // -32768 + 0.5 * 65535 = -0.5, which rounds to even zero
    assert_eq!(converted.as_slice::<i16>().unwrap(), &[-32768, 0, 32767]);

    let converted = convert(&image, SampleKind::Int8).unwrap();
    assert_eq!(converted.as_slice::<i8>().unwrap(), &[-128, 0, 127]);
}

#[test]
fn unit_float_range_ignores_signedness() {
    let image = Image::from_vec(vec![-32768_i16, 32767], &[2]).unwrap();

    let symmetric = convert(&image, SampleKind::Float).unwrap();
    assert_eq!(symmetric.as_slice::<f32>().unwrap(), &[-1.0, 1.0]);

    let options = ConvertOptions::new_unit_float();
    let unit = convert_with_options(&image, SampleKind::Float, &options).unwrap();
    assert_eq!(unit.as_slice::<f32>().unwrap(), &[0.0, 1.0]);
}

#[test]
fn out_of_range_inputs_are_clipped() {
    let image = Image::from_vec(vec![-0.5_f32, 1.5, 250.0], &[3]).unwrap();

    let bytes = convert(&image, SampleKind::UInt8).unwrap();
    assert_eq!(bytes.as_slice::<u8>().unwrap(), &[0, 255, 255]);

    let shorts = convert(&image, SampleKind::UInt16).unwrap();
    assert_eq!(shorts.as_slice::<u16>().unwrap(), &[0, 65535, 65535]);
}

#[test]
fn non_finite_floats_are_a_domain_error() {
    let image = Image::from_vec(vec![0.0_f32, f32::NAN, 1.0], &[3]).unwrap();

    match convert(&image, SampleKind::UInt8) {
        Err(ConversionErrors::DomainError { index, value }) => {
            assert_eq!(index, 1);
            assert!(value.is_nan());
        }
        other => panic!("expected a domain error, got {other:?}")
    }
    // identity keeps the NaN
    let same = convert(&image, SampleKind::Float).unwrap();
    assert!(same.as_slice::<f32>().unwrap()[1].is_nan());

    let infinite = Image::from_vec(vec![f32::NEG_INFINITY], &[1]).unwrap();
    for to in [
        SampleKind::UInt8,
        SampleKind::UInt16,
        SampleKind::Int8,
        SampleKind::Int16,
        SampleKind::Bool
    ] {
        assert!(matches!(
            convert(&infinite, to),
            Err(ConversionErrors::DomainError { index: 0, .. })
        ));
    }
}

#[test]
fn shape_is_preserved() {
    let image = Image::fill(1000_u16, &[2, 3, 4]).unwrap();

    for to in SampleKind::ALL {
        let converted = convert(&image, to).unwrap();
        assert_eq!(converted.shape(), &[2, 3, 4]);
        assert_eq!(converted.len(), 24);
    }
}

#[test]
fn operation_converts_and_replaces() {
    let mut image = Image::from_vec(vec![0_u8, 255], &[2]).unwrap();
    let operation = Convert::new(SampleKind::UInt16);

    let copy = operation.clone_and_execute(&image).unwrap();
    assert_eq!(image.kind(), SampleKind::UInt8);
    assert_eq!(copy.as_slice::<u16>().unwrap(), &[0, 65535]);

    operation.execute(&mut image).unwrap();
    assert_eq!(image, copy);
}

#[test]
fn failed_operation_leaves_image_untouched() {
    let mut image = Image::from_vec(vec![f32::INFINITY], &[1]).unwrap();
    let before = image.clone();

    assert!(Convert::new(SampleKind::Int8).execute(&mut image).is_err());
    assert_eq!(image.as_native_bytes(), before.as_native_bytes());
}

#[test]
fn unknown_names_are_unsupported() {
    match Convert::from_name("float16") {
        Err(ConversionErrors::UnsupportedKind(name)) => assert_eq!(name, "float16"),
        other => panic!("expected unsupported kind, got {other:?}")
    }
    assert_eq!(Convert::from_name("ubyte").unwrap().kind(), SampleKind::UInt8);
}
