/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde")]

use alloc::format;

use serde::ser::*;

use crate::options::{ConvertOptions, FloatRange};
use crate::sample_kind::SampleKind;

impl Serialize for SampleKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(self.name())
    }
}

impl Serialize for FloatRange {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(&format!("{:?}", self))
    }
}

impl Serialize for ConvertOptions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ConvertOptions", 2)?;

        state.serialize_field("float_range", &self.get_float_range())?;
        state.serialize_field("use_fast_paths", &self.get_use_fast_paths())?;

        state.end()
    }
}
