/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde-support")]

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::image::Image;

/// Images serialize their description, not their samples
impl Serialize for Image {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        const STRUCT_FIELDS: usize = 4;
        let mut state = serializer.serialize_struct("Image", STRUCT_FIELDS)?;

        state.serialize_field("kind", &self.kind())?;
        state.serialize_field("shape", self.shape())?;
        state.serialize_field("length", &self.len())?;
        state.serialize_field("storage_width_bits", &self.kind().storage_width_bits())?;

        state.end()
    }
}
