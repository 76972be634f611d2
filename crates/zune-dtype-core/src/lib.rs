/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the dtype conversion crates
//!
//! This crate holds the pieces of the conversion machinery that
//! carry no pixel data:
//!
//! - The sample kinds an image may be stored in, together with the
//!   canonical intensity interval and storage width of each one.
//! - Conversion options
//! - A logging shim that forwards to the `log` crate when enabled
//!
//! This library is `#[no_std]` with `alloc` needed for serialization
//! support.
//!
//! # Features
//!  - `std`: Enables std facilities.
//!
//!  - `serde`: Enables serializing of sample kinds and options.
//!
//!  - `log`: Forward the logging macros to the [`log`](https://docs.rs/log) crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod log;
pub mod options;
pub mod sample_kind;
pub mod serde;
