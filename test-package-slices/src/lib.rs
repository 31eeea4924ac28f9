// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Compiled slicegen output.
//!
//! The build script runs both specializers into `OUT_DIR`. This crate
//! includes every artifact, so the generated code is type-checked here and
//! exercised by the tests in `tests/`.

/// Includes one generated artifact as module `$module`.
macro_rules! generated {
    ($module:ident, $file:literal) => {
        pub mod $module {
            include!(concat!(env!("OUT_DIR"), "/", $file));
        }
    };
}

pub mod label;
pub mod point;

generated!(i8_slice, "i8_generated.rs");
generated!(i16_slice, "i16_generated.rs");
generated!(i32_slice, "i32_generated.rs");
generated!(i64_slice, "i64_generated.rs");
generated!(i128_slice, "i128_generated.rs");
generated!(isize_slice, "isize_generated.rs");
generated!(u16_slice, "u16_generated.rs");
generated!(u32_slice, "u32_generated.rs");
generated!(u64_slice, "u64_generated.rs");
generated!(u128_slice, "u128_generated.rs");
generated!(usize_slice, "usize_generated.rs");
generated!(f32_slice, "f32_generated.rs");
generated!(f64_slice, "f64_generated.rs");
generated!(string_slice, "string_generated.rs");
generated!(bool_slice, "bool_generated.rs");
generated!(byte_slice, "byte_generated.rs");
generated!(char_slice, "char_generated.rs");
generated!(complex32_slice, "complex32_generated.rs");
generated!(complex64_slice, "complex64_generated.rs");

generated!(opt_i32_slice, "opt_i32_generated.rs");
generated!(opt_string_slice, "opt_string_generated.rs");
generated!(opt_f64_slice, "opt_f64_generated.rs");
