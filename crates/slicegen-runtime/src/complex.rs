// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Complex scalar kinds.

/// A complex number in Cartesian form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex<T> {
    /// Real part.
    pub re: T,
    /// Imaginary part.
    pub im: T,
}

impl<T> Complex<T> {
    /// Creates `re + im·i`.
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

/// Complex number with `f32` parts.
pub type Complex32 = Complex<f32>;

/// Complex number with `f64` parts.
pub type Complex64 = Complex<f64>;
