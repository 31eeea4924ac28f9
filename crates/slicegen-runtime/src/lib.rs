// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Runtime support for slicegen-generated collection helpers.
//!
//! Every artifact produced by `slicegen` refers to this crate by path
//! (`::slicegen_runtime` unless configured otherwise). It holds the pieces
//! that are identical across all specializations:
//!
//! - [`SliceError`]: the use-time failures (`NotFound`, `TypeMismatch`)
//! - [`Equaler`]: the opaque equality capability implemented by the
//!   generated adapters, with [`expect_type`] and [`contains`]
//! - [`page_range`]: the single definition of the paging contract
//! - [`Complex32`] / [`Complex64`]: the complex scalar kinds of the catalog

mod complex;
mod equaler;
mod error;
mod paging;

pub use complex::{Complex, Complex32, Complex64};
pub use equaler::{Equaler, contains, expect_type};
pub use error::SliceError;
pub use paging::page_range;
