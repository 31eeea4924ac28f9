// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Code construction backend.
//!
//! - [`operation`]: abstract description of items and functions to emit
//! - [`document`]: the document tree used for layout
//! - [`backend`]: rendering to Rust source and atomic persistence

pub mod backend;
pub mod document;
pub mod operation;

pub use backend::{Backend, RustBackend};
pub use operation::{GeneratedArtifact, Item, OperationSpec, Param, Stmt};
