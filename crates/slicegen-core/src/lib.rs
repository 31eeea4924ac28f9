// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! slicegen specialization engine.
//!
//! This crate turns element types into type-specialized collection helpers:
//! - Type model (scalar catalog, nullable scalars, named structs)
//! - Equality strategy per type shape
//! - Primitive and named-type specializers
//! - Rendering to Rust source and atomic persistence
//! - The once-only equality stub for named types
//!
//! Generated code depends on the `slicegen-runtime` crate.

pub mod codegen;
pub mod equality;
pub mod error;
pub mod origin;
pub mod scaffold;
pub mod specialize;
pub mod types;

pub use codegen::{Backend, GeneratedArtifact, RustBackend};
pub use error::{GenerateError, Result};
pub use scaffold::{EqualityStub, ScaffoldOutcome};
pub use specialize::GenerateOptions;
pub use specialize::named::{NamedOutput, NamedTypeSpecializer};
pub use specialize::primitives::PrimitiveSpecializer;
pub use types::{ScalarKind, TypeDescriptor};
