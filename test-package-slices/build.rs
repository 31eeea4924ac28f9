// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Build script running both specializers into `OUT_DIR`.
//!
//! The named types' hand-completed equality stubs are checked in under
//! `src/`, so only their regenerated artifacts are written here.

use std::env;

use camino::Utf8PathBuf;
use slicegen_core::{Backend, NamedTypeSpecializer, PrimitiveSpecializer, RustBackend, ScalarKind};

const PACKAGE: &str = "slices";

/// Named types declared in `src/`, with the stem of their source file.
const NAMED_TYPES: &[(&str, &str)] = &[("Point", "point"), ("Label", "label")];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = Utf8PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));

    PrimitiveSpecializer::new(PACKAGE, out_dir.clone())
        .expect("Invalid package identifier")
        .with_nullable(&[ScalarKind::I32, ScalarKind::String, ScalarKind::F64])
        .run(&RustBackend)
        .expect("Failed to generate primitive slices");

    for (type_name, stem) in NAMED_TYPES {
        let origin = out_dir.join(format!("{stem}.rs"));
        let specializer =
            NamedTypeSpecializer::new(type_name, PACKAGE, origin).expect("Invalid named type");
        RustBackend
            .persist(&specializer.artifact())
            .unwrap_or_else(|e| panic!("Failed to generate slices for {type_name}: {e}"));
    }
}
