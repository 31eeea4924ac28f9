// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `slicegen <source-file> <type-name>`: suite, adapter and stub for one
//! named type.

use camino::Utf8Path;
use miette::Result;
use slicegen_core::{GenerateError, NamedTypeSpecializer, RustBackend, ScaffoldOutcome};
use tracing::{debug, info};

use super::config::Config;

/// Generate for `type_name`, declared in `origin`.
pub fn run(origin: &Utf8Path, type_name: Option<&str>, config: &Config) -> Result<()> {
    let Some(type_name) = type_name else {
        return Err(GenerateError::Argument(format!("expected a type name after '{origin}'")).into());
    };

    let specializer =
        NamedTypeSpecializer::from_origin(origin, type_name)?.with_options(config.options()?);
    let output = specializer.run(&RustBackend)?;

    match output.stub_outcome {
        ScaffoldOutcome::Created => {
            info!(path = %output.stub, "Fill in `{type_name}::equals` before using `contains`");
        }
        ScaffoldOutcome::Preserved => debug!(path = %output.stub, "Kept existing equality stub"),
    }
    Ok(())
}
