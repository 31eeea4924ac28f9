// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! CLI command implementations.
//!
//! `slicegen primitives <package>` runs the catalog; any other target is the
//! source file of a named type, followed by the type name.

pub mod config;
pub mod named;
pub mod primitives;

use camino::{Utf8Path, Utf8PathBuf};
use miette::Result;
use slicegen_core::GenerateError;

use self::config::Config;

/// Target selecting the primitive catalog run.
pub const PRIMITIVES_TARGET: &str = "primitives";

/// Everything the command line supplied.
#[derive(Debug, Default)]
pub struct Invocation {
    pub target: Option<String>,
    pub argument: Option<String>,
    pub out_dir: Option<Utf8PathBuf>,
    pub origin: Option<Utf8PathBuf>,
    pub config: Option<Utf8PathBuf>,
}

/// Dispatch one invocation.
pub fn run(invocation: &Invocation) -> Result<()> {
    let Some(target) = invocation.target.as_deref() else {
        return Err(GenerateError::Argument("expected a target".to_string()).into());
    };

    let config = load_config(invocation.config.as_deref())?;

    if target == PRIMITIVES_TARGET {
        primitives::run(
            invocation.argument.as_deref(),
            invocation.out_dir.as_deref(),
            invocation.origin.as_deref(),
            &config,
        )
    } else {
        if let Some(flag) = primitives_only_flag(invocation) {
            return Err(GenerateError::Argument(format!(
                "{flag} only applies to '{PRIMITIVES_TARGET}'"
            ))
            .into());
        }
        named::run(Utf8Path::new(target), invocation.argument.as_deref(), &config)
    }
}

/// Named mode writes next to its source file and reads the package from it.
fn primitives_only_flag(invocation: &Invocation) -> Option<&'static str> {
    if invocation.out_dir.is_some() {
        Some("--out-dir")
    } else if invocation.origin.is_some() {
        Some("--origin")
    } else {
        None
    }
}

/// An explicit `--config` must exist; otherwise `./slicegen.toml` is optional.
fn load_config(explicit: Option<&Utf8Path>) -> Result<Config> {
    match explicit {
        Some(path) => config::parse_config(path),
        None => Ok(config::find_config(Utf8Path::new("."))?.unwrap_or_default()),
    }
}
