// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `slicegen.toml` parsing.
//!
//! The file is optional. When present it supplies defaults that command-line
//! flags override:
//!
//! ```toml
//! [generate]
//! runtime = "::slicegen_runtime"
//!
//! [primitives]
//! kinds = ["i32", "string"]
//! nullable = ["i32"]
//! out_dir = "src/slices"
//! ```

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use miette::{Context, IntoDiagnostic, Result};
use serde::Deserialize;
use slicegen_core::{GenerateOptions, ScalarKind};
use tracing::debug;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "slicegen.toml";

/// The whole configuration file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generate: GenerateSection,
    #[serde(default)]
    pub primitives: PrimitivesSection,
}

/// `[generate]`: settings shared by both modes.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateSection {
    /// Path generated code uses to reach the runtime crate.
    pub runtime: Option<String>,
}

/// `[primitives]`: the catalog run.
#[derive(Debug, Default, Deserialize)]
pub struct PrimitivesSection {
    /// Catalog subset; the whole catalog when absent.
    pub kinds: Option<Vec<String>>,
    /// Kinds also emitted behind `Option<T>`.
    #[serde(default)]
    pub nullable: Vec<String>,
    /// Output directory, relative to the configuration file.
    pub out_dir: Option<Utf8PathBuf>,
}

impl Config {
    /// Generation options derived from `[generate]`.
    pub fn options(&self) -> Result<GenerateOptions> {
        let options = GenerateOptions::new();
        match &self.generate.runtime {
            Some(runtime) => Ok(options
                .with_runtime(runtime)
                .wrap_err("Invalid runtime in [generate]")?),
            None => Ok(options),
        }
    }
}

impl PrimitivesSection {
    /// The configured catalog subset, if any.
    pub fn selected_kinds(&self) -> Result<Option<Vec<ScalarKind>>> {
        self.kinds.as_deref().map(parse_kinds).transpose()
    }

    pub fn nullable_kinds(&self) -> Result<Vec<ScalarKind>> {
        parse_kinds(&self.nullable)
    }
}

fn parse_kinds(names: &[String]) -> Result<Vec<ScalarKind>> {
    names
        .iter()
        .map(|name| name.parse::<ScalarKind>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .wrap_err("Invalid kind in [primitives]")
}

/// Parse a configuration file.
///
/// A relative `out_dir` is resolved against the file's directory.
pub fn parse_config(path: &Utf8Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read config '{path}'"))?;

    let mut config: Config = toml::from_str(&content)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to parse config '{path}'"))?;

    // Joining keeps absolute paths as they are.
    if let Some(base) = path.parent().filter(|base| !base.as_str().is_empty()) {
        config.primitives.out_dir = config.primitives.out_dir.take().map(|dir| base.join(dir));
    }

    debug!(path = %path, "Loaded configuration");
    Ok(config)
}

/// Look for `slicegen.toml` in `dir` and parse it if found.
///
/// Returns `None` if there is no configuration file.
pub fn find_config(dir: &Utf8Path) -> Result<Option<Config>> {
    let config_path = dir.join(CONFIG_FILE);
    if config_path
        .try_exists()
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to stat config '{config_path}'"))?
    {
        parse_config(&config_path).map(Some)
    } else {
        Ok(None)
    }
}
