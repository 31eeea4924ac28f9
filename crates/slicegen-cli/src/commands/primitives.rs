// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `slicegen primitives`: one artifact per catalog kind.

use camino::{Utf8Path, Utf8PathBuf};
use miette::Result;
use slicegen_core::origin::{PackageRule, discover_package};
use slicegen_core::{GenerateError, PrimitiveSpecializer, RustBackend};
use tracing::info;

use super::config::Config;

/// Generate the primitive suites.
///
/// The package comes from `package`, else from the first `// package` line
/// of `origin`. The output directory comes from `out_dir`, else the
/// configuration, else the working directory.
pub fn run(
    package: Option<&str>,
    out_dir: Option<&Utf8Path>,
    origin: Option<&Utf8Path>,
    config: &Config,
) -> Result<()> {
    let package = match (package, origin) {
        (Some(package), _) => package.to_string(),
        (None, Some(origin)) => discover_package(origin, PackageRule::Keyword)?,
        (None, None) => {
            return Err(GenerateError::Argument(
                "expected a package identifier or --origin".to_string(),
            )
            .into());
        }
    };

    let out_dir = out_dir
        .map(Utf8Path::to_path_buf)
        .or_else(|| config.primitives.out_dir.clone())
        .unwrap_or_else(|| Utf8PathBuf::from("."));

    let mut specializer = PrimitiveSpecializer::new(&package, out_dir)?
        .with_options(config.options()?)
        .with_nullable(&config.primitives.nullable_kinds()?);
    if let Some(kinds) = config.primitives.selected_kinds()? {
        specializer = specializer.with_kinds(&kinds);
    }

    let written = specializer.run(&RustBackend)?;
    info!(
        count = written.len(),
        out_dir = %specializer.out_dir(),
        "Generated primitive artifacts"
    );
    Ok(())
}
