// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Origin files: package discovery and artifact naming.
//!
//! An origin is the source file a run is anchored to. Named-type runs read
//! the package from its first line; primitive runs may read it from the
//! first `// package` declaration. Artifacts are written next to the
//! origin, named after its file stem.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::error::{GenerateError, Result};

/// Suffix of the regenerated artifact (`point.rs` → `point_generated.rs`).
pub const GENERATED_SUFFIX: &str = "_generated";

/// Suffix of the hand-completed equality stub (`point.rs` → `point_equal.rs`).
pub const EQUAL_SUFFIX: &str = "_equal";

/// Declaration keyword written at the top of every artifact.
pub const PACKAGE_KEYWORD: &str = "// package";

/// Where the package identifier is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageRule {
    /// Last whitespace-delimited token of the first line.
    FirstLine,
    /// Last token of the first line starting with [`PACKAGE_KEYWORD`].
    Keyword,
}

/// Extracts the package identifier from `source`.
pub fn package_from_source(source: &str, rule: PackageRule) -> Option<&str> {
    match rule {
        PackageRule::FirstLine => source.lines().next()?.split_whitespace().last(),
        PackageRule::Keyword => source.lines().find_map(|line| {
            line.strip_prefix(PACKAGE_KEYWORD)
                .filter(|rest| rest.starts_with(char::is_whitespace))
                .and_then(|rest| rest.split_whitespace().last())
        }),
    }
}

/// Reads `origin` and discovers its package.
///
/// # Errors
///
/// [`GenerateError::Read`] if the file cannot be read,
/// [`GenerateError::MissingPackage`] if no usable identifier is found.
pub fn discover_package(origin: &Utf8Path, rule: PackageRule) -> Result<String> {
    let source = fs::read_to_string(origin).map_err(|source| GenerateError::Read {
        path: origin.to_path_buf(),
        source,
    })?;
    let package = package_from_source(&source, rule)
        .filter(|package| is_package_identifier(package))
        .ok_or_else(|| GenerateError::MissingPackage {
            path: origin.to_path_buf(),
        })?;
    debug!(origin = %origin, package, ?rule, "Discovered package");
    Ok(package.to_string())
}

/// Checks a package identifier supplied directly by the caller.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidPackage`] unless `package` is a non-empty
/// run of letters, digits and underscores.
pub fn validate_package(package: &str) -> Result<()> {
    if is_package_identifier(package) {
        Ok(())
    } else {
        Err(GenerateError::InvalidPackage(package.to_string()))
    }
}

fn is_package_identifier(package: &str) -> bool {
    !package.is_empty() && package.chars().all(|c| c == '_' || c.is_alphanumeric())
}

/// Path of the regenerated artifact for `origin`.
pub fn generated_path(origin: &Utf8Path) -> Utf8PathBuf {
    sibling(origin, GENERATED_SUFFIX)
}

/// Path of the equality stub for `origin`.
pub fn equal_path(origin: &Utf8Path) -> Utf8PathBuf {
    sibling(origin, EQUAL_SUFFIX)
}

fn sibling(origin: &Utf8Path, suffix: &str) -> Utf8PathBuf {
    let stem = origin.file_stem().unwrap_or_default();
    let name = format!("{stem}{suffix}.rs");
    match origin.parent() {
        Some(dir) => dir.join(name),
        None => Utf8PathBuf::from(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn first_line_takes_last_token() {
        let source = "// package shapes\n\npub struct Point;\n";
        assert_eq!(
            package_from_source(source, PackageRule::FirstLine),
            Some("shapes")
        );
    }

    #[test]
    fn first_line_ignores_later_lines() {
        let source = "\n// package shapes\n";
        assert_eq!(package_from_source(source, PackageRule::FirstLine), None);
    }

    #[test]
    fn keyword_scans_for_the_declaration() {
        let source = "// Copyright\n//! Module docs\n// package   geometry  \nfn f() {}\n";
        assert_eq!(
            package_from_source(source, PackageRule::Keyword),
            Some("geometry")
        );
    }

    #[test]
    fn keyword_requires_a_separator_and_a_token() {
        assert_eq!(
            package_from_source("// packages x\n", PackageRule::Keyword),
            None
        );
        assert_eq!(
            package_from_source("// package\n// package real\n", PackageRule::Keyword),
            Some("real")
        );
    }

    #[test]
    fn empty_source_has_no_package() {
        assert_eq!(package_from_source("", PackageRule::FirstLine), None);
        assert_eq!(package_from_source("", PackageRule::Keyword), None);
    }

    #[test]
    fn discover_reads_the_file() {
        let temp = TempDir::new().unwrap();
        let origin = Utf8PathBuf::from_path_buf(temp.path().join("point.rs")).unwrap();
        fs::write(&origin, "// package shapes\npub struct Point;\n").unwrap();

        assert_eq!(
            discover_package(&origin, PackageRule::FirstLine).unwrap(),
            "shapes"
        );
    }

    #[test]
    fn discover_reports_unreadable_origin() {
        let temp = TempDir::new().unwrap();
        let origin = Utf8PathBuf::from_path_buf(temp.path().join("missing.rs")).unwrap();

        let err = discover_package(&origin, PackageRule::FirstLine).unwrap_err();
        assert!(matches!(err, GenerateError::Read { path, .. } if path == origin));
    }

    #[test]
    fn discover_reports_missing_declaration() {
        let temp = TempDir::new().unwrap();
        let origin = Utf8PathBuf::from_path_buf(temp.path().join("empty.rs")).unwrap();
        fs::write(&origin, "").unwrap();

        let err = discover_package(&origin, PackageRule::FirstLine).unwrap_err();
        assert!(matches!(err, GenerateError::MissingPackage { .. }));
    }

    #[test]
    fn package_validation() {
        assert!(validate_package("shapes").is_ok());
        assert!(validate_package("my_pkg2").is_ok());
        for bad in ["", "a b", "a::b", "x;"] {
            assert!(
                matches!(validate_package(bad), Err(GenerateError::InvalidPackage(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn artifact_names_follow_the_origin_stem() {
        let origin = Utf8Path::new("src/shapes/point.rs");
        assert_eq!(
            generated_path(origin),
            Utf8PathBuf::from("src/shapes/point_generated.rs")
        );
        assert_eq!(
            equal_path(origin),
            Utf8PathBuf::from("src/shapes/point_equal.rs")
        );
        assert_eq!(
            generated_path(Utf8Path::new("point.rs")),
            Utf8PathBuf::from("point_generated.rs")
        );
    }
}
