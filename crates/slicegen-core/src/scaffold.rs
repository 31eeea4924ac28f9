// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The hand-completed equality stub of a named type.
//!
//! `<stem>_equal.rs` holds `T::equals`, which the generated equality adapter
//! calls. It is written once, when absent, and from then on belongs to the
//! user: later runs leave it byte-for-byte alone.

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

use crate::codegen::{Backend, GeneratedArtifact, Item, OperationSpec, Stmt};
use crate::error::{GenerateError, Result};
use crate::types::TypeDescriptor;

/// What scaffolding did to the stub file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// The placeholder was written.
    Created,
    /// A file was already there and was left untouched.
    Preserved,
}

/// Placeholder `equals` for one named type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualityStub {
    artifact: GeneratedArtifact,
}

impl EqualityStub {
    pub fn new(desc: &TypeDescriptor, package: &str, destination: Utf8PathBuf) -> Self {
        let name = desc.name();
        let equals = OperationSpec::method("equals")
            .doc("Reports whether `self` and `other` are equal.")
            .param("_other", format!("&{name}"))
            .returns("bool")
            .body(vec![Stmt::line(format!(
                "unimplemented!(\"equality for `{name}` has not been written yet\")"
            ))]);

        Self {
            artifact: GeneratedArtifact {
                destination,
                package: package.to_string(),
                header: vec![
                    format!("Hand-written equality for `{name}`."),
                    "slicegen creates this file once and never overwrites it.".to_string(),
                ],
                items: vec![Item::Impl {
                    generics: None,
                    trait_path: None,
                    target: name.to_string(),
                    operations: vec![equals],
                }],
            },
        }
    }

    pub fn artifact(&self) -> &GeneratedArtifact {
        &self.artifact
    }

    pub fn destination(&self) -> &Utf8Path {
        &self.artifact.destination
    }

    /// Writes the stub unless its destination already exists.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Write`] if the destination cannot be checked
    /// or created. An existing file is not an error.
    pub fn scaffold(&self, backend: &dyn Backend) -> Result<ScaffoldOutcome> {
        let path = self.destination();
        let exists = path.try_exists().map_err(|source| GenerateError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        if exists {
            debug!(path = %path, "Equality stub exists, leaving it alone");
            return Ok(ScaffoldOutcome::Preserved);
        }

        // The no-clobber persist also covers a file appearing after the check.
        if backend.persist_new(&self.artifact)? {
            info!(path = %path, "Created equality stub");
            Ok(ScaffoldOutcome::Created)
        } else {
            debug!(path = %path, "Equality stub appeared concurrently, leaving it alone");
            Ok(ScaffoldOutcome::Preserved)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::RustBackend;
    use std::fs;
    use tempfile::TempDir;

    fn stub_in(temp: &TempDir) -> EqualityStub {
        let destination = Utf8PathBuf::from_path_buf(temp.path().join("point_equal.rs")).unwrap();
        EqualityStub::new(&TypeDescriptor::named("Point").unwrap(), "shapes", destination)
    }

    #[test]
    fn renders_placeholder() {
        let temp = TempDir::new().unwrap();
        let expected = "\
// package shapes
// Hand-written equality for `Point`.
// slicegen creates this file once and never overwrites it.

impl Point {
    /// Reports whether `self` and `other` are equal.
    pub fn equals(&self, _other: &Point) -> bool {
        unimplemented!(\"equality for `Point` has not been written yet\")
    }
}
";
        assert_eq!(RustBackend.render(stub_in(&temp).artifact()), expected);
    }

    #[test]
    fn creates_absent_stub() {
        let temp = TempDir::new().unwrap();
        let stub = stub_in(&temp);

        assert_eq!(stub.scaffold(&RustBackend).unwrap(), ScaffoldOutcome::Created);
        assert_eq!(
            fs::read_to_string(stub.destination()).unwrap(),
            RustBackend.render(stub.artifact())
        );
    }

    #[test]
    fn preserves_existing_stub() {
        let temp = TempDir::new().unwrap();
        let stub = stub_in(&temp);
        let edited = "impl Point {\n    pub fn equals(&self, other: &Point) -> bool {\n        self.x == other.x\n    }\n}\n";
        fs::write(stub.destination(), edited).unwrap();

        assert_eq!(stub.scaffold(&RustBackend).unwrap(), ScaffoldOutcome::Preserved);
        assert_eq!(fs::read_to_string(stub.destination()).unwrap(), edited);
    }

    #[test]
    fn second_scaffold_is_preserved() {
        let temp = TempDir::new().unwrap();
        let stub = stub_in(&temp);

        stub.scaffold(&RustBackend).unwrap();
        let first = fs::read(stub.destination()).unwrap();
        assert_eq!(stub.scaffold(&RustBackend).unwrap(), ScaffoldOutcome::Preserved);
        assert_eq!(fs::read(stub.destination()).unwrap(), first);
    }
}
