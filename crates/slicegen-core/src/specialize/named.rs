// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Reference-oriented operation suite for one user struct.
//!
//! Given `Point` declared in `point.rs`, a run produces:
//!
//! - `point_generated.rs`, regenerated every time: `PointSlice<'a>` whose
//!   operations hand out `&'a Point` references into the source, and the
//!   equality adapter `impl Equaler for Point`.
//! - `point_equal.rs`, created once: the `Point::equals` stub the adapter
//!   delegates to. See [`crate::scaffold`].

use camino::Utf8PathBuf;
use tracing::{info, instrument};

use super::{
    GenerateOptions, for_each_match, generated_header, predicate_type, select_operation,
    slice_view, where_operation,
};
use crate::codegen::{Backend, GeneratedArtifact, Item, OperationSpec, Stmt};
use crate::equality::{ARE_EQUAL, EqualityStrategy};
use crate::error::Result;
use crate::origin::{self, PackageRule};
use crate::scaffold::{EqualityStub, ScaffoldOutcome};
use crate::types::TypeDescriptor;

/// Paths touched by one named-type run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedOutput {
    /// The regenerated artifact.
    pub artifact: Utf8PathBuf,
    /// The equality stub.
    pub stub: Utf8PathBuf,
    pub stub_outcome: ScaffoldOutcome,
}

/// Emits the suite, adapter and stub for one named type.
#[derive(Debug, Clone)]
pub struct NamedTypeSpecializer {
    desc: TypeDescriptor,
    package: String,
    origin: Utf8PathBuf,
    options: GenerateOptions,
}

impl NamedTypeSpecializer {
    /// Specializer for `type_name` with an explicit package.
    ///
    /// # Errors
    ///
    /// Rejects type names that are not Rust identifiers and unusable package
    /// identifiers.
    pub fn new(type_name: &str, package: &str, origin: impl Into<Utf8PathBuf>) -> Result<Self> {
        let desc = TypeDescriptor::named(type_name)?;
        origin::validate_package(package)?;
        Ok(Self {
            desc,
            package: package.to_string(),
            origin: origin.into(),
            options: GenerateOptions::default(),
        })
    }

    /// Specializer for `type_name`, reading the package from the first line
    /// of `origin`.
    ///
    /// # Errors
    ///
    /// Rejects invalid type names; fails with
    /// [`GenerateError::Read`](crate::GenerateError::Read) or
    /// [`GenerateError::MissingPackage`](crate::GenerateError::MissingPackage)
    /// when the package cannot be discovered.
    pub fn from_origin(origin: impl Into<Utf8PathBuf>, type_name: &str) -> Result<Self> {
        let origin = origin.into();
        let desc = TypeDescriptor::named(type_name)?;
        let package = origin::discover_package(&origin, PackageRule::FirstLine)?;
        Ok(Self {
            desc,
            package,
            origin,
            options: GenerateOptions::default(),
        })
    }

    #[must_use]
    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds the regenerated artifact without writing it.
    pub fn artifact(&self) -> GeneratedArtifact {
        let runtime = self.options.runtime();
        let name = self.desc.name();
        let element = self.desc.element_type(runtime);
        let reference = format!("&'a {element}");
        let slice = self.desc.slice_type();

        let operations = vec![
            OperationSpec::method("first_or_default")
                .doc("Returns the first element matching `predicate`, if any.")
                .param("predicate", predicate_type(&element))
                .returns(format!("Option<{reference}>"))
                .body(vec![
                    for_each_match(Stmt::line("return Some(item);")),
                    Stmt::line("None"),
                ]),
            OperationSpec::method("first")
                .doc("Returns the first element matching `predicate`.")
                .param("predicate", predicate_type(&element))
                .returns(format!("Result<{reference}, {runtime}::SliceError>"))
                .body(vec![Stmt::line(format!(
                    "self.first_or_default(predicate).ok_or({runtime}::SliceError::NotFound)"
                ))]),
            where_operation(&element, &reference, "item"),
            select_operation(&element),
            OperationSpec::method("contains")
                .doc("Reports whether an element equal to `candidate` is present.")
                .param("candidate", format!("&dyn {runtime}::Equaler"))
                .returns(format!("Result<bool, {runtime}::SliceError>"))
                .body(vec![
                    Stmt::line(format!("{runtime}::expect_type::<{name}>(candidate)?;")),
                    Stmt::line(format!("{runtime}::contains(&self.to_equalers(), candidate)")),
                ]),
            OperationSpec::method("to_equalers")
                .doc("Equality handles for every element, in order.")
                .returns(format!("Vec<&'a dyn {runtime}::Equaler>"))
                .body(vec![Stmt::line(format!(
                    "self.0.iter().map(|item| item as &'a dyn {runtime}::Equaler).collect()"
                ))]),
            OperationSpec::method("to_anys")
                .doc("Type-erased handles for every element, in order.")
                .returns("Vec<&'a dyn ::std::any::Any>")
                .body(vec![Stmt::line(
                    "self.0.iter().map(|item| item as &'a dyn ::std::any::Any).collect()",
                )]),
        ];

        GeneratedArtifact {
            destination: origin::generated_path(&self.origin),
            package: self.package.clone(),
            header: vec![generated_header(&self.desc, runtime)],
            items: vec![
                slice_view(&self.desc, runtime, vec!["Clone", "Copy"]),
                Item::Impl {
                    generics: Some("'a".to_string()),
                    trait_path: None,
                    target: format!("{slice}<'a>"),
                    operations,
                },
                self.equality_adapter(runtime),
            ],
        }
    }

    /// `impl Equaler for T`, delegating to the hand-written `equals`.
    fn equality_adapter(&self, runtime: &str) -> Item {
        let name = self.desc.name();
        let mut equal_body =
            EqualityStrategy::for_type(&self.desc).statements("self", "other", runtime);
        equal_body.push(Stmt::line(format!("Ok({ARE_EQUAL})")));

        Item::Impl {
            generics: None,
            trait_path: Some(format!("{runtime}::Equaler")),
            target: name.to_string(),
            operations: vec![
                OperationSpec::method("equal")
                    .private()
                    .param("other", format!("&dyn {runtime}::Equaler"))
                    .returns(format!("Result<bool, {runtime}::SliceError>"))
                    .body(equal_body),
                OperationSpec::method("as_any")
                    .private()
                    .returns("&dyn ::std::any::Any")
                    .body(vec![Stmt::line("self")]),
            ],
        }
    }

    /// The equality stub next to the origin.
    pub fn stub(&self) -> EqualityStub {
        EqualityStub::new(&self.desc, &self.package, origin::equal_path(&self.origin))
    }

    /// Persists the artifact, then scaffolds the stub if it is absent.
    ///
    /// # Errors
    ///
    /// Fails if either file cannot be written. An existing stub is not an
    /// error.
    #[instrument(skip_all, fields(type_name = %self.desc.name(), origin = %self.origin))]
    pub fn run(&self, backend: &dyn Backend) -> Result<NamedOutput> {
        let artifact = self.artifact();
        backend.persist(&artifact)?;
        info!(path = %artifact.destination, "Generated");

        let stub = self.stub();
        let stub_outcome = stub.scaffold(backend)?;

        Ok(NamedOutput {
            artifact: artifact.destination,
            stub: stub.destination().to_path_buf(),
            stub_outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8Path;
    use crate::codegen::RustBackend;
    use crate::error::GenerateError;
    use std::fs;
    use tempfile::TempDir;

    fn point() -> NamedTypeSpecializer {
        NamedTypeSpecializer::new("Point", "shapes", "src/point.rs").unwrap()
    }

    fn write_origin(temp: &TempDir) -> Utf8PathBuf {
        let origin = Utf8PathBuf::from_path_buf(temp.path().join("point.rs")).unwrap();
        fs::write(&origin, "// package shapes\n\npub struct Point {\n    pub x: i32,\n}\n").unwrap();
        origin
    }

    #[test]
    fn artifact_layout() {
        let artifact = point().artifact();
        assert_eq!(artifact.destination, Utf8PathBuf::from("src/point_generated.rs"));
        assert_eq!(artifact.package, "shapes");
        assert_eq!(
            artifact.operation_names(),
            vec![
                "first_or_default",
                "first",
                "where_",
                "select",
                "contains",
                "to_equalers",
                "to_anys",
                "equal",
                "as_any",
            ]
        );
        assert_eq!(point().stub().destination(), Utf8Path::new("src/point_equal.rs"));
    }

    #[test]
    fn renders_reference_oriented_suite() {
        let text = RustBackend.render(&point().artifact());

        assert!(text.starts_with("// package shapes\n"));
        assert!(text.contains("#[derive(Clone, Copy)]\npub struct PointSlice<'a>(pub &'a [Point]);"));
        assert!(text.contains(
            "pub fn first_or_default(&self, predicate: impl Fn(&Point) -> bool) -> Option<&'a Point> {"
        ));
        assert!(text.contains("                return Some(item);\n"));
        assert!(text.contains(
            "        self.first_or_default(predicate).ok_or(::slicegen_runtime::SliceError::NotFound)\n"
        ));
        assert!(text.contains("pub fn where_(&self, predicate: impl Fn(&Point) -> bool) -> Vec<&'a Point> {"));
        assert!(text.contains("                result.push(item);\n"));
    }

    #[test]
    fn renders_membership_through_the_adapter() {
        let text = RustBackend.render(&point().artifact());
        let expected = "    \
    /// Reports whether an element equal to `candidate` is present.
    pub fn contains(&self, candidate: &dyn ::slicegen_runtime::Equaler) -> Result<bool, ::slicegen_runtime::SliceError> {
        ::slicegen_runtime::expect_type::<Point>(candidate)?;
        ::slicegen_runtime::contains(&self.to_equalers(), candidate)
    }
";
        assert!(text.contains(expected), "{text}");
    }

    #[test]
    fn renders_equality_adapter() {
        let text = RustBackend.render(&point().artifact());
        let expected = "\
impl ::slicegen_runtime::Equaler for Point {
    fn equal(&self, other: &dyn ::slicegen_runtime::Equaler) -> Result<bool, ::slicegen_runtime::SliceError> {
        let other = ::slicegen_runtime::expect_type::<Point>(other)?;
        let are_equal = Point::equals(self, other);
        Ok(are_equal)
    }

    fn as_any(&self) -> &dyn ::std::any::Any {
        self
    }
}
";
        assert!(text.ends_with(expected), "{text}");
    }

    #[test]
    fn rejects_invalid_type_name() {
        assert!(matches!(
            NamedTypeSpecializer::new("Vec<Point>", "shapes", "point.rs"),
            Err(GenerateError::InvalidTypeName(_))
        ));
    }

    #[test]
    fn from_origin_discovers_package() {
        let temp = TempDir::new().unwrap();
        let origin = write_origin(&temp);

        let spec = NamedTypeSpecializer::from_origin(origin, "Point").unwrap();
        assert_eq!(spec.artifact().package, "shapes");
    }

    #[test]
    fn from_origin_fails_on_unreadable_file() {
        let temp = TempDir::new().unwrap();
        let origin = Utf8PathBuf::from_path_buf(temp.path().join("absent.rs")).unwrap();

        assert!(matches!(
            NamedTypeSpecializer::from_origin(origin, "Point"),
            Err(GenerateError::Read { .. })
        ));
    }

    #[test]
    fn run_creates_artifact_and_stub() {
        let temp = TempDir::new().unwrap();
        let origin = write_origin(&temp);
        let spec = NamedTypeSpecializer::from_origin(origin, "Point").unwrap();

        let output = spec.run(&RustBackend).unwrap();

        assert_eq!(output.stub_outcome, ScaffoldOutcome::Created);
        assert!(output.artifact.ends_with("point_generated.rs"));
        assert!(output.stub.ends_with("point_equal.rs"));
        assert_eq!(
            fs::read_to_string(&output.artifact).unwrap(),
            RustBackend.render(&spec.artifact())
        );
        assert!(fs::read_to_string(&output.stub).unwrap().contains("unimplemented!"));
    }

    #[test]
    fn rerun_regenerates_artifact_and_preserves_edited_stub() {
        let temp = TempDir::new().unwrap();
        let origin = write_origin(&temp);
        let spec = NamedTypeSpecializer::from_origin(origin, "Point").unwrap();

        let first = spec.run(&RustBackend).unwrap();
        let generated = fs::read(&first.artifact).unwrap();
        let edited = "// package shapes\nimpl Point {\n    pub fn equals(&self, other: &Point) -> bool {\n        self.x == other.x\n    }\n}\n";
        fs::write(&first.stub, edited).unwrap();
        fs::write(&first.artifact, "corrupted").unwrap();

        let second = spec.run(&RustBackend).unwrap();

        assert_eq!(second.stub_outcome, ScaffoldOutcome::Preserved);
        assert_eq!(fs::read_to_string(&second.stub).unwrap(), edited);
        assert_eq!(fs::read(&second.artifact).unwrap(), generated);
    }
}
