// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Value-oriented operation suites for the scalar catalog.
//!
//! One artifact per kind, written to `<out_dir>/<kind>_generated.rs`. Every
//! operation works on owned copies of the elements: `where_` and `page`
//! return fresh vectors, `first_or_default` falls back to the type's
//! default value.

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{info, instrument};

use super::{
    GenerateOptions, for_each_match, generated_header, predicate_type, select_operation,
    slice_view, where_operation,
};
use crate::codegen::{Backend, GeneratedArtifact, Item, OperationSpec, Stmt};
use crate::equality::{ARE_EQUAL, EqualityStrategy};
use crate::error::Result;
use crate::origin;
use crate::types::{ScalarKind, TypeDescriptor};

/// Emits one artifact per selected catalog kind.
#[derive(Debug, Clone)]
pub struct PrimitiveSpecializer {
    package: String,
    out_dir: Utf8PathBuf,
    kinds: Vec<ScalarKind>,
    nullable: Vec<ScalarKind>,
    options: GenerateOptions,
}

impl PrimitiveSpecializer {
    /// Specializer for the whole catalog, writing into `out_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidPackage`](crate::GenerateError::InvalidPackage)
    /// if `package` is not a usable identifier.
    pub fn new(package: &str, out_dir: impl Into<Utf8PathBuf>) -> Result<Self> {
        origin::validate_package(package)?;
        Ok(Self {
            package: package.to_string(),
            out_dir: out_dir.into(),
            kinds: ScalarKind::ALL.to_vec(),
            nullable: Vec::new(),
            options: GenerateOptions::default(),
        })
    }

    /// Restricts generation to `kinds`. Catalog order is kept and duplicates
    /// are ignored.
    #[must_use]
    pub fn with_kinds(mut self, kinds: &[ScalarKind]) -> Self {
        self.kinds = catalog_subset(kinds);
        self
    }

    /// Also emits `Option<T>` suites for `kinds`.
    #[must_use]
    pub fn with_nullable(mut self, kinds: &[ScalarKind]) -> Self {
        self.nullable = catalog_subset(kinds);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn out_dir(&self) -> &Utf8Path {
        &self.out_dir
    }

    /// Every type instantiation, in generation order: plain kinds first,
    /// then the nullable ones.
    pub fn types(&self) -> Vec<TypeDescriptor> {
        self.kinds
            .iter()
            .map(|kind| TypeDescriptor::scalar(*kind))
            .chain(self.nullable.iter().map(|kind| TypeDescriptor::nullable(*kind)))
            .collect()
    }

    /// Builds the artifact for one instantiation without writing it.
    pub fn artifact(&self, desc: &TypeDescriptor) -> GeneratedArtifact {
        let runtime = self.options.runtime();
        let element = desc.element_type(runtime);
        let slice = desc.slice_type();
        let strategy = EqualityStrategy::for_type(desc);
        let yielded = if desc.is_copy() { "*item" } else { "item.clone()" };

        let operations = vec![
            first_or_default_operation(&element, yielded),
            first_operation(&element, yielded, runtime),
            where_operation(&element, &element, yielded),
            select_operation(&element),
            page_operation(&element, runtime),
            any_operation(&element),
            contains_operation(&element, &strategy, runtime),
            set_operation(SetOperation::Union, &element, yielded, &strategy, runtime),
            set_operation(SetOperation::FirstOnly, &element, yielded, &strategy, runtime),
        ];

        // The synthetic origin `<out>/<name>.rs` names the artifact.
        let synthetic_origin = self.out_dir.join(format!("{}.rs", desc.name()));
        GeneratedArtifact {
            destination: origin::generated_path(&synthetic_origin),
            package: self.package.clone(),
            header: vec![generated_header(desc, runtime)],
            items: vec![
                slice_view(desc, runtime, vec!["Debug", "Clone", "Copy"]),
                Item::Impl {
                    generics: Some("'a".to_string()),
                    trait_path: None,
                    target: format!("{slice}<'a>"),
                    operations,
                },
            ],
        }
    }

    /// Renders and persists every artifact, one at a time.
    ///
    /// Returns the written paths in generation order.
    ///
    /// # Errors
    ///
    /// Stops at the first artifact that cannot be written.
    #[instrument(skip_all, fields(package = %self.package, out_dir = %self.out_dir))]
    pub fn run(&self, backend: &dyn Backend) -> Result<Vec<Utf8PathBuf>> {
        let mut written = Vec::new();
        for desc in self.types() {
            let artifact = self.artifact(&desc);
            backend.persist(&artifact)?;
            info!(kind = desc.name(), path = %artifact.destination, "Generated");
            written.push(artifact.destination);
        }
        Ok(written)
    }
}

fn catalog_subset(kinds: &[ScalarKind]) -> Vec<ScalarKind> {
    ScalarKind::ALL
        .into_iter()
        .filter(|kind| kinds.contains(kind))
        .collect()
}

fn first_or_default_operation(element: &str, yielded: &str) -> OperationSpec {
    OperationSpec::method("first_or_default")
        .doc("Returns the first element matching `predicate`, or the default value.")
        .param("predicate", predicate_type(element))
        .returns(element)
        .body(vec![
            for_each_match(Stmt::line(format!("return {yielded};"))),
            Stmt::line("Default::default()"),
        ])
}

fn first_operation(element: &str, yielded: &str, runtime: &str) -> OperationSpec {
    OperationSpec::method("first")
        .doc("Returns the first element matching `predicate`.")
        .param("predicate", predicate_type(element))
        .returns(format!("Result<{element}, {runtime}::SliceError>"))
        .body(vec![
            for_each_match(Stmt::line(format!("return Ok({yielded});"))),
            Stmt::line(format!("Err({runtime}::SliceError::NotFound)")),
        ])
}

fn page_operation(element: &str, runtime: &str) -> OperationSpec {
    OperationSpec::method("page")
        .doc("Returns page `page_number` (zero-based) of `page_size` elements.")
        .param("page_number", "usize")
        .param("page_size", "usize")
        .returns(format!("Vec<{element}>"))
        .body(vec![Stmt::block(
            format!("match {runtime}::page_range(self.0.len(), page_number, page_size)"),
            vec![
                Stmt::line("Some(range) => self.0[range].to_vec(),"),
                Stmt::line("None => Vec::new(),"),
            ],
        )])
}

fn any_operation(element: &str) -> OperationSpec {
    OperationSpec::method("any")
        .doc("Reports whether any element matches `predicate`.")
        .param("predicate", predicate_type(element))
        .returns("bool")
        .body(vec![
            for_each_match(Stmt::line("return true;")),
            Stmt::line("false"),
        ])
}

fn contains_operation(element: &str, strategy: &EqualityStrategy, runtime: &str) -> OperationSpec {
    let mut body = strategy.statements("item", "candidate", runtime);
    body.push(Stmt::block(
        format!("if {ARE_EQUAL}"),
        vec![Stmt::line("return true;")],
    ));
    OperationSpec::method("contains")
        .doc("Reports whether an element equal to `candidate` is present.")
        .param("candidate", format!("&{element}"))
        .returns("bool")
        .body(vec![
            Stmt::block("for item in self.0", body),
            Stmt::line("false"),
        ])
}

#[derive(Debug, Clone, Copy)]
enum SetOperation {
    Union,
    FirstOnly,
}

/// `get_union` / `in_first_only`: walks `self` and keeps each element, once
/// per occurrence, depending on whether `other` holds an equal one.
fn set_operation(
    operation: SetOperation,
    element: &str,
    yielded: &str,
    strategy: &EqualityStrategy,
    runtime: &str,
) -> OperationSpec {
    let (name, doc, keep) = match operation {
        SetOperation::Union => (
            "get_union",
            "Returns the elements that also occur in `other`, keeping duplicates from `self`.",
            "if found",
        ),
        SetOperation::FirstOnly => (
            "in_first_only",
            "Returns the elements with no equal counterpart in `other`, keeping duplicates from `self`.",
            "if !found",
        ),
    };

    let mut probe = strategy.statements("item", "other_item", runtime);
    probe.push(Stmt::block(
        format!("if {ARE_EQUAL}"),
        vec![Stmt::line("found = true;"), Stmt::line("break;")],
    ));

    OperationSpec::method(name)
        .doc(doc)
        .param("other", format!("&[{element}]"))
        .returns(format!("Vec<{element}>"))
        .body(vec![
            Stmt::line("let mut result = Vec::new();"),
            Stmt::block(
                "for item in self.0",
                vec![
                    Stmt::line("let mut found = false;"),
                    Stmt::block("for other_item in other", probe),
                    Stmt::block(keep, vec![Stmt::line(format!("result.push({yielded});"))]),
                ],
            ),
            Stmt::line("result"),
        ])
}
