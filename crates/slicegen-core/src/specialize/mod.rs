// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Specializers: from a [`TypeDescriptor`] to a
//! [`GeneratedArtifact`](crate::codegen::GeneratedArtifact).
//!
//! - [`primitives`]: the value-oriented suite for every catalog kind
//! - [`named`]: the reference-oriented suite, equality adapter and stub
//!   for one user struct
//!
//! Both build their operations from the helpers in this module, so the
//! operations they share (`where_`, `select`) are emitted identically.

pub mod named;
pub mod primitives;

use crate::codegen::{Item, OperationSpec, Stmt};
use crate::error::{GenerateError, Result};
use crate::types::{TypeDescriptor, is_identifier};

/// Runtime path used by generated code unless configured otherwise.
pub const DEFAULT_RUNTIME: &str = "::slicegen_runtime";

/// Options shared by both specializers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    runtime: String,
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self {
            runtime: DEFAULT_RUNTIME.to_string(),
        }
    }

    /// Path generated code uses to reach `slicegen_runtime`, for crates
    /// that re-export it (e.g. `crate::support`).
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidRuntime`] unless `runtime` is a
    /// `::`-separated path of identifiers.
    pub fn with_runtime(mut self, runtime: &str) -> Result<Self> {
        let trimmed = runtime.trim_end_matches("::");
        if !is_runtime_path(trimmed) {
            return Err(GenerateError::InvalidRuntime(runtime.to_string()));
        }
        self.runtime = trimmed.to_string();
        Ok(self)
    }

    pub fn runtime(&self) -> &str {
        &self.runtime
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// `::a::b`, or a relative path that may start with `crate`, `self` or
/// `super` segments.
fn is_runtime_path(path: &str) -> bool {
    let (absolute, rest) = match path.strip_prefix("::") {
        Some(rest) => (true, rest),
        None => (false, path),
    };
    let mut leading = !absolute;
    rest.split("::").enumerate().all(|(index, segment)| {
        let relative = leading
            && (segment == "super" || (index == 0 && matches!(segment, "crate" | "self")));
        leading = relative;
        relative || is_identifier(segment)
    })
}

/// Header line marking a file as regenerated on every run.
fn generated_header(desc: &TypeDescriptor, runtime: &str) -> String {
    format!(
        "Code generated by slicegen for `{}`. DO NOT EDIT.",
        desc.element_type(runtime)
    )
}

/// `pub struct {Slice}<'a>(pub &'a [{element}]);`
fn slice_view(desc: &TypeDescriptor, runtime: &str, derives: Vec<&'static str>) -> Item {
    let element = desc.element_type(runtime);
    Item::SliceView {
        name: desc.slice_type(),
        doc: format!("Borrowed view over a sequence of `{element}` values."),
        element,
        derives,
    }
}

fn predicate_type(element: &str) -> String {
    format!("impl Fn(&{element}) -> bool")
}

/// Runs `body` for each element matching `predicate`. A `return` in `body`
/// makes it stop at the first match.
fn for_each_match(body: Stmt) -> Stmt {
    Stmt::block("for item in self.0", vec![Stmt::block("if predicate(item)", vec![body])])
}

/// `where_`: every matching element, in order. `yielded` is the expression
/// pushed for one `item` (a copy, a clone or the reference itself).
fn where_operation(element: &str, returned: &str, yielded: &str) -> OperationSpec {
    OperationSpec::method("where_")
        .doc("Returns every element matching `predicate`, in order.")
        .param("predicate", predicate_type(element))
        .returns(format!("Vec<{returned}>"))
        .body(vec![
            Stmt::line("let mut result = Vec::new();"),
            for_each_match(Stmt::line(format!("result.push({yielded});"))),
            Stmt::line("result"),
        ])
}

/// `select`: one projected value per element, in order.
fn select_operation(element: &str) -> OperationSpec {
    OperationSpec::method("select")
        .doc("Projects every element through `projector`, preserving order and length.")
        .type_param("U")
        .param("projector", format!("impl Fn(&{element}) -> U"))
        .returns("Vec<U>")
        .body(vec![
            Stmt::line("let mut result = Vec::with_capacity(self.0.len());"),
            Stmt::block(
                "for item in self.0",
                vec![Stmt::line("result.push(projector(item));")],
            ),
            Stmt::line("result"),
        ])
}
