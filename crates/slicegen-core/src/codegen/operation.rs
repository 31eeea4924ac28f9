// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Abstract descriptions of generated code.
//!
//! Specializers describe *what* to emit with these values; a
//! [`Backend`](super::backend::Backend) decides how it looks on disk.
//! Expressions and types are carried as Rust source fragments, while the
//! structure (items, functions, statement nesting) stays explicit so the
//! renderer owns all layout.

use camino::Utf8PathBuf;

/// One statement of a function body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// A single line, emitted verbatim.
    Line(String),
    /// `head {`, the nested body, then `}` followed by `tail`.
    Block {
        head: String,
        body: Vec<Stmt>,
        tail: &'static str,
    },
}

impl Stmt {
    pub fn line(text: impl Into<String>) -> Self {
        Stmt::Line(text.into())
    }

    /// A block with nothing after the closing brace (`for`, `if`, `match` arms).
    pub fn block(head: impl Into<String>, body: Vec<Stmt>) -> Self {
        Stmt::Block {
            head: head.into(),
            body,
            tail: "",
        }
    }

    /// A block closed by `};` (a `let` bound to a `match`).
    pub fn block_statement(head: impl Into<String>, body: Vec<Stmt>) -> Self {
        Stmt::Block {
            head: head.into(),
            body,
            tail: ";",
        }
    }
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// One emitted function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSpec {
    pub name: String,
    /// Single-line doc comment.
    pub doc: Option<String>,
    /// Emitted with `pub`. Trait impl methods are not.
    pub public: bool,
    pub type_params: Vec<String>,
    /// Takes `&self` as its first parameter.
    pub takes_self: bool,
    pub params: Vec<Param>,
    pub returns: Option<String>,
    pub body: Vec<Stmt>,
}

impl OperationSpec {
    /// A public `&self` method with no parameters, return type or body yet.
    pub fn method(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            public: true,
            type_params: Vec::new(),
            takes_self: true,
            params: Vec::new(),
            returns: None,
            body: Vec::new(),
        }
    }

    #[must_use]
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    #[must_use]
    pub fn private(mut self) -> Self {
        self.public = false;
        self
    }

    #[must_use]
    pub fn type_param(mut self, param: impl Into<String>) -> Self {
        self.type_params.push(param.into());
        self
    }

    #[must_use]
    pub fn param(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.params.push(Param::new(name, ty));
        self
    }

    #[must_use]
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = Some(ty.into());
        self
    }

    #[must_use]
    pub fn body(mut self, body: Vec<Stmt>) -> Self {
        self.body = body;
        self
    }
}

/// A top-level element of an artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// `pub struct {name}<'a>(pub &'a [{element}]);`
    SliceView {
        name: String,
        element: String,
        derives: Vec<&'static str>,
        doc: String,
    },
    /// An `impl` block. `trait_path` is `None` for inherent impls.
    Impl {
        /// Generic parameters of the impl itself, e.g. `'a`.
        generics: Option<String>,
        trait_path: Option<String>,
        target: String,
        operations: Vec<OperationSpec>,
    },
}

/// A complete file produced for one type instantiation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub destination: Utf8PathBuf,
    /// Package context, written as the first line of the file.
    pub package: String,
    /// Comment lines following the package line.
    pub header: Vec<String>,
    pub items: Vec<Item>,
}

impl GeneratedArtifact {
    /// Names of all emitted functions, in order.
    pub fn operation_names(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter_map(|item| match item {
                Item::Impl { operations, .. } => Some(operations),
                Item::SliceView { .. } => None,
            })
            .flatten()
            .map(|op| op.name.as_str())
            .collect()
    }
}
