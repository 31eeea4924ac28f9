// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Document tree for rendering generated Rust source.
//!
//! Renderers build `Document` values instead of writing into a string
//! buffer with manual indentation tracking; the tree is turned into text in
//! a single final pass.
//!
//! # Example
//!
//! ```
//! use slicegen_core::codegen::document::{Document, line, nest};
//! use slicegen_core::docvec;
//!
//! let doc = docvec![
//!     "fn answer() -> u32 {",
//!     nest(4, docvec![line(), "42"]),
//!     line(),
//!     "}",
//! ];
//! assert_eq!(doc.to_pretty_string(), "fn answer() -> u32 {\n    42\n}");
//! ```
//!
//! Indentation is emitted lazily: a `Line` records the indentation in force
//! and it is written only when text follows, so blank lines never carry
//! trailing whitespace.

/// Indentation width of generated Rust.
pub const INDENT: isize = 4;

/// A pretty-printable document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document<'a> {
    /// A borrowed string literal.
    Str(&'a str),
    /// An owned string.
    String(String),
    /// A newline followed by current indentation.
    Line,
    /// Increase indentation for nested content.
    Nest(isize, Box<Document<'a>>),
    /// A sequence of documents.
    Vec(Vec<Document<'a>>),
    /// Empty document.
    Nil,
}

/// Coerce a value into a `Document`.
pub trait Documentable<'a> {
    fn to_doc(self) -> Document<'a>;
}

impl<'a> Documentable<'a> for &'a str {
    fn to_doc(self) -> Document<'a> {
        Document::Str(self)
    }
}

impl<'a> Documentable<'a> for String {
    fn to_doc(self) -> Document<'a> {
        Document::String(self)
    }
}

impl<'a> Documentable<'a> for Document<'a> {
    fn to_doc(self) -> Document<'a> {
        self
    }
}

impl<'a> Documentable<'a> for Vec<Document<'a>> {
    fn to_doc(self) -> Document<'a> {
        Document::Vec(self)
    }
}

/// Join multiple documents together in a vector.
///
/// Each element is converted to a `Document` via the `Documentable` trait.
/// No separator is inserted.
///
/// ```
/// use slicegen_core::docvec;
///
/// let doc = docvec!["pub ", "fn", " len"];
/// assert_eq!(doc.to_pretty_string(), "pub fn len");
/// ```
#[macro_export]
macro_rules! docvec {
    () => {
        $crate::codegen::document::Document::Vec(Vec::new())
    };

    ($first:expr $(,)?) => {
        $crate::codegen::document::Document::Vec(
            vec![$crate::codegen::document::Documentable::to_doc($first)]
        )
    };

    ($first:expr, $($rest:expr),+ $(,)?) => {
        match $crate::codegen::document::Documentable::to_doc($first) {
            $crate::codegen::document::Document::Vec(mut vec) => {
                $(
                    vec.push($crate::codegen::document::Documentable::to_doc($rest));
                )*
                $crate::codegen::document::Document::Vec(vec)
            },
            first => {
                $crate::codegen::document::Document::Vec(
                    vec![first, $($crate::codegen::document::Documentable::to_doc($rest)),+]
                )
            }
        }
    };
}

/// Creates a `Line` document: a mandatory newline followed by indentation.
#[must_use]
pub fn line() -> Document<'static> {
    Document::Line
}

/// Creates a `Nest` document: increases indentation for the inner document.
#[must_use]
pub fn nest(indent: isize, doc: Document<'_>) -> Document<'_> {
    Document::Nest(indent, Box::new(doc))
}

/// Joins documents with a separator between each pair.
#[must_use]
pub fn join<'a>(
    docs: impl IntoIterator<Item = Document<'a>>,
    separator: &Document<'a>,
) -> Document<'a> {
    let docs: Vec<_> = docs.into_iter().collect();
    if docs.is_empty() {
        return Document::Nil;
    }
    let mut result = Vec::with_capacity(docs.len() * 2 - 1);
    let mut first = true;
    for doc in docs {
        if !first {
            result.push(separator.clone());
        }
        result.push(doc);
        first = false;
    }
    Document::Vec(result)
}

// --- Rendering ---

struct Renderer {
    output: String,
    /// Indentation owed to the current line, paid when text arrives.
    pending_indent: Option<isize>,
}

impl Renderer {
    fn text(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        if let Some(indent) = self.pending_indent.take() {
            for _ in 0..indent {
                self.output.push(' ');
            }
        }
        self.output.push_str(s);
    }

    fn render(&mut self, doc: &Document<'_>, indent: isize) {
        match doc {
            Document::Str(s) => self.text(s),
            Document::String(s) => self.text(s),
            Document::Nil => {}
            Document::Line => {
                self.output.push('\n');
                self.pending_indent = Some(indent);
            }
            Document::Nest(extra, doc) => self.render(doc, indent + extra),
            Document::Vec(docs) => {
                for doc in docs {
                    self.render(doc, indent);
                }
            }
        }
    }
}

impl Document<'_> {
    /// Renders the document to a string.
    ///
    /// Rendering is deterministic: the same tree always yields the same bytes.
    #[must_use]
    pub fn to_pretty_string(&self) -> String {
        let mut renderer = Renderer {
            output: String::new(),
            pending_indent: None,
        };
        renderer.render(self, 0);
        renderer.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_and_string_documents() {
        assert_eq!(Document::Str("hello").to_pretty_string(), "hello");
        assert_eq!(
            Document::String("world".to_string()).to_pretty_string(),
            "world"
        );
        assert_eq!(Document::Nil.to_pretty_string(), "");
    }

    #[test]
    fn nest_document() {
        let doc = docvec!["impl Foo {", nest(4, docvec![line(), "body"])];
        assert_eq!(doc.to_pretty_string(), "impl Foo {\n    body");
    }

    #[test]
    fn nested_nest() {
        let doc = nest(
            4,
            docvec![
                line(),
                "for item in items {",
                nest(4, docvec![line(), "total += item;"]),
                line(),
                "}",
            ],
        );
        assert_eq!(
            doc.to_pretty_string(),
            "\n    for item in items {\n        total += item;\n    }"
        );
    }

    #[test]
    fn blank_lines_have_no_trailing_whitespace() {
        let doc = docvec![
            "impl Foo {",
            nest(4, docvec![line(), "fn a() {}", line(), line(), "fn b() {}"]),
            line(),
            "}",
        ];
        assert_eq!(
            doc.to_pretty_string(),
            "impl Foo {\n    fn a() {}\n\n    fn b() {}\n}"
        );
    }

    #[test]
    fn indentation_is_fixed_when_the_line_is_emitted() {
        let doc = docvec![nest(4, docvec!["a", line()]), "b"];
        assert_eq!(doc.to_pretty_string(), "a\n    b");
    }

    #[test]
    fn docvec_flattens_leading_vec() {
        let inner = docvec!["a", "b"];
        let doc = docvec![inner, "c"];
        assert_eq!(doc.to_pretty_string(), "abc");
        if let Document::Vec(v) = doc {
            assert_eq!(v.len(), 3);
        } else {
            panic!("Expected Vec");
        }
    }

    #[test]
    fn join_documents() {
        let params = vec![Document::Str("&self"), Document::Str("other: &[i32]")];
        let doc = join(params, &Document::Str(", "));
        assert_eq!(doc.to_pretty_string(), "&self, other: &[i32]");
    }

    #[test]
    fn join_empty_and_single() {
        let empty: Vec<Document> = vec![];
        assert_eq!(join(empty, &Document::Str(", ")).to_pretty_string(), "");
        let single = vec![Document::Str("only")];
        assert_eq!(join(single, &Document::Str(", ")).to_pretty_string(), "only");
    }
}
