// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Type descriptors and the scalar catalog.
//!
//! A [`TypeDescriptor`] is everything the specializers know about the element
//! type they generate for. Its constructors are the only way to build one,
//! so the category/comparability pairing is always legal:
//!
//! | Constructor | Category | Comparability |
//! |---|---|---|
//! | [`TypeDescriptor::scalar`] | `Scalar` | `DirectEquatable` |
//! | [`TypeDescriptor::nullable`] | `Scalar` | `IndirectionAware` |
//! | [`TypeDescriptor::named`] | `IndirectionToNamed` | `ManualEquatable` |

use std::fmt;
use std::str::FromStr;

use crate::error::GenerateError;

/// One kind of the fixed scalar catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    String,
    Bool,
    Byte,
    Char,
    Complex32,
    Complex64,
}

impl ScalarKind {
    /// The whole catalog, in generation order.
    pub const ALL: [ScalarKind; 19] = [
        ScalarKind::I8,
        ScalarKind::I16,
        ScalarKind::I32,
        ScalarKind::I64,
        ScalarKind::I128,
        ScalarKind::Isize,
        ScalarKind::U16,
        ScalarKind::U32,
        ScalarKind::U64,
        ScalarKind::U128,
        ScalarKind::Usize,
        ScalarKind::F32,
        ScalarKind::F64,
        ScalarKind::String,
        ScalarKind::Bool,
        ScalarKind::Byte,
        ScalarKind::Char,
        ScalarKind::Complex32,
        ScalarKind::Complex64,
    ];

    /// Catalog name, used for artifact file names and configuration.
    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::I8 => "i8",
            ScalarKind::I16 => "i16",
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::I128 => "i128",
            ScalarKind::Isize => "isize",
            ScalarKind::U16 => "u16",
            ScalarKind::U32 => "u32",
            ScalarKind::U64 => "u64",
            ScalarKind::U128 => "u128",
            ScalarKind::Usize => "usize",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
            ScalarKind::String => "string",
            ScalarKind::Bool => "bool",
            ScalarKind::Byte => "byte",
            ScalarKind::Char => "char",
            ScalarKind::Complex32 => "complex32",
            ScalarKind::Complex64 => "complex64",
        }
    }

    /// Rust spelling of the element type. Complex kinds live in the runtime.
    pub fn rust_type(self, runtime: &str) -> String {
        match self {
            ScalarKind::String => "String".to_string(),
            ScalarKind::Byte => "u8".to_string(),
            ScalarKind::Complex32 => format!("{runtime}::Complex32"),
            ScalarKind::Complex64 => format!("{runtime}::Complex64"),
            other => other.name().to_string(),
        }
    }

    /// Whether elements can be yielded by copy rather than `clone()`.
    pub fn is_copy(self) -> bool {
        !matches!(self, ScalarKind::String)
    }

    /// `CamelCase` stem for generated type names (`i32` → `I32`).
    fn camel_name(self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScalarKind {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScalarKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| GenerateError::UnknownKind(s.to_string()))
    }
}

/// Broad shape of the element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// A catalog scalar, held by value or behind an optional indirection.
    Scalar(ScalarKind),
    /// A user struct, reached through shared references.
    IndirectionToNamed,
}

/// How two elements are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparability {
    /// `==` on the values.
    DirectEquatable,
    /// Null-aware comparison of `Option<T>` values.
    IndirectionAware,
    /// A hand-written `equals` method.
    ManualEquatable,
}

/// Everything a specializer needs to know about one element type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    name: String,
    category: Category,
    comparability: Comparability,
}

impl TypeDescriptor {
    /// A catalog scalar held by value.
    pub fn scalar(kind: ScalarKind) -> Self {
        Self {
            name: kind.name().to_string(),
            category: Category::Scalar(kind),
            comparability: Comparability::DirectEquatable,
        }
    }

    /// A catalog scalar behind an optional indirection (`Option<T>`).
    pub fn nullable(kind: ScalarKind) -> Self {
        Self {
            name: format!("opt_{}", kind.name()),
            category: Category::Scalar(kind),
            comparability: Comparability::IndirectionAware,
        }
    }

    /// A user struct compared through its hand-written `equals`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidTypeName`] unless `name` is a plain
    /// Rust identifier.
    pub fn named(name: &str) -> Result<Self, GenerateError> {
        if !is_identifier(name) {
            return Err(GenerateError::InvalidTypeName(name.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            category: Category::IndirectionToNamed,
            comparability: Comparability::ManualEquatable,
        })
    }

    /// Catalog name for scalars (`i32`, `opt_i32`), type name for named types.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn comparability(&self) -> Comparability {
        self.comparability
    }

    /// Rust spelling of one element (`i32`, `Option<String>`, `Point`).
    pub fn element_type(&self, runtime: &str) -> String {
        match (self.category, self.comparability) {
            (Category::Scalar(kind), Comparability::IndirectionAware) => {
                format!("Option<{}>", kind.rust_type(runtime))
            }
            (Category::Scalar(kind), _) => kind.rust_type(runtime),
            (Category::IndirectionToNamed, _) => self.name.clone(),
        }
    }

    /// Name of the generated slice view (`I32Slice`, `OptI32Slice`, `PointSlice`).
    pub fn slice_type(&self) -> String {
        match (self.category, self.comparability) {
            (Category::Scalar(kind), Comparability::IndirectionAware) => {
                format!("Opt{}Slice", kind.camel_name())
            }
            (Category::Scalar(kind), _) => format!("{}Slice", kind.camel_name()),
            (Category::IndirectionToNamed, _) => format!("{}Slice", self.name),
        }
    }

    /// Whether elements can be yielded by copy rather than `clone()`.
    pub fn is_copy(&self) -> bool {
        match self.category {
            Category::Scalar(kind) => kind.is_copy(),
            Category::IndirectionToNamed => false,
        }
    }
}

/// Rust keywords that cannot name a type.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "yield",
];

pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first == '_' || first.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        && name != "_"
        && !KEYWORDS.contains(&name)
}
