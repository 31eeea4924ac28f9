// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Equality strategy: which comparison code a type receives.
//!
//! This is a generation-time decision table, not a runtime component.
//! Every strategy emits statements that bind the outcome to [`ARE_EQUAL`],
//! so callers can splice the comparison into any loop body.
//!
//! | Comparability | Emitted comparison |
//! |---|---|
//! | `DirectEquatable` | `left == right` |
//! | `IndirectionAware` | both `None` ⇒ equal, one `None` ⇒ not equal, else compare values |
//! | `ManualEquatable` | downcast `right` to the type, then the hand-written `equals` |

use crate::codegen::Stmt;
use crate::types::{Comparability, TypeDescriptor};

/// Name of the boolean every strategy binds.
pub const ARE_EQUAL: &str = "are_equal";

/// How two elements of one type are compared in generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EqualityStrategy {
    /// `==` on the values.
    Direct,
    /// Null-aware comparison of two `Option`s.
    IndirectionAware,
    /// Downcast through the runtime, then call `{type_name}::equals`.
    Delegated { type_name: String },
}

impl EqualityStrategy {
    /// Picks the strategy for `desc`.
    pub fn for_type(desc: &TypeDescriptor) -> Self {
        match desc.comparability() {
            Comparability::DirectEquatable => EqualityStrategy::Direct,
            Comparability::IndirectionAware => EqualityStrategy::IndirectionAware,
            Comparability::ManualEquatable => EqualityStrategy::Delegated {
                type_name: desc.name().to_string(),
            },
        }
    }

    /// Statements comparing the expressions `left` and `right`, binding
    /// [`ARE_EQUAL`].
    ///
    /// `Direct` and `IndirectionAware` expect two references to elements.
    /// `Delegated` expects `left` to be a reference to the type and `right`
    /// an opaque `&dyn Equaler`; the emitted code uses `?` and must sit in a
    /// function returning `Result<_, SliceError>`.
    pub fn statements(&self, left: &str, right: &str, runtime: &str) -> Vec<Stmt> {
        match self {
            EqualityStrategy::Direct => {
                vec![Stmt::line(format!("let {ARE_EQUAL} = {left} == {right};"))]
            }
            EqualityStrategy::IndirectionAware => vec![Stmt::block_statement(
                format!("let {ARE_EQUAL} = match ({left}, {right})"),
                vec![
                    Stmt::line("(None, None) => true,"),
                    Stmt::line("(Some(left), Some(right)) => left == right,"),
                    Stmt::line("_ => false,"),
                ],
            )],
            EqualityStrategy::Delegated { type_name } => vec![
                Stmt::line(format!(
                    "let {right} = {runtime}::expect_type::<{type_name}>({right})?;"
                )),
                Stmt::line(format!(
                    "let {ARE_EQUAL} = {type_name}::equals({left}, {right});"
                )),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::{Backend, GeneratedArtifact, Item, OperationSpec, RustBackend};
    use crate::types::ScalarKind;
    use camino::Utf8PathBuf;

    const RUNTIME: &str = "::slicegen_runtime";

    fn render(stmts: Vec<Stmt>) -> String {
        let artifact = GeneratedArtifact {
            destination: Utf8PathBuf::from("t.rs"),
            package: "t".to_string(),
            header: Vec::new(),
            items: vec![Item::Impl {
                generics: None,
                trait_path: None,
                target: "T".to_string(),
                operations: vec![OperationSpec::method("f").body(stmts)],
            }],
        };
        let text = RustBackend.render(&artifact);
        // Keep only the body lines, dedented.
        text.lines()
            .skip(4)
            .take_while(|l| *l != "    }")
            .map(|l| l.strip_prefix("        ").unwrap_or(l))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn strategy_follows_comparability() {
        assert_eq!(
            EqualityStrategy::for_type(&TypeDescriptor::scalar(ScalarKind::F64)),
            EqualityStrategy::Direct
        );
        assert_eq!(
            EqualityStrategy::for_type(&TypeDescriptor::nullable(ScalarKind::F64)),
            EqualityStrategy::IndirectionAware
        );
        assert_eq!(
            EqualityStrategy::for_type(&TypeDescriptor::named("Point").unwrap()),
            EqualityStrategy::Delegated {
                type_name: "Point".to_string()
            }
        );
    }

    #[test]
    fn direct_comparison() {
        let stmts = EqualityStrategy::Direct.statements("item", "candidate", RUNTIME);
        assert_eq!(render(stmts), "let are_equal = item == candidate;");
    }

    #[test]
    fn indirection_aware_comparison() {
        let stmts = EqualityStrategy::IndirectionAware.statements("item", "other_item", RUNTIME);
        assert_eq!(
            render(stmts),
            "let are_equal = match (item, other_item) {\n    \
             (None, None) => true,\n    \
             (Some(left), Some(right)) => left == right,\n    \
             _ => false,\n\
             };"
        );
    }

    #[test]
    fn delegated_comparison_downcasts_first() {
        let strategy = EqualityStrategy::Delegated {
            type_name: "Point".to_string(),
        };
        let stmts = strategy.statements("self", "other", RUNTIME);
        assert_eq!(
            render(stmts),
            "let other = ::slicegen_runtime::expect_type::<Point>(other)?;\n\
             let are_equal = Point::equals(self, other);"
        );
    }
}
