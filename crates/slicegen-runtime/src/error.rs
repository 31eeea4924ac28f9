// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Errors returned by generated collection helpers.

use thiserror::Error;

/// A use-time failure of a generated helper.
///
/// These are ordinary values returned to the caller. Generated code never
/// panics on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliceError {
    /// `first` found no element matching the predicate.
    #[error("no element matches the predicate")]
    NotFound,

    /// An equality adapter was handed a value of another concrete type.
    #[error("type mismatch: expected `{expected}`, found `{found}`")]
    TypeMismatch {
        /// Type the adapter was generated for.
        expected: &'static str,
        /// Concrete type of the value it was given.
        found: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message() {
        assert_eq!(
            SliceError::NotFound.to_string(),
            "no element matches the predicate"
        );
    }

    #[test]
    fn type_mismatch_message_names_both_types() {
        let err = SliceError::TypeMismatch {
            expected: "shapes::Point",
            found: "shapes::Label",
        };
        assert_eq!(
            err.to_string(),
            "type mismatch: expected `shapes::Point`, found `shapes::Label`"
        );
    }
}
