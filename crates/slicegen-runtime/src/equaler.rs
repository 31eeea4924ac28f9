// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The opaque equality capability.
//!
//! Named types get an `impl Equaler` generated for them that downcasts the
//! other side and delegates to the hand-written `equals` method. Algorithms
//! in this module only see `&dyn Equaler`, so one definition serves every
//! generated type.

use std::any::{Any, type_name};

use crate::SliceError;

/// A value that can be compared with another value of unknown concrete type.
pub trait Equaler {
    /// Compares `self` with `other`.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::TypeMismatch`] if `other` is not the same
    /// concrete type as `self`.
    fn equal(&self, other: &dyn Equaler) -> Result<bool, SliceError>;

    /// Exposes the value for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Name of the concrete type, used in mismatch reports.
    fn type_name(&self) -> &'static str {
        type_name::<Self>()
    }
}

/// Downcasts an opaque equality handle to `T`.
///
/// # Errors
///
/// Returns [`SliceError::TypeMismatch`] if `value` does not wrap a `T`.
pub fn expect_type<T: Any>(value: &dyn Equaler) -> Result<&T, SliceError> {
    value
        .as_any()
        .downcast_ref::<T>()
        .ok_or_else(|| SliceError::TypeMismatch {
            expected: type_name::<T>(),
            found: value.type_name(),
        })
}

/// Reports whether any of `items` is equal to `candidate`.
///
/// Comparison goes through `candidate`'s adapter, in order, stopping at the
/// first match. An empty `items` is `Ok(false)`.
///
/// # Errors
///
/// Propagates the first [`SliceError::TypeMismatch`] raised by a comparison.
pub fn contains(items: &[&dyn Equaler], candidate: &dyn Equaler) -> Result<bool, SliceError> {
    for item in items {
        if candidate.equal(*item)? {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Meters(u32);

    #[derive(Debug, PartialEq)]
    struct Name(&'static str);

    impl Equaler for Meters {
        fn equal(&self, other: &dyn Equaler) -> Result<bool, SliceError> {
            let other = expect_type::<Meters>(other)?;
            Ok(self == other)
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    impl Equaler for Name {
        fn equal(&self, other: &dyn Equaler) -> Result<bool, SliceError> {
            let other = expect_type::<Name>(other)?;
            Ok(self == other)
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn expect_type_accepts_matching_type() {
        let value = Meters(3);
        let handle: &dyn Equaler = &value;
        assert_eq!(expect_type::<Meters>(handle), Ok(&Meters(3)));
    }

    #[test]
    fn expect_type_reports_both_names() {
        let value = Name("x");
        let err = expect_type::<Meters>(&value).unwrap_err();
        match err {
            SliceError::TypeMismatch { expected, found } => {
                assert!(expected.ends_with("Meters"));
                assert!(found.ends_with("Name"));
            }
            SliceError::NotFound => panic!("expected TypeMismatch"),
        }
    }

    #[test]
    fn contains_finds_equal_item() {
        let (a, b) = (Meters(1), Meters(2));
        let items: Vec<&dyn Equaler> = vec![&a, &b];
        assert_eq!(contains(&items, &Meters(2)), Ok(true));
        assert_eq!(contains(&items, &Meters(9)), Ok(false));
    }

    #[test]
    fn contains_on_empty_items_is_false() {
        assert_eq!(contains(&[], &Name("anything")), Ok(false));
    }

    #[test]
    fn contains_across_types_is_a_mismatch() {
        let a = Meters(1);
        let items: Vec<&dyn Equaler> = vec![&a];
        assert!(matches!(
            contains(&items, &Name("a")),
            Err(SliceError::TypeMismatch { .. })
        ));
    }
}
