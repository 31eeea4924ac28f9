// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Paging contract shared by every generated `page` helper.

use std::ops::Range;

/// Index range of page `page_number` (zero-based) of a sequence of `len`
/// elements split into pages of `page_size`.
///
/// Returns `None` when the page is empty: `page_size` is zero, or the page
/// starts at or past `len` (overflowing offsets included). The last page may
/// be shorter than `page_size`.
#[must_use]
pub fn page_range(len: usize, page_number: usize, page_size: usize) -> Option<Range<usize>> {
    if page_size == 0 {
        return None;
    }
    let start = page_number.checked_mul(page_size)?;
    if start >= len {
        return None;
    }
    let end = start.saturating_add(page_size).min(len);
    Some(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_page() {
        assert_eq!(page_range(10, 0, 3), Some(0..3));
    }

    #[test]
    fn last_page_is_short() {
        assert_eq!(page_range(10, 3, 3), Some(9..10));
    }

    #[test]
    fn page_past_end_is_empty() {
        assert_eq!(page_range(10, 4, 3), None);
        assert_eq!(page_range(9, 3, 3), None);
    }

    #[test]
    fn zero_page_size_is_empty() {
        assert_eq!(page_range(10, 0, 0), None);
    }

    #[test]
    fn empty_sequence_has_no_pages() {
        assert_eq!(page_range(0, 0, 5), None);
    }

    #[test]
    fn overflowing_offset_is_empty() {
        assert_eq!(page_range(10, usize::MAX, 2), None);
        assert_eq!(page_range(usize::MAX, 1, usize::MAX), None);
    }

    proptest! {
        #[test]
        fn pages_tile_the_sequence(len in 0usize..200, size in 1usize..20) {
            let mut covered = Vec::new();
            let mut page = 0;
            while let Some(range) = page_range(len, page, size) {
                prop_assert!(range.len() <= size);
                prop_assert!(!range.is_empty());
                covered.extend(range);
                page += 1;
            }
            prop_assert_eq!(covered, (0..len).collect::<Vec<_>>());
        }
    }
}
