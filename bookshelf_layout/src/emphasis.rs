// Copyright 2025 the Bookshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Emphasis scale for the focused book in a paging detail view.
//!
//! When the detail view is closed, the selected book is drawn slightly
//! larger. While the user pages horizontally through the detail view, the
//! emphasis follows the scroll position continuously: it peaks when a book
//! is centered and fades out within half a page.

use alloc::vec;
use alloc::vec::Vec;

use crate::book::BookDimensions;

/// Scale applied to a fully emphasized book.
pub const EMPHASIS_PEAK: f64 = 1.05;

/// Distance, in pages, over which emphasis falls from the peak to `1.0`.
pub const EMPHASIS_FALLOFF: f64 = 0.5;

/// Emphasis of the book at `index` when the pager sits at `current_index`.
///
/// `current_index` is fractional: `2.5` is halfway between the third and
/// fourth page. The result is always in `1.0..=EMPHASIS_PEAK`.
#[must_use]
pub fn emphasis_for_index(index: usize, current_index: f64) -> f64 {
    let distance = (current_index - index as f64).abs();
    let factor = (1.0 - distance / EMPHASIS_FALLOFF).clamp(0.0, 1.0);
    if factor.is_nan() {
        return 1.0;
    }
    1.0 + (EMPHASIS_PEAK - 1.0) * factor
}

/// Per-book emphasis scales, one per book in input order.
///
/// - `scroll_offset` is `None` while the detail view is closed. Every book
///   then scales by `1.0` except the one whose id equals `selected`, which
///   scales by [`EMPHASIS_PEAK`].
/// - Otherwise the pager position is `scroll_offset / screen_width` and each
///   book's scale comes from [`emphasis_for_index`]; `selected` is ignored.
///
/// `screen_width` must be positive and `scroll_offset` finite while the
/// detail view is open. Both are checked in debug builds; in release builds
/// a violation falls back to the closed-view behavior.
#[must_use]
pub fn compute_emphasis_scale<K: PartialEq>(
    books: &[BookDimensions<K>],
    selected: Option<&K>,
    scroll_offset: Option<f64>,
    screen_width: f64,
) -> Vec<f64> {
    let current_index = scroll_offset.and_then(|offset| {
        debug_assert!(
            offset.is_finite() && screen_width > 0.0 && screen_width.is_finite(),
            "invalid pager state: offset {offset}, screen width {screen_width}"
        );
        (offset.is_finite() && screen_width > 0.0).then_some(offset / screen_width)
    });

    match current_index {
        Some(current_index) => (0..books.len())
            .map(|index| emphasis_for_index(index, current_index))
            .collect(),
        None => {
            let mut scales = vec![1.0; books.len()];
            if let Some(selected) = selected
                && let Some(index) = books.iter().position(|book| book.id == *selected)
            {
                scales[index] = EMPHASIS_PEAK;
            }
            scales
        }
    }
}
