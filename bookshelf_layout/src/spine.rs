// Copyright 2025 the Bookshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-book sizing: physical centimeters to spine pixels.

use kurbo::Size;

use crate::book::sanitize_cm;
use crate::config::ShelfConfig;

/// Returns the rendered spine size of a book.
///
/// Width follows thickness and height follows height, both at
/// [`ShelfConfig::pixels_per_cm`]. A book that would be drawn taller than
/// [`ShelfConfig::shelf_height`] is scaled down uniformly so its height is
/// exactly the shelf height and its aspect ratio is unchanged.
///
/// Malformed dimensions are floored at
/// [`MIN_DIMENSION_CM`](crate::MIN_DIMENSION_CM) first.
#[must_use]
pub fn spine_size(thickness_cm: f64, height_cm: f64, config: &ShelfConfig) -> Size {
    let ppcm = config.pixels_per_cm();
    let raw_width = sanitize_cm(thickness_cm) * ppcm;
    let raw_height = sanitize_cm(height_cm) * ppcm;
    let bound = config.shelf_height.max(0.0);
    if raw_height > bound {
        Size::new(raw_width * (bound / raw_height), bound)
    } else {
        Size::new(raw_width, raw_height)
    }
}
