// Copyright 2025 the Bookshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Physical book dimensions as consumed by the layout pass.

use crate::config::MIN_DIMENSION_CM;

/// Thickness, in centimeters, of a loading placeholder.
pub const SKELETON_THICKNESS_CM: f64 = 2.0;

/// Height, in centimeters, of a loading placeholder.
pub const SKELETON_HEIGHT_CM: f64 = 20.0;

/// Physical dimensions of one book, keyed by a caller-chosen id.
///
/// Ids are opaque to the engine. They are copied into the matching
/// [`BookPosition`](crate::BookPosition) and are expected to be unique
/// within one layout pass.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookDimensions<K> {
    /// Stable identifier of the book.
    pub id: K,
    /// Spine thickness in centimeters; drives the rendered width.
    pub thickness_cm: f64,
    /// Book height in centimeters; drives the rendered height.
    pub height_cm: f64,
}

impl<K> BookDimensions<K> {
    /// Creates a new record.
    #[must_use]
    pub fn new(id: K, thickness_cm: f64, height_cm: f64) -> Self {
        Self {
            id,
            thickness_cm,
            height_cm,
        }
    }

    /// Thickness with malformed values replaced by [`MIN_DIMENSION_CM`].
    #[must_use]
    pub fn sanitized_thickness_cm(&self) -> f64 {
        sanitize_cm(self.thickness_cm)
    }

    /// Height with malformed values replaced by [`MIN_DIMENSION_CM`].
    #[must_use]
    pub fn sanitized_height_cm(&self) -> f64 {
        sanitize_cm(self.height_cm)
    }

    /// Returns `true` if either dimension is zero, negative, or not finite.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        !is_well_formed_cm(self.thickness_cm) || !is_well_formed_cm(self.height_cm)
    }
}

fn is_well_formed_cm(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Floors a physical length at [`MIN_DIMENSION_CM`].
///
/// NaN and infinities are treated as malformed too.
pub(crate) fn sanitize_cm(value: f64) -> f64 {
    if is_well_formed_cm(value) {
        value.max(MIN_DIMENSION_CM)
    } else {
        MIN_DIMENSION_CM
    }
}
