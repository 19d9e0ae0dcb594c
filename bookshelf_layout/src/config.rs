// Copyright 2025 the Bookshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shelf geometry: pixel-space configuration and its screen-relative source.

use crate::error::{ConfigError, ConfigField};

/// Smallest physical length, in centimeters, the engine will divide by.
///
/// Book dimensions and the reference height are floored at this value so a
/// malformed record can never produce a division by zero.
pub const MIN_DIMENSION_CM: f64 = 1e-3;

/// Pixel-space geometry for one layout pass.
///
/// All values are in logical pixels except [`reference_height_cm`], which
/// anchors the physical scale: a book exactly `reference_height_cm` tall is
/// drawn `shelf_height` pixels tall.
///
/// Hosts normally derive this from the current screen width with
/// [`ShelfRatios::config_for_screen_width`] and rebuild it whenever the
/// viewport width changes.
///
/// [`reference_height_cm`]: Self::reference_height_cm
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShelfConfig {
    /// Horizontal space available for packing, after side padding.
    pub container_width: f64,
    /// Maximum height of a rendered spine; taller books are scaled down.
    pub shelf_height: f64,
    /// Y coordinate of the bottom edge of the first (topmost) shelf row.
    pub shelf_start_offset: f64,
    /// Vertical distance between the bottom edges of consecutive rows.
    pub shelf_spacing: f64,
    /// Horizontal gap between adjacent spines; may be zero or negative.
    pub book_gap: f64,
    /// Physical height, in centimeters, that maps to `shelf_height` pixels.
    pub reference_height_cm: f64,
}

impl ShelfConfig {
    /// Checks the configuration against the engine's preconditions.
    ///
    /// `container_width`, `shelf_height`, and `reference_height_cm` must be
    /// finite and strictly positive. The remaining fields must be finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            (ConfigField::ContainerWidth, self.container_width),
            (ConfigField::ShelfHeight, self.shelf_height),
            (ConfigField::ReferenceHeightCm, self.reference_height_cm),
        ];
        let finite = [
            (ConfigField::ShelfStartOffset, self.shelf_start_offset),
            (ConfigField::ShelfSpacing, self.shelf_spacing),
            (ConfigField::BookGap, self.book_gap),
        ];
        for (field, value) in positive.into_iter().chain(finite) {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        Ok(())
    }

    /// Pixels per physical centimeter.
    ///
    /// The reference height is floored at [`MIN_DIMENSION_CM`].
    #[must_use]
    pub fn pixels_per_cm(&self) -> f64 {
        self.shelf_height.max(0.0) / self.reference_height_cm.max(MIN_DIMENSION_CM)
    }

    /// Y coordinate of the bottom edge of shelf row `row`.
    #[must_use]
    pub fn row_baseline(&self, row: usize) -> f64 {
        self.shelf_start_offset + row as f64 * self.shelf_spacing
    }
}

/// Screen-width-relative shelf description.
///
/// Shelf artwork scales with the device width, so the pixel geometry of a
/// shelf is expressed as fractions of the screen width and resolved into a
/// [`ShelfConfig`] on every viewport change.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShelfRatios {
    /// Fixed padding subtracted from each side of the screen.
    pub side_padding: f64,
    /// Shelf height as a fraction of the screen width.
    pub shelf_height: f64,
    /// Row spacing as a fraction of the screen width.
    pub shelf_spacing: f64,
    /// First row baseline as a fraction of the screen width.
    pub shelf_start: f64,
    /// Gap between books, in pixels (not scaled).
    pub book_gap: f64,
    /// Physical height that fills a shelf, in centimeters.
    pub reference_height_cm: f64,
}

impl ShelfRatios {
    /// Default side padding, in pixels.
    pub const DEFAULT_SIDE_PADDING: f64 = 34.5;
    /// Default shelf height ratio.
    pub const DEFAULT_SHELF_HEIGHT: f64 = 0.62;
    /// Default row spacing ratio.
    pub const DEFAULT_SHELF_SPACING: f64 = 0.685;
    /// Default first-row ratio.
    pub const DEFAULT_SHELF_START: f64 = 0.77;
    /// Default gap between books, in pixels.
    pub const DEFAULT_BOOK_GAP: f64 = 2.0;
    /// Default reference height, in centimeters.
    pub const DEFAULT_REFERENCE_HEIGHT_CM: f64 = 30.0;

    /// Resolves the ratios against a concrete screen width.
    ///
    /// The container width never goes below zero, even on screens narrower
    /// than the combined padding; such a configuration fails
    /// [`ShelfConfig::validate`].
    #[must_use]
    pub fn config_for_screen_width(&self, screen_width: f64) -> ShelfConfig {
        ShelfConfig {
            container_width: (screen_width - 2.0 * self.side_padding).max(0.0),
            shelf_height: screen_width * self.shelf_height,
            shelf_start_offset: screen_width * self.shelf_start,
            shelf_spacing: screen_width * self.shelf_spacing,
            book_gap: self.book_gap,
            reference_height_cm: self.reference_height_cm,
        }
    }
}

impl Default for ShelfRatios {
    fn default() -> Self {
        Self {
            side_padding: Self::DEFAULT_SIDE_PADDING,
            shelf_height: Self::DEFAULT_SHELF_HEIGHT,
            shelf_spacing: Self::DEFAULT_SHELF_SPACING,
            shelf_start: Self::DEFAULT_SHELF_START,
            book_gap: Self::DEFAULT_BOOK_GAP,
            reference_height_cm: Self::DEFAULT_REFERENCE_HEIGHT_CM,
        }
    }
}
