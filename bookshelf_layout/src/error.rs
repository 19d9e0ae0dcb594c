// Copyright 2025 the Bookshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration validation errors.

use core::fmt;

/// Names a [`ShelfConfig`](crate::ShelfConfig) field in a [`ConfigError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConfigField {
    /// [`ShelfConfig::container_width`](crate::ShelfConfig::container_width).
    ContainerWidth,
    /// [`ShelfConfig::shelf_height`](crate::ShelfConfig::shelf_height).
    ShelfHeight,
    /// [`ShelfConfig::shelf_start_offset`](crate::ShelfConfig::shelf_start_offset).
    ShelfStartOffset,
    /// [`ShelfConfig::shelf_spacing`](crate::ShelfConfig::shelf_spacing).
    ShelfSpacing,
    /// [`ShelfConfig::book_gap`](crate::ShelfConfig::book_gap).
    BookGap,
    /// [`ShelfConfig::reference_height_cm`](crate::ShelfConfig::reference_height_cm).
    ReferenceHeightCm,
}

impl ConfigField {
    /// Returns the field name as written in Rust source.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ContainerWidth => "container_width",
            Self::ShelfHeight => "shelf_height",
            Self::ShelfStartOffset => "shelf_start_offset",
            Self::ShelfSpacing => "shelf_spacing",
            Self::BookGap => "book_gap",
            Self::ReferenceHeightCm => "reference_height_cm",
        }
    }
}

/// Error returned by [`ShelfConfig::validate`](crate::ShelfConfig::validate).
///
/// A layout pass over an invalid configuration is a programming error, so
/// this type exists for hosts that build configurations from external input
/// (presets, settings) and want to reject them up front.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A field that must be strictly positive was zero or negative.
    NotPositive {
        /// The offending field.
        field: ConfigField,
        /// The value it held.
        value: f64,
    },
    /// A field held NaN or an infinity.
    NotFinite {
        /// The offending field.
        field: ConfigField,
        /// The value it held.
        value: f64,
    },
}

impl ConfigError {
    /// Returns the field that failed validation.
    #[must_use]
    pub fn field(&self) -> ConfigField {
        match *self {
            Self::NotPositive { field, .. } | Self::NotFinite { field, .. } => field,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPositive { field, value } => {
                write!(f, "`{}` must be positive, got {value}", field.name())
            }
            Self::NotFinite { field, value } => {
                write!(f, "`{}` must be finite, got {value}", field.name())
            }
        }
    }
}

impl core::error::Error for ConfigError {}
