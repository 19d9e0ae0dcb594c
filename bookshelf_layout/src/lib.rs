// Copyright 2025 the Bookshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bookshelf_layout --heading-base-level=0

//! Bookshelf Layout: packing book spines onto a virtual shelf.
//!
//! This crate turns a list of physical books (spine thickness and height in
//! centimeters) into pixel frames on a fixed-width shelf with as many rows as
//! needed, the way books actually sit on a bookcase:
//!
//! - Each spine is sized from its physical dimensions at a common
//!   pixels-per-centimeter scale. A book taller than the shelf is scaled down
//!   uniformly, never distorted.
//! - Spines are packed left to right in shelving order and wrap onto the next
//!   row when the current one is full.
//! - Every spine stands on its row's shelf line, whatever its height.
//! - Placeholders for books that are still being added continue the packing
//!   after the last real book.
//!
//! The core concepts are:
//!
//! - [`BookDimensions`]: the input record, generic over the caller's id type.
//! - [`ShelfConfig`]: pixel geometry for one pass, usually derived from the
//!   screen width with [`ShelfRatios`].
//! - [`compute_layout`]: the packing pass, producing a [`LayoutResult`] with
//!   one [`BookPosition`] per book, placeholder frames, and the total height.
//! - [`compute_emphasis_scale`]: the small size bump given to the selected or
//!   scroll-centered book.
//! - [`Shelf`]: host-side retained inputs with a cached layout.
//!
//! This crate deliberately does **not** render, animate, or recognize
//! gestures. Hosts own the book collection and the views; they re-run the
//! layout whenever the books, the placeholder count, or the viewport width
//! change, and draw the resulting frames.
//!
//! ## Minimal example
//!
//! ```rust
//! use bookshelf_layout::{BookDimensions, ShelfConfig, compute_layout};
//!
//! let config = ShelfConfig {
//!     container_width: 300.0,
//!     shelf_height: 200.0,
//!     shelf_start_offset: 250.0,
//!     shelf_spacing: 260.0,
//!     book_gap: 2.0,
//!     reference_height_cm: 30.0,
//! };
//! let books = [
//!     BookDimensions::new(1_u32, 3.0, 20.0),
//!     BookDimensions::new(2, 3.0, 20.0),
//! ];
//!
//! let layout = compute_layout(&books, 0, &config);
//! let second = &layout.positions()[1];
//! assert_eq!(second.book_id, 2);
//! assert_eq!(second.frame.shelf_row, 0);
//! // Spines stand on the first shelf line.
//! assert!((second.frame.bottom() - 250.0).abs() < 1e-9);
//! assert_eq!(layout.total_height(), 550.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo's `std` feature.
//! - `libm`: forwards to Kurbo's `libm` feature for `no_std` builds.
//! - `serde`: `Serialize`/`Deserialize` for [`ShelfConfig`], [`ShelfRatios`],
//!   and [`BookDimensions`].
//! - `tracing`: spans and events from the layout pass (row wraps, substituted
//!   dimensions, oversized spines).
//!
//! All lengths are logical pixels unless a name ends in `_cm`.
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod book;
mod config;
mod emphasis;
mod error;
mod layout;
mod shelf;
mod spine;

pub use book::{BookDimensions, SKELETON_HEIGHT_CM, SKELETON_THICKNESS_CM};
pub use config::{MIN_DIMENSION_CM, ShelfConfig, ShelfRatios};
pub use emphasis::{EMPHASIS_FALLOFF, EMPHASIS_PEAK, compute_emphasis_scale, emphasis_for_index};
pub use error::{ConfigError, ConfigField};
pub use layout::{
    BookPosition, LayoutResult, ShelfHit, SpineFrame, TRAILING_SHELF_FACTOR, compute_layout,
    estimate_shelf_rows,
};
pub use shelf::Shelf;
pub use spine::spine_size;
