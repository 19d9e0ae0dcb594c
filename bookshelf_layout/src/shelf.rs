// Copyright 2025 the Bookshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained host-side state that decides when to re-run the layout pass.
//!
//! [`compute_layout`] is pure and keeps nothing between calls. A UI still
//! needs to remember the inputs it last laid out: the ordered books, the
//! number of books currently being added, and the screen width. [`Shelf`]
//! holds exactly that, caches the last [`LayoutResult`], and throws it away
//! only when an input actually changes.
//!
//! ```rust
//! use bookshelf_layout::{BookDimensions, Shelf};
//!
//! let mut shelf = Shelf::new(390.0);
//! shelf.begin_loading();
//! assert_eq!(shelf.layout().skeleton_positions().len(), 1);
//!
//! // The metadata arrived: swap the placeholder for the real book.
//! shelf.finish_loading();
//! shelf.push_book(BookDimensions::new("dune", 3.8, 21.0));
//! assert_eq!(shelf.layout().positions().len(), 1);
//! assert!(shelf.layout().skeleton_positions().is_empty());
//! ```

use alloc::vec::Vec;

use crate::book::BookDimensions;
use crate::config::{ShelfConfig, ShelfRatios};
use crate::emphasis::compute_emphasis_scale;
use crate::layout::{LayoutResult, compute_layout};

/// Books, placeholders, and viewport of one on-screen shelf.
///
/// Every mutator that changes an input bumps [`Shelf::revision`] and drops
/// the cached layout; mutators that leave the inputs as they were do
/// neither. [`Shelf::layout`] recomputes on demand.
///
/// Book ids are expected to be unique: lookups by id act on the first
/// match, and [`Shelf::push_book`] refuses an id that is already shelved.
///
/// Any screen width is accepted, including zero before the first
/// measurement. While the width leaves no room for a shelf the layout is
/// empty and emphasis stays flat.
#[derive(Clone, Debug)]
pub struct Shelf<K> {
    ratios: ShelfRatios,
    screen_width: f64,
    books: Vec<BookDimensions<K>>,
    skeleton_count: usize,
    revision: u64,
    cached: Option<LayoutResult<K>>,
}

impl<K: Clone + PartialEq> Shelf<K> {
    /// Creates an empty shelf with [`ShelfRatios::default`].
    #[must_use]
    pub fn new(screen_width: f64) -> Self {
        Self::with_ratios(ShelfRatios::default(), screen_width)
    }

    /// Creates an empty shelf with custom ratios.
    #[must_use]
    pub fn with_ratios(ratios: ShelfRatios, screen_width: f64) -> Self {
        Self {
            ratios,
            screen_width,
            books: Vec::new(),
            skeleton_count: 0,
            revision: 0,
            cached: None,
        }
    }

    /// Monotonic counter of input changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Current ratios.
    #[must_use]
    pub fn ratios(&self) -> &ShelfRatios {
        &self.ratios
    }

    /// Replaces the ratios.
    pub fn set_ratios(&mut self, ratios: ShelfRatios) {
        if self.ratios != ratios {
            self.ratios = ratios;
            self.invalidate();
        }
    }

    /// Current screen width.
    #[must_use]
    pub fn screen_width(&self) -> f64 {
        self.screen_width
    }

    /// Updates the screen width, e.g. after a rotation.
    pub fn set_screen_width(&mut self, screen_width: f64) {
        if self.screen_width != screen_width {
            self.screen_width = screen_width;
            self.invalidate();
        }
    }

    /// Pixel configuration for the current screen width.
    #[must_use]
    pub fn config(&self) -> ShelfConfig {
        self.ratios.config_for_screen_width(self.screen_width)
    }

    /// Books in shelving order.
    #[must_use]
    pub fn books(&self) -> &[BookDimensions<K>] {
        &self.books
    }

    /// Replaces the whole collection, e.g. after loading it from storage.
    ///
    /// Ids are not checked for uniqueness here.
    pub fn set_books(&mut self, books: impl IntoIterator<Item = BookDimensions<K>>) {
        let books: Vec<_> = books.into_iter().collect();
        if self.books != books {
            self.books = books;
            self.invalidate();
        }
    }

    /// Appends a book at the end of the shelf.
    ///
    /// Returns `false`, leaving the shelf unchanged, if a book with the same
    /// id is already shelved.
    pub fn push_book(&mut self, book: BookDimensions<K>) -> bool {
        if self.books.iter().any(|b| b.id == book.id) {
            return false;
        }
        self.books.push(book);
        self.invalidate();
        true
    }

    /// Replaces the dimensions of the book with the same id.
    ///
    /// Returns `false` if no such book exists.
    pub fn update_book(&mut self, book: BookDimensions<K>) -> bool {
        let Some(slot) = self.books.iter_mut().find(|b| b.id == book.id) else {
            return false;
        };
        if *slot != book {
            *slot = book;
            self.invalidate();
        }
        true
    }

    /// Removes a book by id, returning it.
    pub fn remove_book(&mut self, id: &K) -> Option<BookDimensions<K>> {
        let index = self.books.iter().position(|b| b.id == *id)?;
        let book = self.books.remove(index);
        self.invalidate();
        Some(book)
    }

    /// Moves the book at `from` so that it ends up at index `to`.
    ///
    /// `to` indexes the order *after* the book has been taken out, so it must
    /// be below `books().len()`. To apply a drop point from
    /// [`LayoutResult::insertion_index_at`], use [`Shelf::move_book_before`].
    /// Returns `false` if either index is out of range.
    pub fn move_book(&mut self, from: usize, to: usize) -> bool {
        let len = self.books.len();
        if from >= len || to >= len {
            return false;
        }
        if from != to {
            let book = self.books.remove(from);
            self.books.insert(to, book);
            self.invalidate();
        }
        true
    }

    /// Moves the book at `from` in front of the book currently at `before`.
    ///
    /// `before` indexes the current order and may equal `books().len()` to
    /// move the book to the end, matching the range of
    /// [`LayoutResult::insertion_index_at`]. Returns `false` if either index
    /// is out of range.
    pub fn move_book_before(&mut self, from: usize, before: usize) -> bool {
        if from >= self.books.len() || before > self.books.len() {
            return false;
        }
        let to = if from < before { before - 1 } else { before };
        self.move_book(from, to)
    }

    /// Number of placeholders shown for books still being added.
    #[must_use]
    pub fn skeleton_count(&self) -> usize {
        self.skeleton_count
    }

    /// Sets the placeholder count.
    pub fn set_skeleton_count(&mut self, count: usize) {
        if self.skeleton_count != count {
            self.skeleton_count = count;
            self.invalidate();
        }
    }

    /// Adds one placeholder.
    pub fn begin_loading(&mut self) {
        self.set_skeleton_count(self.skeleton_count.saturating_add(1));
    }

    /// Removes one placeholder, if any.
    pub fn finish_loading(&mut self) {
        self.set_skeleton_count(self.skeleton_count.saturating_sub(1));
    }

    /// Returns the layout for the current inputs, computing it if needed.
    ///
    /// If the current screen width does not yield a valid [`ShelfConfig`]
    /// (zero, or narrower than the side padding), the layout is empty with
    /// zero height.
    pub fn layout(&mut self) -> &LayoutResult<K> {
        let config = self.config();
        self.cached.get_or_insert_with(|| {
            if config.validate().is_ok() {
                compute_layout(&self.books, self.skeleton_count, &config)
            } else {
                LayoutResult::empty(config)
            }
        })
    }

    /// Emphasis scales for the current books; see [`compute_emphasis_scale`].
    ///
    /// A scroll offset is ignored unless it is finite and the screen width is
    /// positive.
    #[must_use]
    pub fn emphasis(&self, selected: Option<&K>, scroll_offset: Option<f64>) -> Vec<f64> {
        let width = self.screen_width;
        let scroll_offset = scroll_offset
            .filter(|offset| offset.is_finite() && width.is_finite() && width > 0.0);
        compute_emphasis_scale(&self.books, selected, scroll_offset, width)
    }

    fn invalidate(&mut self) {
        self.cached = None;
        self.revision = self.revision.wrapping_add(1);
    }
}
