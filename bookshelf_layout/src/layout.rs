// Copyright 2025 the Bookshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shelf packing pass and its result.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::book::{BookDimensions, SKELETON_HEIGHT_CM, SKELETON_THICKNESS_CM};
use crate::config::ShelfConfig;
use crate::spine::spine_size;

/// Headroom below the last row, as a multiple of the shelf height.
pub const TRAILING_SHELF_FACTOR: f64 = 1.5;

/// Pixel frame of one placed spine.
///
/// `x`/`y` is the top-left corner. The bottom edge `y + height` sits on the
/// baseline of `shelf_row`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpineFrame {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Rendered width after clamping.
    pub width: f64,
    /// Rendered height after clamping.
    pub height: f64,
    /// Zero-based shelf row.
    pub shelf_row: usize,
}

impl SpineFrame {
    /// Top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Rendered size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Bounding rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin(), self.size())
    }

    /// Bottom edge, i.e. the shelf line the spine stands on.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Placement of one real book.
#[derive(Clone, Debug, PartialEq)]
pub struct BookPosition<K> {
    /// Id of the source [`BookDimensions`].
    pub book_id: K,
    /// Where the spine is drawn.
    pub frame: SpineFrame,
}

/// What a point on the shelf lands on; see [`LayoutResult::hit_test`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShelfHit {
    /// Index into [`LayoutResult::positions`].
    Book(usize),
    /// Index into [`LayoutResult::skeleton_positions`].
    Skeleton(usize),
}

/// Output of [`compute_layout`].
///
/// A result is never updated in place: any change to the books, the
/// placeholder count, or the configuration calls for a fresh pass.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutResult<K> {
    positions: Vec<BookPosition<K>>,
    skeleton_positions: Vec<SpineFrame>,
    total_height: f64,
    row_count: usize,
    config: ShelfConfig,
}

impl<K> LayoutResult<K> {
    /// A result with nothing placed and zero height.
    pub(crate) fn empty(config: ShelfConfig) -> Self {
        Self {
            positions: Vec::new(),
            skeleton_positions: Vec::new(),
            total_height: 0.0,
            row_count: 0,
            config,
        }
    }

    /// One position per input book, in input order.
    #[must_use]
    pub fn positions(&self) -> &[BookPosition<K>] {
        &self.positions
    }

    /// Placeholder frames, continuing after the last real book.
    #[must_use]
    pub fn skeleton_positions(&self) -> &[SpineFrame] {
        &self.skeleton_positions
    }

    /// Container height needed to show every row, trailing margin included.
    ///
    /// Zero when nothing was placed.
    #[must_use]
    pub fn total_height(&self) -> f64 {
        self.total_height
    }

    /// Number of shelf rows used by books and placeholders together.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// The configuration this result was computed with.
    #[must_use]
    pub fn config(&self) -> &ShelfConfig {
        &self.config
    }

    /// Returns `true` if neither books nor placeholders were placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.skeleton_positions.is_empty()
    }

    /// Baseline Y of every used row, top to bottom.
    #[must_use]
    pub fn shelf_baselines(&self) -> Vec<f64> {
        (0..self.row_count)
            .map(|row| self.config.row_baseline(row))
            .collect()
    }

    /// Union of all spine frames, or `None` if nothing was placed.
    #[must_use]
    pub fn content_bounds(&self) -> Option<Rect> {
        self.frames().map(SpineFrame::rect).reduce(|a, b| a.union(b))
    }

    /// Returns the book or placeholder under `point`.
    ///
    /// Spines may overlap when the gap is negative; later items are drawn on
    /// top and therefore win.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<ShelfHit> {
        let skeleton = self
            .skeleton_positions
            .iter()
            .rposition(|frame| frame.rect().contains(point))
            .map(ShelfHit::Skeleton);
        skeleton.or_else(|| {
            self.positions
                .iter()
                .rposition(|position| position.frame.rect().contains(point))
                .map(ShelfHit::Book)
        })
    }

    /// Index in shelving order at which a book dropped at `point` belongs.
    ///
    /// The row is the first one whose baseline is at or below `point.y`
    /// (the last book row if `point` is below every baseline). Within that
    /// row, the book goes before the first spine whose horizontal center is
    /// right of `point.x`, or after the row's last spine.
    ///
    /// Placeholders are ignored. The result is in `0..=positions().len()`.
    #[must_use]
    pub fn insertion_index_at(&self, point: Point) -> usize {
        let Some(last) = self.positions.last() else {
            return 0;
        };
        let last_row = last.frame.shelf_row;
        let row = (0..=last_row)
            .find(|&row| point.y <= self.config.row_baseline(row))
            .unwrap_or(last_row);

        let mut after_row = 0;
        for (index, position) in self.positions.iter().enumerate() {
            let frame = &position.frame;
            if frame.shelf_row < row {
                continue;
            }
            if frame.shelf_row > row {
                break;
            }
            if point.x < frame.x + frame.width * 0.5 {
                return index;
            }
            after_row = index + 1;
        }
        after_row
    }

    /// Looks up the position of a book by id.
    #[must_use]
    pub fn position_of(&self, book_id: &K) -> Option<&BookPosition<K>>
    where
        K: PartialEq,
    {
        self.positions.iter().find(|p| p.book_id == *book_id)
    }

    fn frames(&self) -> impl Iterator<Item = &SpineFrame> + '_ {
        self.positions
            .iter()
            .map(|p| &p.frame)
            .chain(self.skeleton_positions.iter())
    }
}

/// Greedy row packer shared by [`compute_layout`] and [`estimate_shelf_rows`].
#[derive(Debug)]
struct ShelfPacker<'a> {
    config: &'a ShelfConfig,
    cursor_x: f64,
    row: usize,
    row_occupied: bool,
    placed: usize,
}

impl<'a> ShelfPacker<'a> {
    fn new(config: &'a ShelfConfig) -> Self {
        Self {
            config,
            cursor_x: 0.0,
            row: 0,
            row_occupied: false,
            placed: 0,
        }
    }

    /// Places the next spine, wrapping first if it does not fit.
    ///
    /// The first spine on a row is never wrapped, so a spine wider than the
    /// container still gets a row of its own.
    fn place(&mut self, size: Size) -> SpineFrame {
        if self.row_occupied && self.cursor_x + size.width > self.config.container_width {
            self.row += 1;
            self.cursor_x = 0.0;
            self.row_occupied = false;
            #[cfg(feature = "tracing")]
            tracing::trace!(row = self.row, index = self.placed, "wrapped to next shelf");
        }
        #[cfg(feature = "tracing")]
        if size.width > self.config.container_width {
            tracing::debug!(
                width = size.width,
                container_width = self.config.container_width,
                "spine wider than the shelf"
            );
        }

        let baseline = self.config.row_baseline(self.row);
        let frame = SpineFrame {
            x: self.cursor_x,
            y: baseline - size.height,
            width: size.width,
            height: size.height,
            shelf_row: self.row,
        };
        self.cursor_x += size.width + self.config.book_gap;
        self.row_occupied = true;
        self.placed += 1;
        frame
    }

    fn rows_used(&self) -> usize {
        if self.placed == 0 { 0 } else { self.row + 1 }
    }
}

fn skeleton_size(config: &ShelfConfig) -> Size {
    spine_size(SKELETON_THICKNESS_CM, SKELETON_HEIGHT_CM, config)
}

/// Packs books, then `skeleton_count` placeholders, onto shelf rows.
///
/// Books are placed left to right in input order; a spine that would cross
/// `config.container_width` starts a new row at `x = 0`. Every spine is
/// bottom-aligned on its row's baseline. Placeholders use the
/// [`SKELETON_THICKNESS_CM`] by [`SKELETON_HEIGHT_CM`] default size and
/// continue on the row where the last book ended.
///
/// The total height is the last used row's baseline plus
/// [`TRAILING_SHELF_FACTOR`] shelf heights, or zero when nothing is placed.
///
/// `config` must satisfy [`ShelfConfig::validate`]; this is checked in debug
/// builds only.
#[must_use]
pub fn compute_layout<K: Clone>(
    books: &[BookDimensions<K>],
    skeleton_count: usize,
    config: &ShelfConfig,
) -> LayoutResult<K> {
    debug_assert!(
        config.validate().is_ok(),
        "invalid shelf configuration: {config:?}"
    );
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "compute_layout",
        books = books.len(),
        skeletons = skeleton_count
    )
    .entered();

    let mut packer = ShelfPacker::new(config);
    let positions: Vec<_> = books
        .iter()
        .map(|book| {
            #[cfg(feature = "tracing")]
            if book.is_malformed() {
                tracing::debug!(
                    thickness_cm = book.thickness_cm,
                    height_cm = book.height_cm,
                    "substituting minimum book dimensions"
                );
            }
            let size = spine_size(book.thickness_cm, book.height_cm, config);
            BookPosition {
                book_id: book.id.clone(),
                frame: packer.place(size),
            }
        })
        .collect();

    let skeleton = skeleton_size(config);
    let skeleton_positions: Vec<_> = (0..skeleton_count)
        .map(|_| packer.place(skeleton))
        .collect();

    let row_count = packer.rows_used();
    let total_height = match row_count {
        0 => 0.0,
        rows => config.row_baseline(rows - 1) + config.shelf_height * TRAILING_SHELF_FACTOR,
    };

    LayoutResult {
        positions,
        skeleton_positions,
        total_height,
        row_count,
        config: *config,
    }
}

/// Number of shelf rows [`compute_layout`] would use for the same input.
///
/// Runs the same packer without collecting frames, so the two always agree.
#[must_use]
pub fn estimate_shelf_rows<K>(
    books: &[BookDimensions<K>],
    skeleton_count: usize,
    config: &ShelfConfig,
) -> usize {
    let mut packer = ShelfPacker::new(config);
    for book in books {
        packer.place(spine_size(book.thickness_cm, book.height_cm, config));
    }
    let skeleton = skeleton_size(config);
    for _ in 0..skeleton_count {
        packer.place(skeleton);
    }
    packer.rows_used()
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::Point;

    use super::{ShelfHit, compute_layout, estimate_shelf_rows};
    use crate::book::BookDimensions;
    use crate::config::ShelfConfig;

    fn config() -> ShelfConfig {
        ShelfConfig {
            container_width: 300.0,
            shelf_height: 200.0,
            shelf_start_offset: 250.0,
            shelf_spacing: 260.0,
            book_gap: 2.0,
            reference_height_cm: 30.0,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    /// `count` books, each 3cm thick (20px) and 20cm tall.
    fn row_of_books(count: u32) -> Vec<BookDimensions<u32>> {
        (0..count).map(|id| BookDimensions::new(id, 3.0, 20.0)).collect()
    }

    #[test]
    fn three_books_share_the_first_row() {
        let result = compute_layout(&row_of_books(3), 0, &config());
        let positions = result.positions();
        assert_eq!(positions.len(), 3);

        let expected_x = [0.0, 22.0, 44.0];
        for (position, x) in positions.iter().zip(expected_x) {
            assert_eq!(position.frame.shelf_row, 0);
            assert!(close(position.frame.x, x), "x = {}", position.frame.x);
            assert!(close(position.frame.y, 250.0 - 400.0 / 3.0));
        }
        assert_eq!(result.row_count(), 1);
        assert_eq!(result.total_height(), 550.0);
    }

    #[test]
    fn empty_input_has_zero_height() {
        let result = compute_layout::<u32>(&[], 0, &config());
        assert!(result.is_empty());
        assert_eq!(result.total_height(), 0.0);
        assert_eq!(result.row_count(), 0);
        assert!(result.shelf_baselines().is_empty());
        assert_eq!(result.content_bounds(), None);
    }

    #[test]
    fn overflowing_book_wraps_to_x_zero() {
        // 20px + 2px gap per book: 13 books end at 284, the 14th would end at 306.
        let result = compute_layout(&row_of_books(14), 0, &config());
        let positions = result.positions();
        assert_eq!(positions[12].frame.shelf_row, 0);
        assert_eq!(positions[13].frame.shelf_row, 1);
        assert_eq!(positions[13].frame.x, 0.0);
        assert!(close(positions[13].frame.bottom(), 510.0));
        assert_eq!(result.total_height(), 510.0 + 300.0);
    }

    #[test]
    fn oversized_book_gets_its_own_row() {
        // 50cm thick: 333px wide, wider than the container.
        let books = vec![
            BookDimensions::new(0, 3.0, 20.0),
            BookDimensions::new(1, 50.0, 20.0),
            BookDimensions::new(2, 3.0, 20.0),
        ];
        let result = compute_layout(&books, 0, &config());
        let rows: Vec<_> = result
            .positions()
            .iter()
            .map(|p| p.frame.shelf_row)
            .collect();
        assert_eq!(rows, [0, 1, 2]);
        assert_eq!(result.positions()[1].frame.x, 0.0);
    }

    #[test]
    fn oversized_first_book_does_not_leave_an_empty_row() {
        let books = vec![BookDimensions::new(0, 50.0, 20.0)];
        let result = compute_layout(&books, 0, &config());
        assert_eq!(result.positions()[0].frame.shelf_row, 0);
        assert_eq!(result.row_count(), 1);
    }

    #[test]
    fn skeletons_continue_the_current_row() {
        let result = compute_layout(&row_of_books(2), 2, &config());
        let skeletons = result.skeleton_positions();
        assert_eq!(skeletons.len(), 2);
        assert_eq!(skeletons[0].shelf_row, 0);
        assert!(close(skeletons[0].x, 44.0));
        // 2cm thick at 200/30 px per cm.
        assert!(close(skeletons[0].width, 40.0 / 3.0));
        assert!(close(skeletons[1].x, 44.0 + 40.0 / 3.0 + 2.0));
    }

    #[test]
    fn skeletons_alone_still_produce_a_shelf() {
        let result = compute_layout::<u32>(&[], 1, &config());
        assert!(result.positions().is_empty());
        assert_eq!(result.row_count(), 1);
        assert_eq!(result.total_height(), 550.0);
    }

    #[test]
    fn skeleton_rows_count_towards_total_height() {
        // 13 books end at 284; the first placeholder still fits, the second wraps.
        let result = compute_layout(&row_of_books(13), 2, &config());
        assert_eq!(result.skeleton_positions()[0].shelf_row, 0);
        assert_eq!(result.skeleton_positions()[1].shelf_row, 1);
        assert_eq!(result.skeleton_positions()[1].x, 0.0);
        assert_eq!(result.row_count(), 2);
        assert_eq!(result.total_height(), 510.0 + 300.0);
    }

    #[test]
    fn estimate_matches_layout() {
        for count in [0, 1, 13, 14, 40] {
            for skeletons in [0, 1, 5] {
                let books = row_of_books(count);
                let result = compute_layout(&books, skeletons, &config());
                assert_eq!(
                    estimate_shelf_rows(&books, skeletons, &config()),
                    result.row_count(),
                    "{count} books, {skeletons} skeletons"
                );
            }
        }
    }

    #[test]
    fn negative_gap_does_not_confuse_the_first_slot() {
        // The gap pulls the cursor left of zero after the first spine.
        let config = ShelfConfig {
            book_gap: -25.0,
            ..config()
        };
        let books = vec![
            BookDimensions::new(0, 3.0, 20.0),
            BookDimensions::new(1, 100.0, 20.0),
        ];
        let result = compute_layout(&books, 0, &config);
        let second = result.positions()[1].frame;
        assert_eq!(second.shelf_row, 1);
        assert_eq!(second.x, 0.0);
    }

    #[test]
    fn hit_test_finds_books_and_skeletons() {
        let result = compute_layout(&row_of_books(2), 1, &config());
        assert_eq!(
            result.hit_test(Point::new(5.0, 200.0)),
            Some(ShelfHit::Book(0))
        );
        assert_eq!(
            result.hit_test(Point::new(25.0, 200.0)),
            Some(ShelfHit::Book(1))
        );
        assert_eq!(
            result.hit_test(Point::new(50.0, 240.0)),
            Some(ShelfHit::Skeleton(0))
        );
        // In the gap between the first two spines.
        assert_eq!(result.hit_test(Point::new(21.0, 200.0)), None);
        // Above the spines.
        assert_eq!(result.hit_test(Point::new(5.0, 10.0)), None);
    }

    #[test]
    fn insertion_index_follows_spine_centers() {
        let result = compute_layout(&row_of_books(14), 0, &config());
        assert_eq!(result.insertion_index_at(Point::new(-5.0, 200.0)), 0);
        assert_eq!(result.insertion_index_at(Point::new(9.0, 200.0)), 0);
        assert_eq!(result.insertion_index_at(Point::new(11.0, 200.0)), 1);
        assert_eq!(result.insertion_index_at(Point::new(290.0, 200.0)), 13);
        // Second row holds only book 13.
        assert_eq!(result.insertion_index_at(Point::new(5.0, 450.0)), 13);
        assert_eq!(result.insertion_index_at(Point::new(100.0, 450.0)), 14);
        // Far below everything lands on the last row.
        assert_eq!(result.insertion_index_at(Point::new(100.0, 5_000.0)), 14);
    }

    #[test]
    fn insertion_into_empty_shelf_is_zero() {
        let result = compute_layout::<u32>(&[], 3, &config());
        assert_eq!(result.insertion_index_at(Point::new(10.0, 10.0)), 0);
    }

    #[test]
    fn lookup_and_bounds() {
        let result = compute_layout(&row_of_books(14), 0, &config());
        let position = result.position_of(&13).unwrap();
        assert_eq!(position.frame.shelf_row, 1);
        assert!(result.position_of(&99).is_none());

        let bounds = result.content_bounds().unwrap();
        assert_eq!(bounds.x0, 0.0);
        assert!(close(bounds.y0, 250.0 - 400.0 / 3.0));
        assert!(close(bounds.y1, 510.0));
        assert_eq!(result.shelf_baselines(), vec![250.0, 510.0]);
    }
}
