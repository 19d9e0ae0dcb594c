// Copyright 2025 the Bookshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bookshelf_layout::{
    BookDimensions, Shelf, ShelfRatios, compute_emphasis_scale, compute_layout,
    estimate_shelf_rows,
};
use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

const SCREEN_WIDTH: f64 = 390.0;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn gen_range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        let unit = f64::from(self.next_u32()) / f64::from(u32::MAX);
        lo + (hi - lo) * unit
    }
}

/// Paperbacks through coffee-table books, with the odd oversized atlas.
fn gen_books(count: usize, seed: u64) -> Vec<BookDimensions<u32>> {
    let mut rng = Lcg::new(seed);
    (0..count as u32)
        .map(|id| {
            let thickness = rng.gen_range_f64(0.5, 7.0);
            let height = rng.gen_range_f64(15.0, 45.0);
            BookDimensions::new(id, thickness, height)
        })
        .collect()
}

fn bench_compute_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/compute_layout");
    let config = ShelfRatios::default().config_for_screen_width(SCREEN_WIDTH);

    for len in [16usize, 256, 4_096] {
        let books = gen_books(len, 0x5eed);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("books", len), &books, |b, books| {
            b.iter(|| black_box(compute_layout(books, 0, &config)));
        });

        group.bench_with_input(
            BenchmarkId::new("books_and_skeletons", len),
            &books,
            |b, books| {
                b.iter(|| black_box(compute_layout(books, 3, &config)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("estimate_rows", len),
            &books,
            |b, books| {
                b.iter(|| black_box(estimate_shelf_rows(books, 3, &config)));
            },
        );
    }

    group.finish();
}

fn bench_emphasis_while_paging(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/emphasis");

    // One call per frame while the detail pager is dragged.
    for len in [256usize, 4_096] {
        let books = gen_books(len, 7);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("scroll", len), &books, |b, books| {
            let mut offset = 0.0;
            b.iter(|| {
                offset = (offset + 13.0) % (SCREEN_WIDTH * len as f64);
                black_box(compute_emphasis_scale(books, None, Some(offset), SCREEN_WIDTH))
            });
        });
    }

    group.finish();
}

fn bench_shelf_reorder(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/shelf_reorder");

    // Drag-reorder: move one book, then lay out again.
    for len in [256usize, 4_096] {
        let books = gen_books(len, 42);
        group.bench_with_input(BenchmarkId::new("move_and_layout", len), &books, |b, books| {
            b.iter_batched(
                || {
                    let mut shelf = Shelf::new(SCREEN_WIDTH);
                    shelf.set_books(books.iter().cloned());
                    shelf
                },
                |mut shelf| {
                    shelf.move_book(0, len - 1);
                    black_box(shelf.layout().total_height());
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_layout,
    bench_emphasis_while_paging,
    bench_shelf_reorder
);
criterion_main!(benches);
