// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for row packing and lightbox navigation.
//!
//! Measures the performance of:
//! - Packing a catalog into rows for both viewport classes
//! - Cyclic next/previous navigation over the catalog

use criterion::{criterion_group, criterion_main, Criterion};
use iced_mosaic::catalog::{Catalog, Image};
use iced_mosaic::gallery::{pack, AnchorRect, GalleryController, LayoutOptions, TrailingRows, ViewportClass};
use std::hint::black_box;
use std::path::PathBuf;

/// Builds a synthetic catalog of the given size.
fn test_catalog(count: u32) -> Catalog {
    Catalog::new(
        (1..=count)
            .map(|id| Image {
                id,
                src: PathBuf::from(format!("/photos/{}.jpg", id)),
            })
            .collect(),
    )
    .expect("valid catalog")
}

/// Benchmark packing performance for both viewport classes.
fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_packing");

    let catalog = test_catalog(1_000);

    group.bench_function("pack_wide", |b| {
        b.iter(|| {
            let rows = pack(
                black_box(catalog.images()),
                ViewportClass::Wide,
                TrailingRows::Partial,
            );
            black_box(rows);
        });
    });

    group.bench_function("pack_compact", |b| {
        b.iter(|| {
            let rows = pack(
                black_box(catalog.images()),
                ViewportClass::Compact,
                TrailingRows::Drop,
            );
            black_box(rows);
        });
    });

    group.finish();
}

/// Benchmark cyclic navigation over an open lightbox.
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_packing");

    let mut gallery = GalleryController::new(test_catalog(1_000), LayoutOptions::default(), 1280.0);
    gallery.open_lightbox(500, AnchorRect::default());

    group.bench_function("next_image", |b| {
        b.iter(|| {
            gallery.next_image();
            black_box(gallery.lightbox().current());
        });
    });

    group.bench_function("previous_image", |b| {
        b.iter(|| {
            gallery.previous_image();
            black_box(gallery.lightbox().current());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_pack, bench_navigate);
criterion_main!(benches);
