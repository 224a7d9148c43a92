// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery navigation.
//!
//! Measures:
//! - Address parsing for `--location` and copied links
//! - Slideshow photo changes over a large gallery
//! - Folder scanning and sorting

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use iced_gallery::config::SortOrder;
use iced_gallery::gallery::Gallery;
use iced_gallery::location::{Location, Router};
use iced_gallery::ui::slideshow::{Message, SlideInterval, State};
use std::fs;
use std::hint::black_box;
use std::path::PathBuf;

const GALLERY_SIZE: usize = 10_000;

fn large_gallery() -> Gallery {
    Gallery::new(
        (0..GALLERY_SIZE)
            .map(|i| PathBuf::from(format!("photo-{i:05}.jpg")))
            .collect(),
    )
}

fn bench_location_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("location");

    for input in ["/", "/p/42?photoId=42", "/p/1?utm=share&photoId=9999"] {
        group.bench_function(input, |b| {
            b.iter(|| Location::parse(black_box(input)));
        });
    }

    group.finish();
}

fn bench_slideshow(c: &mut Criterion) {
    let mut group = c.benchmark_group("slideshow");
    let gallery = large_gallery();

    group.bench_function("auto_advance_full_cycle", |b| {
        b.iter_batched(
            || {
                let mut router = Router::new(Location::Photo(0));
                let state = State::open(&gallery, &mut router, SlideInterval::default());
                (state, router)
            },
            |(state, mut router)| {
                if let Some(mut state) = state {
                    for _ in 0..GALLERY_SIZE {
                        state.handle(Message::AutoAdvance, &mut router);
                    }
                    black_box(state.index());
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("keyboard_walk", |b| {
        let mut router = Router::new(Location::Photo(GALLERY_SIZE / 2));
        let Some(mut state) = State::open(&gallery, &mut router, SlideInterval::default()) else {
            return;
        };
        b.iter(|| {
            state.handle(Message::Next, &mut router);
            state.handle(Message::Previous, &mut router);
            black_box(router.current());
        });
    });

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery");
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    for i in 0..500 {
        fs::write(dir.path().join(format!("{i:04}.jpg")), b"fake").expect("failed to write");
    }

    for order in [SortOrder::Alphabetical, SortOrder::ModifiedDate] {
        group.bench_function(format!("scan_{order:?}"), |b| {
            b.iter(|| Gallery::scan(black_box(dir.path()), order).map(|gallery| gallery.len()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_location_parse, bench_slideshow, bench_scan);
criterion_main!(benches);
