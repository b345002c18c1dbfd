//! # Filter Benchmarks
//!
//! Performance benchmarks for card filtering.
//!
//! Run with: `cargo bench -p cardshop-core`

#![allow(clippy::float_arithmetic)]

use cardshop_core::{Card, CardId, FilterSpec, filter};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const CATEGORIES: [&str; 6] = [
    "birthday",
    "sympathy",
    "wedding",
    "thank_you",
    "holiday",
    "get_well",
];

/// Create a catalog of N cards cycling through the categories.
fn create_catalog(size: usize) -> Vec<Card> {
    (0..size)
        .map(|i| {
            let category = CATEGORIES[i % CATEGORIES.len()];
            Card {
                id: CardId(i as u64 + 1),
                name: format!("Card {}", i),
                category: category.to_string(),
                description: String::new(),
                price: f64::from((i % 900) as u32 + 100) / 100.0,
                image_url: String::new(),
                rotation: 0.0,
                tags: vec![category.to_string(), format!("tag-{}", i % 17)],
            }
        })
        .collect()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_category_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("category_filter");
    let spec = FilterSpec {
        category: Some("wedding".to_string()),
        ..FilterSpec::default()
    };

    for size in [6, 100, 1000, 10000] {
        let cards = create_catalog(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &cards, |b, cards| {
            b.iter(|| filter(black_box(cards), black_box(&spec)));
        });
    }

    group.finish();
}

fn bench_combined_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("combined_filter");
    let spec = FilterSpec {
        category: None,
        min_price: Some(2.0),
        max_price: Some(7.5),
        tags: vec!["tag-3".to_string(), "holiday".to_string()],
    };

    for size in [6, 100, 1000, 10000] {
        let cards = create_catalog(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &cards, |b, cards| {
            b.iter(|| filter(black_box(cards), black_box(&spec)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_category_filter, bench_combined_filter);
criterion_main!(benches);
