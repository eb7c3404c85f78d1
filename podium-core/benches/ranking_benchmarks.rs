//! Criterion benchmarks for full standings recomputation.
//!
//! Every configuration change re-ranks the complete country list, so this
//! measures `Standings::build` across table sizes up to the number of
//! national committees, in both points and per-capita modes.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package podium-core
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::collections::HashMap;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use podium_core::test_support::{feed_json, standing};
use podium_core::{MedalFeed, RankingConfig, Standings, validate_feed};

/// Table sizes to benchmark.
const TABLE_SIZES: &[usize] = &[50, 100, 250];

fn build_feed(size: usize) -> MedalFeed {
    let countries: Vec<_> = (0..size)
        .map(|index| {
            let seed = u32::try_from(index).unwrap_or(u32::MAX);
            let medals = [seed % 41, (seed * 7) % 37, (seed * 13) % 43];
            standing(u64::from(seed), &format!("N{index:03}"), medals)
        })
        .collect();
    validate_feed(&feed_json(&countries)).expect("benchmark feed is valid")
}

fn build_populations(feed: &MedalFeed) -> HashMap<String, u64> {
    feed.countries
        .iter()
        .map(|country| {
            let population = 250_000 + country.country_id * 1_000_003;
            (country.short_code.clone(), population)
        })
        .collect()
}

fn bench_standings(c: &mut Criterion) {
    let mut group = c.benchmark_group("standings");
    for &size in TABLE_SIZES {
        let feed = build_feed(size);
        let populations = build_populations(&feed);
        let points_mode = RankingConfig::default();
        let per_capita = RankingConfig::default().with_population(true);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("points", size), &feed, |b, feed| {
            b.iter(|| Standings::build(black_box(feed), &points_mode, &populations));
        });
        group.bench_with_input(BenchmarkId::new("per_capita", size), &feed, |b, feed| {
            b.iter(|| Standings::build(black_box(feed), &per_capita, &populations));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_standings);
criterion_main!(benches);
