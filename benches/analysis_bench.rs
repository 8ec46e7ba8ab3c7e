//! Benchmarks for chart recomputation
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use spacex_dash::*;

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];
const BOOSTERS: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

fn create_test_dataset(count: usize) -> Dataset {
    let records = (0..count)
        .map(|i| {
            let outcome = if i % 3 == 0 {
                Outcome::Failure
            } else {
                Outcome::Success
            };
            LaunchRecord::new(
                SITES[i % SITES.len()],
                (i * 37 % 10_000) as f64,
                BOOSTERS[i % BOOSTERS.len()],
                outcome,
            )
        })
        .collect();
    Dataset::from_records(records).unwrap()
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");

    for size in [100, 1000, 10000] {
        let dataset = create_test_dataset(size);
        let site = SiteSelector::site("KSC LC-39A");
        let range = PayloadRange::new(2000.0, 8000.0);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("outcome_counts_{}", size), |b| {
            b.iter(|| outcome_counts(black_box(&dataset), black_box(&site)))
        });

        group.bench_function(format!("filter_launches_{}", size), |b| {
            b.iter(|| filter_launches(black_box(&dataset), black_box(&site), black_box(&range)))
        });
    }

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    let dataset = create_test_dataset(1000);
    let registry = CallbackRegistry::default();
    let values = ControlValues::new(SiteSelector::AllSites, dataset.payload_bounds());

    group.bench_function("initial_load", |b| {
        b.iter(|| registry.dispatch(black_box(&dataset), black_box(&values), &[]))
    });

    group.bench_function("slider_change", |b| {
        b.iter(|| {
            registry.dispatch(
                black_box(&dataset),
                black_box(&values),
                &[ControlId::PayloadSlider],
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_analysis, bench_dispatch);
criterion_main!(benches);
