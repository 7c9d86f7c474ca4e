//! Benchmarks for loading tuning documents.
//!
//! Run with: cargo bench -p cputune

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use cputune::TuningLoader;
use cputune_json::{ParseOptions, parse};
use cputune_params::profiles::neoverse_v2;

// =============================================================================
// Test Data
// =============================================================================

fn small_input() -> &'static str {
    r#"{"metadata": {"gcc_version": 16}, "tune_params": {"issue_rate": 4, "sve_width": 256}}"#
}

fn full_input() -> &'static str {
    include_str!("../tests/fixtures/full.json")
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let options = ParseOptions::tuning_file();
    for (name, input) in [("small", small_input()), ("full", full_input())] {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| parse(black_box(input), &options))
        });
    }
    group.finish();
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    let loader = TuningLoader::default();
    for (name, input) in [("small", small_input()), ("full", full_input())] {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| {
                let mut params = neoverse_v2();
                let report = loader.load_str("bench.json", black_box(input), &mut params);
                (params, report.outcome)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_load);
criterion_main!(benches);
