// ============================================================================
// Quantity Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Arithmetic - checked add/sub and infallible mul/div
// 2. Comparison - dimension-checked ordering
// 3. Formatting - suffix rendering with the SI config
// 4. Catalog - name lookup over the fixed table
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use si_quantity::prelude::*;
use std::hint::black_box;

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    let a = 2.0 * NEWTON;
    let b = 3.0 * NEWTON;
    let t = 4.0 * SECOND;

    group.bench_function("checked_add", |bench| {
        bench.iter(|| black_box(black_box(a) + black_box(b)))
    });

    group.bench_function("add_mismatch", |bench| {
        bench.iter(|| black_box(black_box(a) + black_box(t)))
    });

    group.bench_function("mul", |bench| {
        bench.iter(|| black_box(black_box(a) * black_box(t)))
    });

    group.bench_function("div_scalar_by_quantity", |bench| {
        bench.iter(|| black_box(black_box(1.0) / black_box(t)))
    });

    // Long products: dimension vectors combine on every step
    for len in [4usize, 16, 64].iter() {
        let factors: Vec<Quantity> = (0..*len)
            .map(|i| if i % 2 == 0 { 1.5 * METER } else { 0.5 * SECOND.recip() })
            .collect();

        group.bench_with_input(BenchmarkId::new("product", len), &factors, |bench, factors| {
            bench.iter(|| black_box(factors.iter().copied().product::<Quantity>()))
        });
    }

    group.finish();
}

// ============================================================================
// Comparison Benchmarks
// ============================================================================

fn benchmark_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison");

    let values: Vec<Quantity> = (0..1000).map(|i| (i as f64) * KILOMETER_PER_HOUR).collect();
    let threshold = 50.0 * KILOMETER_PER_HOUR;

    group.bench_function("count_above_threshold", |bench| {
        bench.iter(|| {
            black_box(
                values
                    .iter()
                    .filter(|v| v.try_gt(&threshold).unwrap_or(false))
                    .count(),
            )
        })
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn benchmark_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    let formatter = UnitFormatter::si();

    for (name, q) in [("unitless", 3.0 * UNITLESS), ("meter", 3.0 * METER), ("volt", 3.0 * VOLT)] {
        group.bench_with_input(BenchmarkId::new("format", name), &q, |bench, q| {
            bench.iter(|| black_box(formatter.format(q)))
        });
    }

    group.finish();
}

// ============================================================================
// Catalog Benchmarks
// ============================================================================

fn benchmark_catalog_lookup(c: &mut Criterion) {
    c.bench_function("catalog_by_name", |bench| {
        bench.iter(|| black_box(by_name(black_box("standard_gravity"))))
    });
}

criterion_group!(
    benches,
    benchmark_arithmetic,
    benchmark_comparison,
    benchmark_formatting,
    benchmark_catalog_lookup
);

criterion_main!(benches);
