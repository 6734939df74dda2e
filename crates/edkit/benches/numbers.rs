//! Benchmark – `edkit::parse_ulong` / `edkit::parse_slong`
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use edkit::{GrowBuf, parse_slong, parse_ulong};

/// Inputs covering the fast path, prefixed radixes and the clamping path.
const INPUTS: &[(&str, &str)] = &[
    ("small", "42"),
    ("padded", "        123456"),
    ("hex", "0x7fffffffffff"),
    ("overflow", "999999999999999999999999999999999999"),
    ("garbage", "not a number"),
];

fn bench_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_number");

    for &(name, text) in INPUTS {
        let wide: Vec<char> = text.chars().collect();
        group.bench_with_input(BenchmarkId::new("ulong_narrow", name), text, |b, t| {
            b.iter(|| black_box(parse_ulong(black_box(t.as_bytes()), 0)));
        });
        group.bench_with_input(BenchmarkId::new("slong_wide", name), &wide, |b, w| {
            b.iter(|| black_box(parse_slong(black_box(w.as_slice()), 0)));
        });
    }
    group.finish();
}

fn bench_growth(c: &mut Criterion) {
    c.bench_function("grow_by_small_steps", |b| {
        b.iter(|| {
            let mut buf = GrowBuf::new();
            for min in (1..=64 * 1024).step_by(100) {
                buf.ensure(None, black_box(min)).unwrap();
            }
            black_box(buf.capacity())
        });
    });
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_numbers, bench_growth }
criterion_main!(benches);
