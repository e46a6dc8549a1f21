//! Benchmark for the tagged JSON encoding of `Outcome`.
//!
//! Compares the adapter functions, which post-process the tagged value,
//! against the plain serde derive.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rustresult::factory::success;
use rustresult::json::{deserialize, serialize};
use rustresult::outcome::Outcome;
use std::hint::black_box;

fn benchmark_serialize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("serde_serialize_outcome");

    for size in [10, 100, 1000] {
        let outcome: Outcome<Vec<i32>, String> = success((0..size).collect());

        group.bench_with_input(BenchmarkId::new("json_adapter", size), &size, |bencher, _| {
            bencher.iter(|| black_box(serialize(black_box(&outcome)).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("serde_derive", size), &size, |bencher, _| {
            bencher.iter(|| black_box(serde_json::to_value(black_box(&outcome)).unwrap()));
        });
    }

    group.finish();
}

fn benchmark_deserialize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("serde_deserialize_outcome");

    for size in [10, 100, 1000] {
        let outcome: Outcome<Vec<i32>, String> = success((0..size).collect());
        let encoded = serialize(&outcome).unwrap();

        group.bench_with_input(BenchmarkId::new("json_adapter", size), &size, |bencher, _| {
            bencher.iter(|| black_box(deserialize::<Vec<i32>, String>(black_box(encoded.clone()))));
        });

        group.bench_with_input(BenchmarkId::new("serde_derive", size), &size, |bencher, _| {
            bencher.iter(|| {
                let decoded: Outcome<Vec<i32>, String> =
                    serde_json::from_value(black_box(encoded.clone())).unwrap();
                black_box(decoded)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_serialize, benchmark_deserialize);
criterion_main!(benches);
