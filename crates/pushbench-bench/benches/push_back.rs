//! Criterion comparison of one-million-push workloads.
//!
//! `vec_grow` is the workload the `pushbench` binary reports. The others
//! put it in context: the hand-written doubling sequence, an owned
//! `String` copied per push, and a pre-sized `Vec` that skips every
//! reallocation.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use pushbench_bench::{BenchConfig, Runner, Sequence};
use pushbench_vec::GrowVec;

const PUSHES: usize = BenchConfig::DEFAULT_PUSHES_PER_TRIAL;

fn fill<'a, S: Sequence<&'a str>>(value: &'a str) -> S {
    let mut seq = S::empty();
    for _ in 0..PUSHES {
        seq.push_value(value);
    }
    seq
}

fn bench_push_back(c: &mut Criterion) {
    let value = BenchConfig::DEFAULT_TEST_VALUE;
    let mut group = c.benchmark_group("push_back_1m");
    group.sample_size(10);

    group.bench_function("vec_grow", |b| {
        b.iter(|| black_box(fill::<Vec<&str>>(black_box(value))));
    });

    group.bench_function("grow_vec", |b| {
        b.iter(|| black_box(fill::<GrowVec<&str>>(black_box(value))));
    });

    group.bench_function("vec_string_clone", |b| {
        let owned = value.to_owned();
        b.iter(|| {
            let mut seq: Vec<String> = Vec::new();
            for _ in 0..PUSHES {
                seq.push(owned.clone());
            }
            black_box(seq)
        });
    });

    group.bench_function("vec_presized", |b| {
        b.iter(|| {
            let mut seq: Vec<&str> = Vec::with_capacity(PUSHES);
            for _ in 0..PUSHES {
                seq.push(black_box(value));
            }
            black_box(seq)
        });
    });

    group.finish();
}

/// The full five-trial run, as the binary performs it.
fn bench_runner(c: &mut Criterion) {
    let runner = Runner::new(BenchConfig::default()).unwrap();
    let mut group = c.benchmark_group("runner");
    group.sample_size(10);
    group.bench_function("default_vec", |b| {
        b.iter(|| black_box(runner.run::<Vec<&str>>()));
    });
    group.finish();
}

criterion_group!(benches, bench_push_back, bench_runner);
criterion_main!(benches);
