use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use rand::Rng;
use spreadsort::prelude::*;
use std::hint::black_box;
use std::time::Duration;

fn bench_1m_u64(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M u64");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(30));

    let mut rng = rand::rng();
    let count = 1_000_000;
    let input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    group.throughput(Throughput::Bytes((count * size_of::<u64>()) as u64));

    group.bench_function("spreadsort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| spreadsort(black_box(&mut data)),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort(),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

fn bench_1m_f32(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M f32");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(30));

    let mut rng = rand::rng();
    let count = 1_000_000;
    let input: Vec<f32> = (0..count).map(|_| rng.random_range(-1.0e4..1.0e4)).collect();

    group.throughput(Throughput::Bytes((count * size_of::<f32>()) as u64));

    group.bench_function("float_sort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| float_sort(black_box(&mut data)),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("slice::sort_unstable_by total_cmp", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable_by(|a, b| a.total_cmp(b)),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_1m_u64, bench_1m_f32);
criterion_main!(benches);
