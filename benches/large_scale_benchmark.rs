use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use rawsort::prelude::*;
use rand::Rng;
use std::hint::black_box;
use std::time::Duration;

fn cmp_u64(a: &[u8], b: &[u8]) -> std::cmp::Ordering {
    let a = u64::from_ne_bytes(a.try_into().unwrap());
    let b = u64::from_ne_bytes(b.try_into().unwrap());
    a.cmp(&b)
}

fn bench_1m_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M Records");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(90)); // Increase time for large sort setup overhead

    // Dataset generation: 1M 8-byte records, 8MB total
    let mut rng = rand::rng();
    let count = 1_000_000;

    let mut records = vec![0u8; count * 8];
    rng.fill(&mut records[..]);

    let values: Vec<u64> = records
        .chunks_exact(8)
        .map(|c| u64::from_ne_bytes(c.try_into().unwrap()))
        .collect();

    group.throughput(Throughput::Bytes(records.len() as u64));

    // Rawsort
    group.bench_function("rawsort (type-erased)", |b| {
        b.iter_batched(
            || records.clone(),
            |mut data| rawsort(black_box(&mut data), 8, cmp_u64),
            BatchSize::LargeInput,
        )
    });

    // Std Sort (Stable)
    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || values.clone(),
            |mut data| data.sort(),
            BatchSize::LargeInput,
        )
    });

    // Std Sort Unstable
    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || values.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_1m_records);
criterion_main!(benches);
