use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use runsort::prelude::*;
use rand::Rng;
use std::hint::black_box;
use std::time::Duration;

fn bench_1m(c: &mut Criterion, name: &str, input: &[u64]) {
    let mut group = c.benchmark_group(name);
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(60)); // cloning 8MB per iteration is slow
    group.throughput(Throughput::Elements(input.len() as u64));

    let algorithms = [
        Algorithm::Merge(MergeSort),
        Algorithm::Tim(TimSort),
        Algorithm::Power(PowerSort::new()),
        Algorithm::Peek(PeekSort::new()),
    ];
    for algorithm in algorithms {
        group.bench_function(algorithm.name(), |b| {
            b.iter_batched(
                || input.to_vec(),
                |mut data| algorithm.sort(black_box(&mut data)),
                BatchSize::LargeInput,
            )
        });
    }

    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || input.to_vec(),
            |mut data| data.sort(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

fn bench_1m_random(c: &mut Criterion) {
    let mut rng = rand::rng();
    let input: Vec<u64> = (0..1_000_000).map(|_| rng.random()).collect();

    bench_1m(c, "1M Random", &input);
}

fn bench_1m_few_runs(c: &mut Criterion) {
    let mut rng = rand::rng();
    let count = 1_000_000;

    // 16 long runs of alternating direction
    let mut input: Vec<u64> = Vec::with_capacity(count);
    for run in 0..16 {
        let mut chunk: Vec<u64> = (0..count / 16).map(|_| rng.random()).collect();
        chunk.sort();
        if run % 2 == 1 {
            chunk.reverse();
        }
        input.extend(chunk);
    }

    bench_1m(c, "1M Few Runs", &input);
}

criterion_group!(benches, bench_1m_random, bench_1m_few_runs);
criterion_main!(benches);
