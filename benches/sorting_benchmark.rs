use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use runsort::prelude::*;
use rand::Rng;
use std::hint::black_box;

fn bench_algorithms(c: &mut Criterion, name: &str, input: &[u64]) {
    let mut group = c.benchmark_group(name);
    group.sample_size(10);

    for algorithm in Algorithm::all().into_iter().filter(|a| a.name() != "insertion") {
        group.bench_function(algorithm.name(), |b| {
            b.iter_batched(
                || input.to_vec(),
                |mut data| algorithm.sort(black_box(&mut data)),
                BatchSize::SmallInput,
            )
        });
    }

    // Std Sort (Stable)
    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || input.to_vec(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_random(c: &mut Criterion) {
    let mut rng = rand::rng();
    let input: Vec<u64> = (0..10_000).map(|_| rng.random()).collect();

    bench_algorithms(c, "Random u64", &input);
}

fn bench_presorted_runs(c: &mut Criterion) {
    // 20 sorted runs of random length, every third one descending
    let mut rng = rand::rng();
    let mut input: Vec<u64> = Vec::with_capacity(10_000);
    for run in 0..20 {
        let len = rng.random_range(100..900);
        let mut chunk: Vec<u64> = (0..len).map(|_| rng.random()).collect();
        chunk.sort();
        if run % 3 == 0 {
            chunk.reverse();
        }
        input.extend(chunk);
    }

    bench_algorithms(c, "Presorted Runs", &input);
}

criterion_group!(benches, bench_random, bench_presorted_runs);
criterion_main!(benches);
