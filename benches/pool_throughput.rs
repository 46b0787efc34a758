//! Benchmarks for submit+join throughput against thread-per-task spawning.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use taskwell::Pool;

fn pool_submit_join(pool: &Pool, n: usize) -> u64 {
    let handles: Vec<_> = (0..n as u64)
        .map(|i| pool.submit(move || i * i))
        .collect();
    handles.into_iter().map(|h| h.join().unwrap()).sum()
}

fn thread_per_task(n: usize) -> u64 {
    let handles: Vec<_> = (0..n as u64)
        .map(|i| std::thread::spawn(move || i * i))
        .collect();
    handles.into_iter().map(|h| h.join().unwrap()).sum()
}

fn bench_submit_join(c: &mut Criterion) {
    let pool = Pool::new(
        taskwell::Config::builder()
            .all_cores()
            .build()
            .expect("valid config"),
    )
    .expect("failed to start pool");

    let mut group = c.benchmark_group("submit_join");

    for size in [100, 1_000].iter() {
        group.bench_with_input(BenchmarkId::new("pool", size), size, |b, &size| {
            b.iter(|| pool_submit_join(&pool, black_box(size)))
        });

        group.bench_with_input(BenchmarkId::new("thread_per_task", size), size, |b, &size| {
            b.iter(|| thread_per_task(black_box(size)))
        });
    }

    group.finish();
}

fn bench_pool_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool_sizes");

    for threads in [1, 2, 4, 8].iter() {
        let pool = Pool::with_threads(*threads).expect("failed to start pool");
        group.bench_with_input(
            BenchmarkId::from_parameter(threads),
            threads,
            |b, _| b.iter(|| pool_submit_join(&pool, black_box(1_000))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_submit_join, bench_pool_sizes);
criterion_main!(benches);
