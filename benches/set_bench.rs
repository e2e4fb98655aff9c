// Benchmark suite for HeteroSet
//
// Measures the four core operations on shuffled and sequential workloads:
// - insert
// - contains
// - delete
// - full pre-order and sorted traversal

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use heteroset::HeteroSet;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn shuffled(count: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut values: Vec<i64> = (0..count as i64).collect();
    values.shuffle(&mut rng);
    return values;
}

fn build(values: &[i64]) -> HeteroSet {
    let mut set = HeteroSet::new();
    for &n in values {
        set.insert(n);
    }
    return set;
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        let values = shuffled(size, 1);
        group.bench_with_input(BenchmarkId::new("shuffled", size), &values, |b, values| {
            b.iter(|| build(black_box(values)));
        });

        let sequential: Vec<i64> = (0..size as i64).collect();
        group.bench_with_input(BenchmarkId::new("sequential", size), &sequential, |b, values| {
            b.iter(|| build(black_box(values)));
        });

        let mixed = values.clone();
        group.bench_with_input(BenchmarkId::new("mixed_kinds", size), &mixed, |b, values| {
            b.iter(|| {
                let mut set = HeteroSet::new();
                for &n in values {
                    match n % 3 {
                        0 => set.insert(n),
                        1 => set.insert(n as u32),
                        _ => set.insert(n.to_string()),
                    };
                }
                set
            });
        });
    }
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");
    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let values = shuffled(size, 2);
        let set = build(&values);
        let queries = shuffled(size * 2, 3);
        group.bench_with_input(BenchmarkId::new("half_hits", size), &queries, |b, queries| {
            b.iter(|| {
                let mut found = 0;
                for n in queries {
                    if set.contains(black_box(n)).0 {
                        found += 1;
                    }
                }
                found
            });
        });
    }
    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete");
    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let values = shuffled(size, 4);
        let order = shuffled(size, 5);
        group.bench_with_input(BenchmarkId::new("drain", size), &order, |b, order| {
            b.iter_batched(
                || build(&values),
                |mut set| {
                    for n in order {
                        set.delete(n);
                    }
                    set
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");
    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let set = build(&shuffled(size, 6));
        group.bench_function(BenchmarkId::new("pre_order", size), |b| {
            b.iter(|| black_box(&set).iter().count());
        });
        group.bench_function(BenchmarkId::new("sorted", size), |b| {
            b.iter(|| black_box(&set).iter_sorted().count());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_contains, bench_delete, bench_iterate);
criterion_main!(benches);
