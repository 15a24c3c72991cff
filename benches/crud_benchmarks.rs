use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use osbst::OrderedMap;
use std::collections::BTreeMap;

const N: usize = 10_000;

/// Sorted input builds a path, so every operation recurses once per key.
const PATH_N: usize = 1_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

// ─── Insert ─────────────────────────────────────────────────────────────────

fn bench_insert_ordered(c: &mut Criterion) {
    let keys = ordered_keys(PATH_N);
    let mut group = c.benchmark_group("insert_ordered");

    group.bench_function(BenchmarkId::new("OrderedMap", PATH_N), |b| {
        b.iter(|| {
            let mut map = OrderedMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", PATH_N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

fn bench_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("insert_random");

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter(|| {
            let mut map = OrderedMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

// ─── Get ────────────────────────────────────────────────────────────────────

fn bench_get_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let os_map: OrderedMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("get_random");

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &k in &keys {
                if let Some(&v) = os_map.get(&k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &k in &keys {
                if let Some(&v) = bt_map.get(&k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.finish();
}

// ─── Delete ─────────────────────────────────────────────────────────────────

fn bench_delete_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let os_map: OrderedMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("delete_random");

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter_batched(
            || os_map.clone(),
            |mut map| {
                for &k in &keys {
                    map.delete(&k);
                }
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter_batched(
            || bt_map.clone(),
            |mut map| {
                for &k in &keys {
                    map.remove(&k);
                }
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_delete_min(c: &mut Criterion) {
    let keys = random_keys(N);
    let os_map: OrderedMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("delete_min");

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter_batched(
            || os_map.clone(),
            |mut map| {
                while map.delete_min().is_ok() {}
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter_batched(
            || bt_map.clone(),
            |mut map| {
                while map.pop_first().is_some() {}
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ─── Order statistics ───────────────────────────────────────────────────────

fn bench_select(c: &mut Criterion) {
    let keys = random_keys(N);
    let os_map: OrderedMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let len = os_map.len();

    let mut group = c.benchmark_group("select");

    group.bench_function(BenchmarkId::new("OrderedMap", len), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for i in (0..len).step_by(97) {
                if let Ok(&k) = os_map.select(i) {
                    sum = sum.wrapping_add(k);
                }
            }
            sum
        });
    });

    // BTreeMap has no positional access; nth() walks from the front.
    group.bench_function(BenchmarkId::new("BTreeMap", len), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for i in (0..len).step_by(97) {
                if let Some(&k) = bt_map.keys().nth(i) {
                    sum = sum.wrapping_add(k);
                }
            }
            sum
        });
    });

    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let keys = random_keys(N);
    let os_map: OrderedMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let probes: Vec<i64> = keys.iter().step_by(97).copied().collect();

    let mut group = c.benchmark_group("rank");

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter(|| probes.iter().map(|k| os_map.rank(k)).sum::<usize>());
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| probes.iter().map(|&k| bt_map.range(..k).count()).sum::<usize>());
    });

    group.finish();
}

fn bench_range_len(c: &mut Criterion) {
    let keys = random_keys(N);
    let os_map: OrderedMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bounds: Vec<(i64, i64)> = keys.chunks_exact(2).step_by(50).map(|pair| (pair[0].min(pair[1]), pair[0].max(pair[1]))).collect();

    let mut group = c.benchmark_group("range_len");

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter(|| bounds.iter().map(|(lo, hi)| os_map.range_len(lo, hi)).sum::<usize>());
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| bounds.iter().map(|&(lo, hi)| bt_map.range(lo..=hi).count()).sum::<usize>());
    });

    group.finish();
}

// ─── Traversal ──────────────────────────────────────────────────────────────

fn bench_traversal(c: &mut Criterion) {
    let keys = random_keys(N);
    let os_map: OrderedMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("traversal");

    group.bench_function(BenchmarkId::new("keys", N), |b| {
        b.iter(|| os_map.keys().fold(0i64, |sum, &k| sum.wrapping_add(k)));
    });

    group.bench_function(BenchmarkId::new("level_order", N), |b| {
        b.iter(|| os_map.level_order().fold(0i64, |sum, &k| sum.wrapping_add(k)));
    });

    group.bench_function(BenchmarkId::new("height", N), |b| {
        b.iter(|| os_map.height());
    });

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(insert_benches, bench_insert_ordered, bench_insert_random,);

criterion_group!(lookup_benches, bench_get_random,);

criterion_group!(delete_benches, bench_delete_random, bench_delete_min,);

criterion_group!(order_statistic_benches, bench_select, bench_rank, bench_range_len,);

criterion_group!(traversal_benches, bench_traversal,);

criterion_main!(insert_benches, lookup_benches, delete_benches, order_statistic_benches, traversal_benches,);
