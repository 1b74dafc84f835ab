// View append benchmarks
//
// These benchmarks compare appends that fit in capacity (in-place writes)
// against appends that detach onto a new store, under both growth policies.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tether::{GrowthPolicy, Heap, Map, View};

/// Benchmark appending one element at a time from an empty view.
///
/// Doubling amortizes reallocations; exact growth reallocates on every call.
fn bench_push_one(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_one");

    for policy in [GrowthPolicy::Doubling, GrowthPolicy::Exact] {
        for count in &[16usize, 256, 1024] {
            group.bench_with_input(
                BenchmarkId::new(policy.as_str(), count),
                count,
                |b, &count| {
                    b.iter(|| {
                        let mut heap: Heap<u64> = Heap::with_policy(policy);
                        let mut view = View::nil();
                        for i in 0..count as u64 {
                            view = heap.append(view, [black_box(i)]).unwrap();
                        }
                        black_box(view.len())
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark appends that always fit in the view's capacity.
fn bench_in_place(c: &mut Criterion) {
    c.bench_function("append_in_place", |b| {
        let mut heap: Heap<u64> = Heap::new();
        let base = heap.make(0, 1024).unwrap();
        b.iter(|| {
            let mut view = base;
            for i in 0..1024u64 {
                view = heap.append(view, [black_box(i)]).unwrap();
            }
            black_box(view.len())
        });
    });
}

/// Benchmark incrementing counters through an aliased map handle.
fn bench_map_increment(c: &mut Criterion) {
    c.bench_function("map_increment", |b| {
        let keys: Vec<String> = (0..64).map(|i| format!("key{i}")).collect();
        b.iter(|| {
            let map: Map<String, u64> = Map::new();
            let alias = map.clone();
            for key in &keys {
                alias.increment(key.clone());
            }
            black_box(map.len())
        });
    });
}

criterion_group!(benches, bench_push_one, bench_in_place, bench_map_increment);
criterion_main!(benches);
