//! Criterion micro-benchmarks for arena allocation, free, and first-fit
//! scan cost on a fragmented list.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mortar::Arena;
use mortar_bench::churn_plan;

const REGION_LEN: usize = 1 << 20;

/// Benchmark: allocate and immediately free one block, empty arena.
/// Measures the minimum round-trip cost: one-step scan plus O(1) unlink.
fn bench_alloc_free_cycle(c: &mut Criterion) {
    let mut storage = vec![0u8; REGION_LEN];
    let mut arena = unsafe { Arena::new(storage.as_mut_ptr(), storage.len()) }.unwrap();

    c.bench_function("alloc_free_cycle", |b| {
        b.iter(|| {
            let p = arena.alloc(black_box(64)).unwrap();
            black_box(p);
            unsafe { arena.free(p) };
        });
    });
}

/// Benchmark: fill-then-drain of 128 sequential blocks.
fn bench_sequential_fill_drain(c: &mut Criterion) {
    let mut storage = vec![0u8; REGION_LEN];
    let mut arena = unsafe { Arena::new(storage.as_mut_ptr(), storage.len()) }.unwrap();
    let mut live = Vec::with_capacity(128);

    c.bench_function("sequential_fill_drain_128", |b| {
        b.iter(|| {
            for _ in 0..128 {
                live.push(arena.alloc(black_box(48)).unwrap());
            }
            for p in live.drain(..) {
                unsafe { arena.free(p) };
            }
        });
    });
}

/// Benchmark: first-fit scan over a fragmented list.
///
/// Setup allocates a band of blocks and frees every other one; each
/// measured request walks past the too-small holes to the tail, so the
/// scan is linear in the number of surviving blocks.
fn bench_fragmented_scan(c: &mut Criterion) {
    let plan = churn_plan(42, 256, 1);
    let mut storage = vec![0u8; REGION_LEN];
    let mut arena = unsafe { Arena::new(storage.as_mut_ptr(), storage.len()) }.unwrap();

    let blocks: Vec<_> = plan
        .setup_sizes
        .iter()
        .map(|&s| arena.alloc(s).unwrap())
        .collect();
    for &i in &plan.holes {
        unsafe { arena.free(blocks[i]) };
    }

    // Larger than any setup block, so every hole is skipped.
    let oversized = 512;
    c.bench_function("fragmented_scan_256", |b| {
        b.iter(|| {
            let p = arena.alloc(black_box(oversized)).unwrap();
            unsafe { arena.free(p) };
        });
    });
}

/// Benchmark: steady-state churn with seeded random sizes landing in the
/// holes the setup phase pinned open.
fn bench_random_churn(c: &mut Criterion) {
    let plan = churn_plan(7, 128, 64);
    let mut storage = vec![0u8; REGION_LEN];
    let mut arena = unsafe { Arena::new(storage.as_mut_ptr(), storage.len()) }.unwrap();

    let blocks: Vec<_> = plan
        .setup_sizes
        .iter()
        .map(|&s| arena.alloc(s).unwrap())
        .collect();
    for &i in &plan.holes {
        unsafe { arena.free(blocks[i]) };
    }

    let mut scratch = Vec::with_capacity(plan.probe_sizes.len());
    c.bench_function("random_churn_64", |b| {
        b.iter(|| {
            for &s in &plan.probe_sizes {
                scratch.push(arena.alloc(s).unwrap());
            }
            for p in scratch.drain(..) {
                unsafe { arena.free(p) };
            }
        });
    });
}

criterion_group!(
    benches,
    bench_alloc_free_cycle,
    bench_sequential_fill_drain,
    bench_fragmented_scan,
    bench_random_churn
);
criterion_main!(benches);
