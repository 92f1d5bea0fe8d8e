//! Criterion micro-benchmarks for the min-heap and the managed queue.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use quarry_bench::loaded_queue;
use quarry_heap::MinHeap;

/// Raw heap push/pop at a steady 512-entry occupancy.
fn heap_push_pop(c: &mut Criterion) {
    c.bench_function("heap/push_pop", |b| {
        let mut heap = MinHeap::new();
        for priority in 0..512u32 {
            heap.push(priority, priority);
        }
        let mut tick = 512u32;
        b.iter(|| {
            heap.push(black_box(tick), tick);
            tick = tick.wrapping_add(1);
            black_box(heap.pop().unwrap());
        });
    });
}

/// Managed push/pop: allocation, table insert, heap push, then the full
/// extraction path including the release.
fn queue_push_pop(c: &mut Criterion) {
    c.bench_function("queue/push_pop", |b| {
        let mut queue = loaded_queue(8192, 512);
        let mut tick = 512u32;
        b.iter(|| {
            queue.push_sized(black_box(tick), tick, 4).unwrap();
            tick = tick.wrapping_add(1);
            black_box(queue.pop().unwrap());
        });
    });
}

criterion_group!(benches, heap_push_pop, queue_push_pop);
criterion_main!(benches);
