//! Integration test: randomised allocate/release churn.
//!
//! Drives the managed queue with seeded random push/pop sequences and
//! checks, after every operation, that the partition invariant holds,
//! that the free list stays sorted and fully coalesced, and that pops
//! agree with a reference model on priority order.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use quarry_queue::{ManagedPriorityQueue, QueueError};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

const CAPACITY: u32 = 64;
const OPS_PER_SEED: usize = 2_000;

/// Check every invariant observable through the public surface.
fn assert_consistent(queue: &ManagedPriorityQueue<u32, u32>) {
    assert_eq!(
        queue.used() + queue.remaining(),
        queue.capacity(),
        "free + allocated must partition the arena"
    );
    let free = queue.arena().free_extents();
    for pair in free.windows(2) {
        assert!(pair[0].start() < pair[1].start(), "free list out of order");
        assert!(
            pair[0].end() < pair[1].start(),
            "adjacent free extents survived coalescing"
        );
    }
}

/// One seeded churn run. Values equal priorities, so pop results are
/// fully determined by priority order even among ties.
fn churn(seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut queue: ManagedPriorityQueue<u32, u32> = ManagedPriorityQueue::new(CAPACITY);
    let mut model: BinaryHeap<Reverse<u32>> = BinaryHeap::new();

    for _ in 0..OPS_PER_SEED {
        if rng.random_bool(0.6) {
            let priority = rng.random_range(0..100u32);
            let size = rng.random_range(1..5u32);
            match queue.push_sized(priority, priority, size) {
                Ok(()) => model.push(Reverse(priority)),
                Err(QueueError::OutOfMemory { .. }) => {
                    // Arena full (or too fragmented) — the model is unchanged
                    // and so must the queue be.
                    assert_eq!(queue.len(), model.len());
                }
                Err(err) => panic!("unexpected push error: {err}"),
            }
        } else {
            match (queue.pop(), model.pop()) {
                (Ok((priority, value)), Some(Reverse(expected))) => {
                    assert_eq!(priority, expected);
                    assert_eq!(value, expected);
                }
                (Err(QueueError::Empty), None) => {}
                (got, want) => panic!("queue/model divergence: {got:?} vs {want:?}"),
            }
        }
        assert_eq!(queue.len(), model.len());
        assert_consistent(&queue);
    }
}

#[test]
fn seeded_churn_stays_consistent() {
    for seed in 0..5 {
        churn(seed);
    }
}

#[test]
fn drain_after_churn_restores_full_capacity() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xC0FFEE);
    let mut queue: ManagedPriorityQueue<u32, u32> = ManagedPriorityQueue::new(CAPACITY);

    for _ in 0..500 {
        let priority = rng.random_range(0..100u32);
        let _ = queue.push_sized(priority, priority, rng.random_range(1..5u32));
        if rng.random_bool(0.4) {
            let _ = queue.pop();
        }
    }
    while queue.pop().is_ok() {}

    assert!(queue.is_empty());
    assert_eq!(queue.remaining(), CAPACITY);
    assert_eq!(queue.arena().free_extents().len(), 1);
}
