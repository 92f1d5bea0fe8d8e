//! Shared fixtures for Quarry benchmarks.
//!
//! The measurements live in `benches/`; this library only hosts setup
//! helpers reused across bench files.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use quarry_arena::Arena;
use quarry_queue::ManagedPriorityQueue;

/// An arena of `capacity` units with `holes` single-unit free extents
/// interleaved with live allocations at its low end.
///
/// Worst case for the first-fit scan: a request larger than one unit must
/// walk every hole before reaching the free tail.
///
/// # Panics
///
/// Panics when `capacity < 2 * holes`.
pub fn fragmented_arena(capacity: u32, holes: u32) -> Arena {
    let mut arena = Arena::new(capacity);
    let handles: Vec<_> = (0..2 * holes)
        .map(|_| arena.allocate(1).expect("fixture capacity exceeded"))
        .collect();
    for handle in handles.into_iter().step_by(2) {
        arena.release(handle).expect("fixture handle is live");
    }
    arena
}

/// A queue preloaded with `entries` four-unit allocations at ascending
/// priorities, for steady-state push/pop measurements.
///
/// # Panics
///
/// Panics when the backing arena cannot hold `entries * 4` units.
pub fn loaded_queue(capacity: u32, entries: u32) -> ManagedPriorityQueue<u32, u32> {
    let mut queue = ManagedPriorityQueue::new(capacity);
    for priority in 0..entries {
        queue
            .push_sized(priority, priority, 4)
            .expect("fixture capacity exceeded");
    }
    queue
}
