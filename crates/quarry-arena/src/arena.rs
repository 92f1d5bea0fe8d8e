//! The fixed-capacity first-fit arena.
//!
//! [`Arena`] tracks a flat `[0, capacity)` address space as a set of free
//! extents plus a map of live allocations. Allocation is **first-fit** over
//! the free list, which is kept sorted ascending by start address at all
//! times — the scan order is part of the public contract, not an accident
//! of free-list history. Release returns the extent to its sorted position
//! and merges it with any abutting neighbours, so the free list never
//! contains two adjacent extents.

use std::fmt;

use indexmap::IndexMap;

use crate::error::ArenaError;
use crate::extent::Extent;
use crate::handle::Handle;

/// Bookkeeping for one live allocation.
#[derive(Clone, Copy, Debug)]
struct LiveExtent {
    generation: u64,
    size: u32,
}

/// Fixed-capacity allocator over a flat address space.
///
/// The arena owns extent bookkeeping only — payloads live in a
/// [`HandleTable`](crate::HandleTable). At every point between operations,
/// free and allocated extents exactly partition `[0, capacity)`.
///
/// # Example
///
/// ```
/// use quarry_arena::Arena;
///
/// let mut arena = Arena::new(10);
/// let a = arena.allocate(5)?;
/// let b = arena.allocate(5)?;
/// arena.release(a)?;
/// // First-fit places the next request in the freed low extent.
/// let c = arena.allocate(3)?;
/// assert_eq!(c.address(), 0);
/// assert_eq!(arena.used(), 8);
/// # drop(b);
/// # Ok::<(), quarry_arena::ArenaError>(())
/// ```
pub struct Arena {
    capacity: u32,
    /// Free extents, sorted ascending by start. No two are adjacent.
    free: Vec<Extent>,
    /// Live allocations: start address → (generation, size).
    live: IndexMap<u32, LiveExtent>,
    /// Tag for the next successful allocation.
    next_generation: u64,
}

impl Arena {
    /// Create an arena whose entire `[0, capacity)` space is free.
    ///
    /// A zero-capacity arena is permitted; every allocation from it fails
    /// with [`ArenaError::OutOfMemory`].
    pub fn new(capacity: u32) -> Self {
        let free = if capacity == 0 {
            Vec::new()
        } else {
            vec![Extent::new(0, capacity)]
        };
        Self {
            capacity,
            free,
            live: IndexMap::new(),
            next_generation: 1,
        }
    }

    /// Allocate `size` units, first-fit.
    ///
    /// Scans the free list in ascending address order and takes the first
    /// extent large enough. An exact fit removes the extent; otherwise the
    /// request is carved from the extent's low end and the remainder stays
    /// free.
    ///
    /// # Errors
    ///
    /// [`ArenaError::OutOfMemory`] when no free extent is large enough.
    /// A failed call leaves the free list untouched.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero; sizes are positive by contract.
    pub fn allocate(&mut self, size: u32) -> Result<Handle, ArenaError> {
        assert!(size > 0, "allocation size must be positive");

        let Some(slot) = self.free.iter().position(|ext| ext.size() >= size) else {
            return Err(ArenaError::OutOfMemory {
                requested: size,
                capacity: self.capacity,
                largest_free: self.largest_free(),
            });
        };

        let ext = self.free[slot];
        let start = ext.start();
        if ext.size() == size {
            self.free.remove(slot);
        } else {
            // Shrink in place: consume from the low end.
            self.free[slot] = Extent::new(start + size, ext.size() - size);
        }

        let generation = self.next_generation;
        self.next_generation += 1;
        self.live.insert(start, LiveExtent { generation, size });
        Ok(Handle::new(start, generation))
    }

    /// Release the allocation identified by `handle`.
    ///
    /// The extent returns to the free list at its address-sorted position
    /// and is merged with any abutting free neighbours, so coalescing is
    /// complete after every release.
    ///
    /// # Errors
    ///
    /// [`ArenaError::InvalidFree`] when the handle's address has no live
    /// allocation, or the live allocation at that address belongs to a
    /// newer generation (the handle was already released and its address
    /// reused). A failed call mutates nothing.
    pub fn release(&mut self, handle: Handle) -> Result<(), ArenaError> {
        match self.live.get(&handle.address()) {
            Some(live) if live.generation == handle.generation() => {}
            _ => return Err(ArenaError::InvalidFree { handle }),
        }
        let live = self
            .live
            .swap_remove(&handle.address())
            .expect("live entry checked above");
        self.insert_free(Extent::new(handle.address(), live.size));
        Ok(())
    }

    /// Insert a freed extent at its sorted position, merging neighbours.
    fn insert_free(&mut self, ext: Extent) {
        let at = self.free.partition_point(|e| e.start() < ext.start());
        let merge_prev = at > 0 && self.free[at - 1].abuts(&ext);
        let merge_next = at < self.free.len() && ext.abuts(&self.free[at]);
        match (merge_prev, merge_next) {
            (true, true) => {
                let next = self.free.remove(at);
                let prev = self.free[at - 1];
                self.free[at - 1] =
                    Extent::new(prev.start(), prev.size() + ext.size() + next.size());
            }
            (true, false) => {
                let prev = self.free[at - 1];
                self.free[at - 1] = Extent::new(prev.start(), prev.size() + ext.size());
            }
            (false, true) => {
                let next = self.free[at];
                self.free[at] = Extent::new(ext.start(), ext.size() + next.size());
            }
            (false, false) => self.free.insert(at, ext),
        }
    }

    /// Total capacity in units.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Units currently allocated.
    pub fn used(&self) -> u32 {
        self.live.values().map(|l| l.size).sum()
    }

    /// Units currently free.
    pub fn remaining(&self) -> u32 {
        self.free.iter().map(Extent::size).sum()
    }

    /// Size of the largest free extent, or 0 when nothing is free.
    pub fn largest_free(&self) -> u32 {
        self.free.iter().map(Extent::size).max().unwrap_or(0)
    }

    /// The free list, ascending by start address.
    pub fn free_extents(&self) -> &[Extent] {
        &self.free
    }

    /// Number of live allocations.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Whether `handle` identifies a live allocation.
    pub fn is_live(&self, handle: Handle) -> bool {
        self.live
            .get(&handle.address())
            .is_some_and(|l| l.generation == handle.generation())
    }
}

impl fmt::Display for Arena {
    /// Renders the free list as `[(start,size), ...]` ascending by start.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, ext) in self.free.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{ext}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Assert the partition invariant and free-list shape for `arena`.
    fn assert_consistent(arena: &Arena) {
        assert_eq!(
            arena.used() + arena.remaining(),
            arena.capacity(),
            "free + allocated must partition the arena"
        );
        let free = arena.free_extents();
        for pair in free.windows(2) {
            assert!(
                pair[0].start() < pair[1].start(),
                "free list must be sorted ascending by start"
            );
            assert!(
                pair[0].end() < pair[1].start(),
                "free list must never contain adjacent extents"
            );
        }
    }

    #[test]
    fn new_arena_is_one_free_extent() {
        let arena = Arena::new(20);
        assert_eq!(arena.free_extents(), &[Extent::new(0, 20)]);
        assert_eq!(arena.used(), 0);
        assert_eq!(arena.remaining(), 20);
        assert_consistent(&arena);
    }

    #[test]
    fn zero_capacity_arena_rejects_everything() {
        let mut arena = Arena::new(0);
        assert!(arena.free_extents().is_empty());
        assert!(matches!(
            arena.allocate(1),
            Err(ArenaError::OutOfMemory {
                requested: 1,
                capacity: 0,
                largest_free: 0,
            })
        ));
    }

    #[test]
    #[should_panic(expected = "allocation size must be positive")]
    fn zero_size_allocation_panics() {
        let mut arena = Arena::new(10);
        let _ = arena.allocate(0);
    }

    #[test]
    fn sequential_allocations_are_contiguous() {
        let mut arena = Arena::new(20);
        let a = arena.allocate(5).unwrap();
        let b = arena.allocate(3).unwrap();
        let c = arena.allocate(4).unwrap();
        assert_eq!(a.address(), 0);
        assert_eq!(b.address(), 5);
        assert_eq!(c.address(), 8);
        assert_eq!(arena.free_extents(), &[Extent::new(12, 8)]);
        assert_consistent(&arena);
    }

    #[test]
    fn first_fit_reuses_lowest_freed_extent() {
        // The documented determinism scenario: capacity 10, two halves,
        // release the first, and a size-3 request lands at address 0.
        let mut arena = Arena::new(10);
        let a = arena.allocate(5).unwrap();
        let b = arena.allocate(5).unwrap();
        assert_eq!(a.address(), 0);
        assert_eq!(b.address(), 5);

        arena.release(a).unwrap();
        let c = arena.allocate(3).unwrap();
        assert_eq!(c.address(), 0);
        assert_eq!(arena.free_extents(), &[Extent::new(3, 2)]);
        assert_consistent(&arena);
    }

    #[test]
    fn first_fit_skips_too_small_extents() {
        let mut arena = Arena::new(12);
        let a = arena.allocate(2).unwrap();
        let _b = arena.allocate(4).unwrap();
        let c = arena.allocate(6).unwrap();
        arena.release(a).unwrap();
        arena.release(c).unwrap();
        // Free: (0,2) and (6,6). A size-3 request must skip the low extent.
        let d = arena.allocate(3).unwrap();
        assert_eq!(d.address(), 6);
        assert_eq!(
            arena.free_extents(),
            &[Extent::new(0, 2), Extent::new(9, 3)]
        );
        assert_consistent(&arena);
    }

    #[test]
    fn exact_fit_removes_the_extent() {
        let mut arena = Arena::new(10);
        let a = arena.allocate(4).unwrap();
        let _b = arena.allocate(6).unwrap();
        arena.release(a).unwrap();
        assert_eq!(arena.free_extents(), &[Extent::new(0, 4)]);
        let c = arena.allocate(4).unwrap();
        assert_eq!(c.address(), 0);
        assert!(arena.free_extents().is_empty());
        assert_consistent(&arena);
    }

    #[test]
    fn failed_allocation_leaves_state_unchanged() {
        let mut arena = Arena::new(4);
        let err = arena.allocate(5).unwrap_err();
        assert_eq!(
            err,
            ArenaError::OutOfMemory {
                requested: 5,
                capacity: 4,
                largest_free: 4,
            }
        );
        assert_eq!(arena.free_extents(), &[Extent::new(0, 4)]);
        assert_eq!(arena.live_count(), 0);
        assert_consistent(&arena);
    }

    #[test]
    fn fragmented_arena_reports_largest_free() {
        let mut arena = Arena::new(10);
        let a = arena.allocate(3).unwrap();
        let _b = arena.allocate(3).unwrap();
        let c = arena.allocate(3).unwrap();
        arena.release(a).unwrap();
        arena.release(c).unwrap();
        // Free: (0,3) and (6,4) — 7 units total but nothing holds 5.
        assert_eq!(arena.remaining(), 7);
        let err = arena.allocate(5).unwrap_err();
        assert_eq!(
            err,
            ArenaError::OutOfMemory {
                requested: 5,
                capacity: 10,
                largest_free: 4,
            }
        );
        assert_consistent(&arena);
    }

    #[test]
    fn release_unknown_handle_is_invalid_free() {
        let mut arena = Arena::new(10);
        let forged = Handle::new(0, 99);
        assert_eq!(
            arena.release(forged),
            Err(ArenaError::InvalidFree { handle: forged })
        );
        assert_eq!(arena.free_extents(), &[Extent::new(0, 10)]);
    }

    #[test]
    fn double_release_is_rejected_and_mutates_nothing() {
        let mut arena = Arena::new(10);
        let a = arena.allocate(5).unwrap();
        let _b = arena.allocate(5).unwrap();
        arena.release(a).unwrap();

        let before = arena.free_extents().to_vec();
        let used_before = arena.used();
        assert_eq!(
            arena.release(a),
            Err(ArenaError::InvalidFree { handle: a })
        );
        assert_eq!(arena.free_extents(), before.as_slice());
        assert_eq!(arena.used(), used_before);
        assert_consistent(&arena);
    }

    #[test]
    fn stale_handle_after_address_reuse_is_rejected() {
        let mut arena = Arena::new(10);
        let old = arena.allocate(5).unwrap();
        arena.release(old).unwrap();

        // Reuses address 0 with a fresh generation.
        let new = arena.allocate(5).unwrap();
        assert_eq!(new.address(), old.address());
        assert_ne!(new, old);

        assert_eq!(
            arena.release(old),
            Err(ArenaError::InvalidFree { handle: old })
        );
        assert!(arena.is_live(new));
        assert!(!arena.is_live(old));
        assert_consistent(&arena);
    }

    #[test]
    fn release_coalesces_with_both_neighbours() {
        let mut arena = Arena::new(12);
        let a = arena.allocate(4).unwrap();
        let b = arena.allocate(4).unwrap();
        let c = arena.allocate(4).unwrap();

        arena.release(a).unwrap();
        arena.release(c).unwrap();
        assert_eq!(
            arena.free_extents(),
            &[Extent::new(0, 4), Extent::new(8, 4)]
        );

        // Releasing the middle extent merges all three into one.
        arena.release(b).unwrap();
        assert_eq!(arena.free_extents(), &[Extent::new(0, 12)]);
        assert_consistent(&arena);
    }

    #[test]
    fn release_coalesces_with_left_neighbour_only() {
        let mut arena = Arena::new(12);
        let a = arena.allocate(4).unwrap();
        let b = arena.allocate(4).unwrap();
        let _c = arena.allocate(4).unwrap();
        arena.release(a).unwrap();
        arena.release(b).unwrap();
        assert_eq!(arena.free_extents(), &[Extent::new(0, 8)]);
        assert_consistent(&arena);
    }

    #[test]
    fn release_coalesces_with_right_neighbour_only() {
        let mut arena = Arena::new(12);
        let _a = arena.allocate(4).unwrap();
        let b = arena.allocate(4).unwrap();
        let c = arena.allocate(4).unwrap();
        arena.release(c).unwrap();
        arena.release(b).unwrap();
        assert_eq!(arena.free_extents(), &[Extent::new(4, 8)]);
        assert_consistent(&arena);
    }

    #[test]
    fn display_lists_free_extents_ascending() {
        let mut arena = Arena::new(12);
        let a = arena.allocate(4).unwrap();
        let _b = arena.allocate(4).unwrap();
        let c = arena.allocate(4).unwrap();
        arena.release(c).unwrap();
        arena.release(a).unwrap();
        assert_eq!(arena.to_string(), "[(0,4), (8,4)]");
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn partition_invariant_holds_for_all_sequences(
                ops in proptest::collection::vec((any::<bool>(), 1u32..8, 0usize..16), 1..80),
            ) {
                let mut arena = Arena::new(64);
                let mut live: Vec<Handle> = Vec::new();
                for (is_alloc, size, pick) in ops {
                    if is_alloc {
                        if let Ok(handle) = arena.allocate(size) {
                            live.push(handle);
                        }
                    } else if !live.is_empty() {
                        let handle = live.remove(pick % live.len());
                        arena.release(handle).unwrap();
                    }
                    assert_consistent(&arena);
                }
            }

            #[test]
            fn releasing_everything_restores_one_extent(
                sizes in proptest::collection::vec(1u32..6, 1..12),
            ) {
                let mut arena = Arena::new(64);
                let handles: Vec<Handle> = sizes
                    .iter()
                    .filter_map(|&s| arena.allocate(s).ok())
                    .collect();
                for handle in handles {
                    arena.release(handle).unwrap();
                }
                prop_assert_eq!(arena.free_extents(), &[Extent::new(0, 64)]);
            }

            #[test]
            fn double_release_always_rejected(
                sizes in proptest::collection::vec(1u32..6, 1..10),
            ) {
                let mut arena = Arena::new(64);
                for &size in &sizes {
                    let handle = arena.allocate(size).unwrap();
                    arena.release(handle).unwrap();
                    prop_assert_eq!(
                        arena.release(handle),
                        Err(ArenaError::InvalidFree { handle })
                    );
                }
            }
        }
    }
}
