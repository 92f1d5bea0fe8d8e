//! Allocation handles.
//!
//! A [`Handle`] is the opaque identity returned by a successful allocation
//! and required by release. It pairs the extent's start address with a
//! per-arena monotonic generation tag, so a handle that outlives its
//! allocation can be told apart from the allocation that later reuses the
//! same address.

use std::fmt;

/// Opaque identity of a live (or formerly live) allocation.
///
/// Handles are created only by [`Arena::allocate`](crate::Arena::allocate).
/// They are `Copy`; keeping a copy after release is harmless — the arena
/// rejects the stale generation on any later use.
///
/// Ordering is by address first, then generation, which is the order the
/// diagnostic dump lists allocations in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct Handle {
    /// Start address of the extent at allocation time.
    start: u32,
    /// Arena generation when this allocation was made.
    generation: u64,
}

impl Handle {
    /// Create a new handle. Arena-internal.
    pub(crate) fn new(start: u32, generation: u64) -> Self {
        Self { start, generation }
    }

    /// Start address of the backing extent at allocation time.
    pub fn address(&self) -> u32 {
        self.start
    }

    /// The arena generation this handle was allocated in.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.generation)
    }
}
