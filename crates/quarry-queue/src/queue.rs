//! The managed priority queue.

use std::fmt;

use quarry_arena::{Arena, ArenaError, Handle, HandleTable};
use quarry_heap::MinHeap;

use crate::error::QueueError;
use crate::metrics::QueueMetrics;

/// Priority queue whose entries reference arena-managed storage.
///
/// Insertion allocates backing storage and pushes a handle; extraction
/// pops a handle, resolves its payload, and releases the storage before
/// returning — so freed capacity is immediately available to subsequent
/// operations.
///
/// # Example
///
/// ```
/// use quarry_queue::ManagedPriorityQueue;
///
/// let mut queue = ManagedPriorityQueue::new(20);
/// queue.push_sized(2, "Task A", 5)?;
/// queue.push_sized(1, "Task B", 3)?;
/// queue.push_sized(3, "Task C", 4)?;
///
/// assert_eq!(queue.peek(), Some((&1, &"Task B")));
/// assert_eq!(queue.pop()?, (1, "Task B"));
/// assert_eq!(queue.pop()?, (2, "Task A"));
/// # Ok::<(), quarry_queue::QueueError>(())
/// ```
///
/// # Panics
///
/// A heap entry whose handle is absent from the handle table, or a
/// release of a popped handle that the arena rejects, is a broken
/// internal invariant. Both panic rather than return an error: the fault
/// is in this implementation, not in the caller, and continuing would
/// risk further corruption.
pub struct ManagedPriorityQueue<P, V> {
    arena: Arena,
    table: HandleTable<V>,
    heap: MinHeap<P, Handle>,
    metrics: QueueMetrics,
}

impl<P: Ord, V> ManagedPriorityQueue<P, V> {
    /// Create a queue backed by an arena of `capacity` units.
    pub fn new(capacity: u32) -> Self {
        Self {
            arena: Arena::new(capacity),
            table: HandleTable::new(),
            heap: MinHeap::new(),
            metrics: QueueMetrics::default(),
        }
    }

    /// Push a value with one unit of backing storage.
    ///
    /// # Errors
    ///
    /// See [`push_sized`](Self::push_sized).
    pub fn push(&mut self, priority: P, value: V) -> Result<(), QueueError> {
        self.push_sized(priority, value, 1)
    }

    /// Push a value with `size` units of backing storage.
    ///
    /// Allocates first; only after the allocation succeeds are the table
    /// and heap touched, so a failed push has no partial effect.
    ///
    /// # Errors
    ///
    /// [`QueueError::OutOfMemory`] when no free extent can hold `size`
    /// units. Nothing is inserted into the table or the heap.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero; sizes are positive by contract.
    pub fn push_sized(&mut self, priority: P, value: V, size: u32) -> Result<(), QueueError> {
        let handle = match self.arena.allocate(size) {
            Ok(handle) => handle,
            Err(ArenaError::OutOfMemory {
                requested,
                largest_free,
                ..
            }) => {
                self.metrics.failed_pushes += 1;
                return Err(QueueError::OutOfMemory {
                    requested,
                    largest_free,
                });
            }
            Err(err @ ArenaError::InvalidFree { .. }) => {
                unreachable!("allocate cannot report {err}")
            }
        };
        self.table.insert(handle, size, value);
        self.heap.push(priority, handle);
        self.metrics.pushes += 1;
        self.metrics.note_usage(self.arena.used(), self.table.len());
        Ok(())
    }

    /// Remove and return the minimum-priority entry.
    ///
    /// The backing extent is released before this returns, so the freed
    /// capacity is available to the very next push.
    ///
    /// # Errors
    ///
    /// [`QueueError::Empty`] when the queue holds no entries.
    pub fn pop(&mut self) -> Result<(P, V), QueueError> {
        let (priority, handle) = self.heap.pop().ok_or(QueueError::Empty)?;
        let Some((_size, value)) = self.table.remove(handle) else {
            panic!("heap entry references handle {handle} missing from the handle table");
        };
        if let Err(err) = self.arena.release(handle) {
            panic!("release of popped handle {handle} rejected: {err}");
        }
        self.metrics.pops += 1;
        Ok((priority, value))
    }

    /// The minimum-priority entry, without removing it.
    ///
    /// Mutates nothing; `None` is the empty indicator.
    pub fn peek(&self) -> Option<(&P, &V)> {
        let (priority, handle) = self.heap.peek()?;
        let Some((_size, value)) = self.table.get(*handle) else {
            panic!("heap entry references handle {handle} missing from the handle table");
        };
        Some((priority, value))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Capacity of the backing arena, in units.
    pub fn capacity(&self) -> u32 {
        self.arena.capacity()
    }

    /// Units currently allocated to entries.
    pub fn used(&self) -> u32 {
        self.arena.used()
    }

    /// Units currently free in the backing arena.
    pub fn remaining(&self) -> u32 {
        self.arena.remaining()
    }

    /// Read-only view of the backing arena.
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Cumulative operation counters.
    pub fn metrics(&self) -> &QueueMetrics {
        &self.metrics
    }
}

impl<P: Ord + fmt::Display, V: fmt::Display> ManagedPriorityQueue<P, V> {
    /// Deterministic three-line diagnostic dump.
    ///
    /// ```text
    /// free: [(start,size), ...]            ascending by start
    /// allocated: [handle -> (size, value), ...]   ordered by handle
    /// heap: [(priority, handle), ...]      underlying array order
    /// ```
    pub fn dump(&self) -> String {
        format!(
            "free: {}\nallocated: {}\nheap: {}",
            self.arena, self.table, self.heap
        )
    }
}
