//! Cumulative queue metrics.
//!
//! [`QueueMetrics`] is the queue's observability surface: plain counters
//! populated as operations run, read back via
//! [`ManagedPriorityQueue::metrics`](crate::ManagedPriorityQueue::metrics).

/// Cumulative counters for a [`ManagedPriorityQueue`](crate::ManagedPriorityQueue).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueueMetrics {
    /// Successful pushes.
    pub pushes: u64,
    /// Successful pops.
    pub pops: u64,
    /// Pushes rejected with `OutOfMemory`.
    pub failed_pushes: u64,
    /// High-water mark of live entries.
    pub peak_entries: usize,
    /// High-water mark of allocated units.
    pub peak_used: u32,
}

impl QueueMetrics {
    /// Fold a post-operation usage sample into the high-water marks.
    pub(crate) fn note_usage(&mut self, used: u32, entries: usize) {
        self.peak_used = self.peak_used.max(used);
        self.peak_entries = self.peak_entries.max(entries);
    }
}
