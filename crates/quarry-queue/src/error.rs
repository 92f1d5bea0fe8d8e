//! Queue-level error types.

use std::error::Error;
use std::fmt;

/// Errors surfaced by [`ManagedPriorityQueue`](crate::ManagedPriorityQueue).
///
/// Both variants are ordinary control-flow signals for the caller. A heap
/// entry whose handle is missing from the table is *not* an error value —
/// it is a broken internal invariant and panics (see the crate docs).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueError {
    /// The arena could not satisfy the backing allocation.
    ///
    /// Nothing was enqueued; the queue is unchanged. Recoverable by
    /// popping entries or retrying with a smaller size.
    OutOfMemory {
        /// Number of units requested.
        requested: u32,
        /// Size of the largest free extent at the time of the request.
        largest_free: u32,
    },
    /// `pop` was called on an empty queue.
    Empty,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory {
                requested,
                largest_free,
            } => {
                write!(
                    f,
                    "queue out of memory: requested {requested} units, \
                     largest free extent {largest_free}"
                )
            }
            Self::Empty => write!(f, "queue is empty"),
        }
    }
}

impl Error for QueueError {}
