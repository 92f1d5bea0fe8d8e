//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use crate::handle::Handle;

/// Errors that can occur during arena operations.
///
/// A failed operation leaves the arena unchanged: `OutOfMemory` does not
/// touch the free list, `InvalidFree` does not touch anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// No free extent is large enough for the request.
    ///
    /// Recoverable: the caller can retry after releasing allocations.
    OutOfMemory {
        /// Number of units requested.
        requested: u32,
        /// Total capacity of the arena.
        capacity: u32,
        /// Size of the largest free extent at the time of the request.
        largest_free: u32,
    },
    /// `release` was called with a handle the arena does not know.
    ///
    /// Covers never-allocated handles, double-releases, and handles whose
    /// address has since been reused by a newer allocation. Signals caller
    /// misuse, not corruption.
    InvalidFree {
        /// The offending handle.
        handle: Handle,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory {
                requested,
                capacity,
                largest_free,
            } => {
                write!(
                    f,
                    "arena out of memory: requested {requested} units, \
                     largest free extent {largest_free}, capacity {capacity}"
                )
            }
            Self::InvalidFree { handle } => {
                write!(f, "invalid free: handle {handle} has no live allocation")
            }
        }
    }
}

impl Error for ArenaError {}
