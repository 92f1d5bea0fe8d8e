//! Quarry: fixed-capacity arena allocation with a managed priority queue.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Quarry sub-crates. For most users, adding `quarry` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use quarry::prelude::*;
//!
//! // A queue backed by a 20-unit arena.
//! let mut queue = ManagedPriorityQueue::new(20);
//! queue.push_sized(2, "Task A", 5)?;
//! queue.push_sized(1, "Task B", 3)?;
//! queue.push_sized(3, "Task C", 4)?;
//!
//! // Extraction is by minimum priority; the backing storage is released
//! // before pop returns, so the capacity is immediately reusable.
//! assert_eq!(queue.pop()?, (1, "Task B"));
//! assert_eq!(queue.used(), 9);
//!
//! // The arena itself is also usable directly.
//! let mut arena = Arena::new(10);
//! let a = arena.allocate(5)?;
//! let b = arena.allocate(5)?;
//! arena.release(a)?;
//! assert_eq!(arena.allocate(3)?.address(), 0); // first-fit reuses the hole
//! # drop(b);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `quarry-arena` | `Arena`, `Handle`, `HandleTable`, `Extent` |
//! | [`heap`] | `quarry-heap` | The generic `MinHeap` |
//! | [`queue`] | `quarry-queue` | `ManagedPriorityQueue`, metrics, dump |
//! | [`graph`] | `quarry-graph` | `Graph`, traversals, Dijkstra, topo sort |
//! | [`affine`] | `quarry-affine` | 2D homogeneous `Transform` helpers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Arena allocation: extents, handles, payload table (`quarry-arena`).
pub use quarry_arena as arena;

/// The generic binary min-heap (`quarry-heap`).
pub use quarry_heap as heap;

/// The managed priority queue (`quarry-queue`).
pub use quarry_queue as queue;

/// Graph structures and algorithms (`quarry-graph`).
pub use quarry_graph as graph;

/// 2D homogeneous-coordinate transforms (`quarry-affine`).
pub use quarry_affine as affine;

/// Commonly used types, re-exported for glob import.
pub mod prelude {
    pub use quarry_affine::{Point, Transform};
    pub use quarry_arena::{Arena, ArenaError, Extent, Handle, HandleTable};
    pub use quarry_graph::{Graph, GraphError, ShortestPaths};
    pub use quarry_heap::MinHeap;
    pub use quarry_queue::{ManagedPriorityQueue, QueueError, QueueMetrics};
}
