//! Fixed-capacity arena allocation for Quarry.
//!
//! Provides a first-fit arena over a flat `[0, capacity)` address space,
//! with free-extent coalescing on release and handle-keyed payload storage.
//!
//! # Architecture
//!
//! ```text
//! Arena
//! ├── free list   → Vec<Extent>, sorted ascending by start, never adjacent
//! └── live map    → start → (generation, size) for every allocated extent
//! HandleTable<V>  → Handle → (size, payload), owned by the caller
//! ```
//!
//! The arena and the table together uphold the partition invariant: at
//! every observable point between operations, the union of free extents
//! plus the union of allocated extents is exactly `[0, capacity)`.
//!
//! # Handles
//!
//! [`Handle`]s pair the extent's start address with a per-arena monotonic
//! generation tag. A released handle is dead forever: a later allocation
//! that reuses the same address carries a fresh generation, so the stale
//! handle is rejected with [`ArenaError::InvalidFree`] instead of silently
//! freeing someone else's extent.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod error;
pub mod extent;
pub mod handle;
pub mod table;

// Public re-exports for the primary API surface.
pub use arena::Arena;
pub use error::ArenaError;
pub use extent::Extent;
pub use handle::Handle;
pub use table::HandleTable;
