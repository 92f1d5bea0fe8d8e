//! Priority queue over arena-managed storage.
//!
//! [`ManagedPriorityQueue`] composes three structures and is the sole
//! writer of all of them:
//!
//! ```text
//! ManagedPriorityQueue<P, V>
//! ├── Arena           — free extents, first-fit allocation, coalescing
//! ├── HandleTable<V>  — Handle → (size, payload)
//! └── MinHeap<P, Handle> — ordering metadata only
//! ```
//!
//! Every public operation is atomic from the caller's perspective: it
//! either fully completes, leaving the three structures mutually
//! consistent, or fails cleanly with no mutation. No externally observable
//! state ever contains a heap entry whose handle is absent from the table.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self`, so exclusive access is enforced
//! by the compiler. The queue is `Send`; callers that need cross-thread
//! sharing wrap the whole queue behind one coarse lock — there is no
//! internal locking to compose with.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod metrics;
pub mod queue;

pub use error::QueueError;
pub use metrics::QueueMetrics;
pub use queue::ManagedPriorityQueue;
