//! Binary min-heap for Quarry.
//!
//! [`MinHeap`] keeps `(priority, item)` pairs in array-backed binary-heap
//! order: every node's priority is less than or equal to both children's,
//! so the root is always the global minimum. Comparison uses the priority
//! only — the item is inert cargo, never inspected for ordering.
//!
//! Heap order is the *only* ordering guarantee. Iterating the underlying
//! array yields entries in structural order, and ties among equal
//! priorities have no specified secondary order.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod heap;

pub use heap::MinHeap;
