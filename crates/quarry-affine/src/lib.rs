//! 2D homogeneous-coordinate transforms for Quarry.
//!
//! [`Transform`] is a row-major 3×3 matrix applied to 2D points through
//! homogeneous coordinates: lift `(x, y)` to `(x, y, 1)`, multiply, then
//! divide by the resulting `w`. Translation, scaling, rotation, and shear
//! compose by matrix multiplication; [`Transform::about_point`] conjugates
//! a transform so it acts about an arbitrary pivot instead of the origin.
//!
//! These are stateless helpers over caller-supplied data — no interaction
//! with the rest of the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod transform;

pub use transform::{Point, Transform};
