//! Double-buffered concentration grid and Laplacian stencil.
//!
//! [`Grid`] owns the two concentration fields plus a same-shaped scratch
//! pair for compute-then-swap updates. [`stencil`] provides the pure
//! 5-point finite-difference Laplacian with [`BoundaryPolicy`]-aware
//! edge handling.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod error;
pub mod grid;
pub mod stencil;

pub use boundary::BoundaryPolicy;
pub use error::GridError;
pub use grid::{Grid, SeedPolicy};
