//! Brusselator kinetics and the explicit time integrator.
//!
//! [`reaction`] holds the pure local kinetics; [`integrator`] combines
//! them with the diffusion stencil into a forward-Euler step over a
//! [`morphogen_grid::Grid`], detecting numerical blow-up as it goes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod integrator;
pub mod reaction;

pub use error::StepError;
pub use integrator::Integrator;
