//! Core types for the Morphogen reaction-diffusion simulator.
//!
//! This is the leaf crate with zero dependencies. It defines the
//! fundamental vocabulary shared by the rest of the workspace: species
//! and step identifiers, per-run parameter records, experiment modes,
//! render settings, and the parameter validation errors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod params;
pub mod species;

pub use error::ParamError;
pub use id::StepId;
pub use params::{Mode, Params, Settings};
pub use species::Species;
