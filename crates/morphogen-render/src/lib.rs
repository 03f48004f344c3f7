//! Frame sampling and color mapping.
//!
//! [`FrameSampler`] decides which integrator steps become output frames
//! (time-based cadence, independent of the step rate) and extracts the
//! concentration fields into RGB rasters via a [`Palette`]. Rendering
//! never feeds back into simulation state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod frame;
pub mod palette;
pub mod sampler;

pub use frame::Frame;
pub use palette::{GradientRamp, Palette, Rgb};
pub use sampler::FrameSampler;
