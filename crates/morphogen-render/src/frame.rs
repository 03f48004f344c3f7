//! Rendered frame snapshots.

use morphogen_core::StepId;

use crate::palette::Rgb;

/// One rendered snapshot of the simulation.
///
/// Frames are immutable once produced; the sampler hands them off and
/// retains nothing. Both rasters are row-major `width * height` and
/// always share their dimensions (the centred crop applies to both
/// species identically).
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Zero-based frame index within the run.
    pub index: u64,
    /// Nominal timestamp: `index / frame_rate`.
    pub time: f64,
    /// The integrator step whose state this frame shows.
    pub step: StepId,
    /// Raster width in pixels.
    pub width: usize,
    /// Raster height in pixels.
    pub height: usize,
    /// Color-mapped `u` field.
    pub u_pixels: Vec<Rgb>,
    /// Color-mapped `v` field.
    pub v_pixels: Vec<Rgb>,
}

impl Frame {
    /// Total pixels per raster.
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}
