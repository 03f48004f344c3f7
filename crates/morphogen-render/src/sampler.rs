//! Time-based frame sampling from the simulation grid.

use morphogen_core::{Species, StepId};
use morphogen_grid::Grid;

use crate::frame::Frame;
use crate::palette::{Palette, Rgb};

/// Absolute slack when comparing simulation time against a frame
/// boundary, so accumulated rounding in `step * dt` cannot push an
/// emission one step late across an exact boundary.
const TIME_SLACK: f64 = 1e-9;

/// Decides which steps become frames and renders the field rasters.
///
/// Cadence is time-based, not step-based: frame `k` is emitted at the
/// first sampled instant whose simulation time reaches `k / frame_rate`,
/// so `dt` and `frame_rate` stay fully independent. For a run sampled
/// once per step before each step executes, a full run emits exactly
/// `round(t_max * frame_rate)` frames with timestamps spaced
/// `1 / frame_rate` apart.
pub struct FrameSampler {
    frame_rate: f64,
    vmin: f64,
    vmax: f64,
    zoom_factor: f64,
    next_index: u64,
}

impl FrameSampler {
    /// Create a sampler.
    ///
    /// The arguments are assumed validated upstream (`frame_rate` and
    /// `zoom_factor` strictly positive, `vmin < vmax`).
    pub fn new(frame_rate: f64, vmin: f64, vmax: f64, zoom_factor: f64) -> Self {
        debug_assert!(frame_rate > 0.0);
        debug_assert!(zoom_factor > 0.0);
        debug_assert!(vmin < vmax);
        Self {
            frame_rate,
            vmin,
            vmax,
            zoom_factor,
            next_index: 0,
        }
    }

    /// Frames emitted so far.
    pub fn frames_emitted(&self) -> u64 {
        self.next_index
    }

    /// Emit a frame if `sim_time` has reached the next frame boundary.
    ///
    /// `step` is the integrator step whose published state `grid`
    /// currently holds. Returns `None` between boundaries.
    pub fn maybe_sample(
        &mut self,
        sim_time: f64,
        step: StepId,
        grid: &Grid,
        u_palette: &dyn Palette,
        v_palette: &dyn Palette,
    ) -> Option<Frame> {
        let due = self.next_index as f64 / self.frame_rate;
        if sim_time + TIME_SLACK < due {
            return None;
        }

        let resolution = grid.resolution();
        let (start, side) = crop_range(resolution, self.zoom_factor);
        let frame = Frame {
            index: self.next_index,
            time: due,
            step,
            width: side,
            height: side,
            u_pixels: self.render_field(grid.field(Species::U), resolution, start, side, u_palette),
            v_pixels: self.render_field(grid.field(Species::V), resolution, start, side, v_palette),
        };
        self.next_index += 1;
        Some(frame)
    }

    fn render_field(
        &self,
        field: &[f64],
        resolution: usize,
        start: usize,
        side: usize,
        palette: &dyn Palette,
    ) -> Vec<Rgb> {
        let span = self.vmax - self.vmin;
        let mut pixels = Vec::with_capacity(side * side);
        for y in start..start + side {
            for x in start..start + side {
                let value = field[y * resolution + x];
                let t = (value.clamp(self.vmin, self.vmax) - self.vmin) / span;
                pixels.push(palette.color(t));
            }
        }
        pixels
    }
}

/// Centred crop window for a zoom factor: `(start, side)`.
///
/// The crop fraction of the linear dimension is `min(1, 1/zoom_factor)`,
/// so factors above 1 zoom in on the centre and factors at or below 1
/// render the full grid. Rendering-only; simulation always runs on the
/// full grid.
pub fn crop_range(resolution: usize, zoom_factor: f64) -> (usize, usize) {
    let frac = (1.0 / zoom_factor).min(1.0);
    let side = ((resolution as f64 * frac).round() as usize).clamp(1, resolution);
    let start = (resolution - side) / 2;
    (start, side)
}
