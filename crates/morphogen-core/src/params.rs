//! Per-run parameter records, experiment modes, and render settings.

use crate::error::ParamError;

/// Immutable per-run simulation parameters.
///
/// Owned by the run controller; the integrator and kinetics read it but
/// never mutate it. Combine a [`Settings`] record with a [`Mode`] via
/// [`Settings::params_for`].
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    /// Brusselator feed parameter `a`.
    pub a: f64,
    /// Brusselator control parameter `b`.
    pub b: f64,
    /// Diffusion coefficient for the `u` field.
    pub d0: f64,
    /// Diffusion coefficient for the `v` field.
    pub d1: f64,
    /// Integration timestep.
    pub dt: f64,
    /// Total simulated time.
    pub t_max: f64,
    /// Grid side length in cells.
    pub resolution: usize,
}

impl Params {
    /// Validate every field, failing fast before any stepping begins.
    ///
    /// Does not apply the stability bound; the integrator checks that at
    /// construction because it also depends on the boundary-independent
    /// grid spacing (see [`Params::max_stable_dt`]).
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.resolution == 0 {
            return Err(ParamError::ResolutionZero);
        }
        for (name, value) in [
            ("a", self.a),
            ("b", self.b),
            ("d0", self.d0),
            ("d1", self.d1),
            ("dt", self.dt),
            ("t_max", self.t_max),
        ] {
            if !value.is_finite() {
                return Err(ParamError::NonFinite { name });
            }
        }
        for (name, value) in [("dt", self.dt), ("t_max", self.t_max)] {
            if value <= 0.0 {
                return Err(ParamError::NonPositive { name, value });
            }
        }
        for (name, value) in [("d0", self.d0), ("d1", self.d1)] {
            if value < 0.0 {
                return Err(ParamError::NegativeDiffusion { name, value });
            }
        }
        Ok(())
    }

    /// Grid spacing `h` for a unit-square domain.
    pub fn spacing(&self) -> f64 {
        1.0 / self.resolution as f64
    }

    /// Total integrator steps for a full run: `round(t_max / dt)`.
    pub fn step_count(&self) -> u64 {
        (self.t_max / self.dt).round() as u64
    }

    /// Largest stable timestep for the explicit diffusion term:
    /// `h^2 / (4 * max(d0, d1))`.
    ///
    /// Returns `None` when both coefficients are zero (pure kinetics has
    /// no diffusive stability constraint).
    pub fn max_stable_dt(&self) -> Option<f64> {
        let d = self.d0.max(self.d1);
        if d > 0.0 {
            let h = self.spacing();
            Some(h * h / (4.0 * d))
        } else {
            None
        }
    }
}

/// One named experiment: a parameter set plus output metadata.
///
/// Modes are independent; runs for different modes share no mutable
/// state and may execute in parallel.
#[derive(Clone, Debug, PartialEq)]
pub struct Mode {
    /// Human-readable experiment title.
    pub title: String,
    /// Brusselator feed parameter `a`.
    pub a: f64,
    /// Brusselator control parameter `b`.
    pub b: f64,
    /// Diffusion coefficient for `u`.
    pub d0: f64,
    /// Diffusion coefficient for `v`.
    pub d1: f64,
    /// Target output filename for the encoded video.
    pub filename: String,
    /// Stability classification from linear analysis (informational).
    pub description: String,
}

/// Shared run settings, independent of any particular [`Mode`].
///
/// The core consumes this as an already-parsed record; the CLI crate
/// owns deserialization and palette-name resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Grid side length in cells.
    pub resolution: usize,
    /// Output frames per unit of simulated time.
    pub frame_rate: f64,
    /// Total simulated time per mode.
    pub t_max: f64,
    /// Integration timestep.
    pub dt: f64,
    /// Lower clamp bound for color mapping.
    pub color_vmin: f64,
    /// Upper clamp bound for color mapping.
    pub color_vmax: f64,
    /// Palette name for the `u` field (resolved by the palette provider).
    pub u_color: String,
    /// Palette name for the `v` field.
    pub v_color: String,
    /// `true` selects the zero-flux boundary, `false` the periodic one.
    pub fixed_boundary: bool,
    /// Centred crop factor for rendering; values above 1 zoom in.
    pub zoom_factor: f64,
    /// Standard deviation of the initial `v` perturbation.
    pub noise_amplitude: f64,
    /// RNG seed for the initial perturbation (deterministic replay).
    pub seed: u64,
}

impl Settings {
    /// Validate render-side settings (the simulation parameters are
    /// validated per mode via [`Params::validate`]).
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.resolution == 0 {
            return Err(ParamError::ResolutionZero);
        }
        for (name, value) in [
            ("frame_rate", self.frame_rate),
            ("zoom_factor", self.zoom_factor),
        ] {
            if !value.is_finite() {
                return Err(ParamError::NonFinite { name });
            }
            if value <= 0.0 {
                return Err(ParamError::NonPositive { name, value });
            }
        }
        if !self.color_vmin.is_finite() || !self.color_vmax.is_finite() {
            return Err(ParamError::NonFinite { name: "color range" });
        }
        if self.color_vmin >= self.color_vmax {
            return Err(ParamError::EmptyColorRange {
                vmin: self.color_vmin,
                vmax: self.color_vmax,
            });
        }
        if !self.noise_amplitude.is_finite() {
            return Err(ParamError::NonFinite {
                name: "noise_amplitude",
            });
        }
        if self.noise_amplitude < 0.0 {
            return Err(ParamError::Negative {
                name: "noise_amplitude",
                value: self.noise_amplitude,
            });
        }
        Ok(())
    }

    /// Combine these settings with one mode's parameter set.
    pub fn params_for(&self, mode: &Mode) -> Params {
        Params {
            a: mode.a,
            b: mode.b,
            d0: mode.d0,
            d1: mode.d1,
            dt: self.dt,
            t_max: self.t_max,
            resolution: self.resolution,
        }
    }
}
