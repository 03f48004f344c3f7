//! Parameter validation errors.

use std::error::Error;
use std::fmt;

/// A configuration value that fails validation before any stepping begins.
///
/// All checks are fail-fast: a run is never started with invalid
/// parameters, so the integrator itself only has to defend against
/// numerical blow-up.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamError {
    /// Grid resolution is zero.
    ResolutionZero,
    /// A value that must be strictly positive is not.
    NonPositive {
        /// Name of the offending setting.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A value that must be non-negative is negative.
    Negative {
        /// Name of the offending setting.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A diffusion coefficient is negative.
    NegativeDiffusion {
        /// `"d0"` or `"d1"`.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A value is NaN or infinite.
    NonFinite {
        /// Name of the offending setting.
        name: &'static str,
    },
    /// `color_vmin` does not lie strictly below `color_vmax`.
    EmptyColorRange {
        /// Lower clamp bound.
        vmin: f64,
        /// Upper clamp bound.
        vmax: f64,
    },
    /// `dt` violates the explicit-scheme stability bound
    /// `dt <= h^2 / (4 * max(d0, d1))`.
    DtUnstable {
        /// The configured timestep.
        dt: f64,
        /// The largest stable timestep for these coefficients.
        limit: f64,
    },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResolutionZero => write!(f, "resolution must be at least 1"),
            Self::NonPositive { name, value } => {
                write!(f, "{name} must be strictly positive (got {value})")
            }
            Self::Negative { name, value } => {
                write!(f, "{name} must be non-negative (got {value})")
            }
            Self::NegativeDiffusion { name, value } => {
                write!(f, "diffusion coefficient {name} must be non-negative (got {value})")
            }
            Self::NonFinite { name } => write!(f, "{name} must be finite"),
            Self::EmptyColorRange { vmin, vmax } => {
                write!(f, "color_vmin ({vmin}) must be below color_vmax ({vmax})")
            }
            Self::DtUnstable { dt, limit } => {
                write!(f, "dt ({dt}) exceeds the diffusion stability limit ({limit})")
            }
        }
    }
}

impl Error for ParamError {}
