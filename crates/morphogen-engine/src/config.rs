//! Run configuration validation and error types.

use std::error::Error;
use std::fmt;

use morphogen_core::{ParamError, Params, Settings};

/// Errors detected before a run starts stepping.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A parameter or setting failed validation.
    Param(ParamError),
    /// The frame interval `1 / frame_rate` is shorter than `dt`.
    ///
    /// Frames are sampled at step boundaries, so a frame interval below
    /// the timestep could never hit every frame boundary.
    FrameIntervalBelowDt {
        /// Configured frames per time unit.
        frame_rate: f64,
        /// Configured timestep.
        dt: f64,
    },
    /// A mode worker thread panicked; its report is lost.
    ModePanicked,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Param(err) => write!(f, "invalid parameters: {err}"),
            Self::FrameIntervalBelowDt { frame_rate, dt } => write!(
                f,
                "frame interval 1/{frame_rate} is shorter than dt ({dt}); \
                 frames cannot outpace integrator steps"
            ),
            Self::ModePanicked => write!(f, "mode worker thread panicked"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Param(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParamError> for ConfigError {
    fn from(err: ParamError) -> Self {
        ConfigError::Param(err)
    }
}

/// Validate everything a run depends on, before any stepping.
///
/// Beyond the per-record checks this requires `a > 0` (the seed state
/// `(a, b/a)` needs it) and a frame interval no shorter than `dt`.
pub fn validate_run(settings: &Settings, params: &Params) -> Result<(), ConfigError> {
    settings.validate()?;
    params.validate()?;
    if params.a <= 0.0 {
        return Err(ParamError::NonPositive {
            name: "a",
            value: params.a,
        }
        .into());
    }
    if 1.0 / settings.frame_rate < settings.dt {
        return Err(ConfigError::FrameIntervalBelowDt {
            frame_rate: settings.frame_rate,
            dt: settings.dt,
        });
    }
    Ok(())
}
