//! Settings-file parsing.
//!
//! The on-disk format is a single JSON document holding the shared
//! render settings plus the list of modes to run:
//!
//! ```json
//! {
//!     "resolution": 512,
//!     "frame_rate": 30,
//!     "t_max": 48,
//!     "dt": 0.001,
//!     "color_vmin": 0.0,
//!     "color_vmax": 5.0,
//!     "u_color": "Blues",
//!     "v_color": "Reds",
//!     "fixed_boundary": true,
//!     "zoom_factor": 1.0,
//!     "modes": [
//!         {
//!             "title": "Oscillating",
//!             "a": 1.0, "b": 3.0, "d0": 1.0, "d1": 0.1,
//!             "filename": "oscillating.mp4",
//!             "description": "Unstable focus"
//!         }
//!     ]
//! }
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use morphogen_core::{Mode, Settings};
use serde::Deserialize;

use crate::palettes;

/// Why a settings file could not be loaded.
#[derive(Debug)]
pub enum SettingsError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The file is not valid JSON or is missing required fields.
    Parse(serde_json::Error),
    /// A color name does not match any known palette.
    UnknownPalette {
        /// The `u_color` or `v_color` field at fault.
        field: &'static str,
        /// The unrecognized name.
        name: String,
    },
    /// The file parsed but defined no modes to run.
    NoModes,
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read settings file: {e}"),
            Self::Parse(e) => write!(f, "cannot parse settings file: {e}"),
            Self::UnknownPalette { field, name } => {
                write!(f, "{field}: unknown palette {name:?}")
            }
            Self::NoModes => write!(f, "settings file defines no modes"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

#[derive(Debug, Deserialize)]
struct ModeFile {
    title: String,
    a: f64,
    b: f64,
    d0: f64,
    d1: f64,
    filename: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct SettingsFile {
    resolution: usize,
    frame_rate: f64,
    t_max: f64,
    dt: f64,
    color_vmin: f64,
    color_vmax: f64,
    u_color: String,
    v_color: String,
    fixed_boundary: bool,
    zoom_factor: f64,
    #[serde(default = "default_noise_amplitude")]
    noise_amplitude: f64,
    #[serde(default = "default_seed")]
    seed: u64,
    modes: Vec<ModeFile>,
}

fn default_noise_amplitude() -> f64 {
    0.1
}

fn default_seed() -> u64 {
    42
}

/// A fully parsed and palette-checked settings file.
#[derive(Debug)]
pub struct LoadedSettings {
    /// Shared run settings.
    pub settings: Settings,
    /// The modes to run, in file order.
    pub modes: Vec<Mode>,
}

/// Load and validate a settings file.
///
/// Palette names are resolved here so a typo fails before any
/// simulation starts; numeric validation stays with the engine, which
/// checks per mode.
pub fn load(path: &Path) -> Result<LoadedSettings, SettingsError> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

fn parse(text: &str) -> Result<LoadedSettings, SettingsError> {
    let file: SettingsFile = serde_json::from_str(text)?;

    for (field, name) in [("u_color", &file.u_color), ("v_color", &file.v_color)] {
        if palettes::lookup(name).is_none() {
            return Err(SettingsError::UnknownPalette {
                field,
                name: name.clone(),
            });
        }
    }
    if file.modes.is_empty() {
        return Err(SettingsError::NoModes);
    }

    let settings = Settings {
        resolution: file.resolution,
        frame_rate: file.frame_rate,
        t_max: file.t_max,
        dt: file.dt,
        color_vmin: file.color_vmin,
        color_vmax: file.color_vmax,
        u_color: file.u_color,
        v_color: file.v_color,
        fixed_boundary: file.fixed_boundary,
        zoom_factor: file.zoom_factor,
        noise_amplitude: file.noise_amplitude,
        seed: file.seed,
    };
    let modes = file
        .modes
        .into_iter()
        .map(|m| Mode {
            title: m.title,
            a: m.a,
            b: m.b,
            d0: m.d0,
            d1: m.d1,
            filename: m.filename,
            description: m.description,
        })
        .collect();

    Ok(LoadedSettings { settings, modes })
}
