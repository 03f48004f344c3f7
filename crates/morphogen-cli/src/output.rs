//! On-disk layout of a render: numbered run directories, the settings
//! echo, and per-mode frame sequences.
//!
//! Layout under the output root:
//!
//! ```text
//! results/
//!   1/
//!     settings.json          echo of the effective settings
//!     frames_oscillating/
//!       frame_0000.ppm
//!       frame_0001.ppm
//!       ...
//!   2/
//!     ...
//! ```

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use morphogen_core::{Mode, Settings};
use morphogen_engine::{FrameSink, SinkError};
use morphogen_render::Frame;

/// Create the next numbered run directory under `root`.
///
/// Existing numeric subdirectories are never reused, so reruns are
/// side by side instead of overwriting each other.
pub fn create_run_dir(root: &Path) -> std::io::Result<PathBuf> {
    fs::create_dir_all(root)?;
    let mut highest = 0u32;
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if let Some(n) = entry.file_name().to_str().and_then(|s| s.parse().ok()) {
            highest = highest.max(n);
        }
    }
    let dir = root.join((highest + 1).to_string());
    fs::create_dir(&dir)?;
    Ok(dir)
}

/// Write the effective settings and mode list next to the frames, so a
/// run directory is self-describing.
pub fn write_settings_echo(
    dir: &Path,
    settings: &Settings,
    modes: &[Mode],
) -> std::io::Result<()> {
    let modes: Vec<_> = modes
        .iter()
        .map(|m| {
            serde_json::json!({
                "title": m.title,
                "a": m.a,
                "b": m.b,
                "d0": m.d0,
                "d1": m.d1,
                "filename": m.filename,
                "description": m.description,
            })
        })
        .collect();
    let doc = serde_json::json!({
        "resolution": settings.resolution,
        "frame_rate": settings.frame_rate,
        "t_max": settings.t_max,
        "dt": settings.dt,
        "color_vmin": settings.color_vmin,
        "color_vmax": settings.color_vmax,
        "u_color": settings.u_color,
        "v_color": settings.v_color,
        "fixed_boundary": settings.fixed_boundary,
        "zoom_factor": settings.zoom_factor,
        "noise_amplitude": settings.noise_amplitude,
        "seed": settings.seed,
        "modes": modes,
    });
    let mut file = BufWriter::new(File::create(dir.join("settings.json"))?);
    serde_json::to_writer_pretty(&mut file, &doc)?;
    writeln!(file)?;
    file.flush()
}

/// Filesystem-safe directory slug for a mode title.
pub fn title_slug(title: &str) -> String {
    title.replace(' ', "_").to_lowercase()
}

/// Sink that writes each frame as a binary PPM image in a per-mode
/// directory.
///
/// The two species rasters are composited into one image, the
/// inhibitor drawn over the activator at the blend the interactive
/// overlays use. PPM keeps the writer dependency-free; any video
/// encoder can assemble `frame_%04d.ppm` into the mode's target file.
pub struct PpmSequenceSink {
    dir: PathBuf,
}

impl PpmSequenceSink {
    /// Create the mode's frame directory under `run_dir`.
    pub fn create(run_dir: &Path, title: &str) -> std::io::Result<Self> {
        let dir = run_dir.join(format!("frames_{}", title_slug(title)));
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory the frames are written into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn write_frame(&self, frame: &Frame) -> std::io::Result<()> {
        let path = self.dir.join(format!("frame_{:04}.ppm", frame.index));
        let mut out = BufWriter::new(File::create(path)?);
        write!(out, "P6\n{} {}\n255\n", frame.width, frame.height)?;
        for (u, v) in frame.u_pixels.iter().zip(&frame.v_pixels) {
            let blend = |a: u8, b: u8| -> u8 { (0.4 * a as f64 + 0.6 * b as f64).round() as u8 };
            out.write_all(&[blend(u.r, v.r), blend(u.g, v.g), blend(u.b, v.b)])?;
        }
        out.flush()
    }
}

impl FrameSink for PpmSequenceSink {
    fn submit(&mut self, frame: Frame) -> Result<(), SinkError> {
        self.write_frame(&frame).map_err(|e| SinkError::Failed {
            reason: format!("writing frame {}: {e}", frame.index),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morphogen_core::StepId;
    use morphogen_render::Rgb;

    #[test]
    fn run_dirs_are_numbered_sequentially() {
        let root = tempfile::tempdir().unwrap();
        let first = create_run_dir(root.path()).unwrap();
        let second = create_run_dir(root.path()).unwrap();
        assert_eq!(first.file_name().unwrap(), "1");
        assert_eq!(second.file_name().unwrap(), "2");
    }

    #[test]
    fn non_numeric_entries_are_ignored() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("archive")).unwrap();
        let dir = create_run_dir(root.path()).unwrap();
        assert_eq!(dir.file_name().unwrap(), "1");
    }

    #[test]
    fn title_slugs_are_lowercase_with_underscores() {
        assert_eq!(title_slug("Reaction Driven"), "reaction_driven");
        assert_eq!(title_slug("Oscillating"), "oscillating");
    }

    #[test]
    fn ppm_frames_carry_the_expected_header_and_size() {
        let root = tempfile::tempdir().unwrap();
        let mut sink = PpmSequenceSink::create(root.path(), "Oscillating").unwrap();

        let frame = Frame {
            index: 3,
            time: 0.3,
            step: StepId(30),
            width: 2,
            height: 2,
            u_pixels: vec![Rgb::new(255, 0, 0); 4],
            v_pixels: vec![Rgb::new(0, 0, 255); 4],
        };
        sink.submit(frame).unwrap();

        let path = root
            .path()
            .join("frames_oscillating")
            .join("frame_0003.ppm");
        let bytes = fs::read(path).unwrap();
        assert!(bytes.starts_with(b"P6\n2 2\n255\n"));
        // Header plus 4 RGB triples.
        assert_eq!(bytes.len(), 11 + 12);
        // 0.4 * 255 = 102 red, 0.6 * 255 = 153 blue.
        assert_eq!(&bytes[11..14], &[102, 0, 153]);
    }

    #[test]
    fn settings_echo_is_valid_json() {
        let root = tempfile::tempdir().unwrap();
        let settings = Settings {
            resolution: 64,
            frame_rate: 30.0,
            t_max: 2.0,
            dt: 1e-4,
            color_vmin: 0.0,
            color_vmax: 5.0,
            u_color: "Blues".into(),
            v_color: "Reds".into(),
            fixed_boundary: true,
            zoom_factor: 1.0,
            noise_amplitude: 0.1,
            seed: 42,
        };
        let mode = Mode {
            title: "Oscillating".into(),
            a: 1.0,
            b: 3.0,
            d0: 1.0,
            d1: 0.1,
            filename: "oscillating.mp4".into(),
            description: "Unstable focus".into(),
        };
        write_settings_echo(root.path(), &settings, &[mode]).unwrap();

        let text = fs::read_to_string(root.path().join("settings.json")).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(doc["resolution"], 64);
        assert_eq!(doc["modes"][0]["title"], "Oscillating");
    }
}
