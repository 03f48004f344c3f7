//! Morphogen: a Brusselator reaction-diffusion simulator.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Morphogen sub-crates. For most users, adding `morphogen` as
//! a single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use morphogen::prelude::*;
//!
//! let settings = Settings {
//!     resolution: 32,
//!     frame_rate: 10.0,
//!     t_max: 1.0,
//!     dt: 1e-3,
//!     color_vmin: 0.0,
//!     color_vmax: 5.0,
//!     u_color: "Blues".into(),
//!     v_color: "Reds".into(),
//!     fixed_boundary: true,
//!     zoom_factor: 1.0,
//!     noise_amplitude: 0.1,
//!     seed: 42,
//! };
//! let mode = Mode {
//!     title: "oscillating".into(),
//!     a: 1.0,
//!     b: 3.0,
//!     d0: 0.001,
//!     d1: 0.0005,
//!     filename: "oscillating.mp4".into(),
//!     description: "unstable focus".into(),
//! };
//!
//! let grey: Box<dyn Palette + Send> = Box::new(GradientRamp::new(vec![
//!     Rgb::new(0, 0, 0),
//!     Rgb::new(255, 255, 255),
//! ]));
//! let grey2: Box<dyn Palette + Send> = Box::new(GradientRamp::new(vec![
//!     Rgb::new(0, 0, 0),
//!     Rgb::new(255, 255, 255),
//! ]));
//!
//! let mut runner = Runner::new(&settings, &mode, grey, grey2).unwrap();
//! let mut sink = VecSink::new();
//! let report = runner.run(&mut sink);
//! assert_eq!(report.outcome, RunOutcome::Completed);
//! assert_eq!(sink.frames.len(), 10);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `morphogen-core` | Parameters, settings, modes, species, IDs |
//! | [`grid`] | `morphogen-grid` | Double-buffered concentration grid, Laplacian stencil |
//! | [`solver`] | `morphogen-solver` | Brusselator kinetics and forward-Euler integrator |
//! | [`render`] | `morphogen-render` | Frame sampling, palettes, RGB rasters |
//! | [`engine`] | `morphogen-engine` | Per-mode runs, streaming, parallel batches |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Parameters, settings, modes, and core IDs (`morphogen-core`).
///
/// Holds the per-run [`types::Params`] record, the shared
/// [`types::Settings`], named [`types::Mode`] experiments, and the
/// validation errors they produce.
pub use morphogen_core as types;

/// Concentration storage and spatial discretization (`morphogen-grid`).
///
/// Provides the double-buffered [`grid::Grid`], the seeding policies,
/// and the boundary-aware 5-point Laplacian in [`grid::stencil`].
pub use morphogen_grid as grid;

/// Kinetics and time integration (`morphogen-solver`).
///
/// The [`solver::reaction`] module holds the pure Brusselator terms;
/// [`solver::Integrator`] advances a grid one forward-Euler step at a
/// time and reports blow-up as [`solver::StepError`].
pub use morphogen_solver as solver;

/// Frame sampling and color mapping (`morphogen-render`).
///
/// [`render::FrameSampler`] turns selected simulation instants into
/// [`render::Frame`] rasters through a [`render::Palette`].
pub use morphogen_render as render;

/// Run orchestration (`morphogen-engine`).
///
/// [`engine::Runner`] for a single mode, [`engine::spawn_streaming`]
/// for a bounded-channel frame stream, and [`engine::run_batch`] for
/// parallel independent modes.
pub use morphogen_engine as engine;

/// Common imports for typical Morphogen usage.
///
/// ```rust
/// use morphogen::prelude::*;
/// ```
pub mod prelude {
    // Parameters and modes
    pub use morphogen_core::{Mode, ParamError, Params, Settings, Species, StepId};

    // Grid and boundaries
    pub use morphogen_grid::{BoundaryPolicy, Grid, GridError, SeedPolicy};

    // Solver
    pub use morphogen_solver::{Integrator, StepError};

    // Rendering
    pub use morphogen_render::{Frame, FrameSampler, GradientRamp, Palette, Rgb};

    // Engine
    pub use morphogen_engine::{
        run_batch, spawn_streaming, CancelToken, ConfigError, FieldStats, FrameSink, FrameStream,
        ModeJob, RunOutcome, RunReport, Runner, SinkError, VecSink,
    };
}
