//! Per-mode run controller.

use morphogen_core::{Mode, Params, Settings, StepId};
use morphogen_grid::{BoundaryPolicy, Grid, SeedPolicy};
use morphogen_render::{FrameSampler, Palette};
use morphogen_solver::reaction::fixed_point;
use morphogen_solver::{Integrator, StepError};

use crate::cancel::CancelToken;
use crate::config::{validate_run, ConfigError};
use crate::sink::{FrameSink, SinkError};
use crate::stats::FieldStats;

/// How a run ended.
#[derive(Clone, Debug, PartialEq)]
pub enum RunOutcome {
    /// The full step count was executed.
    Completed,
    /// Cancellation was requested between steps.
    Cancelled,
    /// A step produced a non-finite value; the mode was aborted.
    Failed {
        /// The blow-up detected by the integrator.
        error: StepError,
        /// Diagnostics over the last valid state.
        stats: FieldStats,
    },
    /// The frame sink refused a frame; stepping further would be
    /// unobservable, so the run stopped.
    SinkClosed {
        /// The sink's reported reason.
        reason: SinkError,
    },
}

/// Result of one mode's run, whatever its outcome.
///
/// A failed mode still reports how many steps succeeded and how many
/// frames were delivered, so a batch log can say exactly where the
/// sequence was truncated instead of truncating silently.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    /// Title of the mode that ran.
    pub mode: String,
    /// Successfully executed integrator steps.
    pub steps_completed: u64,
    /// Frames delivered to the sink.
    pub frames_emitted: u64,
    /// How the run ended.
    pub outcome: RunOutcome,
}

impl RunReport {
    /// Whether the run executed its full step count.
    pub fn is_complete(&self) -> bool {
        matches!(self.outcome, RunOutcome::Completed)
    }
}

/// Drives one mode from seed state to its final frame.
///
/// Owns the grid, integrator, and sampler for exactly one run; nothing
/// is shared between runners, so independent modes can run on separate
/// threads without coordination. A runner is not resumable: re-invoke
/// with the same settings and mode to restart a run.
pub struct Runner {
    title: String,
    params: Params,
    grid: Grid,
    integrator: Integrator,
    sampler: FrameSampler,
    u_palette: Box<dyn Palette + Send>,
    v_palette: Box<dyn Palette + Send>,
    cancel: CancelToken,
}

impl std::fmt::Debug for Runner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runner")
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

impl Runner {
    /// Validate the configuration and seed the grid.
    ///
    /// The initial state is the homogeneous fixed point `(a, b/a)`,
    /// with `noise_amplitude > 0` adding the deterministic Gaussian
    /// perturbation to `v` that lets instabilities break symmetry.
    pub fn new(
        settings: &Settings,
        mode: &Mode,
        u_palette: Box<dyn Palette + Send>,
        v_palette: Box<dyn Palette + Send>,
    ) -> Result<Self, ConfigError> {
        let params = settings.params_for(mode);
        validate_run(settings, &params)?;

        let boundary = BoundaryPolicy::from_fixed_flag(settings.fixed_boundary);
        let integrator = Integrator::new(params.clone(), boundary)?;

        let (u0, v0) = fixed_point(params.a, params.b);
        let seed_policy = if settings.noise_amplitude > 0.0 {
            SeedPolicy::Perturbed {
                u: u0,
                v: v0,
                amplitude: settings.noise_amplitude,
                seed: settings.seed,
            }
        } else {
            SeedPolicy::Uniform { u: u0, v: v0 }
        };
        // Resolution was validated above, so construction cannot fail.
        let grid = Grid::new(params.resolution, seed_policy)
            .map_err(|_| ConfigError::Param(morphogen_core::ParamError::ResolutionZero))?;

        let sampler = FrameSampler::new(
            settings.frame_rate,
            settings.color_vmin,
            settings.color_vmax,
            settings.zoom_factor,
        );

        Ok(Self {
            title: mode.title.clone(),
            params,
            grid,
            integrator,
            sampler,
            u_palette,
            v_palette,
            cancel: CancelToken::new(),
        })
    }

    /// Token for cancelling this run from another thread.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// The mode title this runner was built for.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Execute the run, forwarding frames to `sink` in strictly
    /// increasing time order.
    ///
    /// Each loop iteration samples the published state *before*
    /// stepping, so frame 0 shows the seed state and a blow-up at step
    /// `n` still leaves every frame up to time `n * dt` delivered.
    pub fn run(&mut self, sink: &mut dyn FrameSink) -> RunReport {
        let total_steps = self.params.step_count();
        let dt = self.params.dt;
        let mut delivered = 0u64;

        for s in 0..total_steps {
            if self.cancel.is_cancelled() {
                return self.report(s, delivered, RunOutcome::Cancelled);
            }

            let sim_time = s as f64 * dt;
            let published = StepId(s);
            if let Some(frame) = self.sampler.maybe_sample(
                sim_time,
                published,
                &self.grid,
                &*self.u_palette,
                &*self.v_palette,
            ) {
                if let Err(reason) = sink.submit(frame) {
                    return self.report(s, delivered, RunOutcome::SinkClosed { reason });
                }
                delivered += 1;
            }

            if let Err(error) = self.integrator.step(&mut self.grid, published.next()) {
                let stats = FieldStats::of(&self.grid);
                return self.report(s, delivered, RunOutcome::Failed { error, stats });
            }
        }

        self.report(total_steps, delivered, RunOutcome::Completed)
    }

    fn report(&self, steps_completed: u64, frames_emitted: u64, outcome: RunOutcome) -> RunReport {
        RunReport {
            mode: self.title.clone(),
            steps_completed,
            frames_emitted,
            outcome,
        }
    }
}
