//! Command-line Brusselator renderer.
//!
//! Reads a JSON settings file, runs every mode in parallel, and writes
//! each mode's frames as a PPM sequence into a numbered run directory.

mod output;
mod palettes;
mod settings;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use morphogen_engine::{run_batch, ModeJob, RunOutcome};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::output::PpmSequenceSink;
use crate::settings::LoadedSettings;

#[derive(Parser, Debug)]
#[command(name = "morphogen", version, about)]
struct Args {
    /// Settings file describing the run and its modes
    #[arg(default_value = "settings.json")]
    settings: PathBuf,

    /// Root directory for numbered run outputs
    #[arg(long, default_value = "results")]
    out: PathBuf,
}

fn main() -> ExitCode {
    // RUST_LOG overrides; default to info so mode progress is visible.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(all_completed) => {
            if all_completed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<bool, Box<dyn std::error::Error>> {
    let LoadedSettings { settings, modes } = settings::load(&args.settings)?;
    info!(
        path = %args.settings.display(),
        modes = modes.len(),
        "settings loaded"
    );

    let run_dir = output::create_run_dir(&args.out)?;
    info!(dir = %run_dir.display(), "created run directory");
    output::write_settings_echo(&run_dir, &settings, &modes)?;

    // Palette names were checked at load time.
    let lookup_boxed = |name: &str| -> Box<dyn morphogen_render::Palette + Send> {
        Box::new(palettes::lookup(name).unwrap_or_else(|| {
            unreachable!("palette {name:?} vanished after validation")
        }))
    };

    let mut jobs = Vec::with_capacity(modes.len());
    for mode in &modes {
        let sink = PpmSequenceSink::create(&run_dir, &mode.title)?;
        info!(mode = %mode.title, dir = %sink.dir().display(), "frames directory ready");
        jobs.push(ModeJob {
            mode: mode.clone(),
            u_palette: lookup_boxed(&settings.u_color),
            v_palette: lookup_boxed(&settings.v_color),
            sink: Box::new(sink),
        });
    }

    info!(modes = jobs.len(), "starting batch");
    let reports = run_batch(&settings, jobs);

    let mut all_completed = true;
    for (mode, result) in modes.iter().zip(reports) {
        match result {
            Ok(report) => match &report.outcome {
                RunOutcome::Completed => {
                    info!(
                        mode = %report.mode,
                        steps = report.steps_completed,
                        frames = report.frames_emitted,
                        "mode completed"
                    );
                }
                RunOutcome::Failed { error, stats } => {
                    all_completed = false;
                    error!(
                        mode = %report.mode,
                        steps = report.steps_completed,
                        frames = report.frames_emitted,
                        "mode aborted: {error}"
                    );
                    warn!(
                        mode = %report.mode,
                        u_min = stats.u.min,
                        u_max = stats.u.max,
                        u_mean = stats.u.mean,
                        v_min = stats.v.min,
                        v_max = stats.v.max,
                        v_mean = stats.v.mean,
                        "last valid state"
                    );
                }
                RunOutcome::Cancelled => {
                    all_completed = false;
                    warn!(mode = %report.mode, "mode cancelled");
                }
                RunOutcome::SinkClosed { reason } => {
                    all_completed = false;
                    error!(mode = %report.mode, "frame output stopped: {reason}");
                }
            },
            Err(e) => {
                all_completed = false;
                error!(mode = %mode.title, "mode rejected: {e}");
            }
        }
    }

    info!("all modes processed");
    Ok(all_completed)
}
