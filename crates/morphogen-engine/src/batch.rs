//! Running a set of modes in parallel under shared settings.

use std::thread;

use morphogen_core::{Mode, Settings};
use morphogen_render::Palette;

use crate::config::ConfigError;
use crate::run::{RunReport, Runner};
use crate::sink::FrameSink;

/// One mode plus everything its run needs that the shared settings do
/// not provide.
pub struct ModeJob {
    /// The mode to run.
    pub mode: Mode,
    /// Palette for the activator raster.
    pub u_palette: Box<dyn Palette + Send>,
    /// Palette for the inhibitor raster.
    pub v_palette: Box<dyn Palette + Send>,
    /// Destination for the mode's frames.
    pub sink: Box<dyn FrameSink>,
}

/// Run every job on its own thread and collect the reports in job
/// order.
///
/// Modes are independent: one mode blowing up or rejecting its
/// configuration does not stop the others, it just shows up as an
/// `Err` or a failed report in that job's slot.
pub fn run_batch(settings: &Settings, jobs: Vec<ModeJob>) -> Vec<Result<RunReport, ConfigError>> {
    thread::scope(|scope| {
        let handles: Vec<_> = jobs
            .into_iter()
            .map(|job| {
                scope.spawn(move || {
                    let ModeJob {
                        mode,
                        u_palette,
                        v_palette,
                        mut sink,
                    } = job;
                    let mut runner = Runner::new(settings, &mode, u_palette, v_palette)?;
                    Ok(runner.run(sink.as_mut()))
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or(Err(ConfigError::ModePanicked)))
            .collect()
    })
}
