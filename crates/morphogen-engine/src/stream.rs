//! Streaming a run's frames across a bounded channel.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver};
use morphogen_core::{Mode, Settings};
use morphogen_render::{Frame, Palette};

use crate::cancel::CancelToken;
use crate::config::ConfigError;
use crate::run::{RunReport, Runner};
use crate::sink::ChannelSink;

/// Handle to a run executing on a background thread.
///
/// Frames arrive on a bounded channel; when the consumer falls behind
/// by `capacity` frames the producer blocks on submission, so memory
/// use is bounded by the channel and the run paces itself to the
/// consumer.
pub struct FrameStream {
    receiver: Receiver<Frame>,
    cancel: CancelToken,
    handle: JoinHandle<RunReport>,
}

impl FrameStream {
    /// The receiving end of the frame channel.
    pub fn receiver(&self) -> &Receiver<Frame> {
        &self.receiver
    }

    /// Request cancellation; the run stops at the next step boundary.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait for the run to finish and return its report.
    ///
    /// Drops the receiver before joining, so a producer still blocked
    /// on a full channel observes the disconnect instead of
    /// deadlocking against its own consumer.
    pub fn join(self) -> thread::Result<RunReport> {
        let FrameStream {
            receiver, handle, ..
        } = self;
        drop(receiver);
        handle.join()
    }
}

/// Start `mode` on a background thread, streaming frames through a
/// channel holding at most `capacity` frames.
///
/// Configuration is validated on the calling thread, so an invalid
/// mode fails here rather than inside the worker.
pub fn spawn_streaming(
    settings: &Settings,
    mode: &Mode,
    u_palette: Box<dyn Palette + Send>,
    v_palette: Box<dyn Palette + Send>,
    capacity: usize,
) -> Result<FrameStream, ConfigError> {
    let mut runner = Runner::new(settings, mode, u_palette, v_palette)?;
    let cancel = runner.cancel_token();
    let (tx, rx) = bounded(capacity);
    let handle = thread::spawn(move || {
        let mut sink = ChannelSink::new(tx);
        runner.run(&mut sink)
    });
    Ok(FrameStream {
        receiver: rx,
        cancel,
        handle,
    })
}
