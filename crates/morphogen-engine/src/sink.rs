//! The downstream frame consumer seam.

use std::error::Error;
use std::fmt;

use crossbeam_channel::Sender;
use morphogen_render::Frame;

/// Why a sink refused a frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SinkError {
    /// The consumer is gone; no further frames can be delivered.
    Closed,
    /// The sink failed while handling the frame (e.g. an I/O error).
    Failed {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "frame sink closed"),
            Self::Failed { reason } => write!(f, "frame sink failed: {reason}"),
        }
    }
}

impl Error for SinkError {}

/// Ordered consumer of a run's frames.
///
/// The engine submits frames in strictly increasing time order, one
/// stream per mode. An error terminates the run (the remaining
/// simulation work would be unobservable).
pub trait FrameSink: Send {
    /// Accept the next frame. May block; blocking is the backpressure
    /// mechanism that keeps pending frames bounded.
    fn submit(&mut self, frame: Frame) -> Result<(), SinkError>;
}

/// Sink that collects frames in memory. Useful in tests and for short
/// runs where the whole sequence is post-processed at once.
#[derive(Debug, Default)]
pub struct VecSink {
    /// Frames received so far, in submission order.
    pub frames: Vec<Frame>,
}

impl VecSink {
    /// An empty sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameSink for VecSink {
    fn submit(&mut self, frame: Frame) -> Result<(), SinkError> {
        self.frames.push(frame);
        Ok(())
    }
}

/// Sink that forwards frames into a bounded channel.
///
/// `submit` blocks while the channel is full, so a slow consumer stalls
/// the solver instead of queueing unbounded frames; it fails with
/// [`SinkError::Closed`] once every receiver is dropped.
#[derive(Debug)]
pub struct ChannelSink {
    tx: Sender<Frame>,
}

impl ChannelSink {
    /// Wrap a channel sender.
    pub fn new(tx: Sender<Frame>) -> Self {
        Self { tx }
    }
}

impl FrameSink for ChannelSink {
    fn submit(&mut self, frame: Frame) -> Result<(), SinkError> {
        self.tx.send(frame).map_err(|_| SinkError::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morphogen_core::StepId;

    fn frame(index: u64) -> Frame {
        Frame {
            index,
            time: index as f64,
            step: StepId(index),
            width: 1,
            height: 1,
            u_pixels: vec![Default::default()],
            v_pixels: vec![Default::default()],
        }
    }

    #[test]
    fn vec_sink_preserves_order() {
        let mut sink = VecSink::new();
        sink.submit(frame(0)).unwrap();
        sink.submit(frame(1)).unwrap();
        assert_eq!(sink.frames.len(), 2);
        assert_eq!(sink.frames[1].index, 1);
    }

    #[test]
    fn channel_sink_reports_closed_receiver() {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let mut sink = ChannelSink::new(tx);
        drop(rx);
        assert_eq!(sink.submit(frame(0)), Err(SinkError::Closed));
    }

    #[test]
    fn channel_sink_delivers() {
        let (tx, rx) = crossbeam_channel::bounded(4);
        let mut sink = ChannelSink::new(tx);
        sink.submit(frame(7)).unwrap();
        assert_eq!(rx.recv().unwrap().index, 7);
    }
}
