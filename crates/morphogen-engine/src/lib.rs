//! Run orchestration: per-mode runs, frame streaming, and batches.
//!
//! [`Runner`] drives one mode end to end: validate, seed the grid, step
//! the integrator, sample frames, and hand them to a [`FrameSink`].
//! [`stream`] wraps a runner in a producer thread behind a bounded
//! channel so a slow consumer exerts backpressure instead of growing an
//! unbounded frame queue. [`batch`] runs independent modes in parallel,
//! isolating failures to the mode that caused them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod cancel;
pub mod config;
pub mod run;
pub mod sink;
pub mod stats;
pub mod stream;

pub use batch::{run_batch, ModeJob};
pub use cancel::CancelToken;
pub use config::ConfigError;
pub use run::{RunOutcome, RunReport, Runner};
pub use sink::{ChannelSink, FrameSink, SinkError, VecSink};
pub use stats::{FieldStats, SpeciesStats};
pub use stream::{spawn_streaming, FrameStream};
