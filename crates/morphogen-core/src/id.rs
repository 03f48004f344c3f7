//! Identifier newtypes.

use std::fmt;

/// Monotonic index of one integrator step within a run.
///
/// Step 0 is the initial (seeded) state; step `n` is the state after
/// `n` applications of the integrator. A full run spans
/// `round(t_max / dt)` steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StepId(pub u64);

impl StepId {
    /// The step after this one.
    pub fn next(self) -> StepId {
        StepId(self.0 + 1)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {}", self.0)
    }
}
